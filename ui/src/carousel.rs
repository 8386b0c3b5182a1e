//! Slide index bookkeeping and the autoplay hook for the gallery and
//! testimonial carousels.

use dioxus::prelude::*;

use crate::core::timing;

pub const GALLERY_AUTOPLAY_MS: u64 = 3500;
pub const TESTIMONIALS_AUTOPLAY_MS: u64 = 4000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Autoplay step: forward, wrapping to the first slide.
    pub fn tick(&mut self) {
        self.current = if self.len == 0 {
            0
        } else {
            (self.current + 1) % self.len
        };
    }

    pub fn next(&mut self) {
        self.tick();
    }

    pub fn prev(&mut self) {
        self.current = if self.len == 0 {
            0
        } else {
            (self.current + self.len - 1) % self.len
        };
    }

    /// Jump to `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.current >= len {
            self.current = 0;
        }
    }

    /// Arrows and dots only make sense with more than one slide.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && index == self.current
    }

    pub fn is_prev(&self, index: usize) -> bool {
        self.len > 1 && index == (self.current + self.len - 1) % self.len
    }

    pub fn is_next(&self, index: usize) -> bool {
        self.len > 1 && index == (self.current + 1) % self.len
    }

    /// CSS modifier for slide `index`.
    pub fn slide_class(&self, index: usize) -> &'static str {
        if self.is_active(index) {
            "carousel__slide carousel__slide--active"
        } else if self.is_prev(index) {
            "carousel__slide carousel__slide--prev"
        } else if self.is_next(index) {
            "carousel__slide carousel__slide--next"
        } else {
            "carousel__slide"
        }
    }

    pub fn dot_class(&self, index: usize) -> &'static str {
        if self.is_active(index) {
            "carousel__dot carousel__dot--active"
        } else {
            "carousel__dot"
        }
    }
}

/// Carousel state with an autoplay timer that ticks every `interval_ms`.
///
/// The timer is owned by the calling scope and stops when it unmounts. The
/// slide count is fixed for the lifetime of the hook, so callers key the
/// component by `len`.
pub fn use_carousel(len: usize, interval_ms: u64) -> Signal<CarouselState> {
    let mut state = use_signal(|| CarouselState::new(len));

    use_future(move || async move {
        if len < 2 {
            return;
        }
        loop {
            timing::sleep_ms(interval_ms).await;
            state.with_mut(CarouselState::tick);
        }
    });

    state
}
