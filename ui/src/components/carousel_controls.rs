use dioxus::prelude::*;

use crate::carousel::CarouselState;
use crate::site::use_site;
use crate::t;

/// Previous / next arrows and one dot per slide. Nothing for a single slide.
#[component]
pub fn CarouselControls(carousel: Signal<CarouselState>) -> Element {
    let locale = use_site().locale();
    let mut carousel = carousel;
    let state = carousel();

    if !state.has_controls() {
        return rsx! {};
    }

    rsx! {
        div { class: "carousel__controls",
            button {
                class: "button button--ghost",
                r#type: "button",
                aria_label: t!(locale, "common-previous"),
                onclick: move |_| carousel.with_mut(CarouselState::prev),
                "‹"
            }
            for (i, label) in (1..=state.len()).enumerate() {
                button {
                    key: "{i}",
                    class: state.dot_class(i),
                    r#type: "button",
                    aria_label: "{label}",
                    onclick: move |_| carousel.with_mut(|c| c.select(i)),
                }
            }
            button {
                class: "button button--ghost",
                r#type: "button",
                aria_label: t!(locale, "common-next"),
                onclick: move |_| carousel.with_mut(CarouselState::next),
                "›"
            }
        }
    }
}
