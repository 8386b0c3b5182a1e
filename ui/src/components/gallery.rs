use dioxus::prelude::*;

use crate::carousel::{use_carousel, GALLERY_AUTOPLAY_MS};
use crate::content::gallery::{self, caption, GalleryImage};
use crate::content::{section_state, SectionState};
use crate::queries::{use_gallery_categories, use_gallery_detail};
use crate::site::use_site;
use crate::t;

use super::carousel_controls::CarouselControls;
use super::status::{NoData, SectionHead, SectionSkeleton};

#[component]
pub fn Gallery() -> Element {
    let site = use_site();
    let locale = site.locale();
    let categories = use_gallery_categories();

    let state = section_state("gallery", categories.read().as_ref(), |blocks| {
        gallery::derive(blocks, site.client.config())
    });

    let content = match state {
        SectionState::Loading => rsx! { SectionSkeleton { cards: 1 } },
        SectionState::Empty => rsx! { NoData {} },
        SectionState::Ready(model) => {
            let count = model.images.len();
            rsx! {
                div { class: "container",
                    SectionHead {
                        title: model.title.or_else(|| Some(t!(locale, "gallery-default-title"))),
                        description: model.description.or_else(|| Some(t!(locale, "gallery-default-description"))),
                    }
                    GalleryCarousel { key: "{count}", images: model.images }
                }
            }
        }
    };

    rsx! {
        section { id: "gallery", class: "section", {content} }
    }
}

#[component]
fn GalleryCarousel(images: Vec<GalleryImage>) -> Element {
    let locale = use_site().locale();
    let carousel = use_carousel(images.len(), GALLERY_AUTOPLAY_MS);
    let mut zoomed = use_signal(|| Option::<GalleryImage>::None);
    let state = carousel();
    let offset = state.current() * 100;

    rsx! {
        div { class: "carousel",
            div {
                class: "carousel__track",
                style: "transform: translateX(-{offset}%)",
                for (i, image) in images.iter().enumerate() {
                    div { key: "{i}", class: state.slide_class(i),
                        img {
                            class: "gallery__image",
                            src: "{image.src}",
                            alt: "{image.alt}",
                            "loading": "lazy",
                            onclick: {
                                let image = image.clone();
                                move |_| zoomed.set(Some(image.clone()))
                            },
                        }
                    }
                }
            }
            CarouselControls { carousel }
        }
        if let Some(image) = zoomed() {
            div { class: "dialog-backdrop", onclick: move |_| zoomed.set(None),
                div {
                    class: "dialog dialog--wide",
                    role: "dialog",
                    aria_modal: "true",
                    onclick: move |evt| evt.stop_propagation(),
                    button {
                        class: "button button--ghost dialog__close",
                        r#type: "button",
                        aria_label: t!(locale, "common-close"),
                        onclick: move |_| zoomed.set(None),
                        "×"
                    }
                    img { class: "gallery__image", src: "{image.src}", alt: "{image.alt}" }
                    if let Some(id) = image.id {
                        ImageCaption { key: "{id}", id }
                    }
                }
            }
        }
    }
}

/// Caption under the enlarged image; nothing while loading or on failure.
#[component]
fn ImageCaption(id: u64) -> Element {
    let detail = use_gallery_detail(id);
    let text = match &*detail.read() {
        Some(Ok(payload)) => caption(payload),
        Some(Err(err)) => {
            tracing::debug!("[gallery] no caption for image {id}: {err}");
            None
        }
        None => None,
    };

    match text {
        Some(text) => rsx! { p { class: "card__text", "{text}" } },
        None => rsx! {},
    }
}
