use dioxus::prelude::*;

use crate::carousel::{use_carousel, TESTIMONIALS_AUTOPLAY_MS};
use crate::content::testimonials::{self, Testimonial, MAX_RATING};
use crate::content::SectionState;
use crate::queries::{use_comments, use_comments_title};
use crate::site::use_site;
use crate::t;

use super::carousel_controls::CarouselControls;
use super::status::{NoData, SectionHead, SectionSkeleton};

#[component]
pub fn Testimonials() -> Element {
    let locale = use_site().locale();
    let comments = use_comments();
    let heading = use_comments_title();

    let state = testimonials::section(comments.read().as_ref(), heading.read().as_ref());

    let content = match state {
        SectionState::Loading => rsx! { SectionSkeleton { cards: 1 } },
        SectionState::Empty => rsx! { NoData {} },
        SectionState::Ready(model) => {
            let count = model.items.len();
            rsx! {
                div { class: "container",
                    SectionHead {
                        title: model.title.or_else(|| Some(t!(locale, "testimonials-default-title"))),
                        description: model.description.or_else(|| Some(t!(locale, "testimonials-default-description"))),
                    }
                    TestimonialCarousel { key: "{count}", items: model.items }
                }
            }
        }
    };

    rsx! {
        section { id: "testimonials", class: "section section--alt", {content} }
    }
}

#[component]
fn TestimonialCarousel(items: Vec<Testimonial>) -> Element {
    let locale = use_site().locale();
    let carousel = use_carousel(items.len(), TESTIMONIALS_AUTOPLAY_MS);
    let mut opened = use_signal(|| Option::<Testimonial>::None);
    let state = carousel();
    let offset = state.current() * 100;

    rsx! {
        div { class: "carousel",
            div {
                class: "carousel__track",
                style: "transform: translateX(-{offset}%)",
                for (i, item) in items.iter().enumerate() {
                    div { key: "{i}", class: state.slide_class(i),
                        article { class: "card",
                            div { class: "testimonial__avatar", "{item.initials}" }
                            h3 { class: "card__title", "{item.name}" }
                            if let Some(role) = &item.role {
                                p { class: "card__text", "{role}" }
                            }
                            if let Some(rating) = item.rating {
                                Stars { rating }
                            }
                            p {
                                class: "card__text testimonial__content",
                                onclick: {
                                    let item = item.clone();
                                    move |_| opened.set(Some(item.clone()))
                                },
                                "“{item.content}”"
                            }
                        }
                    }
                }
            }
            CarouselControls { carousel }
        }
        if let Some(item) = opened() {
            div { class: "dialog-backdrop", onclick: move |_| opened.set(None),
                div {
                    class: "dialog",
                    role: "dialog",
                    aria_modal: "true",
                    onclick: move |evt| evt.stop_propagation(),
                    button {
                        class: "button button--ghost dialog__close",
                        r#type: "button",
                        aria_label: t!(locale, "common-close"),
                        onclick: move |_| opened.set(None),
                        "×"
                    }
                    div { class: "testimonial__avatar", "{item.initials}" }
                    h3 { "{item.name}" }
                    if let Some(role) = &item.role {
                        p { class: "card__text", "{role}" }
                    }
                    if let Some(rating) = item.rating {
                        Stars { rating }
                    }
                    p { "{item.content}" }
                }
            }
        }
    }
}

#[component]
fn Stars(rating: u8) -> Element {
    let filled = rating.min(MAX_RATING);
    let stars: String = (0..MAX_RATING)
        .map(|i| if i < filled { '★' } else { '☆' })
        .collect();
    rsx! {
        div { class: "testimonial__stars", aria_label: "{filled}/{MAX_RATING}", "{stars}" }
    }
}
