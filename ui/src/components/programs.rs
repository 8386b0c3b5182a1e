use dioxus::prelude::*;

use crate::content::programs::{self, derive_detail, CourseIcon, ProgramCard};
use crate::content::{section_state, SectionState};
use crate::queries::{use_course_detail, use_courses};
use crate::site::use_site;
use crate::t;

use super::status::{NoData, SectionHead, SectionSkeleton};

const FRONT_ICON: Asset = asset!("/assets/icons/front-logo.svg");
const BACK_ICON: Asset = asset!("/assets/icons/back-logo.svg");
const AI_ICON: Asset = asset!("/assets/icons/ai-logo.svg");

fn icon_src(icon: &CourseIcon) -> String {
    match icon {
        CourseIcon::Frontend => FRONT_ICON.to_string(),
        CourseIcon::Backend => BACK_ICON.to_string(),
        CourseIcon::Ai => AI_ICON.to_string(),
        CourseIcon::Remote(url) => url.clone(),
    }
}

#[component]
pub fn Programs() -> Element {
    let site = use_site();
    let locale = site.locale();
    let courses = use_courses();
    let mut selected = use_signal(|| Option::<ProgramCard>::None);

    let state = section_state("programs", courses.read().as_ref(), |blocks| {
        programs::derive(blocks, site.client.config())
    });

    let content = match state {
        SectionState::Loading => rsx! { SectionSkeleton {} },
        SectionState::Empty => rsx! { NoData {} },
        SectionState::Ready(model) => rsx! {
            div { class: "container",
                SectionHead {
                    title: model.title.or_else(|| Some(t!(locale, "programs-default-title"))),
                    description: model.description.or_else(|| Some(t!(locale, "programs-default-description"))),
                }
                div { class: "grid grid--3",
                    for (i, card) in model.programs.into_iter().enumerate() {
                        article {
                            key: "{i}",
                            class: "card program--accent-{card.accent}",
                            img { class: "card__icon", src: icon_src(&card.icon), alt: "" }
                            h3 { class: "card__title", "{card.title}" }
                            p { class: "card__text", "{card.description}" }
                            if !card.topics.is_empty() {
                                ul { class: "program__topics",
                                    for (n, topic) in card.topics.iter().enumerate() {
                                        li { key: "{n}", "{topic}" }
                                    }
                                }
                            }
                            button {
                                class: "button button--ghost",
                                r#type: "button",
                                onclick: {
                                    let card = card.clone();
                                    move |_| selected.set(Some(card.clone()))
                                },
                                {t!(locale, "programs-learn-more")}
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section { id: "programs", class: "section section--alt",
            {content}
            if let Some(card) = selected() {
                CourseDialog {
                    key: "{card.title}",
                    card,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}

/// "Learn more" dialog. Shows the card straight away and swaps in the
/// course detail once it arrives.
#[component]
fn CourseDialog(card: ProgramCard, on_close: EventHandler<()>) -> Element {
    let locale = use_site().locale();

    rsx! {
        div { class: "dialog-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "dialog",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "button button--ghost dialog__close",
                    r#type: "button",
                    aria_label: t!(locale, "common-close"),
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                if let Some(id) = card.id {
                    CourseDetailBody { id, card: card.clone() }
                } else {
                    CardBody { card: card.clone() }
                }
            }
        }
    }
}

#[component]
fn CourseDetailBody(id: u64, card: ProgramCard) -> Element {
    let detail = use_course_detail(id);

    let detail = match &*detail.read() {
        Some(Ok(payload)) => derive_detail(payload),
        Some(Err(err)) => {
            tracing::warn!("[programs] course {id} detail unavailable: {err}");
            None
        }
        None => None,
    };

    let Some(detail) = detail else {
        return rsx! { CardBody { card } };
    };
    let title = detail.title.unwrap_or_else(|| card.title.clone());
    let description = detail.description.unwrap_or_else(|| card.description.clone());
    let topics = if detail.topics.is_empty() {
        card.topics.clone()
    } else {
        detail.topics
    };

    rsx! {
        h2 { "{title}" }
        p { "{description}" }
        TopicList { topics }
    }
}

#[component]
fn CardBody(card: ProgramCard) -> Element {
    rsx! {
        h2 { "{card.title}" }
        p { "{card.description}" }
        TopicList { topics: card.topics }
    }
}

#[component]
fn TopicList(topics: Vec<String>) -> Element {
    if topics.is_empty() {
        return rsx! {};
    }
    rsx! {
        ul { class: "program__topics",
            for (i, topic) in topics.into_iter().enumerate() {
                li { key: "{i}", "{topic}" }
            }
        }
    }
}
