use dioxus::prelude::*;

use crate::content::about::{self, projects_count};
use crate::content::{section_state, SectionState};
use crate::queries::{use_about, use_completed_projects};
use crate::site::use_site;
use crate::t;

use super::status::{NoData, SectionHead, SectionSkeleton};

#[component]
pub fn About() -> Element {
    let locale = use_site().locale();
    let about = use_about();
    let projects = use_completed_projects();

    let state = section_state("about", about.read().as_ref(), |blocks| about::derive(blocks));
    let projects = match &*projects.read() {
        Some(Ok(list)) => projects_count(list),
        _ => None,
    };

    let content = match state {
        SectionState::Loading => rsx! { SectionSkeleton {} },
        SectionState::Empty => rsx! { NoData {} },
        SectionState::Ready(model) => rsx! {
            div { class: "container",
                SectionHead {
                    title: model.title.or_else(|| Some(t!(locale, "about-default-title"))),
                    description: model.description.or_else(|| Some(t!(locale, "about-default-description"))),
                }
                div { class: "grid grid--3",
                    for (i, item) in model.items.into_iter().enumerate() {
                        article { key: "{i}", class: "card",
                            if !item.title.is_empty() {
                                h3 { class: "card__title", "{item.title}" }
                            }
                            if !item.description.is_empty() {
                                p { class: "card__text", "{item.description}" }
                            }
                        }
                    }
                }
                if let Some(count) = projects {
                    div { class: "stats",
                        div {
                            div { class: "stats__value", "{count}+" }
                            div { class: "stats__label", {t!(locale, "about-stats-projects")} }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section { id: "about", class: "section", {content} }
    }
}
