use dioxus::prelude::*;

use crate::site::use_site;
use crate::t;

/// Static placeholder shown while a section's query is pending.
#[component]
pub fn SectionSkeleton(#[props(default = 3)] cards: usize) -> Element {
    rsx! {
        div { class: "container", aria_busy: "true",
            div { class: "section__head",
                div { class: "skeleton skeleton--title" }
                div { class: "skeleton skeleton--line" }
            }
            div { class: "grid grid--3",
                for i in 0..cards {
                    div { key: "{i}", class: "skeleton skeleton--card" }
                }
            }
        }
    }
}

#[component]
pub fn NoData() -> Element {
    let locale = use_site().locale();
    rsx! {
        div { class: "container",
            p { class: "no-data", {t!(locale, "common-no-data")} }
        }
    }
}

/// Optional section heading; renders nothing when both parts are absent.
#[component]
pub fn SectionHead(title: Option<String>, description: Option<String>) -> Element {
    if title.is_none() && description.is_none() {
        return rsx! {};
    }
    rsx! {
        div { class: "section__head",
            if let Some(title) = title {
                h2 { class: "section__title", "{title}" }
            }
            if let Some(description) = description {
                p { class: "section__lead", "{description}" }
            }
        }
    }
}
