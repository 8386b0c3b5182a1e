use dioxus::prelude::*;

use crate::application::FlowEvent;
use crate::site::use_site;
use crate::t;

#[component]
pub fn FinalCta() -> Element {
    let locale = use_site().locale();
    let coroutine = use_coroutine_handle::<FlowEvent>();

    rsx! {
        section { id: "cta", class: "section section--alt cta",
            div { class: "container",
                h2 { class: "section__title", {t!(locale, "final-cta-title")} }
                p { class: "section__lead", {t!(locale, "final-cta-description")} }
                div { class: "hero__actions", style: "justify-content: center",
                    button {
                        class: "button",
                        r#type: "button",
                        onclick: move |_| coroutine.send(FlowEvent::Open),
                        {t!(locale, "final-cta-button")}
                    }
                }
                p { class: "cta__note", {t!(locale, "final-cta-note")} }
            }
        }
    }
}
