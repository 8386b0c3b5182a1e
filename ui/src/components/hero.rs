use api::Header;
use dioxus::prelude::*;

use crate::application::FlowEvent;
use crate::content::hero::{self, HeroModel};
use crate::queries::Query;
use crate::site::use_site;
use crate::t;

use super::status::SectionSkeleton;

/// Landing banner. Missing header fields fall back to the localized copy;
/// a failed request renders the fallback in full.
#[component]
pub fn Hero(header: Query<Header>) -> Element {
    let site = use_site();
    let locale = site.locale();
    let coroutine = use_coroutine_handle::<FlowEvent>();

    let model = match &*header.read() {
        None => {
            return rsx! {
                section { class: "hero", SectionSkeleton { cards: 1 } }
            }
        }
        Some(Ok(payload)) => hero::derive(payload, site.client.config()),
        Some(Err(err)) => {
            tracing::warn!("[hero] using built-in copy: {err}");
            HeroModel::default()
        }
    };

    let title = model
        .title
        .unwrap_or_else(|| t!(locale, "hero-default-title"));
    let subtitle = model
        .subtitle
        .unwrap_or_else(|| t!(locale, "hero-default-subtitle"));
    let description = model
        .description
        .unwrap_or_else(|| t!(locale, "hero-default-description"));

    rsx! {
        section { class: "hero",
            div { class: "container hero__inner",
                div {
                    p { class: "hero__badge", "{subtitle}" }
                    h1 { class: "hero__title", "{title}" }
                    p { class: "hero__text", "{description}" }
                    div { class: "hero__actions",
                        button {
                            class: "button",
                            r#type: "button",
                            onclick: move |_| coroutine.send(FlowEvent::Open),
                            {t!(locale, "hero-apply-now")}
                        }
                        a { class: "button button--ghost", href: "#programs",
                            {t!(locale, "hero-get-syllabus")}
                        }
                    }
                }
                if let Some(src) = model.image {
                    img { class: "hero__image", src: "{src}", alt: "{title}" }
                }
            }
        }
    }
}
