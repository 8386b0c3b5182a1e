use dioxus::prelude::*;

use crate::content::features::{self, FeatureIcon};
use crate::content::{section_state, SectionState};
use crate::queries::use_choose_us;
use crate::site::use_site;
use crate::t;

use super::status::{NoData, SectionHead, SectionSkeleton};

#[component]
pub fn WhyChooseUs() -> Element {
    let locale = use_site().locale();
    let choose_us = use_choose_us();

    let state = section_state("why-choose-us", choose_us.read().as_ref(), |blocks| {
        features::derive(blocks)
    });

    let content = match state {
        SectionState::Loading => rsx! { SectionSkeleton { cards: 4 } },
        SectionState::Empty => rsx! { NoData {} },
        SectionState::Ready(model) => rsx! {
            div { class: "container",
                SectionHead {
                    title: model.title.or_else(|| Some(t!(locale, "why-choose-us-default-title"))),
                    description: model.description.or_else(|| Some(t!(locale, "why-choose-us-default-description"))),
                }
                div { class: "grid grid--4",
                    for (i, feature) in model.items.into_iter().enumerate() {
                        article { key: "{i}", class: "card",
                            FeatureGlyph { icon: feature.icon }
                            h3 { class: "card__title", "{feature.title}" }
                            p { class: "card__text", "{feature.description}" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section { id: "why-choose-us", class: "section", {content} }
    }
}

/// Stroke icon drawn inline so it picks up the accent colour.
#[component]
fn FeatureGlyph(icon: FeatureIcon) -> Element {
    let paths: &[&str] = match icon {
        FeatureIcon::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        FeatureIcon::Briefcase => &[
            "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
            "M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
        ],
        FeatureIcon::Trophy => &[
            "M6 9H4.5a2.5 2.5 0 0 1 0-5H6",
            "M18 9h1.5a2.5 2.5 0 0 0 0-5H18",
            "M4 22h16",
            "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22",
            "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22",
            "M18 2H6v7a6 6 0 0 0 12 0V2z",
        ],
        FeatureIcon::HeartHandshake => &[
            "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            "M12 5 9.04 7.96a2.17 2.17 0 0 0 0 3.08c.82.82 2.13.85 3 .07l2.07-1.9a2.82 2.82 0 0 1 3.79 0l2.96 2.66",
            "m18 15-2-2",
            "m15 18-2-2",
        ],
    };

    rsx! {
        svg {
            class: "card__icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "var(--accent)",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            "aria-hidden": "true",
            for (i, d) in paths.iter().enumerate() {
                path { key: "{i}", d: *d }
            }
        }
    }
}
