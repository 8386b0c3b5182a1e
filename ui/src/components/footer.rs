use dioxus::prelude::*;

use crate::content::contact::{footer_model, FooterModel, MAP_WIDGET_URL};
use crate::core::format::{copyright_line, current_year};
use crate::i18n::translator;
use crate::queries::{use_contact_info, use_location, use_social_media};
use crate::site::use_site;
use crate::t;

use super::site_header::{NAV_SECTIONS, UFT_LOGO};
use super::status::SectionSkeleton;

/// Contact block, links and map. Shows a skeleton until the contact, location
/// and social queries have all settled; failed ones fall back to defaults.
#[component]
pub fn Footer() -> Element {
    let locale = use_site().locale();
    let info = use_contact_info();
    let locations = use_location();
    let social = use_social_media();

    let model = footer_model(
        info.read().as_ref(),
        locations.read().as_ref(),
        social.read().as_ref(),
    );
    let Some(FooterModel { details, links }) = model else {
        return rsx! {
            footer { id: "contact", class: "footer",
                SectionSkeleton { cards: 4 }
            }
        };
    };

    let year = current_year();
    let copyright = copyright_line(year, &t!(locale, "footer-copyright"));
    let phone_href = format!("tel:{}", details.phone.replace(' ', ""));

    rsx! {
        footer { id: "contact", class: "footer",
            div { class: "container",
                div { class: "grid grid--4",
                    div {
                        img { class: "site-header__logo", src: UFT_LOGO, alt: "UFT Academy" }
                        if !links.is_empty() {
                            h4 { {t!(locale, "footer-follow-us")} }
                            ul { class: "footer__list",
                                for link in links {
                                    li { key: "{link.url}",
                                        a { href: "{link.url}", target: "_blank", rel: "noopener noreferrer",
                                            "{link.platform}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        h4 { {t!(locale, "footer-quick-links")} }
                        ul { class: "footer__list",
                            for key in NAV_SECTIONS {
                                li { key: "{key}",
                                    a { href: "#{key}", {translator().resolve(locale, "nav", key)} }
                                }
                            }
                        }
                    }
                    div {
                        h4 { {t!(locale, "footer-contact-us")} }
                        ul { class: "footer__list",
                            li { class: "footer__address", "{details.address}" }
                            li { a { href: "{phone_href}", "{details.phone}" } }
                            li { a { href: "mailto:{details.email}", "{details.email}" } }
                        }
                    }
                    div {
                        h4 { {t!(locale, "footer-our-location")} }
                        div { class: "footer__map",
                            iframe {
                                src: MAP_WIDGET_URL,
                                title: t!(locale, "footer-our-location"),
                                "loading": "lazy",
                                "allowfullscreen": "true",
                            }
                        }
                    }
                }
                div { class: "footer__bottom", "{copyright}" }
            }
        }
    }
}
