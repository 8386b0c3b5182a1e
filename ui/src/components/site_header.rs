use api::{Header, Locale};
use dioxus::prelude::*;

use crate::application::FlowEvent;
use crate::content::hero;
use crate::i18n::translator;
use crate::queries::Query;
use crate::site::use_site;
use crate::t;

pub(crate) const UFT_LOGO: Asset = asset!("/assets/icons/uft-logo.svg");

/// Section anchors in page order. Each key is also the element id it scrolls to.
pub(crate) const NAV_SECTIONS: [&str; 6] = [
    "about",
    "programs",
    "why-choose-us",
    "testimonials",
    "gallery",
    "contact",
];

#[component]
pub fn SiteHeader(header: Query<Header>) -> Element {
    let site = use_site();
    let locale = site.locale();
    let coroutine = use_coroutine_handle::<FlowEvent>();

    #[cfg(debug_assertions)]
    tracing::trace!("[i18n] SiteHeader render lang={locale}");

    let logo = match &*header.read() {
        Some(Ok(payload)) => hero::derive(payload, site.client.config()).logo,
        _ => None,
    };

    let on_locale = {
        let site = site.clone();
        move |evt: FormEvent| match Locale::from_code(&evt.value()) {
            Some(next) => site.set_locale(next),
            None => tracing::warn!("[site] ignoring unknown locale {:?}", evt.value()),
        }
    };

    rsx! {
        header { class: "site-header",
            div { class: "container site-header__inner",
                a { href: "#",
                    if let Some(src) = logo {
                        img { class: "site-header__logo", src: "{src}", alt: "UFT Academy" }
                    } else {
                        img { class: "site-header__logo", src: UFT_LOGO, alt: "UFT Academy" }
                    }
                }
                nav { class: "site-header__nav",
                    for key in NAV_SECTIONS {
                        a {
                            key: "{key}",
                            class: "site-header__link",
                            href: "#{key}",
                            {translator().resolve(locale, "nav", key)}
                        }
                    }
                }
                div { class: "site-header__actions",
                    div { class: "site-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!(locale, "nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{locale}",
                            oninput: on_locale,
                            for option_locale in Locale::ALL {
                                option {
                                    key: "{option_locale}",
                                    value: "{option_locale}",
                                    selected: option_locale == locale,
                                    "{option_locale}"
                                }
                            }
                        }
                    }
                    button {
                        class: "button",
                        r#type: "button",
                        onclick: move |_| coroutine.send(FlowEvent::Open),
                        {t!(locale, "nav-apply-now")}
                    }
                }
            }
        }
    }
}
