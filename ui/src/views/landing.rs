use dioxus::prelude::*;

use crate::components::{
    use_application_flow, About, ApplicationModal, FinalCta, Footer, Gallery, Hero, Programs,
    SiteHeader, Testimonials, WhyChooseUs,
};
use crate::queries::use_header;
use crate::site::use_site;

const SITE_CSS: Asset = asset!("/assets/styling/site.css");
const FAVICON: Asset = asset!("/assets/icons/uft-logo.svg");

/// The whole single-page site. Expects a [`SiteContext`](crate::site::SiteContext)
/// from `use_site_provider` higher up.
#[component]
pub fn Landing() -> Element {
    let locale = use_site().locale();
    let flow = use_application_flow();
    let header = use_header();

    #[cfg(debug_assertions)]
    tracing::debug!("[i18n] Landing render lang={locale}");

    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Link { rel: "stylesheet", href: SITE_CSS }
        document::Title { "UFT Academy" }

        div { lang: locale.segment(),
            SiteHeader { header }
            main {
                Hero { header }
                About {}
                Programs {}
                WhyChooseUs {}
                Testimonials {}
                Gallery {}
                FinalCta {}
            }
            Footer {}
            ApplicationModal { flow }
        }
    }
}
