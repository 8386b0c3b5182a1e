//! Shared UI crate for the UFT Academy site: content models, the application
//! form flow, localization and every page section.

pub mod application;
pub mod carousel;
pub mod content;
pub mod core;
pub mod i18n;
pub mod queries;
pub mod site;
pub mod views;

pub mod components {
    // Page sections (components/*.rs), in page order.
    pub mod site_header;
    pub use site_header::SiteHeader;

    pub mod hero;
    pub use hero::Hero;

    pub mod about;
    pub use about::About;

    pub mod programs;
    pub use programs::Programs;

    pub mod why_choose_us;
    pub use why_choose_us::WhyChooseUs;

    pub mod testimonials;
    pub use testimonials::Testimonials;

    pub mod gallery;
    pub use gallery::Gallery;

    pub mod final_cta;
    pub use final_cta::FinalCta;

    pub mod footer;
    pub use footer::Footer;

    // Application form dialog and its effect runner.
    pub mod application_modal;
    pub use application_modal::{use_application_flow, ApplicationModal};

    // Arrows and dots shared by the gallery and testimonial carousels.
    pub mod carousel_controls;
    pub use carousel_controls::CarouselControls;

    // Skeleton / no-data placeholders shared by the sections.
    pub mod status;
    pub use status::{NoData, SectionHead, SectionSkeleton};
}

pub use site::{use_site, use_site_provider, SiteContext};
pub use views::Landing;

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
