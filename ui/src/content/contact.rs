use std::fmt::Display;

use api::{ContactInfoTitle, SocialMedia, TitleLocation};

use super::non_blank;

pub const DEFAULT_ADDRESS: &str = "123 Tech Street, Innovation District\nSan Francisco, CA 94105";
pub const DEFAULT_PHONE: &str = "+1 (555) 123-4567";
pub const DEFAULT_EMAIL: &str = "info@techeducation.com";

/// Embedded Yandex map of the campus.
pub const MAP_WIDGET_URL: &str = "https://yandex.uz/map-widget/v1/?from=mapframe&ll=69.202581%2C41.352239&mode=routes&rtext=~41.351940%2C69.202419&rtt=auto&ruri=~ymapsbm1%3A%2F%2Fgeo%3Fdata%3DIgoNo2eKQhVjaCVC&source=mapframe&utm_source=mapframe&z=17";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            email: DEFAULT_EMAIL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// Footer contact block. Each value falls back to its built-in default; the
/// first known location replaces the address.
pub fn contact_details(
    info: Option<&ContactInfoTitle>,
    locations: Option<&[TitleLocation]>,
) -> ContactDetails {
    let defaults = ContactDetails::default();
    let entries = info.map(|i| i.contact_info.as_slice()).unwrap_or_default();

    let value_of = |kinds: &[&str]| {
        entries
            .iter()
            .find(|entry| {
                entry
                    .kind
                    .as_deref()
                    .map(|kind| kinds.iter().any(|k| kind.trim().eq_ignore_ascii_case(k)))
                    .unwrap_or(false)
            })
            .and_then(|entry| non_blank(entry.value.as_deref()))
    };

    let address = value_of(&["address", "location"]).unwrap_or(defaults.address);
    let address = locations
        .and_then(|blocks| blocks.first())
        .and_then(|block| block.locations.first())
        .and_then(|location| non_blank(location.address.as_deref()))
        .unwrap_or(address);

    ContactDetails {
        address,
        phone: value_of(&["phone", "tel"]).unwrap_or(defaults.phone),
        email: value_of(&["email", "mail"]).unwrap_or(defaults.email),
    }
}

/// Links that have both a platform label and a URL.
pub fn social_links(items: &[SocialMedia]) -> Vec<SocialLink> {
    items
        .iter()
        .filter_map(|item| {
            Some(SocialLink {
                platform: non_blank(item.platform.as_deref())?,
                url: non_blank(item.url.as_deref())?,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterModel {
    pub details: ContactDetails,
    pub links: Vec<SocialLink>,
}

/// Footer content once all three queries have settled; `None` while any is
/// still pending. Failed queries fall back to the built-in defaults.
pub fn footer_model<E: Display>(
    info: Option<&Result<ContactInfoTitle, E>>,
    locations: Option<&Result<Vec<TitleLocation>, E>>,
    social: Option<&Result<Vec<SocialMedia>, E>>,
) -> Option<FooterModel> {
    let (info, locations, social) = (info?, locations?, social?);
    for err in [info.as_ref().err(), locations.as_ref().err(), social.as_ref().err()]
        .into_iter()
        .flatten()
    {
        tracing::warn!("[footer] using defaults: {err}");
    }

    Some(FooterModel {
        details: contact_details(
            info.as_ref().ok(),
            locations.as_ref().ok().map(Vec::as_slice),
        ),
        links: social.as_ref().map(|items| social_links(items)).unwrap_or_default(),
    })
}
