use api::{ApiConfig, Header};

use super::non_blank;

/// Hero and header branding. Absent fields fall back to localized defaults
/// and the bundled logo in the views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeroModel {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub logo: Option<String>,
}

pub fn derive(header: &Header, config: &ApiConfig) -> HeroModel {
    let media = |raw: Option<&str>| non_blank(raw).map(|path| config.media_url(&path));
    HeroModel {
        title: non_blank(header.title.as_deref()),
        subtitle: non_blank(header.subtitle.as_deref()),
        description: non_blank(header.description.as_deref()),
        image: media(header.hero_image.as_deref()),
        logo: media(header.logo.as_deref()),
    }
}
