use api::ChooseUsTitle;

use super::{first_non_blank, non_blank, SectionModel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeatureIcon {
    #[default]
    Users,
    Briefcase,
    Trophy,
    HeartHandshake,
}

impl FeatureIcon {
    /// Map an icon name from the CMS; unknown or missing names give `Users`.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_ascii_lowercase()).as_deref() {
            Some("briefcase") => Self::Briefcase,
            Some("trophy") => Self::Trophy,
            Some("hearthandshake") | Some("heart-handshake") => Self::HeartHandshake,
            _ => Self::Users,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturesModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub items: Vec<Feature>,
}

impl SectionModel for FeaturesModel {
    fn has_content(&self) -> bool {
        !self.items.is_empty()
    }
}

pub fn derive(blocks: &[ChooseUsTitle]) -> FeaturesModel {
    let Some(first) = blocks.first() else {
        return FeaturesModel::default();
    };

    let items = blocks
        .iter()
        .flat_map(|block| block.choose_us.iter())
        .filter_map(|entry| {
            let title = non_blank(entry.title.as_deref());
            let description = non_blank(entry.description.as_deref());
            if title.is_none() && description.is_none() {
                return None;
            }
            let icon_name = first_non_blank([entry.icon.as_deref(), entry.icon_name.as_deref()]);
            Some(Feature {
                icon: FeatureIcon::from_name(icon_name.as_deref()),
                title: title.unwrap_or_default(),
                description: description.unwrap_or_default(),
            })
        })
        .collect();

    FeaturesModel {
        title: non_blank(first.title.as_deref()),
        description: non_blank(first.description.as_deref()),
        items,
    }
}
