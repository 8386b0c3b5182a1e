use api::{CompletedProject, TitleAbout};

use super::{first_non_blank, non_blank, SectionModel};

#[derive(Debug, Clone, PartialEq)]
pub struct AboutItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AboutModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub items: Vec<AboutItem>,
}

impl SectionModel for AboutModel {
    fn has_content(&self) -> bool {
        !self.items.is_empty()
    }
}

/// Title from the first block, lead paragraph from its first entry, cards
/// from every entry of every block.
pub fn derive(blocks: &[TitleAbout]) -> AboutModel {
    let Some(first) = blocks.first() else {
        return AboutModel::default();
    };

    let items = blocks
        .iter()
        .flat_map(|block| block.about.iter())
        .filter_map(|entry| {
            let title = first_non_blank([entry.about_title.as_deref(), entry.title.as_deref()]);
            let description = non_blank(entry.description.as_deref());
            if title.is_none() && description.is_none() {
                return None;
            }
            Some(AboutItem {
                title: title.unwrap_or_default(),
                description: description.unwrap_or_default(),
            })
        })
        .collect();

    AboutModel {
        title: non_blank(first.title.as_deref()),
        description: first
            .about
            .first()
            .and_then(|entry| non_blank(entry.description.as_deref())),
        items,
    }
}

/// Number of completed student projects, when there are any.
pub fn projects_count(projects: &[CompletedProject]) -> Option<usize> {
    (!projects.is_empty()).then_some(projects.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::AboutEntry;

    fn entry(about_title: Option<&str>, title: Option<&str>, description: Option<&str>) -> AboutEntry {
        AboutEntry {
            about_title: about_title.map(Into::into),
            title: title.map(Into::into),
            description: description.map(Into::into),
            ..AboutEntry::default()
        }
    }

    #[test]
    fn flattens_blocks_and_prefers_about_title() {
        let blocks = vec![
            TitleAbout {
                title: Some("Biz haqimizda".into()),
                about: vec![
                    entry(Some("Tajriba"), Some("ignored"), Some("10 yillik tajriba")),
                    entry(None, None, None),
                ],
                ..TitleAbout::default()
            },
            TitleAbout {
                about: vec![entry(None, Some("Jamoa"), None)],
                ..TitleAbout::default()
            },
        ];

        let model = derive(&blocks);
        assert_eq!(model.title.as_deref(), Some("Biz haqimizda"));
        assert_eq!(model.description.as_deref(), Some("10 yillik tajriba"));
        assert_eq!(
            model.items,
            vec![
                AboutItem {
                    title: "Tajriba".into(),
                    description: "10 yillik tajriba".into()
                },
                AboutItem {
                    title: "Jamoa".into(),
                    description: String::new()
                },
            ]
        );
    }

    #[test]
    fn nothing_to_show_without_entries() {
        let model = derive(&[TitleAbout {
            title: Some("Only a title".into()),
            ..TitleAbout::default()
        }]);
        assert!(!model.has_content());
        assert!(!derive(&[]).has_content());
    }

    #[test]
    fn project_count_only_when_present() {
        assert_eq!(projects_count(&[]), None);
        assert_eq!(
            projects_count(&[CompletedProject::default(), CompletedProject::default()]),
            Some(2)
        );
    }
}
