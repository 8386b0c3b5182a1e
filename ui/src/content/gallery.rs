use api::{ApiConfig, CategoryTitle, GalleryDetail};

use super::{first_non_blank, non_blank, SectionModel};

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub id: Option<u64>,
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Vec<GalleryImage>,
}

impl SectionModel for GalleryModel {
    fn has_content(&self) -> bool {
        !self.images.is_empty()
    }
}

pub fn derive(blocks: &[CategoryTitle], config: &ApiConfig) -> GalleryModel {
    let Some(first) = blocks.first() else {
        return GalleryModel::default();
    };

    let mut images = Vec::new();
    for block in blocks {
        for category in &block.categories {
            // An explicitly empty `gallery` still shadows the legacy field.
            let Some(entries) = category.gallery.as_ref().or(category.galleries.as_ref()) else {
                continue;
            };
            for entry in entries {
                let Some(path) = non_blank(entry.image.as_deref()) else {
                    continue;
                };
                let alt = first_non_blank([
                    entry.description.as_deref(),
                    entry.category_name.as_deref(),
                    entry.title.as_deref(),
                ])
                .unwrap_or_else(|| {
                    let source = first_non_blank([category.name.as_deref(), block.title.as_deref()]);
                    format!(
                        "Gallery image from {}",
                        source.as_deref().unwrap_or("gallery")
                    )
                });
                images.push(GalleryImage {
                    id: entry.id,
                    src: config.media_url(&path),
                    alt,
                });
            }
        }
    }

    GalleryModel {
        title: non_blank(first.title.as_deref()),
        description: first_non_blank([first.title2.as_deref(), first.description.as_deref()]),
        images,
    }
}

/// Lightbox caption from the detail endpoint.
pub fn caption(detail: &GalleryDetail) -> Option<String> {
    first_non_blank([
        detail.description.as_deref(),
        detail.category.as_ref().and_then(|c| c.name.as_deref()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{CategoryRef, GalleryCategory, GalleryImage as WireImage};

    fn image(path: &str) -> WireImage {
        WireImage {
            image: Some(path.into()),
            ..WireImage::default()
        }
    }

    #[test]
    fn collects_both_spellings_and_resolves_urls() {
        let blocks = vec![CategoryTitle {
            title: Some("Galereya".into()),
            title2: Some("O'quv muhitimiz".into()),
            description: Some("unused".into()),
            categories: vec![
                GalleryCategory {
                    name: Some("Darslar".into()),
                    gallery: Some(vec![image("gallery/a.jpg"), WireImage::default()]),
                    ..GalleryCategory::default()
                },
                GalleryCategory {
                    galleries: Some(vec![image("/media/b.jpg")]),
                    ..GalleryCategory::default()
                },
                GalleryCategory {
                    gallery: Some(Vec::new()),
                    galleries: Some(vec![image("shadowed.jpg")]),
                    ..GalleryCategory::default()
                },
            ],
            ..CategoryTitle::default()
        }];

        let model = derive(&blocks, &ApiConfig::default());
        assert_eq!(model.description.as_deref(), Some("O'quv muhitimiz"));
        let srcs: Vec<_> = model.images.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(
            srcs,
            vec![
                "https://api.uftacademy.uz/media/gallery/a.jpg",
                "https://api.uftacademy.uz/media/b.jpg",
            ]
        );
        assert_eq!(model.images[0].alt, "Gallery image from Darslar");
        assert_eq!(model.images[1].alt, "Gallery image from Galereya");
    }

    #[test]
    fn alt_prefers_image_metadata() {
        let blocks = vec![CategoryTitle {
            categories: vec![GalleryCategory {
                gallery: Some(vec![
                    WireImage {
                        description: Some("Hackathon".into()),
                        title: Some("t".into()),
                        ..image("1.jpg")
                    },
                    WireImage {
                        category_name: Some("Events".into()),
                        ..image("2.jpg")
                    },
                    image("3.jpg"),
                ]),
                ..GalleryCategory::default()
            }],
            ..CategoryTitle::default()
        }];
        let alts: Vec<_> = derive(&blocks, &ApiConfig::default())
            .images
            .into_iter()
            .map(|i| i.alt)
            .collect();
        assert_eq!(alts, vec!["Hackathon", "Events", "Gallery image from gallery"]);
    }

    #[test]
    fn caption_falls_back_to_category() {
        let detail = GalleryDetail {
            category: Some(CategoryRef {
                name: Some("Tadbirlar".into()),
                ..CategoryRef::default()
            }),
            ..GalleryDetail::default()
        };
        assert_eq!(caption(&detail).as_deref(), Some("Tadbirlar"));
        assert_eq!(caption(&GalleryDetail::default()), None);
    }
}
