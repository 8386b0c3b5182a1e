use api::{ApiConfig, CourseDetail, TitleCourses};

use super::{non_blank, SectionModel};

/// Number of accent styles cards cycle through.
pub const ACCENT_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseIcon {
    Frontend,
    Backend,
    Ai,
    /// Absolute URL of an icon supplied by the API.
    Remote(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramCard {
    pub id: Option<u64>,
    pub title: String,
    pub description: String,
    pub topics: Vec<String>,
    pub icon: CourseIcon,
    /// Index into the accent palette, `0..ACCENT_COUNT`.
    pub accent: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgramsModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub programs: Vec<ProgramCard>,
}

impl SectionModel for ProgramsModel {
    fn has_content(&self) -> bool {
        !self.programs.is_empty()
    }
}

const AI_TERMS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "machine learning",
    "ml",
    "neural",
    "intelligence",
    "искусственный интеллект",
    "sun'iy intellekt",
];
const BACKEND_TERMS: &[&str] = &["backend", "back-end", "back end", "бэкенд"];
const FRONTEND_TERMS: &[&str] = &[
    "frontend",
    "front-end",
    "front end",
    "фронтенд",
    "front",
    "full stack",
    "fullstack",
    "фулл стек",
];

/// Built-in icon for a course title. Keywords are checked AI first, then
/// backend, then frontend; unmatched titles rotate by `position`.
pub fn icon_for_title(title: &str, position: usize) -> CourseIcon {
    let title = title.trim().to_lowercase();
    let has_any = |terms: &[&str]| terms.iter().any(|term| title.contains(term));

    if !title.is_empty() {
        if has_any(AI_TERMS) {
            return CourseIcon::Ai;
        }
        if has_any(BACKEND_TERMS) || (title.contains("back") && !title.contains("front")) {
            return CourseIcon::Backend;
        }
        if has_any(FRONTEND_TERMS) {
            return CourseIcon::Frontend;
        }
    }

    match position % 3 {
        0 => CourseIcon::Frontend,
        1 => CourseIcon::Backend,
        _ => CourseIcon::Ai,
    }
}

pub fn derive(blocks: &[TitleCourses], config: &ApiConfig) -> ProgramsModel {
    let Some(first) = blocks.first() else {
        return ProgramsModel::default();
    };

    let mut programs = Vec::new();
    for course in blocks.iter().flat_map(|block| block.courses.iter()) {
        let title = non_blank(course.title.as_deref());
        let description = non_blank(course.description.as_deref());
        if title.is_none() && description.is_none() {
            continue;
        }

        let position = programs.len();
        let title = title.unwrap_or_default();
        let icon = match non_blank(course.icon.as_deref()) {
            Some(path) => CourseIcon::Remote(config.media_url(&path)),
            None => icon_for_title(&title, position),
        };

        programs.push(ProgramCard {
            id: course.id,
            icon,
            topics: clean_topics(&course.topics),
            description: description.unwrap_or_default(),
            title,
            accent: position % ACCENT_COUNT,
        });
    }

    ProgramsModel {
        title: non_blank(first.title.as_deref()),
        description: non_blank(first.description.as_deref()),
        programs,
    }
}

/// Body of the "learn more" dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgramDetail {
    pub title: Option<String>,
    pub description: Option<String>,
    pub topics: Vec<String>,
}

/// Detail for the dialog; `None` when the endpoint returned nothing usable.
pub fn derive_detail(detail: &CourseDetail) -> Option<ProgramDetail> {
    let model = ProgramDetail {
        title: non_blank(detail.title.as_deref()),
        description: non_blank(detail.description.as_deref()),
        topics: clean_topics(&detail.topics),
    };
    (model != ProgramDetail::default()).then_some(model)
}

fn clean_topics(topics: &[String]) -> Vec<String> {
    topics
        .iter()
        .filter_map(|topic| non_blank(Some(topic)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Course;

    fn course(title: &str) -> Course {
        Course {
            title: Some(title.into()),
            ..Course::default()
        }
    }

    #[test]
    fn keywords_pick_icons_in_priority_order() {
        assert_eq!(icon_for_title("Sun'iy Intellekt", 0), CourseIcon::Ai);
        assert_eq!(icon_for_title("Machine Learning Bootcamp", 0), CourseIcon::Ai);
        assert_eq!(icon_for_title("Backend Python", 0), CourseIcon::Backend);
        assert_eq!(icon_for_title("Бэкенд разработка", 0), CourseIcon::Backend);
        assert_eq!(icon_for_title("Back to basics", 0), CourseIcon::Backend);
        assert_eq!(icon_for_title("Front and back", 0), CourseIcon::Frontend);
        assert_eq!(icon_for_title("Фронтенд", 1), CourseIcon::Frontend);
        assert_eq!(icon_for_title("Full Stack", 2), CourseIcon::Frontend);
    }

    #[test]
    fn unmatched_titles_rotate() {
        assert_eq!(icon_for_title("Grafik dizayn", 0), CourseIcon::Frontend);
        assert_eq!(icon_for_title("Grafik dizayn", 1), CourseIcon::Backend);
        assert_eq!(icon_for_title("", 2), CourseIcon::Ai);
        assert_eq!(icon_for_title("Grafik dizayn", 3), CourseIcon::Frontend);
    }

    #[test]
    fn flattens_courses_and_keeps_api_icons() {
        let blocks = vec![
            TitleCourses {
                title: Some("Kurslar".into()),
                description: Some("Tanlang".into()),
                courses: vec![
                    Course {
                        id: Some(7),
                        topics: vec!["HTML".into(), " ".into(), "CSS".into()],
                        ..course("Frontend")
                    },
                    Course::default(),
                ],
                ..TitleCourses::default()
            },
            TitleCourses {
                courses: vec![
                    Course {
                        icon: Some("media/icons/go.svg".into()),
                        ..course("Golang")
                    },
                    course("Dizayn"),
                ],
                ..TitleCourses::default()
            },
        ];

        let model = derive(&blocks, &ApiConfig::default());
        assert_eq!(model.title.as_deref(), Some("Kurslar"));
        assert_eq!(model.programs.len(), 3);

        let first = &model.programs[0];
        assert_eq!(first.id, Some(7));
        assert_eq!(first.topics, vec!["HTML".to_string(), "CSS".to_string()]);
        assert_eq!(first.icon, CourseIcon::Frontend);

        assert_eq!(
            model.programs[1].icon,
            CourseIcon::Remote("https://api.uftacademy.uz/media/icons/go.svg".into())
        );
        assert_eq!(model.programs[2].icon, CourseIcon::Ai);
        let accents: Vec<_> = model.programs.iter().map(|p| p.accent).collect();
        assert_eq!(accents, vec![0, 1, 2]);
    }

    #[test]
    fn empty_payload_has_no_programs() {
        assert!(!derive(&[], &ApiConfig::default()).has_content());
        let blocks = vec![TitleCourses {
            courses: vec![Course::default()],
            ..TitleCourses::default()
        }];
        assert!(!derive(&blocks, &ApiConfig::default()).has_content());
    }

    #[test]
    fn detail_requires_some_content() {
        assert_eq!(derive_detail(&CourseDetail::default()), None);
        let detail = derive_detail(&Course {
            description: Some("12 hafta".into()),
            ..Course::default()
        })
        .unwrap();
        assert_eq!(detail.description.as_deref(), Some("12 hafta"));
    }

    #[test]
    fn repeated_topics_are_kept_in_order() {
        let blocks = vec![TitleCourses {
            courses: vec![Course {
                topics: vec!["Git".into(), "SQL".into(), "Git".into()],
                ..course("Backend")
            }],
            ..TitleCourses::default()
        }];
        let model = derive(&blocks, &ApiConfig::default());
        assert_eq!(model.programs[0].topics, vec!["Git", "SQL", "Git"]);
    }
}
