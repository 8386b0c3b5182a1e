//! Wire types of the content API.
//!
//! Every field is optional and decoded leniently (see [`crate::shape`]). Legacy
//! and current spellings of the same field are both kept here as separate
//! fields; choosing between them is the job of the per-section normalisers in
//! the UI crate.

use serde::{Deserialize, Serialize};

use crate::shape::field;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Header {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub hero_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TitleAbout {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub title2: Option<String>,
    #[serde(default, deserialize_with = "field::seq")]
    pub about: Vec<AboutEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AboutEntry {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub about_title: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChooseUsTitle {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "field::seq")]
    pub choose_us: Vec<ChooseUsEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChooseUsEntry {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub icon_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Comment {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "field::float")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "field::boolean")]
    pub is_checked: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CommentTitle {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TitleCourses {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "field::seq")]
    pub courses: Vec<Course>,
}

/// A course as listed under a course title; the detail endpoint uses the same shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Course {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "field::strings")]
    pub topics: Vec<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub icon: Option<String>,
}

pub type CourseDetail = Course;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryTitle {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub title2: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "field::seq")]
    pub categories: Vec<GalleryCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GalleryCategory {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub name: Option<String>,
    /// Current API spelling.
    #[serde(default, deserialize_with = "field::opt_seq")]
    pub gallery: Option<Vec<GalleryImage>>,
    /// Legacy API spelling.
    #[serde(default, deserialize_with = "field::opt_seq")]
    pub galleries: Option<Vec<GalleryImage>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GalleryImage {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GalleryDetail {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "field::record")]
    pub category: Option<CategoryRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryRef {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactInfoTitle {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::seq")]
    pub contact_info: Vec<ContactEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactEntry {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, rename = "type", deserialize_with = "field::string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SocialMedia {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TitleLocation {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::seq")]
    pub locations: Vec<LocationEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationEntry {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "field::float")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "field::float")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompletedProject {
    #[serde(default, deserialize_with = "field::id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "field::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    pub image: Option<String>,
}

/// Body of the application write endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub full_name: String,
    pub phone_number: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape;
    use serde_json::json;

    #[test]
    fn course_topics_accept_string_or_list() {
        let courses: Vec<TitleCourses> = shape::list(json!([
            {
                "title": "Kurslar",
                "courses": [
                    {"id": 1, "title": "Frontend", "topics": ["HTML", "CSS"]},
                    {"id": 2, "title": "Backend", "topics": "Python"},
                    {"id": 3, "title": "AI", "topics": null}
                ]
            }
        ]));
        let topics: Vec<_> = courses[0].courses.iter().map(|c| c.topics.len()).collect();
        assert_eq!(topics, vec![2, 1, 0]);
    }

    #[test]
    fn gallery_keeps_both_spellings_apart() {
        let titles: Vec<CategoryTitle> = shape::list(json!([
            {
                "title": "Galereya",
                "categories": [
                    {"name": "new", "gallery": [{"image": "a.jpg"}]},
                    {"name": "old", "galleries": [{"image": "b.jpg"}]},
                    {"name": "broken", "gallery": "not-a-list"}
                ]
            }
        ]));
        let categories = &titles[0].categories;
        assert_eq!(categories[0].gallery.as_ref().map(Vec::len), Some(1));
        assert!(categories[0].galleries.is_none());
        assert_eq!(categories[1].galleries.as_ref().map(Vec::len), Some(1));
        assert!(categories[2].gallery.is_none());
    }

    #[test]
    fn contact_entry_reads_type_field() {
        let info: ContactInfoTitle = shape::one(json!({
            "contact_info": [{"type": "phone", "value": "+998 71 000 00 00"}]
        }));
        assert_eq!(info.contact_info[0].kind.as_deref(), Some("phone"));
    }

    #[test]
    fn contact_request_serialises_snake_case() {
        let body = serde_json::to_value(ContactRequest {
            full_name: "Ali Valiyev".into(),
            phone_number: "+998901234567".into(),
            description: "Narxi qancha?".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "full_name": "Ali Valiyev",
                "phone_number": "+998901234567",
                "description": "Narxi qancha?"
            })
        );
    }
}
