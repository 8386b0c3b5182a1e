//! Endpoint catalogue of the content API.

use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Header,
    About,
    ChooseUs,
    Comments,
    CommentsTitle,
    Courses,
    CourseDetail(u64),
    GalleryCategories,
    GalleryDetail(u64),
    ContactInfo,
    SocialMedia,
    Location,
    CompletedProjects,
    /// The only write endpoint (application submissions).
    Contact,
}

impl Endpoint {
    /// Relative path below `/{lang}/api/`.
    pub fn path(self) -> String {
        match self {
            Endpoint::Header => "header/".into(),
            Endpoint::About => "about/".into(),
            Endpoint::ChooseUs => "choose_us/".into(),
            Endpoint::Comments => "comments/".into(),
            Endpoint::CommentsTitle => "comments_title/".into(),
            Endpoint::Courses => "courses/".into(),
            Endpoint::CourseDetail(id) => format!("courses/{id}/"),
            Endpoint::GalleryCategories => "titles-with-categories/".into(),
            Endpoint::GalleryDetail(id) => format!("gallery/{id}/"),
            Endpoint::ContactInfo => "contact_info/".into(),
            Endpoint::SocialMedia => "social_media/".into(),
            Endpoint::Location => "location/".into(),
            Endpoint::CompletedProjects => "completed-projects/".into(),
            Endpoint::Contact => "contact/".into(),
        }
    }

    /// Short label for logs and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Endpoint::Header => "header",
            Endpoint::About => "about",
            Endpoint::ChooseUs => "choose-us",
            Endpoint::Comments => "comments",
            Endpoint::CommentsTitle => "comments-title",
            Endpoint::Courses => "courses",
            Endpoint::CourseDetail(_) => "course-detail",
            Endpoint::GalleryCategories => "gallery-categories",
            Endpoint::GalleryDetail(_) => "gallery-detail",
            Endpoint::ContactInfo => "contact-info",
            Endpoint::SocialMedia => "social-media",
            Endpoint::Location => "location",
            Endpoint::CompletedProjects => "completed-projects",
            Endpoint::Contact => "contact",
        }
    }

    pub fn url(self, base_url: &str, locale: Locale) -> String {
        join_url(base_url, locale, &self.path())
    }
}

/// `{base}/{lang}/api/{path}`; a leading slash on `path` is dropped.
pub fn join_url(base_url: &str, locale: Locale, path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!(
        "{}/{}/api/{path}",
        base_url.trim_end_matches('/'),
        locale.segment()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.uftacademy.uz";

    #[test]
    fn urls_carry_the_language_segment() {
        assert_eq!(
            Endpoint::About.url(BASE, Locale::Ru),
            "https://api.uftacademy.uz/ru/api/about/"
        );
        assert_eq!(
            Endpoint::GalleryCategories.url(BASE, Locale::En),
            "https://api.uftacademy.uz/en/api/titles-with-categories/"
        );
    }

    #[test]
    fn detail_endpoints_embed_the_id() {
        assert_eq!(
            Endpoint::CourseDetail(7).url(BASE, Locale::Uz),
            "https://api.uftacademy.uz/uz/api/courses/7/"
        );
        assert_eq!(
            Endpoint::GalleryDetail(12).url(BASE, Locale::Uz),
            "https://api.uftacademy.uz/uz/api/gallery/12/"
        );
    }

    #[test]
    fn leading_slash_is_stripped() {
        assert_eq!(
            join_url("http://h/", Locale::Uz, "/contact/"),
            "http://h/uz/api/contact/"
        );
    }
}
