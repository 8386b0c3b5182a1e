//! One resource hook per content endpoint.
//!
//! Each hook reads the locale from [`SiteContext`](crate::site::SiteContext)
//! inside the resource closure, so switching language refetches every
//! section. Results are handed to the views untouched; failures become
//! "no data" in [`content::section_state`](crate::content::section_state).

use std::future::Future;

use api::{
    ApiError, CategoryTitle, ChooseUsTitle, Comment, CommentTitle, CompletedProject,
    ContactInfoTitle, ContentClient, CourseDetail, GalleryDetail, Header, Locale, SocialMedia,
    TitleAbout, TitleCourses, TitleLocation,
};
use dioxus::prelude::*;

use crate::site::use_site;

pub type Query<T> = Resource<Result<T, ApiError>>;

fn use_locale_query<T, F, Fut>(fetch: F) -> Query<T>
where
    T: 'static,
    F: Fn(ContentClient, Locale) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let site = use_site();
    use_resource(move || {
        let locale = site.locale();
        fetch(site.client.clone(), locale)
    })
}

pub fn use_header() -> Query<Header> {
    use_locale_query(|client, locale| async move { client.header(locale).await })
}

pub fn use_about() -> Query<Vec<TitleAbout>> {
    use_locale_query(|client, locale| async move { client.about(locale).await })
}

pub fn use_choose_us() -> Query<Vec<ChooseUsTitle>> {
    use_locale_query(|client, locale| async move { client.choose_us(locale).await })
}

pub fn use_comments() -> Query<Vec<Comment>> {
    use_locale_query(|client, locale| async move { client.comments(locale).await })
}

pub fn use_comments_title() -> Query<CommentTitle> {
    use_locale_query(|client, locale| async move { client.comments_title(locale).await })
}

pub fn use_courses() -> Query<Vec<TitleCourses>> {
    use_locale_query(|client, locale| async move { client.courses(locale).await })
}

/// Detail for one course. The id is fixed for the hook's lifetime; key the
/// calling component by it.
pub fn use_course_detail(id: u64) -> Query<CourseDetail> {
    use_locale_query(move |client, locale| async move { client.course_detail(id, locale).await })
}

pub fn use_gallery_categories() -> Query<Vec<CategoryTitle>> {
    use_locale_query(|client, locale| async move { client.gallery_categories(locale).await })
}

/// Detail for one gallery image; keyed like [`use_course_detail`].
pub fn use_gallery_detail(id: u64) -> Query<GalleryDetail> {
    use_locale_query(move |client, locale| async move { client.gallery_detail(id, locale).await })
}

pub fn use_contact_info() -> Query<ContactInfoTitle> {
    use_locale_query(|client, locale| async move { client.contact_info(locale).await })
}

pub fn use_social_media() -> Query<Vec<SocialMedia>> {
    use_locale_query(|client, locale| async move { client.social_media(locale).await })
}

pub fn use_location() -> Query<Vec<TitleLocation>> {
    use_locale_query(|client, locale| async move { client.location(locale).await })
}

pub fn use_completed_projects() -> Query<Vec<CompletedProject>> {
    use_locale_query(|client, locale| async move { client.completed_projects(locale).await })
}
