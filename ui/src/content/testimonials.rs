use std::fmt::Display;

use api::{Comment, CommentTitle};

use super::{first_non_blank, non_blank, section_state, SectionModel, SectionState};
use crate::core::format::initials;

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: Option<u64>,
    pub name: String,
    pub role: Option<String>,
    pub content: String,
    /// Whole stars, `0..=MAX_RATING`; `None` when the comment has no rating.
    pub rating: Option<u8>,
    pub initials: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestimonialsModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub items: Vec<Testimonial>,
}

impl SectionModel for TestimonialsModel {
    fn has_content(&self) -> bool {
        !self.items.is_empty()
    }
}

/// Comments without a name or without text are dropped.
pub fn derive(comments: &[Comment], heading: Option<&CommentTitle>) -> TestimonialsModel {
    let items = comments
        .iter()
        .filter_map(|comment| {
            let name = non_blank(comment.name.as_deref())?;
            let content = first_non_blank([comment.comment.as_deref(), comment.content.as_deref()])?;
            Some(Testimonial {
                id: comment.id,
                initials: initials(&name),
                role: first_non_blank([comment.position.as_deref(), comment.role.as_deref()]),
                rating: comment.rating.map(stars),
                name,
                content,
            })
        })
        .collect();

    TestimonialsModel {
        title: heading.and_then(|h| non_blank(h.title.as_deref())),
        description: heading.and_then(|h| non_blank(h.description.as_deref())),
        items,
    }
}

/// Section state for the comments and their heading. Stays `Loading` until
/// both have settled; a failed heading only loses the title.
pub fn section<E: Display>(
    comments: Option<&Result<Vec<Comment>, E>>,
    heading: Option<&Result<CommentTitle, E>>,
) -> SectionState<TestimonialsModel> {
    let Some(heading) = heading else {
        return SectionState::Loading;
    };
    let heading = match heading {
        Ok(heading) => Some(heading),
        Err(err) => {
            tracing::debug!("[testimonials] heading unavailable: {err}");
            None
        }
    };
    section_state("testimonials", comments, |list| derive(list, heading))
}

fn stars(rating: f64) -> u8 {
    if rating.is_nan() {
        return 0;
    }
    rating.clamp(0.0, f64::from(MAX_RATING)).floor() as u8
}
