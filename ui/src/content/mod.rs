//! Display models for each page section.
//!
//! Every submodule exposes a pure `derive` that turns decoded API payloads
//! into the one shape its view renders. This is the only place where field
//! aliases (`comment`/`content`, `gallery`/`galleries`, ...) are resolved.

use std::fmt::Display;

pub mod about;
pub mod contact;
pub mod features;
pub mod gallery;
pub mod hero;
pub mod programs;
pub mod testimonials;

/// What a section renders: a skeleton, the "no data" notice, or content.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionState<T> {
    Loading,
    Empty,
    Ready(T),
}

/// A derived model that may turn out to have nothing worth showing.
pub trait SectionModel {
    fn has_content(&self) -> bool;
}

impl<T> SectionState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Fold a query result into a [`SectionState`].
///
/// `None` means the query is still pending. A failed query is logged and
/// shown exactly like an empty one.
pub fn section_state<P, T, E>(
    section: &str,
    result: Option<&Result<P, E>>,
    derive: impl FnOnce(&P) -> T,
) -> SectionState<T>
where
    T: SectionModel,
    E: Display,
{
    match result {
        None => SectionState::Loading,
        Some(Err(err)) => {
            tracing::warn!("[{section}] showing no data: {err}");
            SectionState::Empty
        }
        Some(Ok(payload)) => {
            let model = derive(payload);
            if model.has_content() {
                SectionState::Ready(model)
            } else {
                SectionState::Empty
            }
        }
    }
}

/// Trimmed text, or `None` when blank.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// First non-blank candidate.
pub(crate) fn first_non_blank<'a>(
    candidates: impl IntoIterator<Item = Option<&'a str>>,
) -> Option<String> {
    candidates.into_iter().find_map(non_blank)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Count(usize);

    impl SectionModel for Count {
        fn has_content(&self) -> bool {
            self.0 > 0
        }
    }

    #[test]
    fn pending_is_loading() {
        let state = section_state::<Vec<u8>, _, String>("about", None, |v| Count(v.len()));
        assert!(state.is_loading());
    }

    #[test]
    fn failure_and_empty_look_the_same() {
        let failed: Result<Vec<u8>, String> = Err("HTTP 502".into());
        let empty: Result<Vec<u8>, String> = Ok(Vec::new());
        assert!(matches!(
            section_state("about", Some(&failed), |v| Count(v.len())),
            SectionState::Empty
        ));
        assert!(matches!(
            section_state("about", Some(&empty), |v| Count(v.len())),
            SectionState::Empty
        ));
    }

    #[test]
    fn content_is_ready() {
        let ok: Result<Vec<u8>, String> = Ok(vec![1, 2]);
        match section_state("about", Some(&ok), |v| Count(v.len())) {
            SectionState::Ready(Count(n)) => assert_eq!(n, 2),
            other => panic!("expected ready, got {:?}", other.is_loading()),
        }
    }

    #[test]
    fn blank_strings_are_absent() {
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(Some(" a ")), Some("a".into()));
        assert_eq!(first_non_blank([None, Some(""), Some("b")]), Some("b".into()));
    }
}
