//! The code-like transcript typed out after a successful submission.

use super::draft::{normalize_phone, ApplicationDraft};

/// Characters of the question quoted in the transcript.
const QUESTION_PREVIEW_CHARS: usize = 50;

/// Render the transcript for `draft`. Lengths are counted in characters.
pub fn compose(draft: &ApplicationDraft) -> String {
    let escaped = draft.question.replace('"', "\\\"");
    let mut preview: String = escaped.chars().take(QUESTION_PREVIEW_CHARS).collect();
    if draft.question.chars().count() > QUESTION_PREVIEW_CHARS {
        preview.push_str("...");
    }

    format!(
        "# Sending application...\n\
         \n\
         data = {{\n\
         \x20   \"full_name\": \"{name}\",\n\
         \x20   \"phone_number\": \"{phone}\",\n\
         \x20   \"description\": \"{preview}\"\n\
         }}\n\
         \n\
         response = requests.post(\"/api/contact/\", json=data)\n\
         \n\
         if response.status_code == 200:\n\
         \x20   print(\"Success!\")\n\
         else:\n\
         \x20   print(\"Error\")",
        name = draft.full_name,
        phone = normalize_phone(&draft.phone),
    )
}

/// Character-by-character reveal of a fixed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingReveal {
    text: String,
    /// Byte offset of the end of the visible prefix; always a char boundary.
    shown: usize,
}

impl TypingReveal {
    pub fn new(text: String) -> Self {
        Self { text, shown: 0 }
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }

    pub fn full_text(&self) -> &str {
        &self.text
    }

    /// Total length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Show one more character. Returns `false` once everything is visible.
    pub fn advance(&mut self) -> bool {
        match self.text[self.shown..].chars().next() {
            Some(c) => {
                self.shown += c.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.shown == self.text.len()
    }

    pub fn remaining(&self) -> usize {
        self.text[self.shown..].chars().count()
    }
}
