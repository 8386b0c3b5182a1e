//! Supported display languages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three languages the site and the content API speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    Uz,
    Ru,
    En,
}

impl Locale {
    /// Switcher order.
    pub const ALL: [Locale; 3] = [Locale::Uz, Locale::Ru, Locale::En];

    /// Upper-case display code, also the persisted value (`"UZ"`).
    pub fn code(self) -> &'static str {
        match self {
            Locale::Uz => "UZ",
            Locale::Ru => "RU",
            Locale::En => "EN",
        }
    }

    /// Path segment used by the content API (`"uz"`).
    pub fn segment(self) -> &'static str {
        match self {
            Locale::Uz => "uz",
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    /// Parse either a display code or a path segment, ignoring case.
    pub fn from_code(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
