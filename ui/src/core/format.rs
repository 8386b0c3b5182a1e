//! Small text helpers for presenting API content.

use time::OffsetDateTime;

/// Uppercased first letters of the first two words: `"ali valiyev"` -> `"AV"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

/// `"© {year} UFT Academy. {rights}"`
pub fn copyright_line(year: i32, rights: &str) -> String {
    format!("© {year} UFT Academy. {rights}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_two_words() {
        assert_eq!(initials("ali valiyev"), "AV");
        assert_eq!(initials("Madina Karimova Sobirovna"), "MK");
        assert_eq!(initials("  Jasur  "), "J");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn initials_handle_cyrillic() {
        assert_eq!(initials("анна петрова"), "АП");
    }

    #[test]
    fn copyright_mentions_year() {
        assert_eq!(
            copyright_line(2026, "All rights reserved."),
            "© 2026 UFT Academy. All rights reserved."
        );
        assert!(current_year() >= 2024);
    }
}
