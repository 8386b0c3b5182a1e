use api::ContactRequest;

/// In-progress values of the application form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub phone: String,
    pub question: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    FullName,
    Phone,
    Question,
}

impl ApplicationDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::FullName => self.full_name = value,
            DraftField::Phone => self.phone = value,
            DraftField::Question => self.question = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FullName => &self.full_name,
            DraftField::Phone => &self.phone,
            DraftField::Question => &self.question,
        }
    }

    /// All three fields carry something besides whitespace.
    pub fn is_complete(&self) -> bool {
        [&self.full_name, &self.phone, &self.question]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            full_name: self.full_name.clone(),
            phone_number: normalize_phone(&self.phone),
            description: self.question.clone(),
        }
    }
}

/// Keep ASCII digits plus a single leading `+`.
///
/// A `+` survives only when no digit has been kept before it, so the result
/// is always a subsequence of the input: `"+998 90 123 45 67"` -> `"+998901234567"`.
pub fn normalize_phone(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == '+' && out.is_empty() {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_keeps_digits_and_leading_plus() {
        assert_eq!(normalize_phone("+998 90 123 45 67"), "+998901234567");
        assert_eq!(normalize_phone("(90) 123-45-67"), "901234567");
        assert_eq!(normalize_phone("++998"), "+998");
        assert_eq!(normalize_phone("998+90"), "99890");
        assert_eq!(normalize_phone("tel: +٣٤ 12"), "+12");
        assert_eq!(normalize_phone(""), "");
    }

    #[test]
    fn normalised_phone_is_a_subsequence_of_the_input() {
        for raw in ["+1 (555) 123-4567", "+ + 9", "abc", "12+34+"] {
            let normalised = normalize_phone(raw);
            let mut rest = raw.chars();
            assert!(
                normalised.chars().all(|c| rest.any(|r| r == c)),
                "{normalised:?} is not a subsequence of {raw:?}"
            );
        }
    }

    #[test]
    fn completeness_ignores_whitespace() {
        let mut draft = ApplicationDraft::default();
        assert!(!draft.is_complete());

        draft.set(DraftField::FullName, "Ali Valiyev".into());
        draft.set(DraftField::Phone, "+998 90 123 45 67".into());
        draft.set(DraftField::Question, "   ".into());
        assert!(!draft.is_complete());

        draft.set(DraftField::Question, "Kurs qachon boshlanadi?".into());
        assert!(draft.is_complete());
        assert_eq!(draft.get(DraftField::Question), "Kurs qachon boshlanadi?");
    }

    #[test]
    fn request_carries_normalised_phone() {
        let draft = ApplicationDraft {
            full_name: "Ali Valiyev".into(),
            phone: "+998 (90) 123-45-67".into(),
            question: "Narxi?".into(),
        };
        let request = draft.to_request();
        assert_eq!(request.full_name, "Ali Valiyev");
        assert_eq!(request.phone_number, "+998901234567");
        assert_eq!(request.description, "Narxi?");
    }
}
