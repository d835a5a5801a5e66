//! Per-field validation rules for student input.

/// Format checks a rule can require of a string value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Email,
}

#[derive(Clone, Debug, Default)]
pub struct ValidationRule {
    pub required: bool,
    /// Value must be a JSON string.
    pub string: bool,
    pub format: Option<Format>,
    /// Maximum length in characters.
    pub max_length: Option<usize>,
    /// Value must consist of exactly this many decimal digits.
    pub digits: Option<usize>,
}

pub const MAX_TEXT_LENGTH: usize = 191;
pub const PHONE_DIGITS: usize = 10;

/// Rules for create and update, in the order fields are reported.
pub fn student_rules() -> Vec<(&'static str, ValidationRule)> {
    vec![
        (
            "name",
            ValidationRule {
                required: true,
                string: true,
                max_length: Some(MAX_TEXT_LENGTH),
                ..Default::default()
            },
        ),
        (
            "course",
            ValidationRule {
                required: true,
                string: true,
                max_length: Some(MAX_TEXT_LENGTH),
                ..Default::default()
            },
        ),
        (
            "email",
            ValidationRule {
                required: true,
                format: Some(Format::Email),
                max_length: Some(MAX_TEXT_LENGTH),
                ..Default::default()
            },
        ),
        (
            "phone",
            ValidationRule {
                required: true,
                digits: Some(PHONE_DIGITS),
                ..Default::default()
            },
        ),
    ]
}
