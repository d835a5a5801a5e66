//! Request validation from field rules. Collects every failing field instead of stopping at the first.

use crate::config::{Format, ValidationRule};
use crate::error::{AppError, FieldErrors};
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Dot-atom local part and LDH domain labels, each also admitting any non-ASCII character
/// so UTF-8 mailboxes and internationalised domains pass.
const EMAIL_PATTERN: &str = concat!(
    r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~\x{80}-\x{10FFFF}-]+",
    r"@[A-Za-z0-9\x{80}-\x{10FFFF}](?:[A-Za-z0-9\x{80}-\x{10FFFF}-]{0,61}[A-Za-z0-9\x{80}-\x{10FFFF}])?",
    r"(?:\.[A-Za-z0-9\x{80}-\x{10FFFF}](?:[A-Za-z0-9\x{80}-\x{10FFFF}-]{0,61}[A-Za-z0-9\x{80}-\x{10FFFF}])?)*$",
);

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

pub struct RequestValidator;

impl RequestValidator {
    /// Validate `body` against `rules`. On success returns each ruled field's value as text.
    pub fn validate(
        body: &Map<String, Value>,
        rules: &[(&'static str, ValidationRule)],
    ) -> Result<BTreeMap<String, String>, AppError> {
        let mut errors = FieldErrors::new();
        let mut values = BTreeMap::new();
        for (field, rule) in rules {
            let val = body.get(*field).filter(|v| !is_empty(v));
            let Some(v) = val else {
                if rule.required {
                    errors.insert(field.to_string(), vec![format!("The {} field is required.", field)]);
                }
                continue;
            };
            let messages = check_field(field, v, rule);
            if messages.is_empty() {
                if let Some(text) = as_text(v) {
                    values.insert(field.to_string(), text);
                }
            } else {
                errors.insert(field.to_string(), messages);
            }
        }
        if errors.is_empty() {
            Ok(values)
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

fn is_empty(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}

fn as_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn check_field(field: &str, v: &Value, rule: &ValidationRule) -> Vec<String> {
    let mut messages = Vec::new();
    if rule.string && !v.is_string() {
        messages.push(format!("The {} must be a string.", field));
    }
    if let Some(Format::Email) = rule.format {
        if !v.as_str().is_some_and(is_valid_email) {
            messages.push(format!("The {} must be a valid email address.", field));
        }
    }
    if let (Some(max), Some(s)) = (rule.max_length, v.as_str()) {
        if s.chars().count() > max {
            messages.push(format!(
                "The {} must not be greater than {} characters.",
                field, max
            ));
        }
    }
    if let Some(n) = rule.digits {
        let ok = match v {
            Value::String(s) => is_digits(s, n),
            Value::Number(num) => num.as_u64().is_some_and(|u| is_digits(&u.to_string(), n)),
            _ => false,
        };
        if !ok {
            messages.push(format!("The {} must be {} digits.", field, n));
        }
    }
    messages
}

fn is_digits(s: &str, n: usize) -> bool {
    s.len() == n && s.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_valid_email(s: &str) -> bool {
    let Some((local, _)) = s.rsplit_once('@') else {
        return false;
    };
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    EMAIL_RE
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::student_rules;
    use serde_json::json;

    fn body(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("test body must be an object"),
        }
    }

    fn errors_of(v: Value) -> FieldErrors {
        match RequestValidator::validate(&body(v), &student_rules()) {
            Err(AppError::Validation(e)) => e,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_valid_student() {
        let values = RequestValidator::validate(
            &body(json!({"name": "Alice", "course": "CS", "email": "a@x.com", "phone": "1234567890"})),
            &student_rules(),
        )
        .unwrap();
        assert_eq!(values["name"], "Alice");
        assert_eq!(values["phone"], "1234567890");
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = errors_of(json!({}));
        assert_eq!(errors.len(), 4);
        assert_eq!(errors["name"], vec!["The name field is required."]);
        assert_eq!(errors["course"], vec!["The course field is required."]);
        assert_eq!(errors["email"], vec!["The email field is required."]);
        assert_eq!(errors["phone"], vec!["The phone field is required."]);
    }

    #[test]
    fn blank_and_null_count_as_missing() {
        let errors = errors_of(json!({"name": "   ", "course": null, "email": "a@x.com", "phone": "1234567890"}));
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["course", "name"]);
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() {
        for bad in [json!("123"), json!("12345678901"), json!("12345abcde"), json!("+123456789"), json!(true)] {
            let errors = errors_of(json!({"name": "A", "course": "B", "email": "a@x.com", "phone": bad}));
            assert_eq!(errors["phone"], vec!["The phone must be 10 digits."]);
        }
    }

    #[test]
    fn numeric_phone_is_accepted_as_digits() {
        let values = RequestValidator::validate(
            &body(json!({"name": "A", "course": "B", "email": "a@x.com", "phone": 1234567890u64})),
            &student_rules(),
        )
        .unwrap();
        assert_eq!(values["phone"], "1234567890");
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["plainaddress", "@x.com", "a@", "a b@x.com", "a..b@x.com", "a@-x.com"] {
            let errors = errors_of(json!({"name": "A", "course": "B", "email": bad, "phone": "1234567890"}));
            assert_eq!(errors["email"], vec!["The email must be a valid email address."], "{}", bad);
        }
    }

    #[test]
    fn accepts_utf8_mailboxes_and_idn_domains() {
        for good in ["josé@x.com", "a@bücher.de", "用户@例子.广告", "first.last+tag@sub.example.org"] {
            assert!(is_valid_email(good), "{}", good);
        }
        assert!(!is_valid_email("josé@-bücher.de"));
    }

    #[test]
    fn enforces_max_length_in_characters() {
        let ok = "é".repeat(191);
        assert!(RequestValidator::validate(
            &body(json!({"name": ok, "course": "B", "email": "a@x.com", "phone": "1234567890"})),
            &student_rules(),
        )
        .is_ok());

        let errors = errors_of(json!({"name": "n".repeat(192), "course": "B", "email": "a@x.com", "phone": "1234567890"}));
        assert_eq!(errors["name"], vec!["The name must not be greater than 191 characters."]);
    }

    #[test]
    fn non_string_name_is_rejected() {
        let errors = errors_of(json!({"name": 42, "course": "B", "email": "a@x.com", "phone": "1234567890"}));
        assert_eq!(errors["name"], vec!["The name must be a string."]);
    }

    #[test]
    fn long_invalid_email_reports_both_messages() {
        let email = format!("{}@", "a".repeat(200));
        let errors = errors_of(json!({"name": "A", "course": "B", "email": email, "phone": "1234567890"}));
        assert_eq!(errors["email"].len(), 2);
    }
}
