//! Submission validation.
//!
//! [`validate_submission`] turns an untyped JSON payload into an
//! [`InsertWaitlistEntry`] or reports every field that failed. Keys outside
//! the accepted shape (including `id` and `createdAt`) are ignored, so
//! clients can never supply an identity or a timestamp.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{CompanySize, InsertWaitlistEntry};

/// Message shown when the email field is malformed.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Message shown when the company size is missing or not a known bucket.
pub const INVALID_COMPANY_SIZE_MESSAGE: &str = "Please select your company size.";

const REQUIRED_MESSAGE: &str = "Required";
const EXPECTED_STRING_MESSAGE: &str = "Expected string";
const EMPTY_MESSAGE: &str = "Must not be empty";

// Leading dots and consecutive dots in the local part are rejected
// separately; the regex crate has no lookaround.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern compiles")
});

/// A single failed rule on one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the offending field (`"body"` when the payload itself is
    /// not an object).
    pub field: &'static str,
    /// Human-readable description of the failure.
    pub message: &'static str,
}

/// Non-empty list of field failures for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Returns the individual field failures.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns the message reported for `field`, if it failed.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    fn single(field: &'static str, message: &'static str) -> Self {
        Self(vec![FieldError { field, message }])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Returns `true` if `email` is syntactically a valid address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

/// Validates a raw submission payload.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing every field that is missing, has the
/// wrong type, is empty, or violates its format rule.
pub fn validate_submission(payload: &Value) -> Result<InsertWaitlistEntry, ValidationErrors> {
    let Some(obj) = payload.as_object() else {
        return Err(ValidationErrors::single("body", "Expected object"));
    };

    let mut errors = Vec::new();

    let full_name = required_text(obj, "fullName", &mut errors);
    let company_name = required_text(obj, "companyName", &mut errors);

    let email = match obj.get("email") {
        Some(Value::String(s)) if is_valid_email(s) => Some(s.clone()),
        _ => {
            errors.push(FieldError {
                field: "email",
                message: INVALID_EMAIL_MESSAGE,
            });
            None
        }
    };

    let company_size = match obj
        .get("companySize")
        .and_then(Value::as_str)
        .map(str::parse::<CompanySize>)
    {
        Some(Ok(size)) => Some(size),
        _ => {
            errors.push(FieldError {
                field: "companySize",
                message: INVALID_COMPANY_SIZE_MESSAGE,
            });
            None
        }
    };

    match (full_name, email, company_name, company_size) {
        (Some(full_name), Some(email), Some(company_name), Some(company_size)) => {
            Ok(InsertWaitlistEntry {
                full_name,
                email,
                company_name,
                company_size,
            })
        }
        _ => Err(ValidationErrors(errors)),
    }
}

fn required_text(
    obj: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let message = match obj.get(field) {
        None | Some(Value::Null) => REQUIRED_MESSAGE,
        Some(Value::String(s)) if s.is_empty() => EMPTY_MESSAGE,
        Some(Value::String(s)) => return Some(s.clone()),
        Some(_) => EXPECTED_STRING_MESSAGE,
    };
    errors.push(FieldError { field, message });
    None
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "fullName": "Jane Doe",
            "email": "jane@acme.com",
            "companyName": "Acme",
            "companySize": "11-50",
        })
    }

    #[test]
    fn accepts_valid_payload() {
        let Ok(entry) = validate_submission(&valid_payload()) else {
            panic!("expected valid payload");
        };
        assert_eq!(entry.full_name, "Jane Doe");
        assert_eq!(entry.email, "jane@acme.com");
        assert_eq!(entry.company_name, "Acme");
        assert_eq!(entry.company_size, CompanySize::Small);
    }

    #[test]
    fn ignores_client_supplied_id_and_created_at() {
        let mut payload = valid_payload();
        payload["id"] = json!(999);
        payload["createdAt"] = json!("1999-01-01T00:00:00Z");
        payload["extra"] = json!(true);

        let result = validate_submission(&payload);
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in [
            "not-an-email",
            "jane@",
            "@acme.com",
            "jane@acme",
            "jane@acme.c",
            ".jane@acme.com",
            "ja..ne@acme.com",
            "jane.@acme.com",
            "jane doe@acme.com",
            "",
        ] {
            let mut payload = valid_payload();
            payload["email"] = json!(bad);
            let Err(errors) = validate_submission(&payload) else {
                panic!("expected {bad:?} to be rejected");
            };
            assert_eq!(errors.message_for("email"), Some(INVALID_EMAIL_MESSAGE));
            assert_eq!(errors.errors().len(), 1);
        }
    }

    #[test]
    fn accepts_common_email_shapes() {
        for good in [
            "jane@acme.com",
            "Jane.Doe+waitlist@mail.acme.co.uk",
            "o'brien@acme.io",
            "a_b-c@sub-domain.example.org",
        ] {
            assert!(is_valid_email(good), "{good} should be valid");
        }
    }

    #[test]
    fn rejects_unknown_company_size() {
        let mut payload = valid_payload();
        payload["companySize"] = json!("huge");

        let Err(errors) = validate_submission(&payload) else {
            panic!("expected rejection");
        };
        assert_eq!(
            errors.message_for("companySize"),
            Some(INVALID_COMPANY_SIZE_MESSAGE)
        );
    }

    #[test]
    fn missing_company_size_uses_select_message() {
        let mut payload = valid_payload();
        if let Some(obj) = payload.as_object_mut() {
            obj.remove("companySize");
        }

        let Err(errors) = validate_submission(&payload) else {
            panic!("expected rejection");
        };
        assert_eq!(
            errors.message_for("companySize"),
            Some(INVALID_COMPANY_SIZE_MESSAGE)
        );
    }

    #[test]
    fn rejects_empty_and_mistyped_names() {
        let payload = json!({
            "fullName": "",
            "email": "jane@acme.com",
            "companyName": 42,
            "companySize": "1-10",
        });

        let Err(errors) = validate_submission(&payload) else {
            panic!("expected rejection");
        };
        assert_eq!(errors.message_for("fullName"), Some(EMPTY_MESSAGE));
        assert_eq!(
            errors.message_for("companyName"),
            Some(EXPECTED_STRING_MESSAGE)
        );
        assert_eq!(errors.errors().len(), 2);
    }

    #[test]
    fn whitespace_names_are_non_empty() {
        let mut payload = valid_payload();
        payload["fullName"] = json!("   ");
        payload["companyName"] = json!(" ");

        let Ok(entry) = validate_submission(&payload) else {
            panic!("whitespace-only names are non-empty strings");
        };
        assert_eq!(entry.full_name, "   ");
        assert_eq!(entry.company_name, " ");
    }

    #[test]
    fn reports_every_missing_field() {
        let Err(errors) = validate_submission(&json!({})) else {
            panic!("expected rejection");
        };
        assert_eq!(errors.errors().len(), 4);
        assert_eq!(errors.message_for("fullName"), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.message_for("companyName"), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn rejects_non_object_payload() {
        let Err(errors) = validate_submission(&json!(["Jane Doe"])) else {
            panic!("expected rejection");
        };
        assert_eq!(errors.message_for("body"), Some("Expected object"));
    }

    #[test]
    fn display_joins_field_errors() {
        let Err(errors) = validate_submission(&json!({
            "fullName": "Jane",
            "email": "nope",
            "companyName": "Acme",
            "companySize": "huge",
        })) else {
            panic!("expected rejection");
        };
        assert_eq!(
            errors.to_string(),
            "email: Please enter a valid email address.; companySize: Please select your company size."
        );
    }
}
