//! Structural decoding and field normalization.

use crate::domain::{EmailAddress, ValidationError};
use crate::models::RawContactFields;

/// Trimmed form fields, email lower-cased, none empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

/// Decode an arbitrary JSON body into raw contact fields.
///
/// Only the shape is checked here: the body must be an object whose known
/// fields, when present, are strings.
pub fn decode(body: serde_json::Value) -> Result<RawContactFields, ValidationError> {
    if !body.is_object() {
        return Err(ValidationError::InvalidPayload(
            "expected a JSON object".to_string(),
        ));
    }
    serde_json::from_value(body).map_err(|e| ValidationError::InvalidPayload(e.to_string()))
}

/// Trim every field and lower-case the email.
///
/// Fails on the first field (in form order) that is empty after trimming.
pub fn normalize(raw: &RawContactFields) -> Result<NormalizedFields, ValidationError> {
    let name = required("name", &raw.name)?;
    let email = required("email", &raw.email)?;
    let phone = required("phone", &raw.phone)?;
    let service = required("service", &raw.service)?;
    let message = required("message", &raw.message)?;

    Ok(NormalizedFields {
        name,
        email: EmailAddress::normalize(&email),
        phone,
        service,
        message,
    })
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw() -> RawContactFields {
        RawContactFields {
            name: "  Jane Doe ".to_string(),
            email: " Jane@Example.COM ".to_string(),
            phone: " 555-123-4567 ".to_string(),
            service: " Flooring\n".to_string(),
            message: "\tHello there  ".to_string(),
        }
    }

    #[test]
    fn test_normalize_trims_and_lowercases_email() {
        let fields = normalize(&raw()).unwrap();
        assert_eq!(fields.name, "Jane Doe");
        assert_eq!(fields.email, "jane@example.com");
        assert_eq!(fields.phone, "555-123-4567");
        assert_eq!(fields.service, "Flooring");
        assert_eq!(fields.message, "Hello there");
    }

    #[test]
    fn test_normalize_keeps_inner_case_of_other_fields() {
        let mut input = raw();
        input.name = "McDONALD".to_string();
        assert_eq!(normalize(&input).unwrap().name, "McDONALD");
    }

    #[test]
    fn test_whitespace_only_field_is_missing() {
        let mut input = raw();
        input.service = "   ".to_string();
        assert_eq!(
            normalize(&input),
            Err(ValidationError::MissingField("service"))
        );
    }

    #[test]
    fn test_first_missing_field_reported() {
        let input = RawContactFields {
            message: "hi".to_string(),
            ..Default::default()
        };
        assert_eq!(normalize(&input), Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn test_decode_accepts_object() {
        let decoded = decode(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "phone": "5551234567",
            "service": "Basements",
            "message": "Quote please",
            "extra": 42
        }))
        .unwrap();
        assert_eq!(decoded.name, "Jane");
        assert_eq!(decoded.service, "Basements");
    }

    #[test]
    fn test_decode_rejects_non_objects() {
        for body in [json!(null), json!("text"), json!([1, 2]), json!(7)] {
            assert!(matches!(
                decode(body),
                Err(ValidationError::InvalidPayload(_))
            ));
        }
    }

    #[test]
    fn test_decode_rejects_non_string_fields() {
        let result = decode(json!({ "name": "Jane", "phone": 5551234567u64 }));
        assert!(matches!(result, Err(ValidationError::InvalidPayload(_))));
    }
}
