//! Response payload decoding
//!
//! Shared by the native and browser fetchers so both hosts accept exactly
//! the same shapes.

use serde_json::Value;

use super::error::{FetchError, FetchResult};
use super::types::TeacherRecord;

/// Decode a response body into records.
///
/// The body must be a JSON array whose elements all carry the four string
/// fields. Anything else is a [`FetchError::Validation`].
pub fn decode_payload(body: &[u8]) -> FetchResult<Vec<TeacherRecord>> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| FetchError::Validation(format!("body is not JSON: {}", e)))?;

    decode_value(value)
}

/// Decode an already-parsed JSON value into records
pub fn decode_value(value: Value) -> FetchResult<Vec<TeacherRecord>> {
    if !value.is_array() {
        return Err(FetchError::Validation(format!(
            "expected a JSON array, got {}",
            json_type_name(&value)
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| FetchError::Validation(format!("malformed record: {}", e)))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_array() {
        let body = br#"[
            {"claveiss":"1","nombre":"Ana","sexo":"F","telefono":"555-1"},
            {"claveiss":"2","nombre":"Luis","sexo":"M","telefono":"555-2"}
        ]"#;

        let records = decode_payload(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Luis");
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_payload(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_keeps_unknown_sex_and_extra_fields() {
        let body = br#"[{"claveiss":"9","nombre":"Sam","sexo":"X","telefono":"1","extra":true}]"#;

        let records = decode_payload(body).unwrap();

        assert_eq!(records[0].sex, "X");
    }

    #[test]
    fn test_object_is_rejected() {
        let err = decode_payload(br#"{"foo":"bar"}"#).unwrap_err();

        assert!(matches!(err, FetchError::Validation(ref msg) if msg.contains("object")));
    }

    #[test]
    fn test_non_json_is_rejected() {
        let err = decode_payload(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Validation(_)));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let err = decode_payload(br#"[{"claveiss":"1","nombre":"Ana","sexo":"F"}]"#).unwrap_err();
        assert!(matches!(err, FetchError::Validation(_)));
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        let body = br#"[{"claveiss":1,"nombre":"Ana","sexo":"F","telefono":"5"}]"#;
        let err = decode_payload(body).unwrap_err();
        assert!(matches!(err, FetchError::Validation(_)));
    }
}
