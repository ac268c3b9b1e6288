//! Request body decoding.
//!
//! # Responsibilities
//! - Choose a decoder from the declared `Content-Type`
//! - Decode JSON objects and URL-encoded forms into one flat field map
//! - Expose typed accessors handlers use for presence checks
//!
//! # Design Decisions
//! - Media type compared by essence: parameters and case are ignored
//! - Empty body or unknown media type means "no fields", not an error
//! - Malformed JSON is a decode error (reported as 400)
//! - Form fields are strings; numeric accessors also accept decimal strings

use serde_json::{Map, Value};
use thiserror::Error;

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_FORM: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed form body: {0}")]
    Form(String),
}

/// Decoded key/value fields of a request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody {
    fields: Map<String, Value>,
}

impl RequestBody {
    /// Decode `bytes` according to the request's `Content-Type` header value.
    pub fn decode(content_type: Option<&str>, bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }

        match content_type.map(media_type).as_deref() {
            Some(APPLICATION_JSON) => Self::from_json(bytes),
            Some(APPLICATION_FORM) => Self::from_form(bytes),
            _ => Ok(Self::default()),
        }
    }

    fn from_json(bytes: &[u8]) -> Result<Self, DecodeError> {
        match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Ok(Self::default()),
        }
    }

    fn from_form(bytes: &[u8]) -> Result<Self, DecodeError> {
        let body = std::str::from_utf8(bytes).map_err(|e| DecodeError::Form(e.to_string()))?;
        let mut fields = Map::new();
        for pair in body.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            // last occurrence wins
            fields.insert(form_decode(key)?, Value::String(form_decode(value)?));
        }
        Ok(Self { fields })
    }

    /// A field holding a string. `None` if absent, null or not a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// A field holding an unsigned integer, given as a JSON number or a decimal string.
    /// Whole floats such as `2.0` count; fractions do not.
    pub fn unsigned(&self, key: &str) -> Option<u64> {
        match self.fields.get(key)? {
            Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_number)),
            Value::String(s) => {
                let s = s.trim();
                s.parse()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
            }
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Lower-cased media type without parameters: `Application/JSON; charset=utf-8` → `application/json`.
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn whole_number(value: f64) -> Option<u64> {
    // `u64::MAX as f64` rounds up past u64::MAX, so the bound is exclusive
    (value.fract() == 0.0 && value >= 0.0 && value < u64::MAX as f64).then_some(value as u64)
}

fn form_decode(raw: &str) -> Result<String, DecodeError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| DecodeError::Form(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_object() {
        let body = RequestBody::decode(
            Some("application/json"),
            br#"{"name": "Radiohead", "trackNumber": 2}"#,
        )
        .unwrap();
        assert_eq!(body.text("name"), Some("Radiohead"));
        assert_eq!(body.unsigned("trackNumber"), Some(2));
        assert_eq!(body.text("lyrics"), None);
    }

    #[test]
    fn test_json_content_type_parameters_ignored() {
        let body =
            RequestBody::decode(Some("Application/JSON; charset=utf-8"), br#"{"name":"x"}"#).unwrap();
        assert_eq!(body.text("name"), Some("x"));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = RequestBody::decode(Some("application/json"), b"{\"name\":").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn test_non_object_json_has_no_fields() {
        let body = RequestBody::decode(Some("application/json"), b"[1, 2, 3]").unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_form_decoding() {
        let body = RequestBody::decode(
            Some("application/x-www-form-urlencoded"),
            b"name=Paranoid+Android&lyrics=Please+could+you+stop+the+noise%3F&trackNumber=2",
        )
        .unwrap();
        assert_eq!(body.text("name"), Some("Paranoid Android"));
        assert_eq!(body.text("lyrics"), Some("Please could you stop the noise?"));
        assert_eq!(body.unsigned("trackNumber"), Some(2));
    }

    #[test]
    fn test_form_last_occurrence_wins_and_bare_keys() {
        let body = RequestBody::decode(
            Some("application/x-www-form-urlencoded"),
            b"name=first&name=second&flag&eq=a=b",
        )
        .unwrap();
        assert_eq!(body.text("name"), Some("second"));
        assert_eq!(body.text("flag"), Some(""));
        assert_eq!(body.text("eq"), Some("a=b"));
    }

    #[test]
    fn test_unknown_content_type_or_empty_body() {
        let body = RequestBody::decode(Some("text/plain"), b"name=x").unwrap();
        assert!(body.is_empty());

        let body = RequestBody::decode(None, br#"{"name":"x"}"#).unwrap();
        assert!(body.is_empty());

        let body = RequestBody::decode(Some("application/json"), b"").unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_unsigned_accepts_whole_floats() {
        let body = RequestBody::decode(
            Some("application/json"),
            br#"{"trackNumber": 2.0, "big": 1e3, "text": "4.0"}"#,
        )
        .unwrap();
        assert_eq!(body.unsigned("trackNumber"), Some(2));
        assert_eq!(body.unsigned("big"), Some(1000));
        assert_eq!(body.unsigned("text"), Some(4));
    }

    #[test]
    fn test_unsigned_rejects_other_shapes() {
        let body = RequestBody::decode(
            Some("application/json"),
            br#"{"a": -1, "b": 1.5, "c": "two", "d": true, "e": null, "f": "NaN", "g": -3.0}"#,
        )
        .unwrap();
        for key in ["a", "b", "c", "d", "e", "f", "g"] {
            assert_eq!(body.unsigned(key), None, "{}", key);
        }
    }
}
