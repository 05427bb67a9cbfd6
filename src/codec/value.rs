//! Entry points for loosely typed input such as JSON form fields.
//!
//! A `serde_json::Value` stands in for "any value": the fallible operations
//! reject anything that is not a string with the operation's own tag, and
//! the probes fall back to `false` / `""`.

use super::{base64_decode, base64_encode, is_valid_base64, url_decode, url_encode};
use crate::utils::codec_error::{EncodingError, Operation, Result};
use serde_json::Value;

fn require_str(input: &Value, operation: Operation) -> Result<&str> {
    input
        .as_str()
        .ok_or_else(|| EncodingError::not_a_string(operation))
}

fn unsupported() -> EncodingError {
    EncodingError::new(Operation::Unknown, "Unsupported operation")
}

pub fn base64_encode_value(input: &Value) -> Result<String> {
    base64_encode(require_str(input, Operation::Base64Encode)?)
}

pub fn base64_decode_value(input: &Value) -> Result<String> {
    base64_decode(require_str(input, Operation::Base64Decode)?)
}

pub fn url_encode_value(input: &Value) -> Result<String> {
    url_encode(require_str(input, Operation::UrlEncode)?)
}

pub fn url_decode_value(input: &Value) -> Result<String> {
    url_decode(require_str(input, Operation::UrlDecode)?)
}

pub fn is_valid_base64_value(input: &Value) -> bool {
    input.as_str().is_some_and(is_valid_base64)
}

/// Non-string values, including `null`, become `""`.
pub fn safe_string_value(input: &Value) -> String {
    super::safe_string(input.as_str())
}

impl Operation {
    pub fn apply(&self, input: &Value) -> Result<String> {
        match self {
            Self::Base64Encode => base64_encode_value(input),
            Self::Base64Decode => base64_decode_value(input),
            Self::UrlEncode => url_encode_value(input),
            Self::UrlDecode => url_decode_value(input),
            Self::Unknown => Err(unsupported()),
        }
    }

    /// Same as [`Operation::apply`] on a plain string.
    pub fn apply_str(&self, input: &str) -> Result<String> {
        match self {
            Self::Base64Encode => base64_encode(input),
            Self::Base64Decode => base64_decode(input),
            Self::UrlEncode => url_encode(input),
            Self::UrlDecode => url_decode(input),
            Self::Unknown => Err(unsupported()),
        }
    }
}
