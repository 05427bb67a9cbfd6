use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub const MESSAGE_NOT_A_STRING: &str = "Input must be a string";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Base64Encode,
    Base64Decode,
    UrlEncode,
    UrlDecode,
    #[default]
    Unknown,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Base64Encode,
        Operation::Base64Decode,
        Operation::UrlEncode,
        Operation::UrlDecode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base64Encode => "base64Encode",
            Self::Base64Decode => "base64Decode",
            Self::UrlEncode => "urlEncode",
            Self::UrlDecode => "urlDecode",
            Self::Unknown => "unknown",
        }
    }

    fn failure_prefix(&self) -> &'static str {
        match self {
            Self::Base64Encode => "Base64 encoding failed",
            Self::Base64Decode => "Base64 decoding failed",
            Self::UrlEncode => "URL encoding failed",
            Self::UrlDecode => "URL decoding failed",
            Self::Unknown => "Operation failed",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the camelCase wire names and the kebab-case CLI spellings.
/// Anything else is `Unknown`.
impl FromStr for Operation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "base64Encode" | "base64-encode" => Self::Base64Encode,
            "base64Decode" | "base64-decode" => Self::Base64Decode,
            "urlEncode" | "url-encode" => Self::UrlEncode,
            "urlDecode" | "url-decode" => Self::UrlDecode,
            _ => Self::Unknown,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{operation}: {message}")]
pub struct EncodingError {
    operation: Operation,
    message: String,
}

pub type Result<T, E = EncodingError> = core::result::Result<T, E>;

impl EncodingError {
    pub fn new(operation: Operation, message: impl Into<String>) -> Self {
        let err = Self {
            operation,
            message: message.into(),
        };
        debug!(operation = %err.operation, message = %err.message, "encoding error is returned");
        err
    }

    pub fn not_a_string(operation: Operation) -> Self {
        Self::new(operation, MESSAGE_NOT_A_STRING)
    }

    /// Wraps a lower level failure as `"<Op> failed: <cause>"`.
    pub fn failed<E: fmt::Display>(operation: Operation, cause: E) -> Self {
        Self::new(
            operation,
            format!("{}: {}", operation.failure_prefix(), cause),
        )
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
