//! UTF-8 safe Base64 and percent-encoding helpers.
//!
//! ```
//! use textcodec::{base64_decode, base64_encode, url_encode, Operation};
//!
//! let encoded = base64_encode("こんにちは").unwrap();
//! assert_eq!(base64_decode(&encoded).unwrap(), "こんにちは");
//! assert_eq!(url_encode("a b/c?d").unwrap(), "a%20b%2Fc%3Fd");
//!
//! let err = textcodec::url_decode("100% done").unwrap_err();
//! assert_eq!(err.operation(), Operation::UrlDecode);
//! ```

pub mod codec;
pub mod config;
pub mod logging;
pub mod utils;

pub use codec::value::{
    base64_decode_value, base64_encode_value, is_valid_base64_value, safe_string_value,
    url_decode_value, url_encode_value,
};
pub use codec::{
    base64_decode, base64_encode, is_valid_base64, safe_string, url_decode, url_encode,
};
pub use utils::codec_error::{EncodingError, Operation, Result};
