//! Stateless text codecs: Base64 over UTF-8 bytes and percent-encoding.
//!
//! Every function is a pure transformation of one string into another and
//! is safe to call from any number of threads.

pub mod value;

use crate::utils::codec_error::{EncodingError, Operation, Result};
use crate::utils::{base64, percent};
use regex::Regex;
use std::sync::LazyLock;

static BASE64_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$")
        .expect("base64 pattern is a valid regex")
});

/// UTF-8 bytes of `text`, Base64 encoded with the standard padded alphabet.
pub fn base64_encode(text: &str) -> Result<String> {
    Ok(base64::encode(text.as_bytes()))
}

/// Fails on characters outside the alphabet, bad padding, or bytes that
/// are not UTF-8.
pub fn base64_decode(text: &str) -> Result<String> {
    let bytes = base64::decode(text)
        .map_err(|e| EncodingError::failed(Operation::Base64Decode, e))?;
    String::from_utf8(bytes).map_err(|e| EncodingError::failed(Operation::Base64Decode, e))
}

pub fn url_encode(text: &str) -> Result<String> {
    Ok(percent::encode(text.as_bytes()))
}

pub fn url_decode(text: &str) -> Result<String> {
    let bytes =
        percent::decode(text).map_err(|e| EncodingError::failed(Operation::UrlDecode, e))?;
    String::from_utf8(bytes).map_err(|e| EncodingError::failed(Operation::UrlDecode, e))
}

/// Syntax check only. The empty string passes, and nothing is decoded.
pub fn is_valid_base64(text: &str) -> bool {
    BASE64_PATTERN.is_match(text)
}

pub fn safe_string(text: Option<&str>) -> String {
    text.unwrap_or_default().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLES: &[&str] = &[
        "",
        "a",
        " ",
        "Hello, world! こんにちは世界",
        "emoji 🦀🚀 and ñ",
        "reserved :/?#[]@!$&'()*+,;=",
        "unreserved AZaz09-_.!~*'()",
        "100% sure",
        "line\nbreak\ttab\0nul",
    ];

    #[test]
    fn test_base64_round_trip() {
        for s in SAMPLES {
            let encoded = base64_encode(s).unwrap();
            assert!(is_valid_base64(&encoded), "{encoded}");
            assert!(!encoded.contains('\n'));
            assert_eq!(base64_decode(&encoded).unwrap(), *s);
        }
    }

    #[test]
    fn test_url_round_trip() {
        for s in SAMPLES {
            let encoded = url_encode(s).unwrap();
            assert!(encoded.is_ascii());
            assert_eq!(url_decode(&encoded).unwrap(), *s);
        }
    }

    #[test]
    fn test_hello_world_base64() {
        let original = "Hello, world! こんにちは世界";
        let encoded = base64_encode(original).unwrap();
        assert_eq!(encoded, "SGVsbG8sIHdvcmxkISDjgZPjgpPjgavjgaHjga/kuJbnlYw=");
        assert_eq!(base64_decode(&encoded).unwrap(), original);
    }

    #[test]
    fn test_url_encode_scenario() {
        let encoded = url_encode("a b/c?d").unwrap();
        assert_eq!(encoded, "a%20b%2Fc%3Fd");
        assert_eq!(url_decode(&encoded).unwrap(), "a b/c?d");
    }

    #[test_log::test]
    fn test_base64_decode_malformed() {
        for input in ["not-valid-base64!!", "Y", "YW=j", "Y===", "YWJj\n"] {
            let err = base64_decode(input).unwrap_err();
            assert_eq!(err.operation(), Operation::Base64Decode, "{input}");
            assert!(err.message().starts_with("Base64 decoding failed: "));
        }
    }

    #[test]
    fn test_base64_decode_accepts_unpadded_and_trailing_bits() {
        assert_eq!(base64_decode("YR==").unwrap(), "a");
        assert_eq!(base64_decode("YQ").unwrap(), "a");
        assert_eq!(base64_decode("YWI").unwrap(), "ab");
        assert!(is_valid_base64("YR=="));
    }

    #[test]
    fn test_base64_decode_not_utf8() {
        // 0xff 0xfe
        let err = base64_decode("//4=").unwrap_err();
        assert_eq!(err.operation(), Operation::Base64Decode);
    }

    #[test_log::test]
    fn test_url_decode_malformed() {
        let err = url_decode("100% done").unwrap_err();
        assert_eq!(err.operation(), Operation::UrlDecode);
        assert!(err.message().starts_with("URL decoding failed: "));

        // lone continuation byte
        let err = url_decode("%80").unwrap_err();
        assert_eq!(err.operation(), Operation::UrlDecode);
    }

    #[test]
    fn test_url_decode_pass_through() {
        assert_eq!(url_decode("a+b c").unwrap(), "a+b c");
        assert_eq!(url_decode("%e3%81%93").unwrap(), "こ");
        assert_eq!(url_decode("日本").unwrap(), "日本");
    }

    #[test]
    fn test_is_valid_base64() {
        assert!(is_valid_base64(""));
        assert!(is_valid_base64("YWJj"));
        assert!(is_valid_base64("YQ=="));
        assert!(is_valid_base64("YWI="));
        assert!(is_valid_base64("+/+/"));
        // syntax only, nothing is decoded
        assert!(is_valid_base64("YR=="));
        assert!(!is_valid_base64("abc"));
        assert!(!is_valid_base64("YQ"));
        assert!(!is_valid_base64("Y==="));
        assert!(!is_valid_base64("YWJj\n"));
        assert!(!is_valid_base64("-_-_"));
    }

    #[test]
    fn test_safe_string() {
        assert_eq!(safe_string(None), "");
        assert_eq!(safe_string(Some("")), "");
        assert_eq!(safe_string(Some("x")), "x");
        assert_eq!(safe_string(Some(" ")), " ");
    }

    proptest! {
        #[test]
        fn test_round_trips_any_text(s in any::<String>()) {
            let encoded = base64_encode(&s).unwrap();
            prop_assert!(is_valid_base64(&encoded));
            prop_assert_eq!(base64_decode(&encoded).unwrap(), s.clone());
            prop_assert_eq!(url_decode(&url_encode(&s).unwrap()).unwrap(), s);
        }
    }
}
