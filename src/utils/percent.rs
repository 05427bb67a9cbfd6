use percent_encoding::{percent_decode_str, percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
pub const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedEscape {
    pub offset: usize,
}

impl fmt::Display for MalformedEscape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed percent escape at byte {}", self.offset)
    }
}

impl std::error::Error for MalformedEscape {}

pub fn encode(raw: &[u8]) -> String {
    percent_encode(raw, COMPONENT).to_string()
}

/// Unlike `percent_decode_str`, a `%` that does not start a two hex digit
/// escape is an error instead of being passed through.
pub fn decode(encoded: &str) -> Result<Vec<u8>, MalformedEscape> {
    let bytes = encoded.as_bytes();
    for (offset, _) in encoded.match_indices('%') {
        let well_formed = bytes
            .get(offset + 1..offset + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(MalformedEscape { offset });
        }
    }
    Ok(percent_decode_str(encoded).collect())
}
