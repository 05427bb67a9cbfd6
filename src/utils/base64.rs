use base64::{
    alphabet,
    engine::{self, general_purpose, DecodePaddingMode},
    Engine,
};

/// Encodes with the standard alphabet and `=` padding, no line wrapping.
/// Decoding takes padded or unpadded input and ignores leftover low bits,
/// the same way browsers' `atob` does.
pub const BASE64: engine::GeneralPurpose = engine::GeneralPurpose::new(
    &alphabet::STANDARD,
    general_purpose::PAD
        .with_encode_padding(true)
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn encode<T: AsRef<[u8]>>(raw: T) -> String {
    BASE64.encode(raw)
}

pub fn decode<T: AsRef<[u8]>>(encoded: T) -> Result<Vec<u8>, base64::DecodeError> {
    BASE64.decode::<T>(encoded)
}
