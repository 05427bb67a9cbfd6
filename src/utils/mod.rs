pub mod base64;
pub mod codec_error;
pub mod percent;
