//! Base64 alphabets used on the wire
//!
//! The server emits the URL-safe alphabet, a permutation of the standard one
//! that swaps `+`/`/` for `-`/`_`, with or without `=` padding. Clients and
//! older payloads sometimes carry the standard alphabet instead. Everything is
//! normalized to URL-safe before decoding.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use tracing::trace;

use crate::error::Result;

/// URL-safe engine that accepts missing padding and stray trailing bits
const LENIENT_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Base64 alphabet variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// RFC 4648 standard alphabet (`+`, `/`)
    Standard,
    /// RFC 4648 URL-safe alphabet (`-`, `_`)
    UrlSafe,
}

impl Alphabet {
    /// Rewrite `input` into this alphabet
    pub fn convert(self, input: &str) -> String {
        match self {
            Self::Standard => to_standard(input),
            Self::UrlSafe => to_url_safe(input),
        }
    }
}

/// Map standard alphabet characters onto the URL-safe alphabet
pub fn to_url_safe(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

/// Map URL-safe alphabet characters onto the standard alphabet
pub fn to_standard(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect()
}

/// Canonicalize a wire string for decoding
///
/// Strips surrounding whitespace and NUL bytes, drops `=` padding and maps
/// the standard alphabet onto the URL-safe one.
pub fn normalize(input: &str) -> String {
    let trimmed = input
        .trim_matches(|c: char| c.is_whitespace() || c == '\0')
        .trim_end_matches('=');
    to_url_safe(trimmed)
}

/// Decode a base64 payload in either alphabet, padded or not
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let normalized = normalize(input);
    trace!("Decoding {} base64 characters", normalized.len());
    Ok(LENIENT_URL_SAFE.decode(normalized)?)
}

/// Encode bytes with the URL-safe alphabet and padding, as the server expects
pub fn encode(data: &[u8]) -> String {
    URL_SAFE.encode(data)
}

/// Decode a base64 free-text field (descriptions, comment and request bodies)
pub fn decode_text(input: &str) -> Result<String> {
    Ok(String::from_utf8(decode(input)?)?)
}

/// Encode free text for an outgoing request
pub fn encode_text(input: &str) -> String {
    encode(input.as_bytes())
}
