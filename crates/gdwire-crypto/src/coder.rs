//! Purpose-keyed field codec
//!
//! Decoding a ciphered field is normalize → base64 → XOR with the purpose key.
//! Encoding runs the same steps backwards and always emits the URL-safe
//! alphabet with padding.

use tracing::trace;

use crate::alphabet;
use crate::error::Result;
use crate::keys::CipherPurpose;

/// Encode raw bytes for `purpose`
pub fn encode(purpose: CipherPurpose, plain: &[u8]) -> String {
    let ciphered = purpose.cipher().apply(plain);
    alphabet::encode(&ciphered)
}

/// Decode a wire string for `purpose` into raw bytes
pub fn decode(purpose: CipherPurpose, encoded: &str) -> Result<Vec<u8>> {
    trace!("Decoding {} field of {} chars", purpose, encoded.len());
    let mut bytes = alphabet::decode(encoded)?;
    purpose.cipher().apply_in_place(&mut bytes);
    Ok(bytes)
}

/// Encode a text value for `purpose`
pub fn encode_str(purpose: CipherPurpose, plain: &str) -> String {
    encode(purpose, plain.as_bytes())
}

/// Decode a wire string for `purpose` into text
pub fn decode_str(purpose: CipherPurpose, encoded: &str) -> Result<String> {
    Ok(String::from_utf8(decode(purpose, encoded)?)?)
}
