//! Local account save data
//!
//! Save files are gzip, then URL-safe base64, then every byte XORed with the
//! [`CipherPurpose::SaveData`] key. The game pads some files with NUL bytes
//! after the XOR step.

use tracing::debug;

use crate::alphabet;
use crate::compression::{deflate_gzip, inflate};
use crate::error::Result;
use crate::keys::CipherPurpose;

/// Decode raw save file bytes into the contained document
pub fn decode_save(data: &[u8], limit: usize) -> Result<String> {
    let mut text = CipherPurpose::SaveData.cipher().apply(data);
    // NUL padding XORs to the key byte; drop it along with real NULs
    while matches!(text.last(), Some(0 | 11)) {
        text.pop();
    }

    let encoded = String::from_utf8(text)?;
    let compressed = alphabet::decode(&encoded)?;
    let inflated = inflate(&compressed, limit)?;
    debug!("Save data inflated to {} bytes", inflated.len());
    Ok(String::from_utf8(inflated)?)
}

/// Encode a document into save file bytes
pub fn encode_save(document: &str) -> Result<Vec<u8>> {
    let compressed = deflate_gzip(document.as_bytes())?;
    let encoded = alphabet::encode(&compressed);
    Ok(CipherPurpose::SaveData.cipher().apply(encoded.as_bytes()))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::compression::DEFAULT_MAX_DECOMPRESSED_SIZE;
    use crate::error::CodecError;

    const DOCUMENT: &str = "<?xml version=\"1.0\"?><plist version=\"1.0\" gjver=\"2.0\"><dict><k>valueKeeper</k><d></d></dict></plist>";

    #[test]
    fn test_save_round_trip() {
        let bytes = encode_save(DOCUMENT).expect("Test operation should succeed");
        let decoded =
            decode_save(&bytes, DEFAULT_MAX_DECOMPRESSED_SIZE).expect("Test operation should succeed");
        assert_eq!(decoded, DOCUMENT);
    }

    #[test]
    fn test_save_tolerates_nul_padding() {
        let mut bytes = encode_save(DOCUMENT).expect("Test operation should succeed");
        bytes.extend_from_slice(&[0, 0, 0]);
        let decoded =
            decode_save(&bytes, DEFAULT_MAX_DECOMPRESSED_SIZE).expect("Test operation should succeed");
        assert_eq!(decoded, DOCUMENT);
    }

    #[test]
    fn test_save_is_obfuscated() {
        let bytes = encode_save(DOCUMENT).expect("Test operation should succeed");
        // XOR 11 turns the gzip "H4sI" prefix into "C?xB"
        assert_eq!(&bytes[..4], b"C?xB");
    }

    #[test]
    fn test_corrupt_save_is_an_error() {
        // Complete gzip header followed by a reserved DEFLATE block type
        let gzip = [0x1f, 0x8b, 0x08, 0x00, 0, 0, 0, 0, 0x00, 0xff, 0xff, 0xff, 0xff];
        let bytes = CipherPurpose::SaveData
            .cipher()
            .apply(alphabet::encode(&gzip).as_bytes());
        assert!(matches!(
            decode_save(&bytes, DEFAULT_MAX_DECOMPRESSED_SIZE),
            Err(CodecError::Decompression(_))
        ));
    }
}
