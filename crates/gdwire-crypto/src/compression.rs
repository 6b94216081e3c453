//! Level geometry compression
//!
//! Level data travels as URL-safe base64 over a compressed stream. The game
//! writes gzip, but older uploads carry zlib or raw DEFLATE, so inflation
//! sniffs the header before choosing a decoder.

use flate2::Compression;
use flate2::read::{DeflateDecoder, GzDecoder, GzEncoder, ZlibDecoder};
use std::io::Read;
use tracing::{debug, trace};

use crate::alphabet;
use crate::error::{CodecError, Result};

/// Default ceiling for inflated output (64 MiB)
///
/// Guards against compression bombs; the largest published levels inflate to
/// a few megabytes.
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: usize = 64 * 1024 * 1024;

/// Stream container detected from the leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamFormat {
    /// gzip member (`1f 8b`)
    Gzip,
    /// zlib wrapper (valid CMF/FLG pair)
    Zlib,
    /// Headerless DEFLATE
    Raw,
}

impl StreamFormat {
    /// Detect the container of a compressed payload
    pub fn detect(data: &[u8]) -> Self {
        match data {
            [0x1f, 0x8b, ..] => Self::Gzip,
            [cmf, flg, ..]
                if cmf & 0x0f == 8 && (u16::from(*cmf) << 8 | u16::from(*flg)) % 31 == 0 =>
            {
                Self::Zlib
            }
            _ => Self::Raw,
        }
    }
}

/// Inflate `data`, refusing to produce more than `limit` bytes
pub fn inflate(data: &[u8], limit: usize) -> Result<Vec<u8>> {
    let format = StreamFormat::detect(data);
    trace!("Inflating {} bytes as {:?}", data.len(), format);

    match format {
        StreamFormat::Gzip => read_limited(GzDecoder::new(data), limit),
        StreamFormat::Zlib => read_limited(ZlibDecoder::new(data), limit),
        StreamFormat::Raw => read_limited(DeflateDecoder::new(data), limit),
    }
}

/// Compress `data` into a gzip member
pub fn deflate_gzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(data, Compression::default());
    let mut compressed = Vec::new();
    encoder
        .read_to_end(&mut compressed)
        .map_err(|e| CodecError::Compression(format!("gzip compression failed: {e}")))?;
    Ok(compressed)
}

/// Decode a level data field
///
/// An absent field is `Ok(None)`: the server simply did not send geometry.
/// A present field that fails to decode at any step is an error.
pub fn unzip_level_data(field: Option<&str>, limit: usize) -> Result<Option<String>> {
    let Some(encoded) = field else {
        return Ok(None);
    };

    let compressed = alphabet::decode(encoded)?;
    let inflated = inflate(&compressed, limit)?;
    debug!(
        "Level data inflated from {} to {} bytes",
        compressed.len(),
        inflated.len()
    );
    Ok(Some(String::from_utf8(inflated)?))
}

/// Encode level data for upload: gzip, then URL-safe base64
pub fn zip_level_data(data: &str) -> Result<String> {
    let compressed = deflate_gzip(data.as_bytes())?;
    Ok(alphabet::encode(&compressed))
}

fn read_limited<R: Read>(mut decoder: R, limit: usize) -> Result<Vec<u8>> {
    let mut decompressed = Vec::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = decoder
            .read(&mut buffer)
            .map_err(|e| CodecError::Decompression(e.to_string()))?;

        if bytes_read == 0 {
            break;
        }

        if decompressed.len() + bytes_read > limit {
            return Err(CodecError::SizeLimit { limit });
        }

        decompressed.extend_from_slice(&buffer[..bytes_read]);
    }

    Ok(decompressed)
}
