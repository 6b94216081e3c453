//! Error types for codec operations

use thiserror::Error;

/// Errors that can occur while decoding or encoding obfuscated payloads
#[derive(Debug, Error)]
pub enum CodecError {
    /// Payload is not valid base64 after normalization
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes are not valid UTF-8
    #[error("Decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Compressed stream is corrupt or truncated
    #[error("Decompression failed: {0}")]
    Decompression(String),

    /// Compression failed
    #[error("Compression failed: {0}")]
    Compression(String),

    /// Decompressed output grew past the configured ceiling
    #[error("Decompressed size exceeds limit of {limit} bytes")]
    SizeLimit {
        /// Configured ceiling in bytes
        limit: usize,
    },
}

/// Result alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
