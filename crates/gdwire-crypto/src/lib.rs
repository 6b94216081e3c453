//! Cipher and codec layer for Geometry Dash server payloads
//!
//! Several response fields are obfuscated sub-payloads rather than plain
//! values. This crate provides the reversible transforms needed to read them
//! and to build the matching outgoing values.
//!
//! # Components
//!
//! - **XOR**: repeating-key cipher, self-inverse ([`xor`])
//! - **Purposes**: one fixed key per semantic use ([`CipherPurpose`])
//! - **Alphabets**: standard/URL-safe base64 and wire normalization ([`alphabet`])
//! - **Compression**: gzip/zlib/DEFLATE level geometry ([`compression`])
//! - **Save data**: local account save files ([`save`])
//!
//! # Examples
//!
//! ```
//! use gdwire_crypto::{CipherPurpose, coder};
//!
//! let wire = coder::encode_str(CipherPurpose::LevelPassword, "1123456");
//! let plain = coder::decode_str(CipherPurpose::LevelPassword, &wire).expect("valid payload");
//! assert_eq!(plain, "1123456");
//! ```
//!
//! All functions are pure and operate on caller-owned buffers; the key tables
//! are `'static` constants, so everything here is safe to call from any thread.

#![warn(missing_docs)]

pub mod alphabet;
pub mod coder;
pub mod compression;
pub mod error;
pub mod keys;
pub mod save;
pub mod xor;

pub use error::{CodecError, Result};

// Re-export commonly used types
pub use compression::{DEFAULT_MAX_DECOMPRESSED_SIZE, unzip_level_data, zip_level_data};
pub use keys::CipherPurpose;
pub use xor::XorCipher;
