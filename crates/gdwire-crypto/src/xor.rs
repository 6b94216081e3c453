//! Repeating-key XOR cipher
//!
//! Every obfuscated field the server emits is combined byte-wise with a short
//! repeating key. XOR is self-inverse, so the same [`XorCipher`] both encodes
//! and decodes.
//!
//! ```rust
//! use gdwire_crypto::xor::XorCipher;
//!
//! let cipher = XorCipher::new(b"26364");
//! let hidden = cipher.apply(b"123456");
//! assert_eq!(cipher.apply(&hidden), b"123456");
//! ```

/// XOR cipher over a fixed repeating key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorCipher<'k> {
    key: &'k [u8],
}

impl<'k> XorCipher<'k> {
    /// Create a cipher over `key`. An empty key leaves data unchanged.
    pub const fn new(key: &'k [u8]) -> Self {
        Self { key }
    }

    /// Key material this cipher repeats
    pub const fn key(&self) -> &'k [u8] {
        self.key
    }

    /// Return a transformed copy of `data`
    pub fn apply(&self, data: &[u8]) -> Vec<u8> {
        let mut out = data.to_vec();
        self.apply_in_place(&mut out);
        out
    }

    /// Transform `data` in place
    pub fn apply_in_place(&self, data: &mut [u8]) {
        if self.key.is_empty() {
            return;
        }

        for (byte, k) in data.iter_mut().zip(self.key.iter().cycle()) {
            *byte ^= k;
        }
    }
}
