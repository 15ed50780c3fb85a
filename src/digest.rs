//! 160-bit object identifiers.
//!
//! A [`Digest`] is the SHA-1 of an object's canonical pre-image
//! (`<type> SP <decimal-size> NUL <payload>`); it is the object's name and
//! storage key. [`AbbreviatedDigest`] parses the 1-40 character hex
//! prefixes higher layers may accept as shorthand for a full digest.

use crate::error::Error;

/// Number of bytes in a digest (SHA-1 output length).
pub const DIGEST_BYTES: usize = 20;

/// Number of hex characters in a full digest.
pub const DIGEST_HEX_LEN: usize = DIGEST_BYTES * 2;

/// An opaque 160-bit object identifier.
///
/// Equality is byte-wise. The full text form is 40 lowercase hex
/// characters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest([u8; DIGEST_BYTES]);

impl Digest {
    /// Wrap a raw 20-byte digest.
    #[must_use]
    pub fn from_bytes(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    /// Parse a full 40-character lowercase (or uppercase) hex digest.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDigestFormat`] if `s` is not exactly 40 hex
    /// characters.
    pub fn parse_hex(s: &str) -> Result<Self, Error> {
        if s.len() != DIGEST_HEX_LEN {
            return Err(Error::InvalidDigestFormat);
        }
        let mut out = [0u8; DIGEST_BYTES];
        hex::decode_to_slice(s, &mut out).map_err(|_| Error::InvalidDigestFormat)?;
        Ok(Self(out))
    }

    /// Format as 40 lowercase hex characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

/// A digest abbreviated to a 1-40 character hex prefix, as used by callers
/// that want to accept short ids the way a revision-parsing layer would
/// before resolving them against a full object database.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AbbreviatedDigest {
    bytes: [u8; DIGEST_BYTES],
    nibble_len: usize,
}

impl AbbreviatedDigest {
    /// Parse a 1-40 character hex prefix.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDigestFormat`] if `s` is empty, longer than
    /// 40 characters, or contains non-hex characters.
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s.is_empty() || s.len() > DIGEST_HEX_LEN {
            return Err(Error::InvalidDigestFormat);
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidDigestFormat);
        }
        let mut padded = s.to_ascii_lowercase();
        padded.push_str(&"0".repeat(DIGEST_HEX_LEN - s.len()));
        let mut bytes = [0u8; DIGEST_BYTES];
        hex::decode_to_slice(&padded, &mut bytes).map_err(|_| Error::InvalidDigestFormat)?;
        Ok(Self { bytes, nibble_len: s.len() })
    }

    /// The number of significant hex nibbles this abbreviation carries.
    #[must_use]
    pub fn nibble_len(&self) -> usize {
        self.nibble_len
    }

    /// Whether `full` shares this abbreviation's prefix.
    #[must_use]
    pub fn matches(&self, full: &Digest) -> bool {
        let full_hex = full.to_hex();
        let prefix_len = self.nibble_len;
        let mut prefix = hex::encode(self.bytes);
        prefix.truncate(prefix_len);
        full_hex[..prefix_len] == prefix
    }
}
