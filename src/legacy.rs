//! Legacy loose-object prefix decoding.
//!
//! Two historical encodings exist because an earlier git release
//! accidentally wrote object headers outside the compressed stream. The
//! legacy format begins with 1 or more plaintext bytes that encode the
//! object's type and size, immediately followed by a deflate stream whose
//! inflated bytes are the payload *only* (no header inside the stream).
//!
//! Bit layout of the prefix, resolved against the actual fixtures in
//! `original_source` rather than spec.md's prose (see `DESIGN.md`): bit 7
//! of each prefix byte is a continuation flag; bits 6-4 of the first byte
//! are the 3-bit type tag (1=commit, 2=tree, 3=blob, 4=tag); bits 3-0 of
//! the first byte are the low 4 bits of the size; each continuation byte
//! contributes 7 more size bits (masked `0x7f`) at shifts of 4, 11, 18, ...

use crate::error::Error;
use crate::object_type::ObjectType;

/// A safety bound on how many continuation bytes we'll read before
/// treating the encoding as ambiguous. 9 bytes covers a 60-bit size,
/// far beyond any object this store will ever hold; anything longer is
/// almost certainly corruption, not a legitimately huge object, and
/// spec.md's Open Question says to treat that ambiguity as an error
/// rather than guess.
const MAX_PREFIX_BYTES: usize = 9;

/// A decoded legacy prefix: the object's type, its declared size, and how
/// many bytes of `buf` the prefix itself occupied.
pub struct LegacyPrefix {
    /// The object's type.
    pub kind: ObjectType,
    /// The declared payload size.
    pub size: usize,
    /// Number of prefix bytes consumed (1 or more).
    pub prefix_len: usize,
}

/// Decode the legacy type+size prefix at the start of `buf`.
///
/// # Errors
/// Returns [`Error::CorruptHeader`] if `buf` is empty, the type tag is
/// outside `1..=4`, the prefix runs past the end of `buf`, the
/// continuation chain exceeds [`MAX_PREFIX_BYTES`], or the accumulated
/// size overflows.
pub fn decode_legacy_prefix(buf: &[u8]) -> Result<LegacyPrefix, Error> {
    let &b0 = buf.first().ok_or(Error::CorruptHeader)?;
    let tag = (b0 >> 4) & 0x7;
    let kind = ObjectType::from_legacy_tag(tag)?;

    let mut size: usize = (b0 & 0x0f) as usize;
    let mut shift: u32 = 4;
    let mut more = b0 & 0x80 != 0;
    let mut idx = 1usize;

    while more {
        if idx >= MAX_PREFIX_BYTES {
            return Err(Error::CorruptHeader);
        }
        let &b = buf.get(idx).ok_or(Error::CorruptHeader)?;
        let contribution = usize::from(b & 0x7f)
            .checked_shl(shift)
            .ok_or(Error::CorruptHeader)?;
        size = size.checked_add(contribution).ok_or(Error::CorruptHeader)?;
        shift += 7;
        more = b & 0x80 != 0;
        idx += 1;
    }

    Ok(LegacyPrefix { kind, size, prefix_len: idx })
}
