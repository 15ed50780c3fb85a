//! Loose object decoding: format auto-detection, header parsing, and
//! digest verification.
//!
//! This module is pure (no I/O): it takes the full bytes already read from
//! a loose object file and the digest the caller asked for, and either
//! returns a verified [`RawObject`] or a specific corruption error.
//! [`crate::store::StoreHandle`] is the I/O-performing caller.

use crate::codec;
use crate::digest::Digest;
use crate::error::Error;
use crate::hasher::Hasher;
use crate::legacy;
use crate::preimage;
use crate::raw_object::RawObject;

/// Decode a loose object's on-disk bytes, auto-detecting current vs.
/// legacy format, and verify that the canonical pre-image's SHA-1 matches
/// `requested`.
///
/// `max_inflate` bounds the inflated buffer size; `None` means unbounded.
///
/// # Errors
/// Returns [`Error::CorruptCompression`] on a truncated, checksum-failing,
/// or trailing-garbage deflate stream; [`Error::CorruptHeader`] on a
/// malformed type/size header or legacy prefix; [`Error::SizeMismatch`] if
/// the declared size disagrees with the inflated payload length; and
/// [`Error::DigestMismatch`] if the recomputed digest disagrees with
/// `requested`.
pub fn decode_loose_object(
    data: &[u8],
    requested: &Digest,
    max_inflate: Option<usize>,
) -> Result<RawObject, Error> {
    let b0 = *data.first().ok_or(Error::CorruptCompression)?;
    let b1 = *data.get(1).ok_or(Error::CorruptCompression)?;

    if codec::looks_like_current_format(b0, b1) {
        decode_current_format(data, requested, max_inflate)
    } else {
        decode_legacy_format(data, requested, max_inflate)
    }
}

/// Current format: the entire file is one zlib stream whose inflated
/// bytes are the canonical pre-image (`<type> SP <size> NUL <payload>`).
fn decode_current_format(
    data: &[u8],
    requested: &Digest,
    max_inflate: Option<usize>,
) -> Result<RawObject, Error> {
    let inflated = codec::inflate_bounded(data, max_inflate)?;
    let header = preimage::parse_header(&inflated)?;
    let payload = inflated.get(header.header_len..).ok_or(Error::CorruptHeader)?;
    if payload.len() != header.size {
        return Err(Error::SizeMismatch);
    }

    let digest = Hasher::digest_of(&inflated);
    if digest != *requested {
        return Err(Error::DigestMismatch);
    }

    Ok(RawObject::new(header.kind, payload.to_vec()))
}

/// Legacy format: a 1+ byte plaintext prefix encoding type and size,
/// followed by a zlib stream whose inflated bytes are the payload only.
/// The canonical pre-image is reconstructed for digest verification.
fn decode_legacy_format(
    data: &[u8],
    requested: &Digest,
    max_inflate: Option<usize>,
) -> Result<RawObject, Error> {
    let prefix = legacy::decode_legacy_prefix(data)?;
    let compressed = data.get(prefix.prefix_len..).ok_or(Error::CorruptHeader)?;
    let payload = codec::inflate_bounded(compressed, max_inflate)?;
    if payload.len() != prefix.size {
        return Err(Error::SizeMismatch);
    }

    let mut hasher = Hasher::new();
    hasher.update(&preimage::build_header(prefix.kind, prefix.size));
    hasher.update(&payload);
    let digest = hasher.finalize();
    if digest != *requested {
        return Err(Error::DigestMismatch);
    }

    Ok(RawObject::new(prefix.kind, payload))
}
