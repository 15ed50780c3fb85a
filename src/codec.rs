//! Deflate/zlib framing for loose objects.
//!
//! [`deflate`] compresses a whole buffer at the default level (zlib level
//! 6); [`inflate_bounded`] decompresses a stream into a buffer bounded by
//! an optional cap, and treats any bytes left over after the zlib stream
//! ends as corruption (a loose object file holds exactly one stream).

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::Error;

const READ_CHUNK: usize = 8 * 1024;

/// Compress `data` into a zlib-framed deflate stream at the default
/// compression level. Deterministic for a given input and flate2 version;
/// bit-exactness across unrelated implementations is not guaranteed or
/// required.
///
/// # Errors
/// Returns [`Error::Io`] if the in-memory encoder fails, which only
/// happens on allocation failure.
pub fn deflate(data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2 + 16), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Decompress a zlib-framed deflate stream, growing the output buffer as
/// needed up to `cap` bytes (`None` means unbounded).
///
/// # Errors
/// Returns [`Error::CorruptCompression`] if the stream is truncated, fails
/// its checksum, exceeds `cap`, or has trailing bytes after the stream
/// ends.
pub fn inflate_bounded(compressed: &[u8], cap: Option<usize>) -> Result<Vec<u8>, Error> {
    let cap = cap.unwrap_or(usize::MAX);
    let mut decoder = ZlibDecoder::new(compressed);
    let mut out = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        let n = decoder.read(&mut chunk).map_err(|_| Error::CorruptCompression)?;
        if n == 0 {
            break;
        }
        if out.len().saturating_add(n) > cap {
            return Err(Error::CorruptCompression);
        }
        out.extend_from_slice(&chunk[..n]);
    }
    if decoder.total_in() != compressed.len() as u64 {
        return Err(Error::CorruptCompression);
    }
    Ok(out)
}

/// Returns true when `first_two_bytes` look like the header of a current
/// format zlib stream: the method byte is `0x78` and the 16-bit header
/// value is a multiple of 31 (the zlib header checksum).
///
/// This is a necessary but not sufficient test; a caller should still
/// attempt a real inflate and digest check before committing to the
/// current-format interpretation (see [`crate::reader::decode_loose_object`]).
#[must_use]
pub fn looks_like_current_format(b0: u8, b1: u8) -> bool {
    b0 == 0x78 && (u16::from(b0) << 8 | u16::from(b1)) % 31 == 0
}
