//! The canonical pre-image: `<type-name> SP <decimal-size> NUL <payload>`.
//!
//! This exact byte sequence is never materialized as its own type; its
//! SHA-1 defines an object's digest. This module builds the header half of
//! it for the writer, and parses it back out of inflated bytes for the
//! reader.

use crate::error::Error;
use crate::object_type::ObjectType;

/// Build the header `<type-name> SP <decimal-size> NUL`.
#[must_use]
pub fn build_header(kind: ObjectType, size: usize) -> Vec<u8> {
    let mut header = Vec::with_capacity(kind.name().len() + 1 + 20 + 1);
    header.extend_from_slice(kind.name().as_bytes());
    header.push(b' ');
    header.extend_from_slice(size.to_string().as_bytes());
    header.push(0);
    header
}

/// A successfully parsed header: its type, declared size, and the number
/// of header bytes consumed (so the caller can slice off the payload that
/// follows).
pub struct ParsedHeader {
    /// The object's type, as named in the header.
    pub kind: ObjectType,
    /// The declared payload size.
    pub size: usize,
    /// Number of bytes the header itself occupies, including the NUL.
    pub header_len: usize,
}

/// Parse `<type-name> SP <decimal-size> NUL` from the start of `buf`.
///
/// # Errors
/// Returns [`Error::CorruptHeader`] on a missing space or NUL, an empty or
/// unknown type name, a non-digit in the size, or a size with a leading
/// zero (other than the single digit `"0"`).
pub fn parse_header(buf: &[u8]) -> Result<ParsedHeader, Error> {
    let space = buf.iter().position(|&b| b == b' ').ok_or(Error::CorruptHeader)?;
    if space == 0 {
        return Err(Error::CorruptHeader);
    }
    let type_name = std::str::from_utf8(&buf[..space]).map_err(|_| Error::CorruptHeader)?;
    let kind = ObjectType::from_name(type_name)?;

    let rest = &buf[space + 1..];
    let nul = rest.iter().position(|&b| b == 0).ok_or(Error::CorruptHeader)?;
    let size_str = &rest[..nul];
    if size_str.is_empty() {
        return Err(Error::CorruptHeader);
    }
    if !size_str.iter().all(u8::is_ascii_digit) {
        return Err(Error::CorruptHeader);
    }
    if size_str.len() > 1 && size_str[0] == b'0' {
        return Err(Error::CorruptHeader);
    }
    let size_str = std::str::from_utf8(size_str).map_err(|_| Error::CorruptHeader)?;
    let size: usize = size_str.parse().map_err(|_| Error::CorruptHeader)?;

    Ok(ParsedHeader { kind, size, header_len: space + 1 + nul + 1 })
}
