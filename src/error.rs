//! Error taxonomy for the loose object store.
//!
//! Mirrors the failure kinds a reimplementation is required to surface
//! distinctly: callers can match on [`Error::kind`] without destructuring
//! the [`Error`] itself, and [`ErrorKind::message`] gives the stable,
//! non-localized string a binding layer would expose through a C-style
//! "error code to message" function.

use std::io;

/// Error returned by every fallible operation in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested digest has no file under the store.
    #[error("object not found")]
    NotFound,
    /// A filesystem operation (open, read, write, rename, mkdir, fsync) failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// The deflate/zlib stream failed to decode, or had trailing bytes.
    #[error("corrupt compression stream")]
    CorruptCompression,
    /// The type/size header was malformed.
    #[error("corrupt object header")]
    CorruptHeader,
    /// The declared size disagreed with the inflated payload length.
    #[error("size mismatch between header and payload")]
    SizeMismatch,
    /// The recomputed digest did not match the requested one.
    #[error("digest mismatch")]
    DigestMismatch,
    /// A caller-supplied digest string was not valid hex of the expected length.
    #[error("invalid digest format")]
    InvalidDigestFormat,
    /// A caller passed a null/empty required argument.
    #[error("invalid argument")]
    InvalidArgument,
}

/// Unit-only mirror of [`Error`]'s variants, for callers that want to
/// branch on the failure kind without matching the full error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`Error::NotFound`].
    NotFound,
    /// See [`Error::Io`].
    Io,
    /// See [`Error::CorruptCompression`].
    CorruptCompression,
    /// See [`Error::CorruptHeader`].
    CorruptHeader,
    /// See [`Error::SizeMismatch`].
    SizeMismatch,
    /// See [`Error::DigestMismatch`].
    DigestMismatch,
    /// See [`Error::InvalidDigestFormat`].
    InvalidDigestFormat,
    /// See [`Error::InvalidArgument`].
    InvalidArgument,
}

impl Error {
    /// Returns the unit-only kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound => ErrorKind::NotFound,
            Error::Io(_) => ErrorKind::Io,
            Error::CorruptCompression => ErrorKind::CorruptCompression,
            Error::CorruptHeader => ErrorKind::CorruptHeader,
            Error::SizeMismatch => ErrorKind::SizeMismatch,
            Error::DigestMismatch => ErrorKind::DigestMismatch,
            Error::InvalidDigestFormat => ErrorKind::InvalidDigestFormat,
            Error::InvalidArgument => ErrorKind::InvalidArgument,
        }
    }
}

impl ErrorKind {
    /// Stable, non-localized, non-ABI English message for this kind.
    ///
    /// This is the pure helper spec.md §6 asks every implementation to
    /// expose, so that an external binding layer has a fixed code-to-string
    /// mapping independent of whichever `Display` text `Error` carries.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "object not found",
            ErrorKind::Io => "io error",
            ErrorKind::CorruptCompression => "corrupt compression stream",
            ErrorKind::CorruptHeader => "corrupt object header",
            ErrorKind::SizeMismatch => "size mismatch between header and payload",
            ErrorKind::DigestMismatch => "digest mismatch",
            ErrorKind::InvalidDigestFormat => "invalid digest format",
            ErrorKind::InvalidArgument => "invalid argument",
        }
    }
}
