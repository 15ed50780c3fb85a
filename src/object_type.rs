//! The closed set of object kinds a loose object can hold.

use crate::error::Error;

/// The kind of an object. Each variant has a lowercase ASCII name used in
/// on-disk headers; there is no default variant for an unknown name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// A commit object.
    Commit,
    /// A tree object.
    Tree,
    /// A blob (file content) object.
    Blob,
    /// A tag object.
    Tag,
}

impl ObjectType {
    /// The lowercase ASCII name used in object headers.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ObjectType::Commit => "commit",
            ObjectType::Tree => "tree",
            ObjectType::Blob => "blob",
            ObjectType::Tag => "tag",
        }
    }

    /// Parse a header type name. Unknown names are a decode error; there
    /// is no default.
    ///
    /// # Errors
    /// Returns [`Error::CorruptHeader`] if `name` is not one of the four
    /// recognized type names.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name {
            "commit" => Ok(ObjectType::Commit),
            "tree" => Ok(ObjectType::Tree),
            "blob" => Ok(ObjectType::Blob),
            "tag" => Ok(ObjectType::Tag),
            _ => Err(Error::CorruptHeader),
        }
    }

    /// Parse the 3-bit legacy type tag used in the legacy prefix byte
    /// (1=commit, 2=tree, 3=blob, 4=tag).
    ///
    /// # Errors
    /// Returns [`Error::CorruptHeader`] for any value outside `1..=4`.
    pub fn from_legacy_tag(tag: u8) -> Result<Self, Error> {
        match tag {
            1 => Ok(ObjectType::Commit),
            2 => Ok(ObjectType::Tree),
            3 => Ok(ObjectType::Blob),
            4 => Ok(ObjectType::Tag),
            _ => Err(Error::CorruptHeader),
        }
    }
}
