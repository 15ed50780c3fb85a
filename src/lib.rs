//! A content-addressed, SHA-1 based, git-compatible loose object database.
//!
//! An object is identified by the SHA-1 of its canonical pre-image
//! (`<type> SP <decimal-size> NUL <payload>`) and stored under a two-level
//! fan-out directory (`root/aa/bb..`). Two on-disk encodings are
//! understood on read — the current single-zlib-stream format, and the
//! legacy plaintext-prefix format predating it — but only the current
//! format is ever written.
//!
//! ```no_run
//! use loose_odb::{ObjectType, RawObject, StoreHandle};
//!
//! # fn main() -> Result<(), loose_odb::Error> {
//! let store = StoreHandle::open("/tmp/objects")?;
//! let object = RawObject::new(ObjectType::Blob, b"hello world".to_vec());
//! let digest = store.write(&object)?;
//! let round_tripped = store.read(&digest)?;
//! assert_eq!(round_tripped, object);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod codec;
mod digest;
mod error;
mod hasher;
mod legacy;
mod object_type;
mod observer;
mod path;
mod preimage;
mod raw_object;
mod reader;
mod store;
mod writer;

pub use digest::{AbbreviatedDigest, Digest, DIGEST_BYTES, DIGEST_HEX_LEN};
pub use error::{Error, ErrorKind};
pub use hasher::Hasher;
pub use object_type::ObjectType;
pub use observer::{observer, set_observer, StoreObserver};
pub use path::{path_for, shard_dir_for};
pub use raw_object::RawObject;
pub use reader::decode_loose_object;
pub use store::{StoreHandle, StoreOptions};
pub use writer::write_loose_object;
