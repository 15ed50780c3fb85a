//! The store's front door: [`StoreHandle`] ties the fan-out path mapping,
//! the reader, and the writer together into a small synchronous,
//! blocking API, the way the teacher's `BlobStore<K>` does for its own
//! object kind (§4.H).

use std::fs;
use std::path::{Path, PathBuf};

use crate::digest::Digest;
use crate::error::Error;
use crate::observer;
use crate::path::path_for;
use crate::raw_object::RawObject;
use crate::reader::decode_loose_object;
use crate::writer::write_loose_object;

/// Tunables for a [`StoreHandle`].
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    /// Whether writes are fsynced before the atomic rename. Defaults to
    /// `true`; disabling this trades durability for throughput, mirroring
    /// the teacher's `Config` knobs.
    pub fsync: bool,
    /// Upper bound on inflated object size, guarding against decompression
    /// bombs when reading untrusted data. `None` means unbounded.
    pub max_inflate_bytes: Option<usize>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { fsync: true, max_inflate_bytes: None }
    }
}

/// A handle onto a loose object database rooted at a single directory.
///
/// Holds no open file descriptors between calls; every [`StoreHandle::read`]
/// and [`StoreHandle::write`] is a self-contained filesystem operation, so
/// cloning the root path is cheap and handles may be freely shared across
/// threads.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    root: PathBuf,
    options: StoreOptions,
}

impl StoreHandle {
    /// Open a store rooted at `root` with default options.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `root` is empty, and
    /// [`Error::Io`] if `root` does not exist or is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, Error> {
        Self::open_with(root, StoreOptions::default())
    }

    /// Open a store rooted at `root` with explicit `options`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `root` is empty, and
    /// [`Error::Io`] if `root` does not exist or is not a directory.
    pub fn open_with(root: impl Into<PathBuf>, options: StoreOptions) -> Result<Self, Error> {
        let root = root.into();
        if root.as_os_str().is_empty() {
            return Err(Error::InvalidArgument);
        }
        let metadata = fs::metadata(&root)?;
        if !metadata.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "store root is not a directory",
            )));
        }
        tracing::debug!(root = %root.display(), "opened loose object store");
        Ok(Self { root, options })
    }

    /// The store's root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read and verify the object named by `digest`.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if no file exists at the fan-out path,
    /// and the decode errors documented on
    /// [`crate::reader::decode_loose_object`] for a present-but-corrupt
    /// file.
    pub fn read(&self, digest: &Digest) -> Result<RawObject, Error> {
        let span = tracing::debug_span!("store_read", digest = %digest);
        let _guard = span.enter();

        let path = path_for(&self.root, digest);
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(Error::NotFound),
            Err(e) => return Err(e.into()),
        };

        match decode_loose_object(&data, digest, self.options.max_inflate_bytes) {
            Ok(object) => {
                observer::observer().object_read(digest, object.len());
                Ok(object)
            }
            Err(e @ (Error::DigestMismatch | Error::SizeMismatch | Error::CorruptHeader | Error::CorruptCompression)) => {
                observer::observer().corruption_detected(digest);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Check whether an object is present without reading or verifying it.
    #[must_use]
    pub fn contains(&self, digest: &Digest) -> bool {
        path_for(&self.root, digest).is_file()
    }

    /// Write `object`, returning the digest it was stored under.
    ///
    /// # Errors
    /// Returns [`Error::Io`] on any filesystem failure.
    pub fn write(&self, object: &RawObject) -> Result<Digest, Error> {
        let span = tracing::debug_span!("store_write");
        let _guard = span.enter();

        let existed_before = {
            let header = crate::preimage::build_header(object.kind(), object.len());
            let mut hasher = crate::hasher::Hasher::new();
            hasher.update(&header);
            hasher.update(object.payload());
            self.contains(&hasher.finalize())
        };

        let digest = write_loose_object(&self.root, object, self.options.fsync)?;
        observer::observer().object_written(&digest, object.len(), existed_before);
        Ok(digest)
    }

    /// Release any resources held by this handle.
    ///
    /// There are none to release today (no file descriptors or caches are
    /// kept between calls); this exists so callers have a single,
    /// forward-compatible lifecycle method to call at shutdown.
    pub fn close(self) {}
}
