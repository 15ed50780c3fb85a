//! Loose object writing: canonical pre-image construction, digest minting,
//! and atomic placement on disk.
//!
//! The writer only ever emits the current format; legacy format is
//! read-only support for historical objects (spec.md §4.F, §9).

use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::codec;
use crate::digest::Digest;
use crate::error::Error;
use crate::hasher::Hasher;
use crate::path::{path_for, shard_dir_for};
use crate::preimage::build_header;
use crate::raw_object::RawObject;

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Write `object` as a loose object under `root`, returning its digest.
///
/// If a file already exists at the destination path, this is a successful
/// no-op (content-addressability means the existing bytes are already the
/// answer) and the file is never overwritten. If `fsync` is set, the
/// temporary file's data is flushed to disk before the atomic rename.
///
/// # Errors
/// Returns [`Error::Io`] for any filesystem failure other than the target
/// already existing.
pub fn write_loose_object(root: &Path, object: &RawObject, fsync: bool) -> Result<Digest, Error> {
    let mut hasher = Hasher::new();
    let header = build_header(object.kind(), object.len());
    hasher.update(&header);
    hasher.update(object.payload());
    let digest = hasher.finalize();

    let final_path = path_for(root, &digest);
    if final_path.exists() {
        tracing::debug!(digest = %digest, "loose object already present, skipping write");
        return Ok(digest);
    }

    let shard_dir = shard_dir_for(root, &digest);
    fs::create_dir_all(&shard_dir)?;

    let mut preimage = header;
    preimage.extend_from_slice(object.payload());
    let compressed = codec::deflate(&preimage)?;

    let tmp_path = unique_tmp_path(&final_path);
    {
        let mut tmp = fs::File::create(&tmp_path)?;
        tmp.write_all(&compressed)?;
        if fsync {
            tmp.sync_all()?;
        }
    }

    match fs::rename(&tmp_path, &final_path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            let _ = fs::remove_file(&tmp_path);
            if !final_path.exists() {
                return Err(Error::Io(e));
            }
        }
        Err(e) => return Err(e.into()),
    }

    tracing::debug!(digest = %digest, bytes = object.len(), "wrote loose object");
    Ok(digest)
}

/// Build a sibling temporary path (`<final>.tmp-<unique>`) that does not
/// collide with any concurrent writer.
fn unique_tmp_path(final_path: &Path) -> std::path::PathBuf {
    let pid = std::process::id();
    let n = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut name = final_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".tmp-{pid}-{n}"));
    final_path.with_file_name(name)
}
