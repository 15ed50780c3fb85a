//! Deterministic mapping from a digest to its on-disk path.
//!
//! `path_for(root, digest) = root / hex(digest[0]) / hex(digest[1..20])`.
//! Pure function: no I/O, no existence checks. The two-level fan-out keeps
//! per-directory entry counts bounded (256 first-level directories).

use std::path::{Path, PathBuf};

use crate::digest::Digest;

/// Compute the relative (fan-out) path for `digest` under `root`.
#[must_use]
pub fn path_for(root: &Path, digest: &Digest) -> PathBuf {
    let hex = digest.to_hex();
    let (shard, rest) = hex.split_at(2);
    root.join(shard).join(rest)
}

/// The fan-out shard directory (`root/XX`) that would hold `digest`.
#[must_use]
pub fn shard_dir_for(root: &Path, digest: &Digest) -> PathBuf {
    let hex = digest.to_hex();
    root.join(&hex[..2])
}
