//! Optional telemetry hook for store operations.
//!
//! Mirrors the teacher's `BlobStoreObserver`: a trait with no-op default
//! methods, registered once globally via [`OnceLock`], so that embedding
//! applications can observe reads/writes without the store itself taking a
//! hard dependency on any particular metrics backend.

use std::sync::OnceLock;

use crate::digest::Digest;

/// Observes [`crate::store::StoreHandle`] activity.
///
/// All methods have no-op default implementations; implement only the
/// ones you care about.
pub trait StoreObserver: Send + Sync {
    /// Called after a successful read, with the object's payload size.
    fn object_read(&self, _digest: &Digest, _bytes: usize) {}

    /// Called after a successful write, with the object's payload size.
    /// `deduplicated` is `true` when the object already existed on disk.
    fn object_written(&self, _digest: &Digest, _bytes: usize, _deduplicated: bool) {}

    /// Called whenever a read fails digest or structural verification.
    fn corruption_detected(&self, _digest: &Digest) {}
}

struct NoopObserver;

impl StoreObserver for NoopObserver {}

static OBSERVER: OnceLock<Box<dyn StoreObserver>> = OnceLock::new();

/// Register the global observer. Only the first call takes effect; later
/// calls are ignored, matching [`OnceLock`]'s set-once semantics.
pub fn set_observer(observer: Box<dyn StoreObserver>) {
    let _ = OBSERVER.set(observer);
}

/// The currently registered observer, or a no-op default if none was set.
pub fn observer() -> &'static dyn StoreObserver {
    OBSERVER.get_or_init(|| Box::new(NoopObserver)).as_ref()
}
