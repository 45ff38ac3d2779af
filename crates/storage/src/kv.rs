//! Key-value byte store abstraction.

use std::sync::Arc;

/// Synchronous byte store keyed by string.
///
/// Backends never surface failures to the caller: a failed read behaves as
/// a missing key and a failed write is dropped, with the backend logging
/// what went wrong. Single-writer access is assumed — there is no
/// cross-writer locking, and a concurrent external mutation of a key may be
/// silently overwritten by the next write.
pub trait KeyValueStore {
    /// Read the bytes stored under `key`, if any.
    fn read(&self, key: &str) -> Option<Vec<u8>>;

    /// Replace the bytes stored under `key`.
    fn write(&self, key: &str, bytes: &[u8]);
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn read(&self, key: &str) -> Option<Vec<u8>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, bytes: &[u8]) {
        (**self).write(key, bytes)
    }
}
