use crate::error::Result;

/// Abstract interface for the local key-value blob.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`NoteStore`](super::NoteStore) handles the "what" (collection state, id
/// allocation, categories).
///
/// Each key holds one serialized document. Writes replace the whole value.
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing was ever written there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

// Lets a caller keep a handle on the backend while a store owns it.
impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}
