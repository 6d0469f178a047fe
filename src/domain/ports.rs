use crate::utils::error::Result;
use std::path::PathBuf;

/// Byte-level access to the files backing each collection.
pub trait Storage: Send + Sync {
    /// `Ok(None)` only when the file does not exist yet.
    fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces the whole file. Readers never observe a partially written file.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;

    /// Where `path` lives, for error messages.
    fn locate(&self, path: &str) -> PathBuf {
        PathBuf::from(path)
    }
}
