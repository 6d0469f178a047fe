use crate::domain::ports::Storage;
use crate::utils::error::{HotelSystemError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Collections stored as plain files under one directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
        let full_path = self.locate(path);
        match fs::read(&full_path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HotelSystemError::persistence(full_path, e.to_string())),
        }
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.locate(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| HotelSystemError::persistence(parent, e.to_string()))?;
        }

        // Write to a sibling temp file, then rename over the target
        let temp_path = full_path.with_extension("json.tmp");
        fs::write(&temp_path, data)
            .map_err(|e| HotelSystemError::persistence(&temp_path, e.to_string()))?;
        fs::rename(&temp_path, &full_path)
            .map_err(|e| HotelSystemError::persistence(&full_path, e.to_string()))?;

        Ok(())
    }

    fn locate(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}
