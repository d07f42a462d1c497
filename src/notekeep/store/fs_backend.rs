use super::backend::StorageBackend;
use crate::error::{NotekeepError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File-based backend: key `k` lives in `<root>/k.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotekeepError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(NotekeepError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        let path = self.key_path(key);
        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, value).map_err(NotekeepError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(NotekeepError::Io(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        assert_eq!(backend.read("notes").unwrap(), None);
    }

    #[test]
    fn creates_root_on_first_write() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("data");
        let backend = FsBackend::new(root.clone());

        backend.write("theme", "\"dark\"").unwrap();
        assert!(root.join("theme.json").exists());
        assert_eq!(backend.read("theme").unwrap().as_deref(), Some("\"dark\""));
    }

    #[test]
    fn write_replaces_previous_value() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        backend.write("notes", "[]").unwrap();
        backend.write("notes", "[1]").unwrap();
        assert_eq!(backend.read("notes").unwrap().as_deref(), Some("[1]"));
    }
}
