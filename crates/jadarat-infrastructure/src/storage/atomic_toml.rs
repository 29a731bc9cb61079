//! Atomic TOML file access.
//!
//! Writes go to a sibling temp file that is fsynced and renamed over the
//! target, under an exclusive `fs2` lock on a `.lock` sibling.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use jadarat_core::{JadaratError, Result};
use serde::{Serialize, de::DeserializeOwned};

/// A typed handle to one TOML file.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `Ok(None)` when the file is missing or blank.
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(toml::from_str(&content)?))
    }

    /// Serializes `data` and atomically replaces the file.
    pub fn save(&self, data: &T) -> Result<()> {
        let _lock = FileLock::acquire(&self.path)?;
        self.write_atomic(data)
    }

    /// Loads the file, or writes `default` when it does not exist yet.
    pub fn load_or_create(&self, default: T) -> Result<T> {
        let _lock = FileLock::acquire(&self.path)?;
        match self.load()? {
            Some(existing) => Ok(existing),
            None => {
                self.write_atomic(&default)?;
                Ok(default)
            }
        }
    }

    fn write_atomic(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(data)?;
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(contents.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| JadaratError::io(format!("{} has no file name", self.path.display())))?;
        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(self.path.with_file_name(tmp_name))
    }
}

/// Exclusive lock held for the lifetime of the guard.
struct FileLock {
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        fs2::FileExt::lock_exclusive(&file)
            .map_err(|e| JadaratError::io(format!("Failed to acquire lock: {e}")))?;

        Ok(Self { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Sample>::new(temp_dir.path().join("sample.toml"));

        let data = Sample {
            name: "jadarat".to_string(),
            count: 3,
        };
        file.save(&data).unwrap();

        assert_eq!(file.load().unwrap(), Some(data));
        assert!(!temp_dir.path().join(".sample.toml.tmp").exists());
        assert!(!temp_dir.path().join("sample.lock").exists());
    }

    #[test]
    fn test_missing_and_blank_files_load_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blank.toml");
        let file = AtomicTomlFile::<Sample>::new(path.clone());
        assert!(file.load().unwrap().is_none());

        fs::write(&path, "   \n").unwrap();
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_or_create_writes_default_once() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Sample>::new(temp_dir.path().join("nested/sample.toml"));

        let default = Sample {
            name: "default".to_string(),
            count: 0,
        };
        assert_eq!(file.load_or_create(default.clone()).unwrap(), default);
        assert!(file.path().exists());

        let other = Sample {
            name: "other".to_string(),
            count: 9,
        };
        assert_eq!(file.load_or_create(other).unwrap(), default);
    }

    #[test]
    fn test_invalid_toml_is_a_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "name = ").unwrap();

        let err = AtomicTomlFile::<Sample>::new(path).load().unwrap_err();
        assert!(matches!(err, JadaratError::Serialization { .. }));
    }
}
