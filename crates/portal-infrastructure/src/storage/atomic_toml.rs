//! Crash-safe TOML file handle.
//!
//! Writes go to a sibling `.<name>.tmp` file which is fsynced and renamed
//! over the target. Read-modify-write cycles hold an exclusive `fs2` lock on
//! a sibling `<name>.lock` file for their whole duration.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use portal_core::error::{PortalError, Result};
use serde::{Serialize, de::DeserializeOwned};

pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file. A missing or blank file is `Ok(None)`.
    pub fn load(&self) -> Result<Option<T>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(toml::from_str(&content)?))
    }

    /// Replaces the file contents atomically.
    pub fn save(&self, data: &T) -> Result<()> {
        let parent = self.parent()?;
        fs::create_dir_all(parent)?;

        let serialized = toml::to_string_pretty(data)?;
        let tmp_path = self.sibling(".", ".tmp")?;
        {
            let mut tmp = File::create(&tmp_path)?;
            tmp.write_all(serialized.as_bytes())?;
            tmp.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Locked read-modify-write. Returns the value that was written.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<T>
    where
        F: FnOnce(&mut T) -> Result<()>,
    {
        let _lock = FileLock::acquire(&self.sibling("", ".lock")?)?;
        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data)?;
        self.save(&data)?;
        Ok(data)
    }

    fn parent(&self) -> Result<&Path> {
        self.path
            .parent()
            .ok_or_else(|| PortalError::io(format!("{} has no parent directory", self.path.display())))
    }

    fn sibling(&self, prefix: &str, suffix: &str) -> Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| PortalError::io(format!("{} has no file name", self.path.display())))?;
        Ok(self
            .parent()?
            .join(format!("{prefix}{}{suffix}", file_name.to_string_lossy())))
    }
}

/// Exclusive lock held until drop.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(lock_path: &Path) -> Result<Self> {
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(lock_path)?;
        file.lock_exclusive()
            .map_err(|e| PortalError::io(format!("Failed to lock {}: {e}", lock_path.display())))?;
        Ok(Self { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
