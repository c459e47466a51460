//! Small file helpers used by controllers.
//!
//! Free functions cover one-off reads and writes; [`DirFiles`] scopes the
//! same operations to a directory that must already exist.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde_json::Value;

use crate::error::{Error, Result};

/// Whether `path` names an existing file.
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Reads a file as text, tolerating non-UTF-8 bytes via lossy conversion.
pub fn read(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::SourceMissing {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes text, creating parent directories as needed.
pub fn write(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    create_parent(path)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Copies `from` to `to`, returning the number of bytes copied. The
/// source must exist; destination directories are created as needed.
pub fn copy(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<u64> {
    let from = from.as_ref();
    if !from.is_file() {
        return Err(Error::SourceMissing {
            path: from.to_path_buf(),
        });
    }
    let to = to.as_ref();
    create_parent(to)?;
    Ok(fs::copy(from, to)?)
}

/// Deletes a file if present; deleting a missing file is not an error.
pub fn remove(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_file() {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Last modification time, `None` when the file does not exist.
pub fn modified(path: impl AsRef<Path>) -> Option<SystemTime> {
    fs::metadata(path.as_ref()).and_then(|meta| meta.modified()).ok()
}

/// Reads and parses a JSON file.
pub fn read_json(path: impl AsRef<Path>) -> Result<Value> {
    let text = read(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// File operations scoped to an existing directory.
#[derive(Debug, Clone)]
pub struct DirFiles {
    dir: PathBuf,
}

impl DirFiles {
    /// Binds to `dir`, which must already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(Error::DirectoryMissing { path: dir });
        }
        Ok(DirFiles { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Path with a `.json` extension appended when missing.
    pub fn json_path(&self, name: &str) -> PathBuf {
        if name.ends_with(".json") {
            self.path(name)
        } else {
            self.path(&format!("{name}.json"))
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        exists(self.path(name))
    }

    pub fn read(&self, name: &str) -> Result<String> {
        read(self.path(name))
    }

    pub fn write(&self, name: &str, contents: &str) -> Result<()> {
        write(self.path(name), contents)
    }

    pub fn read_json(&self, name: &str) -> Result<Value> {
        read_json(self.json_path(name))
    }

    pub fn modified(&self, name: &str) -> Option<SystemTime> {
        modified(self.path(name))
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        remove(self.path(name))
    }
}
