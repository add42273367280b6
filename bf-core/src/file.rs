use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// A file to be generated.
///
/// Generated files are create-only: an existing file is never touched.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// Fails with [`Error::AlreadyExists`] if something is already at the path.
    pub fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .map_err(|source| match source.kind() {
                io::ErrorKind::AlreadyExists => Error::AlreadyExists {
                    path: self.path.clone(),
                },
                _ => Error::Write {
                    path: self.path.clone(),
                    source,
                },
            })?;

        file.write_all(self.content.as_bytes())
            .map_err(|source| Error::Write {
                path: self.path.clone(),
                source,
            })?;
        Ok(())
    }
}

/// Create `dir` and its parents if it is not already a directory.
///
/// Returns `true` when the directory had to be created. An empty path stands
/// for the current directory and is left alone.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(true)
}
