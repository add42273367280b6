//! Parsing of the `dir/name` path argument.

use std::{
    path::{Component, Path, PathBuf},
    str::FromStr,
};

use flutterbf_core::{Error, to_snake_case};

/// Where generated files go and the base name they are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    dir: PathBuf,
    base_name: String,
}

impl Target {
    pub fn new(dir: impl Into<PathBuf>, base_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_name: base_name.into(),
        }
    }

    /// Directory the files are written to. Empty for the current directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The user supplied name, as typed.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Resolve `file_name` against the target directory.
    pub fn join(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.dir.join(file_name)
    }
}

impl FromStr for Target {
    type Err = Error;

    /// Split `pages/home` into the directory `pages` and the name `home`.
    ///
    /// A bare name targets the current directory, and a trailing separator
    /// targets the named directory itself. Paths ending in `.` or `..`,
    /// or names without a single ASCII letter or digit, are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = Path::new(s);
        let invalid = || Error::InvalidPath {
            path: s.to_string(),
        };

        let base_name = match path.components().next_back() {
            Some(Component::Normal(name)) => name.to_str().ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };
        if to_snake_case(base_name).is_empty() {
            return Err(invalid());
        }
        // `pages/home/` names the directory itself: `pages/home/home_page.dart`.
        let dir = if s.ends_with(std::path::is_separator) {
            Some(path)
        } else {
            path.parent()
        };
        let dir: PathBuf = dir
            .map(|dir| {
                dir.components()
                    .filter(|c| *c != Component::CurDir)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self::new(dir, base_name))
    }
}
