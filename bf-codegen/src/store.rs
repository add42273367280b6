//! Template lookup on disk.

use std::path::PathBuf;

use flutterbf_core::{Error, Result};

/// Extension of template files, without the dot.
pub const TEMPLATE_EXTENSION: &str = "tmpl";

/// Default template directory, relative to the working directory.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// A directory of `<name>.tmpl` files.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the template called `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{TEMPLATE_EXTENSION}"))
    }

    /// Read the template called `name`.
    pub fn load(&self, name: &str) -> Result<String> {
        let path = self.path_for(name);
        if !path.is_file() {
            return Err(Error::TemplateNotFound { path }.into());
        }
        tracing::debug!(path = %path.display(), "loading template");
        std::fs::read_to_string(&path).map_err(|source| Error::TemplateRead { path, source }.into())
    }

    /// Names of all templates in the directory, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.dir).map_err(|source| Error::TemplatesUnavailable {
            path: self.dir.clone(),
            source,
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_ok_and(|ty| !ty.is_dir()))
            .filter_map(|entry| {
                let file_name = entry.file_name();
                let name = file_name.to_str()?;
                name.strip_suffix(&format!(".{TEMPLATE_EXTENSION}"))
                    .map(String::from)
            })
            .collect();
        names.sort();
        Ok(names)
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATES_DIR)
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_path_for() {
        let store = TemplateStore::new("templates");
        assert_eq!(store.path_for("page"), Path::new("templates/page.tmpl"));
    }

    #[test]
    fn test_load() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("page.tmpl"), "class {{Name}} {}").unwrap();

        let store = TemplateStore::new(temp.path());
        assert_eq!(store.load("page").unwrap(), "class {{Name}} {}");
    }

    #[test]
    fn test_load_missing() {
        let temp = TempDir::new().unwrap();
        let store = TemplateStore::new(temp.path());

        let err = store.load("page").unwrap_err();
        match *err {
            Error::TemplateNotFound { path } => assert_eq!(path, temp.path().join("page.tmpl")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_list_strips_extension_and_sorts() {
        let temp = TempDir::new().unwrap();
        for name in ["state.tmpl", "bloc.tmpl", "page.tmpl", "README.md"] {
            fs::write(temp.path().join(name), "").unwrap();
        }
        fs::create_dir(temp.path().join("nested.tmpl")).unwrap();

        let store = TemplateStore::new(temp.path());
        assert_eq!(store.list().unwrap(), vec!["bloc", "page", "state"]);
    }

    #[test]
    fn test_list_missing_dir() {
        let temp = TempDir::new().unwrap();
        let store = TemplateStore::new(temp.path().join("nope"));

        let err = store.list().unwrap_err();
        assert!(matches!(*err, Error::TemplatesUnavailable { .. }));
    }
}
