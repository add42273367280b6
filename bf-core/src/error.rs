use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for bf operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Boxed error produced by a template engine.
pub type EngineError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unknown template type '{code}'")]
    #[diagnostic(
        code(bf::invalid_type),
        help("use p, b, e, s, or a template name made of letters, digits, '_' or '-'")
    )]
    InvalidType { code: String },

    #[error("invalid path '{path}'")]
    #[diagnostic(
        code(bf::invalid_path),
        help("expected <dir>/<name>, e.g. 'pages/home'")
    )]
    InvalidPath { path: String },

    #[error("template not found: {}", path.display())]
    #[diagnostic(
        code(bf::template_not_found),
        help("ensure installation completed successfully, or point --templates at your template directory")
    )]
    TemplateNotFound { path: PathBuf },

    #[error("failed to read template '{}'", path.display())]
    #[diagnostic(code(bf::template_read))]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no templates found in '{}'", path.display())]
    #[diagnostic(
        code(bf::templates_unavailable),
        help("installation may be broken, please reinstall and try again")
    )]
    TemplatesUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory '{}'", path.display())]
    #[diagnostic(code(bf::create_dir))]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file already exists: {}", path.display())]
    #[diagnostic(
        code(bf::already_exists),
        help("remove the file or pick another name, existing files are never overwritten")
    )]
    AlreadyExists { path: PathBuf },

    #[error("failed to parse template '{name}'")]
    #[diagnostic(code(bf::template_parse))]
    TemplateParse {
        name: String,
        #[source]
        source: EngineError,
    },

    #[error("failed to render template '{name}'")]
    #[diagnostic(code(bf::template_render))]
    Render {
        name: String,
        #[source]
        source: EngineError,
    },

    #[error("failed to write '{}'", path.display())]
    #[diagnostic(code(bf::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
