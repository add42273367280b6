//! Template based file generation for the bf scaffolding generator.
//!
//! # Module Organization
//!
//! - [`kind`] - Template kinds, short codes and output naming
//! - [`target`] - The `dir/name` target of a generation request
//! - [`store`] - Template lookup in a template directory
//! - [`renderer`] - Template rendering with case conversion helpers
//! - [`generator`] - Writing rendered templates to disk

pub mod generator;
pub mod kind;
pub mod renderer;
pub mod store;
pub mod target;

pub use generator::{
    DEFAULT_EXTENSION, FileOutcome, GenerateEvent, GenerateOptions, GenerateRequest, Generator,
    PreviewFile,
};
pub use kind::{BLOC_DIR, TemplateKind};
pub use renderer::{HandlebarsRenderer, TemplateData, TemplateRenderer};
pub use store::{DEFAULT_TEMPLATES_DIR, TEMPLATE_EXTENSION, TemplateStore};
pub use target::Target;
