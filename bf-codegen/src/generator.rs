//! File generation from templates.

use std::path::{Path, PathBuf};

use flutterbf_core::{Error, File, Result, ensure_dir};

use crate::{
    kind::{BLOC_DIR, TemplateKind},
    renderer::{HandlebarsRenderer, TemplateData, TemplateRenderer},
    store::{DEFAULT_TEMPLATES_DIR, TemplateStore},
    target::Target,
};

/// Default extension of generated files.
pub const DEFAULT_EXTENSION: &str = "dart";

/// Settings shared by every generation request.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory holding the `.tmpl` files.
    pub templates_dir: PathBuf,
    /// Extension of generated files, without the dot.
    pub extension: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// What the user asked for: `bf g <kind> <target> [--skip-bloc]`.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub kind: TemplateKind,
    pub target: Target,
    pub skip_bloc: bool,
}

impl GenerateRequest {
    pub fn new(kind: TemplateKind, target: Target) -> Self {
        Self {
            kind,
            target,
            skip_bloc: false,
        }
    }

    pub fn skip_bloc(mut self, skip_bloc: bool) -> Self {
        self.skip_bloc = skip_bloc;
        self
    }

    /// The kinds to generate, in order.
    pub fn plan(&self) -> Vec<TemplateKind> {
        self.kind.plan(self.skip_bloc)
    }
}

/// A file written by [`Generator::generate_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub kind: TemplateKind,
    pub path: PathBuf,
}

/// Progress of a generation, reported as it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateEvent<'a> {
    /// The `bloc/` directory next to the target was created.
    CreatedBlocDir(&'a Path),
    /// A file was written.
    Generated(&'a FileOutcome),
}

/// A file as it would be generated, without touching the disk.
#[derive(Debug, Clone)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
    /// Whether generating for real would fail because the file exists.
    pub exists: bool,
}

/// Renders templates from a [`TemplateStore`] into target directories.
#[derive(Debug)]
pub struct Generator<R = HandlebarsRenderer> {
    store: TemplateStore,
    renderer: R,
    extension: String,
}

impl Generator {
    /// Create a generator using the Handlebars renderer.
    pub fn new(options: &GenerateOptions) -> Self {
        Self::with_renderer(options, HandlebarsRenderer::new())
    }
}

impl<R: TemplateRenderer> Generator<R> {
    pub fn with_renderer(options: &GenerateOptions, renderer: R) -> Self {
        Self {
            store: TemplateStore::new(&options.templates_dir),
            renderer,
            extension: options.extension.clone(),
        }
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Where a file of `kind` for `target` is written.
    pub fn output_path(&self, kind: &TemplateKind, target: &Target) -> PathBuf {
        target.join(kind.file_name(target.base_name(), &self.extension))
    }

    /// Generate every file of the request, stopping at the first error.
    ///
    /// `on_event` sees each step as it happens, so earlier steps are reported
    /// even when a later one fails. Files written before an error stay on disk.
    pub fn generate(
        &self,
        request: &GenerateRequest,
        mut on_event: impl FnMut(GenerateEvent<'_>),
    ) -> Result<Vec<FileOutcome>> {
        let mut outcomes = Vec::new();
        for kind in request.plan() {
            outcomes.push(self.generate_file(&kind, &request.target, &mut on_event)?);
        }
        Ok(outcomes)
    }

    /// Generate a single file of `kind`.
    ///
    /// The template is loaded before anything is created on disk, and an
    /// existing output file is detected before rendering so it is never
    /// modified.
    pub fn generate_file(
        &self,
        kind: &TemplateKind,
        target: &Target,
        on_event: &mut dyn FnMut(GenerateEvent<'_>),
    ) -> Result<FileOutcome> {
        let template_name = kind.template_name();
        let source = self.store.load(template_name)?;

        ensure_dir(target.dir())?;
        let path = self.output_path(kind, target);

        if kind.needs_bloc_dir() {
            let bloc_dir = target.join(BLOC_DIR);
            if ensure_dir(&bloc_dir)? {
                tracing::debug!(dir = %bloc_dir.display(), "created bloc directory");
                on_event(GenerateEvent::CreatedBlocDir(&bloc_dir));
            }
        }

        if path.exists() {
            return Err(Error::AlreadyExists { path }.into());
        }

        let data = TemplateData::new(target.base_name());
        let content = self.renderer.render(template_name, &source, &data)?;
        File::new(&path, content).write()?;
        tracing::debug!(kind = %kind, path = %path.display(), "generated file");

        let outcome = FileOutcome {
            kind: kind.clone(),
            path,
        };
        on_event(GenerateEvent::Generated(&outcome));
        Ok(outcome)
    }

    /// Render every file of the request without writing anything.
    pub fn preview(&self, request: &GenerateRequest) -> Result<Vec<PreviewFile>> {
        let data = TemplateData::new(request.target.base_name());
        request
            .plan()
            .iter()
            .map(|kind| {
                let template_name = kind.template_name();
                let source = self.store.load(template_name)?;
                let content = self.renderer.render(template_name, &source, &data)?;
                let path = self.output_path(kind, &request.target);
                Ok(PreviewFile {
                    exists: path.exists(),
                    path,
                    content,
                })
            })
            .collect()
    }
}
