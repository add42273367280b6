use std::path::Path;

use clap::Args;
use eyre::Result;
use flutterbf_codegen::{
    DEFAULT_EXTENSION, GenerateOptions, GenerateRequest, Generator, Target, TemplateKind,
};

use super::UnwrapOrExit;
use crate::reports::{GenerateProgressReport, PreviewReport, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Template type: p/page, b/bloc, e/event, s/state, or any template name
    #[arg(value_name = "TYPE")]
    pub kind: TemplateKind,

    /// Where to generate, as <dir>/<name> (e.g. pages/home)
    #[arg(value_name = "PATH")]
    pub target: Target,

    /// Generate a page without its bloc, event and state
    #[arg(long)]
    pub skip_bloc: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Extension of generated files
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self, templates: &Path) -> Result<()> {
        let options = GenerateOptions {
            templates_dir: templates.to_path_buf(),
            extension: self.extension.clone(),
        };
        let generator = Generator::new(&options);
        let request =
            GenerateRequest::new(self.kind.clone(), self.target.clone()).skip_bloc(self.skip_bloc);
        tracing::debug!(?request, templates = %templates.display(), "generate");

        let mut out = TerminalOutput::new();
        if self.dry_run {
            let files = generator.preview(&request).unwrap_or_exit();
            PreviewReport { files }.render(&mut out);
        } else {
            generator
                .generate(&request, |event| {
                    GenerateProgressReport::from(event).render(&mut out)
                })
                .unwrap_or_exit();
        }

        Ok(())
    }
}
