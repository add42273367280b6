//! Generate command report data structures.

use std::path::PathBuf;

use flutterbf_codegen::{GenerateEvent, PreviewFile};

use super::output::{Output, Report};

/// One step of `bf generate`.
#[derive(Debug)]
pub enum GenerateProgressReport {
    /// The `bloc/` directory was created.
    CreatedBlocDir(PathBuf),
    /// A file was written.
    Generated(PathBuf),
}

impl From<GenerateEvent<'_>> for GenerateProgressReport {
    fn from(event: GenerateEvent<'_>) -> Self {
        match event {
            GenerateEvent::CreatedBlocDir(dir) => Self::CreatedBlocDir(dir.to_path_buf()),
            GenerateEvent::Generated(outcome) => Self::Generated(outcome.path.clone()),
        }
    }
}

impl Report for GenerateProgressReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            Self::CreatedBlocDir(_) => out.preformatted("Creating bloc directory"),
            Self::Generated(path) => out.success(&format!("Generated {}", path.display())),
        }
    }
}

/// Result of `bf generate --dry-run`.
#[derive(Debug)]
pub struct PreviewReport {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", self.files.len()));
        for file in self.files.iter().filter(|f| f.exists) {
            out.warning(&format!("{} already exists", file.path.display()));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use flutterbf_codegen::{FileOutcome, TemplateKind};

    use super::*;
    use crate::reports::testing::RecordingOutput;

    #[test]
    fn test_render_progress() {
        let outcome = FileOutcome {
            kind: TemplateKind::Bloc,
            path: PathBuf::from("pages/bloc/home_bloc.dart"),
        };
        let mut out = RecordingOutput::default();
        for event in [
            GenerateEvent::CreatedBlocDir(Path::new("pages/bloc")),
            GenerateEvent::Generated(&outcome),
        ] {
            GenerateProgressReport::from(event).render(&mut out);
        }
        assert_eq!(
            out.lines,
            vec![
                "Creating bloc directory",
                "✓ Generated pages/bloc/home_bloc.dart"
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = PreviewReport {
            files: vec![
                PreviewFile {
                    path: PathBuf::from("home_page.dart"),
                    content: "class HomePage {}".into(),
                    exists: true,
                },
                PreviewFile {
                    path: PathBuf::from("bloc/home_bloc.dart"),
                    content: "class HomeBloc {}".into(),
                    exists: false,
                },
            ],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "── home_page.dart ──",
                "class HomePage {}",
                "── bloc/home_bloc.dart ──",
                "class HomeBloc {}",
                "── Summary ──",
                "2 files would be generated",
                "warning: home_page.dart already exists",
            ]
        );
    }
}
