//! Template kinds and their output naming.

use std::{fmt, path::PathBuf, str::FromStr};

use flutterbf_core::{Error, to_snake_case};

/// Subdirectory holding a page's bloc, event and state files.
pub const BLOC_DIR: &str = "bloc";

/// The kind of file to generate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// A standalone page (`page.tmpl`).
    Page,
    /// A page wired to its bloc (`bloc_page.tmpl`).
    BlocPage,
    /// The state container (`bloc.tmpl`).
    Bloc,
    /// Events consumed by the bloc (`event.tmpl`).
    Event,
    /// States emitted by the bloc (`state.tmpl`).
    State,
    /// Any other template in the template directory.
    Custom(String),
}

impl TemplateKind {
    /// Name of the template file, without the `.tmpl` extension.
    pub fn template_name(&self) -> &str {
        match self {
            TemplateKind::Page => "page",
            TemplateKind::BlocPage => "bloc_page",
            TemplateKind::Bloc => "bloc",
            TemplateKind::Event => "event",
            TemplateKind::State => "state",
            TemplateKind::Custom(name) => name.as_str(),
        }
    }

    /// Output path relative to the target directory.
    ///
    /// ```
    /// use flutterbf_codegen::TemplateKind;
    ///
    /// let path = TemplateKind::Event.file_name("CounterPage", "dart");
    /// assert_eq!(path, std::path::Path::new("bloc/counter_page_event.dart"));
    /// ```
    pub fn file_name(&self, base_name: &str, extension: &str) -> PathBuf {
        let snake = to_snake_case(base_name);
        match self {
            TemplateKind::Page | TemplateKind::BlocPage => {
                PathBuf::from(format!("{snake}_page.{extension}"))
            }
            TemplateKind::Bloc => PathBuf::from(BLOC_DIR).join(format!("{snake}_bloc.{extension}")),
            TemplateKind::Event => {
                PathBuf::from(BLOC_DIR).join(format!("{snake}_event.{extension}"))
            }
            TemplateKind::State => {
                PathBuf::from(BLOC_DIR).join(format!("{snake}_state.{extension}"))
            }
            TemplateKind::Custom(_) => PathBuf::from(format!("{snake}.{extension}")),
        }
    }

    /// Whether generating this kind makes sure the sibling `bloc/` directory exists.
    ///
    /// Everything but a standalone page does.
    pub fn needs_bloc_dir(&self) -> bool {
        !matches!(self, TemplateKind::Page)
    }

    /// Expand a requested kind into the files to generate, in order.
    ///
    /// A page comes with its bloc, event and state unless `skip_bloc` is set.
    pub fn plan(&self, skip_bloc: bool) -> Vec<TemplateKind> {
        match self {
            TemplateKind::Page if !skip_bloc => vec![
                TemplateKind::BlocPage,
                TemplateKind::Bloc,
                TemplateKind::Event,
                TemplateKind::State,
            ],
            kind => vec![kind.clone()],
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}

impl FromStr for TemplateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "p" | "page" => TemplateKind::Page,
            "b" | "bloc" => TemplateKind::Bloc,
            "e" | "event" => TemplateKind::Event,
            "s" | "state" => TemplateKind::State,
            "bloc_page" => TemplateKind::BlocPage,
            name if is_template_name(name) => TemplateKind::Custom(name.to_string()),
            _ => {
                return Err(Error::InvalidType {
                    code: s.to_string(),
                });
            }
        };
        Ok(kind)
    }
}

fn is_template_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
