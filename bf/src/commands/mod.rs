mod completions;
mod generate;
mod list;
mod version;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use flutterbf_codegen::DEFAULT_TEMPLATES_DIR;
use generate::GenerateCommand;
use list::ListCommand;
use miette::Diagnostic;
use version::VersionCommand;

/// Extension trait for exiting on bf errors with a one-line message
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for flutterbf_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{}", error_line(&e));
                std::process::exit(1);
            }
        }
    }
}

/// `Error: <message>[: <cause>] [(<help>)]` on a single line.
fn error_line(err: &flutterbf_core::Error) -> String {
    let mut line = format!("Error: {err}");
    // Engine errors can span lines with a template excerpt, keep the first.
    if let Some(cause) = std::error::Error::source(err)
        .and_then(|source| source.to_string().lines().next().map(str::to_owned))
    {
        line.push_str(": ");
        line.push_str(cause.trim());
    }
    if let Some(help) = err.help() {
        line.push_str(&format!(" ({help})"));
    }
    line
}

/// `bf v<version>`, shared by `bf version` and `-v/--version`.
pub(crate) const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

#[derive(Parser)]
#[command(name = "bf")]
#[command(version = VERSION, disable_version_flag = true)]
#[command(about = "Generate Flutter pages and blocs from templates")]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "Examples:
  bf g p pages/home              Generate pages/home_page.dart with its bloc
  bf g page pages/home           Same as above
  bf g p pages/home --skip-bloc  Generate pages/home_page.dart only
  bf g b blocs/counter           Generate blocs/bloc/counter_bloc.dart

Short codes:
  p = page
  b = bloc
  e = event
  s = state")]
pub(crate) struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Directory containing the .tmpl files
    #[arg(long, global = true, env = "BF_TEMPLATES", default_value = DEFAULT_TEMPLATES_DIR)]
    templates: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse arguments, exiting with status 1 on usage errors.
    ///
    /// Help and version requests still exit with status 0.
    pub fn parse_or_exit() -> Self {
        Self::try_parse().unwrap_or_else(|err| {
            if err.use_stderr() {
                print!("{}", err.render());
                std::process::exit(1);
            }
            err.exit()
        })
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(&self.templates),
            Commands::List(cmd) => cmd.run(&self.templates),
            Commands::Version(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate files from a template
    #[command(visible_alias = "g")]
    Generate(GenerateCommand),

    /// List available templates
    #[command(visible_alias = "ls")]
    List(ListCommand),

    /// Show version
    Version(VersionCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, error::ErrorKind};
    use flutterbf_codegen::TemplateKind;
    use flutterbf_core::Error;

    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_alias() {
        let cli = Cli::try_parse_from(["bf", "g", "p", "pages/home", "--skip-bloc"]).unwrap();
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.kind, TemplateKind::Page);
        assert_eq!(cmd.target.base_name(), "home");
        assert!(cmd.skip_bloc);
        assert_eq!(cli.templates, PathBuf::from("templates"));
    }

    #[test]
    fn test_parse_list_alias() {
        let cli = Cli::try_parse_from(["bf", "ls"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_parse_templates_flag() {
        let cli = Cli::try_parse_from(["bf", "list", "--templates", "/opt/bf/templates"]).unwrap();
        assert_eq!(cli.templates, PathBuf::from("/opt/bf/templates"));
    }

    #[test]
    fn test_version_flags() {
        for flag in ["-v", "--version"] {
            let err = Cli::try_parse_from(["bf", flag]).err().unwrap();
            assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        }
    }

    #[test]
    fn test_usage_errors() {
        let err = Cli::try_parse_from(["bf", "g", "p"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.use_stderr());

        let err = Cli::try_parse_from(["bf", "frobnicate"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);

        let err = Cli::try_parse_from(["bf", "g", "../x", "pages/home"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_error_line_appends_help() {
        let err = Error::AlreadyExists {
            path: PathBuf::from("pages/home_page.dart"),
        };
        assert_eq!(
            error_line(&err),
            "Error: file already exists: pages/home_page.dart \
             (remove the file or pick another name, existing files are never overwritten)"
        );
    }

    #[test]
    fn test_error_line_appends_cause() {
        let err = Error::Write {
            path: PathBuf::from("home_page.dart"),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(
            error_line(&err),
            "Error: failed to write 'home_page.dart': disk full"
        );
    }

    #[test]
    fn test_error_line_is_single_line() {
        let source = "line one\nline two";
        let err = Error::Render {
            name: "page".to_string(),
            source: source.into(),
        };
        assert_eq!(
            error_line(&err),
            "Error: failed to render template 'page': line one"
        );
    }
}
