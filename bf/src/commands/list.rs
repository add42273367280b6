use std::path::Path;

use clap::Args;
use eyre::Result;
use flutterbf_codegen::TemplateStore;

use crate::reports::{ListReport, Report, TerminalOutput};

#[derive(Args)]
pub struct ListCommand {}

impl ListCommand {
    pub fn run(&self, templates: &Path) -> Result<()> {
        let store = TemplateStore::new(templates);
        let templates = match store.list() {
            Ok(names) => Some(names),
            Err(e) => {
                tracing::debug!(error = %e, "template directory unavailable");
                None
            }
        };

        ListReport { templates }.render(&mut TerminalOutput::new());
        Ok(())
    }
}
