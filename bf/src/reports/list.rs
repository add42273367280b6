//! List command report data structures.

use super::output::{Output, Report};

/// Templates found in the template directory.
#[derive(Debug)]
pub struct ListReport {
    /// Template names, or `None` when the directory could not be read.
    pub templates: Option<Vec<String>>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        let Some(templates) = &self.templates else {
            out.preformatted(
                "No templates found. Installation may be broken. Please reinstall and try again.",
            );
            return;
        };

        out.section("Available templates");
        for name in templates {
            out.item(name);
        }
    }
}
