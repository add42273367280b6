//! Template rendering.
//!
//! Rendering sits behind [`TemplateRenderer`] so the engine can change without
//! touching the case helpers. The default engine is Handlebars, with the case
//! converters exposed as helpers:
//!
//! ```text
//! class {{toPascal Name}}Page extends StatelessWidget {}
//! // file: {{toSnake Name}}_page.dart
//! ```
//!
//! Available helpers: `toSnake`, `toCamel`, `toPascal`, `toLower`, `toUpper`.

use flutterbf_core::{Error, Result, to_camel_case, to_pascal_case, to_snake_case};
use handlebars::{Handlebars, Template, handlebars_helper};
use serde::Serialize;

/// Values available to a template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateData {
    /// The base name, as typed by the user.
    #[serde(rename = "Name")]
    pub name: String,
}

impl TemplateData {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Renders template text into file content.
pub trait TemplateRenderer {
    /// Render `source`, identified by `name` in error messages.
    fn render(&self, name: &str, source: &str, data: &TemplateData) -> Result<String>;
}

handlebars_helper!(snake_helper: |s: str| to_snake_case(s));
handlebars_helper!(camel_helper: |s: str| to_camel_case(s));
handlebars_helper!(pascal_helper: |s: str| to_pascal_case(s));
handlebars_helper!(lower_helper: |s: str| s.to_lowercase());
handlebars_helper!(upper_helper: |s: str| s.to_uppercase());

/// [`TemplateRenderer`] backed by Handlebars.
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        // Output is source code, not HTML.
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);
        registry.register_helper("toSnake", Box::new(snake_helper));
        registry.register_helper("toCamel", Box::new(camel_helper));
        registry.register_helper("toPascal", Box::new(pascal_helper));
        registry.register_helper("toLower", Box::new(lower_helper));
        registry.register_helper("toUpper", Box::new(upper_helper));
        Self { registry }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HandlebarsRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlebarsRenderer").finish_non_exhaustive()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(&self, name: &str, source: &str, data: &TemplateData) -> Result<String> {
        Template::compile(source).map_err(|e| Error::TemplateParse {
            name: name.to_string(),
            source: Box::new(e),
        })?;

        self.registry
            .render_template(source, data)
            .map_err(|e| {
                Error::Render {
                    name: name.to_string(),
                    source: Box::new(e),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str, name: &str) -> Result<String> {
        HandlebarsRenderer::new().render("test", source, &TemplateData::new(name))
    }

    #[test]
    fn test_render_name() {
        assert_eq!(render("Hello {{Name}}", "home").unwrap(), "Hello home");
    }

    #[test]
    fn test_render_case_helpers() {
        let out = render(
            "{{toSnake Name}} {{toCamel Name}} {{toPascal Name}} {{toLower Name}} {{toUpper Name}}",
            "user_profile",
        )
        .unwrap();
        insta::assert_snapshot!(out, @"user_profile userProfile UserProfile user_profile USER_PROFILE");
    }

    #[test]
    fn test_render_does_not_escape() {
        let out = render("final List<{{toPascal Name}}> items = const [];", "item").unwrap();
        assert_eq!(out, "final List<Item> items = const [];");
    }

    #[test]
    fn test_render_dart_page() {
        let source = "\
class {{toPascal Name}}Page extends StatelessWidget {
  const {{toPascal Name}}Page({super.key});
}
";
        let out = render(source, "settings").unwrap();
        insta::assert_snapshot!(out, @r"
        class SettingsPage extends StatelessWidget {
          const SettingsPage({super.key});
        }
        ");
    }

    #[test]
    fn test_parse_error() {
        let err = render("{{#if Name}}x{{/each}}", "home").unwrap_err();
        assert!(matches!(*err, Error::TemplateParse { .. }));
    }

    #[test]
    fn test_unknown_field_is_render_error() {
        let err = render("{{Title}}", "home").unwrap_err();
        assert!(matches!(*err, Error::Render { .. }));
    }

    #[test]
    fn test_unknown_helper_is_render_error() {
        let err = render("{{toKebab Name}}", "home").unwrap_err();
        assert!(matches!(*err, Error::Render { .. }));
    }
}
