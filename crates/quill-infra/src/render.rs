//! Tera-backed HTML renderer.

use quill_core::ports::{RenderError, TemplateRenderer};
use tera::{Context, Tera};

/// Renders pages from a fixed set of templates registered at startup.
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Build a renderer from `(name, source)` pairs.
    ///
    /// Names ending in `.html` are auto-escaped.
    pub fn from_templates<'a, I>(templates: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates)
            .map_err(|e| RenderError::Failed(e.to_string()))?;

        Ok(Self { tera })
    }

    /// Names of every registered template.
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }
}

impl TemplateRenderer for TeraRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, RenderError> {
        if !self.tera.get_template_names().any(|name| name == template) {
            return Err(RenderError::UnknownTemplate(template.to_string()));
        }

        let context =
            Context::from_serialize(context).map_err(|e| RenderError::Failed(e.to_string()))?;

        self.tera.render(template, &context).map_err(|e| {
            tracing::error!(template, error = %e, "Template rendering failed");
            RenderError::Failed(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn renderer() -> TeraRenderer {
        TeraRenderer::from_templates([
            ("greet.html", "<p>Hello {{ name }}</p>"),
            ("list.html", "{% for item in items %}[{{ item }}]{% endfor %}"),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_with_context() {
        let html = renderer()
            .render("greet.html", &json!({"name": "Ada"}))
            .unwrap();
        assert_eq!(html, "<p>Hello Ada</p>");
    }

    #[test]
    fn test_html_is_escaped() {
        let html = renderer()
            .render("greet.html", &json!({"name": "<script>"}))
            .unwrap();
        assert_eq!(html, "<p>Hello &lt;script&gt;</p>");
    }

    #[test]
    fn test_unknown_template() {
        let err = renderer().render("missing.html", &json!({})).unwrap_err();
        assert!(matches!(err, RenderError::UnknownTemplate(_)));
    }

    #[test]
    fn test_missing_variable_fails() {
        let err = renderer().render("greet.html", &json!({})).unwrap_err();
        assert!(matches!(err, RenderError::Failed(_)));
    }

    #[test]
    fn test_template_names_sorted() {
        assert_eq!(renderer().template_names(), vec!["greet.html", "list.html"]);
    }
}
