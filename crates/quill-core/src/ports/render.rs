//! HTML rendering port.

/// Renders a named page template with a JSON data context.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Template rendering failed: {0}")]
    Failed(String),
}
