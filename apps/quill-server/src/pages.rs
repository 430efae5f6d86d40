//! Page templates compiled into the binary.

use quill_core::ports::RenderError;
use quill_infra::TeraRenderer;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("author.html", include_str!("../templates/author.html")),
    ("post.html", include_str!("../templates/post.html")),
    ("signup.html", include_str!("../templates/signup.html")),
    ("signin.html", include_str!("../templates/signin.html")),
];

pub fn renderer() -> Result<TeraRenderer, RenderError> {
    TeraRenderer::from_templates(TEMPLATES.iter().copied())
}
