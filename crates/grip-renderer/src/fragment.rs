//! HTML fragments expanded from the bundled templates.

use grip_templates::{TemplateError, Templates};
use serde::Serialize;

use crate::alert::AlertKind;
use crate::config::Theme;

/// Closes the box opened by [`alert_open`].
pub const ALERT_CLOSE: &str = "</div>";

const MERMAID_TEMPLATE: &str = "mermaid/mermaid.html";

#[derive(Serialize)]
struct AlertData<'a> {
    kind: &'a str,
}

#[derive(Serialize)]
struct MermaidData<'a> {
    content: &'a str,
    theme: &'a str,
}

/// Opening markup of an alert box: the wrapper `<div>` and its title line.
pub fn alert_open(templates: &Templates, kind: AlertKind) -> Result<String, TemplateError> {
    let name = format!("alert/{}.html", kind.as_str());
    templates.expand(&name, AlertData { kind: kind.as_str() })
}

/// Diagram container with the client-side mermaid bootstrap. `content` is
/// escaped by the template.
pub fn mermaid_container(templates: &Templates, content: &str, theme: Theme) -> Result<String, TemplateError> {
    templates.expand(
        MERMAID_TEMPLATE,
        MermaidData {
            content,
            theme: theme.as_str(),
        },
    )
}
