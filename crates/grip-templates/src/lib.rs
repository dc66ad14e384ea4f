//! Bundled HTML fragment templates.
//!
//! Templates live under `templates/` in this crate and are compiled into the
//! binary with `rust-embed`. They are addressed by their path below that
//! root, e.g. `alert/note.html` or `mermaid/mermaid.html`, and expanded with
//! `minijinja`. Templates ending in `.html` are HTML auto-escaped.
//!
//! # Example
//!
//! ```
//! use grip_templates::Templates;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Alert<'a> {
//!     kind: &'a str,
//! }
//!
//! let html = Templates::new()
//!     .expand("alert/note.html", Alert { kind: "note" })
//!     .unwrap();
//! assert!(html.contains("markdown-alert-note"));
//! ```

use std::borrow::Cow;

use minijinja::{Environment, ErrorKind};
use serde::Serialize;

/// Template files compiled into the binary.
#[derive(rust_embed::RustEmbed)]
#[folder = "templates/"]
struct Bundled;

/// Error returned when a template cannot be expanded.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// No bundled template at this path.
    #[error("Template not found: {0}")]
    NotFound(String),
    /// The template failed to parse or render.
    #[error("Failed to expand template {name}: {source}")]
    Expand {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}

/// Template environment over the bundled templates.
///
/// Templates are loaded lazily on first use and cached by the environment.
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Environment over the templates bundled with this crate.
    #[must_use]
    pub fn new() -> Self {
        Self::with_loader(load_bundled)
    }

    /// Environment whose templates come from `loader` instead of the bundle.
    /// The loader returns `Ok(None)` for names it does not know.
    pub fn with_loader<F>(loader: F) -> Self
    where
        F: Fn(&str) -> Result<Option<String>, minijinja::Error> + Send + Sync + 'static,
    {
        let mut env = Environment::new();
        env.set_loader(loader);
        Self { env }
    }

    /// Paths of all bundled templates.
    pub fn names() -> impl Iterator<Item = Cow<'static, str>> {
        Bundled::iter()
    }

    /// Expand the template at `name` with `data` as its context.
    pub fn expand<S: Serialize>(&self, name: &str, data: S) -> Result<String, TemplateError> {
        let template = self.env.get_template(name).map_err(|e| {
            if e.kind() == ErrorKind::TemplateNotFound {
                TemplateError::NotFound(name.to_owned())
            } else {
                TemplateError::Expand {
                    name: name.to_owned(),
                    source: e,
                }
            }
        })?;
        template.render(data).map_err(|e| TemplateError::Expand {
            name: name.to_owned(),
            source: e,
        })
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::unnecessary_wraps)]
fn load_bundled(name: &str) -> Result<Option<String>, minijinja::Error> {
    Ok(Bundled::get(name).map(|file| String::from_utf8_lossy(&file.data).into_owned()))
}
