//! Parser extension toggles.

use pulldown_cmark::Options;

/// Markdown extensions recognized by the parser.
///
/// Fenced code, backslash hard breaks, ordered-list start numbers and
/// intra-word `_` emphasis suppression are part of CommonMark and always on.
/// GitHub alerts and task-list markers are deliberately not delegated to the
/// parser: the render hooks see the raw `[!NOTE]` / `[ ]` text instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Extensions {
    /// Pipe tables.
    pub tables: bool,
    /// `~~strikethrough~~`.
    pub strikethrough: bool,
    /// Bare `http://`, `https://` and `www.` URLs become links.
    pub autolink: bool,
    /// `# Heading {#custom-id}` attributes.
    pub heading_attributes: bool,
    /// Headings without an explicit ID get a slug ID.
    pub auto_heading_ids: bool,
    /// `$inline$` and `$$display$$` math.
    pub math: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            autolink: true,
            heading_attributes: true,
            auto_heading_ids: true,
            math: true,
        }
    }
}

impl Extensions {
    /// Only the CommonMark core.
    #[must_use]
    pub fn none() -> Self {
        Self {
            tables: false,
            strikethrough: false,
            autolink: false,
            heading_attributes: false,
            auto_heading_ids: false,
            math: false,
        }
    }

    /// `pulldown-cmark` options for the parser-level extensions.
    #[must_use]
    pub fn parser_options(self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_HEADING_ATTRIBUTES, self.heading_attributes);
        options.set(Options::ENABLE_MATH, self.math);
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = Extensions::default().parser_options();
        assert!(options.contains(Options::ENABLE_TABLES));
        assert!(options.contains(Options::ENABLE_STRIKETHROUGH));
        assert!(options.contains(Options::ENABLE_HEADING_ATTRIBUTES));
        assert!(options.contains(Options::ENABLE_MATH));
        assert!(!options.contains(Options::ENABLE_TASKLISTS));
        assert!(!options.contains(Options::ENABLE_GFM));
    }

    #[test]
    fn test_none_options() {
        assert_eq!(Extensions::none().parser_options(), Options::empty());
    }
}
