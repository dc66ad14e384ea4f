//! CSS for highlighted code.

use std::sync::LazyLock;

use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, css_for_theme_with_class_style};

use crate::error::HighlightError;

/// Bundled theme used for light pages.
pub const LIGHT_THEME: &str = "InspiredGitHub";

/// Bundled theme used for dark pages.
pub const DARK_THEME: &str = "base16-ocean.dark";

static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// CSS rules matching the span classes produced with `class_style`.
///
/// `theme` names one of syntect's bundled themes, e.g. [`LIGHT_THEME`].
pub fn stylesheet(theme: &str, class_style: ClassStyle) -> Result<String, HighlightError> {
    let theme = THEMES
        .themes
        .get(theme)
        .ok_or_else(|| HighlightError::UnknownTheme(theme.to_owned()))?;
    Ok(css_for_theme_with_class_style(theme, class_style)?)
}
