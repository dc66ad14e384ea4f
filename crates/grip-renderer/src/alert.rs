//! GitHub alert markers (`> [!NOTE]`).

use std::fmt;

/// Alert category keyed by a `[!KEYWORD]` marker at the start of a
/// blockquote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    Note,
    Tip,
    Important,
    Warning,
    Caution,
    BlockQuote,
}

impl AlertKind {
    /// All kinds in matching priority order.
    pub const ALL: [Self; 6] = [
        Self::Note,
        Self::Tip,
        Self::Important,
        Self::Warning,
        Self::Caution,
        Self::BlockQuote,
    ];

    /// Lowercase name, also the template key (`alert/{name}.html`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Tip => "tip",
            Self::Important => "important",
            Self::Warning => "warning",
            Self::Caution => "caution",
            Self::BlockQuote => "blockquote",
        }
    }

    /// Marker as written in markdown.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Note => "[!NOTE]",
            Self::Tip => "[!TIP]",
            Self::Important => "[!IMPORTANT]",
            Self::Warning => "[!WARNING]",
            Self::Caution => "[!CAUTION]",
            Self::BlockQuote => "[!BLOCKQUOTE]",
        }
    }

    /// Kind whose marker prefixes `text`, first match in priority order.
    ///
    /// # Examples
    ///
    /// ```
    /// use grip_renderer::AlertKind;
    ///
    /// assert_eq!(AlertKind::classify("[!TIP] try this"), Some(AlertKind::Tip));
    /// assert_eq!(AlertKind::classify("[!tip]"), Some(AlertKind::Tip));
    /// assert_eq!(AlertKind::classify("plain quote"), None);
    /// ```
    #[must_use]
    pub fn classify(text: &str) -> Option<Self> {
        Self::strip_marker(text).map(|(kind, _)| kind)
    }

    /// Kind and the text following its marker. Markers compare ASCII
    /// case-insensitively.
    #[must_use]
    pub fn strip_marker(text: &str) -> Option<(Self, &str)> {
        Self::ALL.into_iter().find_map(|kind| {
            let marker = kind.marker();
            let head = text.get(..marker.len())?;
            head.eq_ignore_ascii_case(marker)
                .then(|| (kind, &text[marker.len()..]))
        })
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
