//! Highlighting errors.

/// Error returned while tokenizing or formatting code.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// The syntax definition failed on a line of input.
    #[error("Tokenizing failed: {0}")]
    Tokenize(#[from] syntect::parsing::ParsingError),
    /// Scope to HTML or CSS conversion failed.
    #[error("Formatting failed: {0}")]
    Format(#[from] syntect::Error),
    /// No bundled theme with this name.
    #[error("Unknown highlight theme: {0}")]
    UnknownTheme(String),
}
