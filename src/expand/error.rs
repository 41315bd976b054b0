use thiserror::Error;

/// Error type for brace-pattern parsing.
///
/// Positions are byte-free character offsets into the original pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `{` was opened but never closed.
    #[error("unmatched '{{' at position {position}")]
    UnmatchedOpenBrace { position: usize },

    /// A `}` appeared with no matching `{`.
    #[error("unmatched '}}' at position {position}")]
    UnmatchedCloseBrace { position: usize },
}
