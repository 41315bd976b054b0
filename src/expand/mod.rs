//! Brace expansion.
//!
//! A pattern such as `"~/{Downloads,Pictures}/*.{jpg,gif,png}"` denotes the
//! set of strings obtained by choosing one alternative at every brace group.
//! Parsing and expansion are separate steps: [`BracePattern::parse`] builds
//! the group tree once, [`BracePattern::expansions`] then yields each fully
//! expanded string lazily.

mod error;
mod iter;
mod parser;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use error::ParseError;
pub use iter::Expansions;
pub use parser::BracePattern;

/// Parses `pattern` and eagerly collects every expansion.
///
/// Convenience wrapper for callers that do not care about lazy production.
///
/// # Errors
/// Returns `ParseError` if the pattern contains an unmatched brace.
pub fn expand(pattern: &str) -> Result<Vec<String>, ParseError> {
    let parsed = BracePattern::parse(pattern)?;
    Ok(parsed.expansions().collect())
}
