// parser.rs
// ──────────────────────────────────────────────────────────────────────────────
// Recursive-descent parser for brace patterns.  A pattern is a sequence of
// literal runs and `{...}` groups; top-level commas inside a group separate
// alternatives.  The whole input is treated as if wrapped in one implicit
// outer `{...}` so single- and multi-alternative patterns parse uniformly.
//
// Each recursion level returns `(alternatives, next_position)` explicitly
// rather than sharing a mutable cursor between levels.
// ──────────────────────────────────────────────────────────────────────────────

use super::error::ParseError;
use super::iter::Expansions;

/// One element of an alternative: a run of literal characters or a nested
/// brace group (an ordered list of child alternatives).
#[derive(Debug, Clone)]
pub(crate) enum Node {
    Literal(String),
    Group(Vec<Sequence>),
}

/// One alternative: the ordered nodes that make it up.
#[derive(Debug, Clone, Default)]
pub(crate) struct Sequence {
    pub(crate) nodes: Vec<Node>,
}

impl Sequence {
    /// Number of strings this alternative expands to.
    fn variant_count(&self) -> usize {
        self.nodes.iter().fold(1usize, |acc, node| {
            let n = match node {
                Node::Literal(_) => 1,
                Node::Group(alts) => group_variant_count(alts),
            };
            acc.saturating_mul(n)
        })
    }
}

fn group_variant_count(alternatives: &[Sequence]) -> usize {
    alternatives
        .iter()
        .fold(0usize, |acc, alt| acc.saturating_add(alt.variant_count()))
}

/// A parsed brace pattern, ready for expansion.
#[derive(Debug, Clone)]
pub struct BracePattern {
    /// Top-level alternatives of the implicit outer group.
    root: Vec<Sequence>,
}

impl BracePattern {
    /// Parses a brace pattern.
    ///
    /// Separator rule, kept from the source exercise: a comma inside a group
    /// is an alternative separator only when it is *not* immediately followed
    /// by a literal space.  `", "` therefore stays literal text, which lets
    /// patterns contain ordinary prose like `"e{d,}, please."`.
    ///
    /// # Errors
    /// Returns `ParseError::UnmatchedOpenBrace` or
    /// `ParseError::UnmatchedCloseBrace` (with the character position of the
    /// offending brace) if the braces are unbalanced.
    pub fn parse(pattern: &str) -> Result<Self, ParseError> {
        let chars: Vec<char> = pattern.chars().collect();
        let (root, _end) = parse_alternatives(&chars, 0, None)?;
        Ok(Self { root })
    }

    /// Returns a lazy iterator over every expansion of this pattern.
    ///
    /// Each call to `next` produces one fully expanded string; nothing is
    /// materialized up front.  No particular order is guaranteed and
    /// duplicate alternatives yield duplicate strings.
    pub fn expansions(&self) -> Expansions<'_> {
        Expansions::new(&self.root)
    }

    /// Total number of strings [`expansions`](Self::expansions) will yield:
    /// the product of alternative-counts across all brace groups
    /// (saturating at `usize::MAX`).
    pub fn variant_count(&self) -> usize {
        group_variant_count(&self.root)
    }
}

/// Parses the alternatives of one group, starting just past its `{`.
///
/// `opened_at` is the position of the `{` that opened this group, or `None`
/// for the implicit top-level group.  Returns the parsed alternatives and
/// the position just past the group's closing `}` (or the end of input for
/// the top level).
fn parse_alternatives(
    chars: &[char],
    mut pos: usize,
    opened_at: Option<usize>,
) -> Result<(Vec<Sequence>, usize), ParseError> {
    let mut alternatives: Vec<Sequence> = Vec::new();
    let mut current = Sequence::default();
    let mut run = String::new();

    loop {
        match chars.get(pos) {
            Some('{') => {
                flush_run(&mut current, &mut run);
                let (alts, next) = parse_alternatives(chars, pos + 1, Some(pos))?;
                current.nodes.push(Node::Group(alts));
                pos = next;
            }
            Some('}') => {
                if opened_at.is_none() {
                    return Err(ParseError::UnmatchedCloseBrace { position: pos });
                }
                flush_run(&mut current, &mut run);
                alternatives.push(current);
                return Ok((alternatives, pos + 1));
            }
            // Separator rule: a comma followed by a space is literal text.
            Some(',') if chars.get(pos + 1) != Some(&' ') => {
                flush_run(&mut current, &mut run);
                alternatives.push(std::mem::take(&mut current));
                pos += 1;
            }
            Some(&c) => {
                run.push(c);
                pos += 1;
            }
            None => {
                if let Some(open) = opened_at {
                    return Err(ParseError::UnmatchedOpenBrace { position: open });
                }
                flush_run(&mut current, &mut run);
                alternatives.push(current);
                return Ok((alternatives, pos));
            }
        }
    }
}

/// Closes out a pending literal run, if any, into the current alternative.
fn flush_run(current: &mut Sequence, run: &mut String) {
    if !run.is_empty() {
        current.nodes.push(Node::Literal(std::mem::take(run)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_braces_is_single_literal_alternative() {
        let pattern = BracePattern::parse("nothing to do").unwrap();
        assert_eq!(pattern.variant_count(), 1);
    }

    #[test]
    fn counts_multiply_across_groups() {
        let pattern = BracePattern::parse("{a,b}{c,d,e}").unwrap();
        assert_eq!(pattern.variant_count(), 6);
    }

    #[test]
    fn nested_groups_add_within_a_slot() {
        let pattern = BracePattern::parse("{a,{b,{c,d}}}").unwrap();
        assert_eq!(pattern.variant_count(), 4);
    }

    #[test]
    fn unmatched_open_brace_reports_its_position() {
        let err = BracePattern::parse("ab{cd").unwrap_err();
        assert_eq!(err, ParseError::UnmatchedOpenBrace { position: 2 });
    }

    #[test]
    fn unmatched_close_brace_reports_its_position() {
        let err = BracePattern::parse("ab}cd").unwrap_err();
        assert_eq!(err, ParseError::UnmatchedCloseBrace { position: 2 });
    }

    #[test]
    fn comma_before_space_is_literal() {
        let pattern = BracePattern::parse("{a, b}").unwrap();
        assert_eq!(pattern.variant_count(), 1);
    }
}
