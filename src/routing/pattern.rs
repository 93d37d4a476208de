//! Path pattern parsing.
//!
//! # Responsibilities
//! - Split a templated pattern (`/prefix/{name}.suffix`) into its
//!   prefix, placeholder token and suffix
//! - Reject anything that is not exactly one well-formed placeholder
//!
//! # Design Decisions
//! - Parts borrow from the input; callers own them if they need to
//! - The placeholder keeps its braces so it can be substituted verbatim

use thiserror::Error;

/// Errors produced while parsing a templated pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern is the empty string.
    #[error("empty pattern")]
    Empty,

    /// The pattern contains no `{...}` placeholder.
    #[error("no placeholder found")]
    NoPlaceholder,

    /// A `{` is not closed before the end of the pattern (or before another `{`).
    #[error("unterminated placeholder at byte {0}")]
    Unterminated(usize),

    /// A `}` appears outside of any placeholder.
    #[error("unmatched '}}' at byte {0}")]
    UnmatchedClose(usize),

    /// The placeholder body is empty (`{}`).
    #[error("empty placeholder at byte {0}")]
    EmptyPlaceholder(usize),

    /// More than one placeholder.
    #[error("multiple placeholders")]
    MultiplePlaceholders,
}

/// The three parts of a templated pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternParts<'a> {
    pub prefix: &'a str,
    /// The `{name}` token, braces included.
    pub placeholder: &'a str,
    pub suffix: &'a str,
}

impl<'a> PatternParts<'a> {
    /// Placeholder name without braces.
    pub fn name(&self) -> &'a str {
        &self.placeholder[1..self.placeholder.len() - 1]
    }
}

/// Parse a pattern holding exactly one placeholder.
///
/// Literal paths are not patterns; routing them here yields
/// [`PatternError::NoPlaceholder`].
pub fn parse_pattern(pattern: &str) -> Result<PatternParts<'_>, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }

    let mut open: Option<usize> = None;
    let mut found: Option<(usize, usize)> = None;

    for (i, c) in pattern.char_indices() {
        match c {
            '{' => {
                if let Some(start) = open {
                    return Err(PatternError::Unterminated(start));
                }
                open = Some(i);
            }
            '}' => {
                let start = open.take().ok_or(PatternError::UnmatchedClose(i))?;
                if i == start + 1 {
                    return Err(PatternError::EmptyPlaceholder(start));
                }
                if found.is_some() {
                    return Err(PatternError::MultiplePlaceholders);
                }
                found = Some((start, i + 1));
            }
            _ => {}
        }
    }

    if let Some(start) = open {
        return Err(PatternError::Unterminated(start));
    }

    let (start, end) = found.ok_or(PatternError::NoPlaceholder)?;
    Ok(PatternParts {
        prefix: &pattern[..start],
        placeholder: &pattern[start..end],
        suffix: &pattern[end..],
    })
}

/// Returns true if the string contains a `{` and so should be parsed as a pattern.
pub fn looks_templated(s: &str) -> bool {
    s.contains('{')
}
