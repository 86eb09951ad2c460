//! Compiled search patterns for claim terms.
//!
//! Terms are always matched as literals: every regex metacharacter in the
//! term is escaped, so no claim is ever interpreted as a pattern language.
//! Whole-word mode uses true boundary semantics, not whitespace splitting:
//! a candidate match is rejected only when the character immediately before
//! or after it is a word character (letter, digit, or underscore), so
//! punctuation-adjacent matches succeed while alphanumeric-adjacent ones
//! fail.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Errors from compiling a term into a pattern
#[derive(Debug, Error)]
pub enum PatternError {
    /// The term was empty or whitespace-only after normalization. An empty
    /// literal would match at every position, flooding the results, so it is
    /// rejected here instead.
    #[error("term is empty or blank after normalization")]
    EmptyTerm,

    /// The escaped literal failed to compile (e.g. the term exceeds the
    /// regex size limit)
    #[error("failed to compile term pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// A reusable matcher for one normalized term
#[derive(Debug)]
pub struct TermPattern {
    regex: Regex,
    whole_word: bool,
}

impl TermPattern {
    /// Compile a normalized term. Fails on empty/blank terms rather than
    /// producing a match-everything pattern.
    pub fn compile(
        term: &str,
        whole_word: bool,
        case_insensitive: bool,
    ) -> Result<Self, PatternError> {
        if term.trim().is_empty() {
            return Err(PatternError::EmptyTerm);
        }

        let regex = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(case_insensitive)
            .build()?;

        Ok(Self { regex, whole_word })
    }

    /// Find the next acceptable match at or after byte offset `from`,
    /// returning its byte range.
    ///
    /// Candidates that fail the word-boundary check resume the scan one
    /// character past the candidate's start, so an overlapping candidate
    /// with valid boundaries is never skipped.
    pub fn find_from(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        let mut pos = from;
        while pos <= text.len() {
            let m = self.regex.find_at(text, pos)?;
            let (start, end) = (m.start(), m.end());

            if !self.whole_word || word_bounded(text, start, end) {
                return Some((start, end));
            }

            let step = text[start..].chars().next().map_or(1, |c| c.len_utf8());
            pos = start + step;
        }
        None
    }
}

/// True when neither neighbor of `[start, end)` is a word character
fn word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
