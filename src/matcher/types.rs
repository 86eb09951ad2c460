//! Data types for claim validation results.
//!
//! These types form the wire schema of a validation call: claims come in as
//! `{id, text}` pairs, results go out as one [`ClaimResult`] per claim with
//! ordered [`Hit`] records.

use serde::{Deserialize, Serialize};

/// A claim to check against a document: an opaque id plus the phrase to
/// search for. Ids must be unique within one validation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Caller-chosen identifier, echoed back on the result
    pub id: String,
    /// The phrase whose presence is being checked
    pub text: String,
}

impl Claim {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Options for one validation call.
///
/// Unknown keys are rejected at deserialization rather than silently
/// accepted; `context` is unsigned, so a negative width is unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationOptions {
    /// Match only at word boundaries (letters, digits, underscore)
    pub whole_word: bool,
    /// Ignore letter case when matching
    pub case_insensitive: bool,
    /// Characters of surrounding text to include on each side of a match
    pub context: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            whole_word: true,
            case_insensitive: true,
            context: 120,
        }
    }
}

/// Whether a claim was found in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// At least one occurrence found
    Match,
    /// No occurrence found
    NoMatch,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Match => "match",
            MatchStatus::NoMatch => "no_match",
        }
    }
}

/// A single occurrence of a claim's term in the document.
///
/// `offset` is a zero-based character index (Unicode scalar values) into the
/// normalized document text. `page` is 1-based, or `None` when the document
/// carries no pagination info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    pub offset: usize,
    pub page: Option<usize>,
    /// Normalized text surrounding the match, clipped at document boundaries
    pub context: String,
}

/// Per-claim validation outcome. Hits are in text order (left to right).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimResult {
    pub claim_id: String,
    /// The term as supplied by the caller (pre-normalization)
    pub term: String,
    pub status: MatchStatus,
    pub count: usize,
    pub hits: Vec<Hit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults() {
        let opts = ValidationOptions::default();
        assert!(opts.whole_word);
        assert!(opts.case_insensitive);
        assert_eq!(opts.context, 120);
    }

    #[test]
    fn test_options_partial_json_fills_defaults() {
        let opts: ValidationOptions = serde_json::from_str(r#"{"context": 40}"#).unwrap();
        assert_eq!(opts.context, 40);
        assert!(opts.whole_word);
        assert!(opts.case_insensitive);
    }

    #[test]
    fn test_options_unknown_key_rejected() {
        let err = serde_json::from_str::<ValidationOptions>(r#"{"fuzzy": true}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_options_wrong_type_rejected() {
        let err = serde_json::from_str::<ValidationOptions>(r#"{"context": -5}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&MatchStatus::NoMatch).unwrap(),
            r#""no_match""#
        );
        assert_eq!(MatchStatus::Match.as_str(), "match");
    }
}
