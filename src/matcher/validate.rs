//! Claim validation: the orchestrator tying normalization, pattern
//! compilation, occurrence scanning, and page attribution together.
//!
//! A validation call is purely functional: it allocates only call-local
//! data, touches no I/O, and is safe to run concurrently for different
//! documents or claim sets.
//!
//! Malformed input (blank term, duplicate claim id) fails the whole call
//! before any scanning, so callers get an all-or-nothing diagnostic instead
//! of a partially populated result set. Page resolution, by contrast, never
//! fails: it degrades to an unknown page.

use std::collections::HashSet;

use thiserror::Error;

use super::normalize::normalize;
use super::occurrences::find_occurrences;
use super::pages::PageLocator;
use super::pattern::{PatternError, TermPattern};
use super::types::{Claim, ClaimResult, Hit, MatchStatus, ValidationOptions};

/// Errors from a validation call. Any of these aborts the whole call.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// A claim's term cannot be compiled into a pattern
    #[error("claim '{id}' has an unusable term: {source}")]
    InvalidTerm {
        id: String,
        #[source]
        source: PatternError,
    },

    /// Two claims in the same call share an id
    #[error("duplicate claim id '{id}' in the same validation call")]
    DuplicateClaimId { id: String },
}

/// A document ready for validation: its full text, plus per-page texts when
/// the source format is paginated.
///
/// When pages are present, the full text must be their newline-joined
/// concatenation (one `\n` between consecutive pages) for offset-to-page
/// accounting to be correct. [`Document::from_pages`] guarantees that
/// invariant by construction; [`Document::new`] trusts the caller.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    pages: Option<Vec<String>>,
}

impl Document {
    /// Wrap a pre-assembled text and optional page list. The caller is
    /// responsible for the newline-join invariant.
    pub fn new(text: String, pages: Option<Vec<String>>) -> Self {
        Self { text, pages }
    }

    /// An unpaginated document; every hit will have an unknown page.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pages: None,
        }
    }

    /// Build a document from ordered page texts, deriving the full text as
    /// their newline-joined concatenation.
    pub fn from_pages(pages: Vec<String>) -> Self {
        Self {
            text: pages.join("\n"),
            pages: Some(pages),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn pages(&self) -> Option<&[String]> {
        self.pages.as_deref()
    }
}

/// Validate `claims` against `document`, producing one result per claim in
/// input order.
///
/// The document text is normalized once; every term goes through the
/// identical routine. Page texts are also normalized through that same
/// single routine before any length accounting, so a normalization that
/// changes character counts (e.g. a ligature expanding) cannot desynchronize
/// offsets from pages.
pub fn validate(
    document: &Document,
    claims: &[Claim],
    options: &ValidationOptions,
) -> Result<Vec<ClaimResult>, ValidateError> {
    // Fail fast on malformed claims before any scanning
    let mut seen_ids = HashSet::new();
    let mut compiled = Vec::with_capacity(claims.len());
    for claim in claims {
        if !seen_ids.insert(claim.id.as_str()) {
            return Err(ValidateError::DuplicateClaimId {
                id: claim.id.clone(),
            });
        }

        let term = normalize(&claim.text);
        let pattern = TermPattern::compile(&term, options.whole_word, options.case_insensitive)
            .map_err(|source| ValidateError::InvalidTerm {
                id: claim.id.clone(),
                source,
            })?;
        compiled.push(pattern);
    }

    let text = normalize(document.text());
    let pages: Vec<String> = document
        .pages()
        .unwrap_or(&[])
        .iter()
        .map(|p| normalize(p))
        .collect();
    let locator = PageLocator::new(&pages);

    let mut results = Vec::with_capacity(claims.len());
    for (claim, pattern) in claims.iter().zip(&compiled) {
        let occurrences = find_occurrences(&text, pattern, options.context);

        let hits: Vec<Hit> = occurrences
            .into_iter()
            .map(|o| Hit {
                offset: o.offset,
                page: locator.locate(o.offset),
                context: o.context,
            })
            .collect();

        let status = if hits.is_empty() {
            MatchStatus::NoMatch
        } else {
            MatchStatus::Match
        };

        results.push(ClaimResult {
            claim_id: claim.id.clone(),
            term: claim.text.clone(),
            status,
            count: hits.len(),
            hits,
        });
    }

    Ok(results)
}
