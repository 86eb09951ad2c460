//! claimcheck - document claim validation
//!
//! Checks whether a set of textual claims ("terms") appear, verbatim or
//! fuzzily normalized, inside a source document, reporting per-claim match
//! status, occurrence counts, and contextual snippets with page attribution.
//!
//! # Architecture
//!
//! The core is a pure claim-matching engine; everything around it is I/O
//! glue:
//! - Text is normalized (NFKC + non-breaking-space folding) before any
//!   comparison, identically for documents and terms
//! - Terms compile to escaped-literal patterns with whole-word and
//!   case-sensitivity options
//! - Hits carry a character offset, a clipped context window, and the
//!   1-based page holding that offset when the source is paginated
//!
//! # Modules
//!
//! - `matcher`: the claim-matching core (pure, no I/O)
//! - `source`: document acquisition (local files, URLs, inline text)
//! - `judge`: optional advisory language-model consultation
//! - `cli`: command-line interface
//! - `config`: configuration discovery and defaults
//!
//! # Usage
//!
//! ```bash
//! # Check two phrases in a PDF, export hit rows to CSV
//! claimcheck validate --doc report.pdf --terms "Annual Report;Loss" --out hits.csv
//!
//! # Validate claims from a JSON file against inline text
//! claimcheck validate --text "The Annual Report confirms..." --claims claims.json
//! ```

pub mod cli;
pub mod config;
pub mod judge;
pub mod matcher;
pub mod source;

// Re-export main types at crate root for convenience
pub use judge::{ClaimJudge, JudgeOpinion, OpenAiJudge};
pub use matcher::{
    validate, Claim, ClaimResult, Document, Hit, MatchStatus, PageLocator, ValidateError,
    ValidationOptions,
};
pub use source::{DocumentSource, SourceError};
