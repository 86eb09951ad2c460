//! Claim-matching engine.
//!
//! Given a document's text (optionally split into pages) and a list of
//! claims, this module reports for each claim whether its term appears,
//! how often, and where, with a context snippet and a 1-based page number
//! per hit.
//!
//! # Design principles
//!
//! - **Normalize everything once, identically**: the document text, every
//!   page text, and every term go through the same NFKC + space-folding
//!   pass before any comparison or offset math.
//! - **Literal terms**: claims are phrases, never pattern syntax.
//! - **Pure and call-local**: no I/O, no caching, no shared state; calls
//!   for different documents can run concurrently.
//! - **All-or-nothing errors**: a malformed claim aborts the whole call;
//!   page resolution instead degrades to an unknown page, never failing.
//!
//! # Example
//!
//! ```
//! use claimcheck::matcher::{validate, Claim, Document, ValidationOptions};
//!
//! let doc = Document::from_text("The Annual Report confirms Revenue of $10M.");
//! let claims = vec![Claim::new("c1", "Annual Report")];
//!
//! let results = validate(&doc, &claims, &ValidationOptions::default()).unwrap();
//! assert_eq!(results[0].count, 1);
//! assert_eq!(results[0].hits[0].offset, 4);
//! ```

pub mod normalize;
pub mod occurrences;
pub mod pages;
pub mod pattern;
pub mod types;
pub mod validate;

pub use normalize::normalize;
pub use occurrences::{find_occurrences, Occurrence};
pub use pages::PageLocator;
pub use pattern::{PatternError, TermPattern};
pub use types::{Claim, ClaimResult, Hit, MatchStatus, ValidationOptions};
pub use validate::{validate, Document, ValidateError};
