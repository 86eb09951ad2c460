//! Text canonicalization applied before any comparison.
//!
//! Matching is defined over normalized forms, so the same routine must be
//! applied to the document text, every page text, and every claim term.
//! Normalization is NFKC (Unicode compatibility composition) followed by
//! folding non-breaking spaces to ordinary spaces, so phrases copied out of
//! rendered documents still line up with extracted text.

use unicode_normalization::UnicodeNormalization;

/// Canonicalize raw text for comparison. Pure; empty in, empty out.
pub fn normalize(text: &str) -> String {
    text.nfkc()
        .map(|c| if c == '\u{00A0}' { ' ' } else { c })
        .collect()
}
