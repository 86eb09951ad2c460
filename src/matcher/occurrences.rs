//! Left-to-right occurrence scanning with context extraction.
//!
//! The scan is greedy and non-overlapping: after an accepted match the next
//! search resumes at the match's end. Offsets are reported as character
//! indices (Unicode scalar values) into the scanned text, to line up with
//! the character-based page accounting in [`super::pages`].

use super::pattern::TermPattern;

/// One raw occurrence: a character offset plus its context window. Page
/// attribution happens later, in the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub offset: usize,
    pub context: String,
}

/// Scan `text` for all non-overlapping matches of `pattern`, in text order.
///
/// Each occurrence's context window spans `context` characters on either
/// side of the match, clipped at the text boundaries.
pub fn find_occurrences(text: &str, pattern: &TermPattern, context: usize) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();

    // Byte position of the scan, plus a cursor so character offsets are
    // counted incrementally instead of from the start of the text each time
    let mut pos = 0;
    let mut counted_to = 0;
    let mut chars_before = 0;

    while let Some((start, end)) = pattern.find_from(text, pos) {
        chars_before += text[counted_to..start].chars().count();
        counted_to = start;

        occurrences.push(Occurrence {
            offset: chars_before,
            context: context_window(text, start, end, context),
        });

        pos = end;
    }

    occurrences
}

/// Extract `[start, end)` plus up to `context` characters on each side,
/// never reading past the text boundaries.
fn context_window(text: &str, start: usize, end: usize, context: usize) -> String {
    let mut window_start = start;
    for _ in 0..context {
        match text[..window_start].chars().next_back() {
            Some(c) => window_start -= c.len_utf8(),
            None => break,
        }
    }

    let mut window_end = end;
    for _ in 0..context {
        match text[window_end..].chars().next() {
            Some(c) => window_end += c.len_utf8(),
            None => break,
        }
    }

    text[window_start..window_end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(term: &str, whole_word: bool) -> TermPattern {
        TermPattern::compile(term, whole_word, true).unwrap()
    }

    #[test]
    fn test_no_matches() {
        let occ = find_occurrences("nothing here", &pattern("missing", true), 10);
        assert!(occ.is_empty());
    }

    #[test]
    fn test_matches_in_text_order() {
        let occ = find_occurrences("foo bar foo baz foo", &pattern("foo", true), 0);
        let offsets: Vec<usize> = occ.iter().map(|o| o.offset).collect();
        assert_eq!(offsets, vec![0, 8, 16]);
    }

    #[test]
    fn test_non_overlapping_scan() {
        // "aaa" holds two overlapping "aa" candidates; only the first counts
        let occ = find_occurrences("aaa", &pattern("aa", false), 0);
        assert_eq!(occ.len(), 1);
        assert_eq!(occ[0].offset, 0);
    }

    #[test]
    fn test_context_clipped_at_start() {
        let occ = find_occurrences("hit and more text", &pattern("hit", true), 120);
        assert_eq!(occ[0].offset, 0);
        assert_eq!(occ[0].context, "hit and more text");
    }

    #[test]
    fn test_context_clipped_at_end() {
        let occ = find_occurrences("some text then hit", &pattern("hit", true), 120);
        assert_eq!(occ[0].context, "some text then hit");
    }

    #[test]
    fn test_context_bounded_window() {
        let occ = find_occurrences("aaaa match bbbb", &pattern("match", true), 2);
        assert_eq!(occ[0].context, "a match b");
    }

    #[test]
    fn test_zero_context() {
        let occ = find_occurrences("a match here", &pattern("match", true), 0);
        assert_eq!(occ[0].context, "match");
    }

    #[test]
    fn test_offsets_counted_in_characters() {
        // Two-byte 'é' characters before the match must count once each
        let occ = find_occurrences("\u{E9}\u{E9} hit", &pattern("hit", true), 1);
        assert_eq!(occ[0].offset, 3);
        assert_eq!(occ[0].context, " hit");
    }
}
