//! Mapping flat-text offsets back to page numbers.
//!
//! Pages occupy consecutive character ranges in the concatenated document
//! text, with one separator character between consecutive pages. The locator
//! only does length accounting; it relies on the caller having built the
//! document text as the newline-join of the same page texts (see
//! [`super::validate::Document::from_pages`], which guarantees this by
//! construction).

/// Locates the 1-based page containing a global character offset.
#[derive(Debug)]
pub struct PageLocator {
    /// Character length of each page, in order
    page_lengths: Vec<usize>,
}

impl PageLocator {
    pub fn new(pages: &[String]) -> Self {
        Self {
            page_lengths: pages.iter().map(|p| p.chars().count()).collect(),
        }
    }

    /// Page number for `offset`, or `None` when no page texts were supplied.
    ///
    /// Page `i` (1-based) occupies `[acc, acc + len_i + 1)`, the `+1`
    /// covering the separator after it. Offsets at or past the end of the
    /// last page clamp to the last page rather than failing.
    pub fn locate(&self, offset: usize) -> Option<usize> {
        if self.page_lengths.is_empty() {
            return None;
        }

        let mut acc = 0;
        for (i, len) in self.page_lengths.iter().enumerate() {
            let next = acc + len + 1;
            if offset < next {
                return Some(i + 1);
            }
            acc = next;
        }

        Some(self.page_lengths.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator(pages: &[&str]) -> PageLocator {
        let pages: Vec<String> = pages.iter().map(|p| p.to_string()).collect();
        PageLocator::new(&pages)
    }

    #[test]
    fn test_no_pages_is_unknown() {
        assert_eq!(locator(&[]).locate(0), None);
        assert_eq!(locator(&[]).locate(100), None);
    }

    #[test]
    fn test_boundaries() {
        // "abc" + "\n" + "de": offsets 0-2 page 1, 3 separator, 4-5 page 2
        let loc = locator(&["abc", "de"]);
        assert_eq!(loc.locate(0), Some(1));
        assert_eq!(loc.locate(2), Some(1));
        assert_eq!(loc.locate(3), Some(1)); // separator belongs to page 1's range
        assert_eq!(loc.locate(4), Some(2));
        assert_eq!(loc.locate(5), Some(2));
    }

    #[test]
    fn test_past_end_clamps_to_last_page() {
        let loc = locator(&["abc", "de"]);
        assert_eq!(loc.locate(6), Some(2));
        assert_eq!(loc.locate(1000), Some(2));
    }

    #[test]
    fn test_empty_page_in_sequence() {
        // Empty page still occupies its separator slot
        let loc = locator(&["ab", "", "cd"]);
        assert_eq!(loc.locate(2), Some(1)); // separator after page 1
        assert_eq!(loc.locate(3), Some(2)); // the empty page's separator
        assert_eq!(loc.locate(4), Some(3));
    }

    #[test]
    fn test_lengths_counted_in_characters() {
        let loc = locator(&["\u{E9}\u{E9}", "xy"]);
        assert_eq!(loc.locate(1), Some(1));
        assert_eq!(loc.locate(3), Some(2));
    }
}
