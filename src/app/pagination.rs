//! Page cursor over the current match set.
//!
//! The cursor itself never refuses to advance. Callers check
//! [`PageSlice::has_more`] before sending `ShowMore`; the event handler does
//! exactly that.

/// One-based page pointer into the match set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    page: usize,
}

/// The books on the cursor's page plus the count beyond it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    pub remaining: usize,
}

impl<T> PageSlice<'_, T> {
    /// Whether a further page exists.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.remaining > 0
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::reset()
    }
}

impl PaginationCursor {
    /// A cursor at page 1.
    #[must_use]
    pub const fn reset() -> Self {
        Self { page: 1 }
    }

    /// The cursor moved one page forward. No bound check.
    #[must_use]
    pub const fn advance(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
        }
    }

    /// Current page number, starting at 1.
    #[must_use]
    pub const fn page(self) -> usize {
        self.page
    }

    /// Slices the cursor's page out of `matches`.
    ///
    /// Returns at most `page_size` items, from `(page - 1) * page_size` up
    /// to `page * page_size`, and `remaining = max(0, len - page * page_size)`.
    /// Pages past the end are empty.
    ///
    /// ```
    /// use zshelf::app::pagination::PaginationCursor;
    ///
    /// let matches: Vec<u32> = (0..25).collect();
    /// let slice = PaginationCursor::reset().slice(&matches, 12);
    /// assert_eq!(slice.items.len(), 12);
    /// assert_eq!(slice.remaining, 13);
    /// ```
    #[must_use]
    pub fn slice<T>(self, matches: &[T], page_size: usize) -> PageSlice<'_, T> {
        let end_boundary = self.page.saturating_mul(page_size);
        let start = (self.page - 1).saturating_mul(page_size).min(matches.len());
        let end = end_boundary.min(matches.len());

        PageSlice {
            items: &matches[start..end],
            remaining: matches.len().saturating_sub(end_boundary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_partition_the_match_set() {
        for len in [0_usize, 1, 11, 12, 13, 25, 36, 100] {
            for page_size in [1_usize, 5, 12, 36] {
                let matches: Vec<usize> = (0..len).collect();
                let mut cursor = PaginationCursor::reset();
                let mut seen = Vec::new();

                loop {
                    let slice = cursor.slice(&matches, page_size);
                    assert!(slice.items.len() <= page_size);
                    assert_eq!(
                        slice.remaining,
                        len.saturating_sub(cursor.page() * page_size)
                    );
                    seen.extend_from_slice(slice.items);
                    if !slice.has_more() {
                        break;
                    }
                    cursor = cursor.advance();
                }

                assert_eq!(seen, matches, "len {len} page size {page_size}");
            }
        }
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut cursor = PaginationCursor::reset();
        for _ in 0..7 {
            cursor = cursor.advance();
        }
        assert_eq!(cursor.page(), 8);
        assert_eq!(PaginationCursor::reset().page(), 1);
        assert_eq!(PaginationCursor::default(), PaginationCursor::reset());
    }

    #[test]
    fn advancing_past_the_end_yields_empty_slice() {
        let matches: Vec<u8> = vec![1, 2, 3];
        let cursor = PaginationCursor::reset().advance().advance();
        let slice = cursor.slice(&matches, 2);
        assert!(slice.items.is_empty());
        assert_eq!(slice.remaining, 0);
        assert!(!slice.has_more());
    }

    #[test]
    fn second_page_of_twenty_five() {
        let matches: Vec<u32> = (0..25).collect();
        let slice = PaginationCursor::reset().advance().slice(&matches, 12);
        assert_eq!(slice.items, &matches[12..24]);
        assert_eq!(slice.remaining, 1);
    }
}
