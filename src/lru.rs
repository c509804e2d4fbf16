//! Least Recently Used (LRU) Victim Selection
//!
//! LRU evicts the page whose last reference lies furthest in the past, i.e.
//! the smallest `last_ref`. On equal timestamps the smaller page identifier
//! is chosen.

use crate::error::{ReplacementError, Result};
use crate::record::PageRecord;

/// Returns the page LRU would evict.
///
/// # Errors
///
/// [`ReplacementError::EmptyTable`] if `table` has no records.
pub fn lru_victim(table: &[PageRecord]) -> Result<u32> {
    table
        .iter()
        .min_by_key(|record| (record.last_ref, record.page))
        .map(|record| record.page)
        .ok_or(ReplacementError::EmptyTable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_picks_oldest_reference() {
        let table = [
            PageRecord::new(0, 126, 280, true, false),
            PageRecord::new(1, 230, 265, false, true),
            PageRecord::new(2, 140, 270, false, false),
            PageRecord::new(3, 110, 285, true, true),
        ];
        assert_eq!(lru_victim(&table), Ok(1));
    }

    #[test]
    fn test_lru_is_independent_of_load_order() {
        // Oldest load is not the least recently used
        let table = [
            PageRecord::new(0, 1, 400, false, false),
            PageRecord::new(1, 300, 301, false, false),
        ];
        assert_eq!(lru_victim(&table), Ok(1));
    }

    #[test]
    fn test_lru_tie_goes_to_smallest_page() {
        let table = [
            PageRecord::new(6, 10, 70, false, false),
            PageRecord::new(1, 20, 70, false, false),
        ];
        assert_eq!(lru_victim(&table), Ok(1));
    }

    #[test]
    fn test_lru_empty_table() {
        assert_eq!(lru_victim(&[]), Err(ReplacementError::EmptyTable));
    }
}
