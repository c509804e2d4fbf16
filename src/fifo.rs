//! First-In-First-Out (FIFO) Victim Selection
//!
//! FIFO evicts the page that has been resident longest, i.e. the one with
//! the smallest `loaded` timestamp. Reference and modify bits are ignored.
//! Pages loaded at the same instant are ordered by page identifier.

use crate::error::{ReplacementError, Result};
use crate::record::PageRecord;

/// Returns the page FIFO would evict.
///
/// # Errors
///
/// [`ReplacementError::EmptyTable`] if `table` has no records.
pub fn fifo_victim(table: &[PageRecord]) -> Result<u32> {
    table
        .iter()
        .min_by_key(|record| (record.loaded, record.page))
        .map(|record| record.page)
        .ok_or(ReplacementError::EmptyTable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_picks_oldest_load() {
        let table = [
            PageRecord::new(0, 126, 280, true, false),
            PageRecord::new(1, 230, 265, false, true),
            PageRecord::new(2, 140, 270, false, false),
            PageRecord::new(3, 110, 285, true, true),
        ];
        assert_eq!(fifo_victim(&table), Ok(3));
    }

    #[test]
    fn test_fifo_tie_goes_to_smallest_page() {
        let table = [
            PageRecord::new(7, 50, 60, false, false),
            PageRecord::new(2, 50, 90, true, true),
            PageRecord::new(4, 80, 90, false, false),
        ];
        assert_eq!(fifo_victim(&table), Ok(2));
    }

    #[test]
    fn test_fifo_single_page() {
        let table = [PageRecord::new(42, 5, 5, true, true)];
        assert_eq!(fifo_victim(&table), Ok(42));
    }

    #[test]
    fn test_fifo_empty_table() {
        assert_eq!(fifo_victim(&[]), Err(ReplacementError::EmptyTable));
    }
}
