//! Not Recently Used (NRU) Victim Selection
//!
//! NRU sorts pages into four classes from their R and M bits and evicts from
//! the lowest non-empty class:
//!
//! ```text
//! class 0: not referenced, not modified   <- evicted first
//! class 1: not referenced, modified
//! class 2: referenced, not modified
//! class 3: referenced, modified           <- evicted last
//! ```
//!
//! Within a class the smallest page identifier wins, so the result does not
//! depend on the order of the table.

use crate::error::{ReplacementError, Result};
use crate::record::PageRecord;

/// Returns the page NRU would evict.
///
/// # Errors
///
/// [`ReplacementError::EmptyTable`] if `table` has no records.
///
/// # Examples
///
/// ```
/// use page_replacement::{nru_victim, PageRecord};
///
/// let table = [
///     PageRecord::new(0, 10, 20, true, false),
///     PageRecord::new(1, 15, 25, false, true),
/// ];
/// assert_eq!(nru_victim(&table).unwrap(), 1);
/// ```
pub fn nru_victim(table: &[PageRecord]) -> Result<u32> {
    table
        .iter()
        .min_by_key(|record| (record.nru_class(), record.page))
        .map(|record| record.page)
        .ok_or(ReplacementError::EmptyTable)
}
