//! Page Metadata Record
//!
//! A `PageRecord` is a snapshot of one resident page at a single instant:
//! when it was loaded, when it was last referenced, and its R/M bits.
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `page` | identifier, unique within a table |
//! | `loaded` | arrival time, lower is older |
//! | `last_ref` | time of last reference, never earlier than `loaded` |
//! | `referenced` | R bit, set on access since the last sweep |
//! | `modified` | M bit, set on write since load |
//!
//! # Usage
//!
//! ```
//! use page_replacement::PageRecord;
//!
//! let record = PageRecord::new(7, 100, 150, true, false);
//! assert_eq!(record.nru_class(), 2);
//! ```

use std::collections::HashSet;

use crate::error::{ReplacementError, Result};

/// Metadata for a single resident page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRecord {
    /// Page identifier.
    pub page: u32,
    /// Load (arrival) timestamp.
    pub loaded: u64,
    /// Timestamp of the most recent reference.
    pub last_ref: u64,
    /// Referenced (R) bit.
    pub referenced: bool,
    /// Modified (M) bit.
    pub modified: bool,
}

impl PageRecord {
    /// Creates a record from its five fields.
    pub fn new(page: u32, loaded: u64, last_ref: u64, referenced: bool, modified: bool) -> Self {
        Self {
            page,
            loaded,
            last_ref,
            referenced,
            modified,
        }
    }

    /// NRU class of the page: `2 * R + M`.
    ///
    /// | R | M | Class |
    /// |---|---|-------|
    /// | 0 | 0 | 0 |
    /// | 0 | 1 | 1 |
    /// | 1 | 0 | 2 |
    /// | 1 | 1 | 3 |
    #[inline]
    pub fn nru_class(&self) -> u8 {
        2 * u8::from(self.referenced) + u8::from(self.modified)
    }
}

/// Checks that no page identifier appears twice.
///
/// Returns the first duplicated identifier found, in table order.
pub fn check_unique_pages(table: &[PageRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(table.len());
    for record in table {
        if !seen.insert(record.page) {
            return Err(ReplacementError::DuplicatePage(record.page));
        }
    }
    Ok(())
}
