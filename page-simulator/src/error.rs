//! Error types for the simulator.

use std::io;

use page_replacement::ReplacementError;
use thiserror::Error;

/// Result alias for simulator operations.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised while building, reading or reporting a page table.
#[derive(Error, Debug)]
pub enum SimError {
    /// Victim selection or table validation failed.
    #[error(transparent)]
    Replacement(#[from] ReplacementError),

    /// Reading a table, writing the report or exporting failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A CSV row could not be parsed or serialized.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generator bounds leave no valid range for `last_ref`.
    #[error("loaded_max ({loaded_max}) exceeds last_ref_max ({last_ref_max})")]
    InvalidBounds {
        /// Requested upper bound for `loaded`.
        loaded_max: u64,
        /// Requested upper bound for `last_ref`.
        last_ref_max: u64,
    },

    /// An R or M column held something other than 0 or 1.
    #[error("page {page}: {field} bit must be 0 or 1, got {value}")]
    InvalidBit {
        /// Page the row describes.
        page: u32,
        /// `"R"` or `"M"`.
        field: &'static str,
        /// Value found in the column.
        value: u8,
    },

    /// A record was referenced before it was loaded.
    #[error("page {page}: last_ref {last_ref} is earlier than loaded {loaded}")]
    InvalidRecord {
        /// Page the row describes.
        page: u32,
        /// Load timestamp from the row.
        loaded: u64,
        /// Last reference timestamp from the row.
        last_ref: u64,
    },

    /// Seed text was neither an integer nor `none`.
    #[error("invalid seed '{0}': expected an integer or 'none'")]
    InvalidSeed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_error_is_transparent() {
        let err: SimError = ReplacementError::EmptyTable.into();
        assert_eq!(err.to_string(), "page table is empty");
    }

    #[test]
    fn test_bounds_message() {
        let err = SimError::InvalidBounds {
            loaded_max: 600,
            last_ref_max: 500,
        };
        assert_eq!(
            err.to_string(),
            "loaded_max (600) exceeds last_ref_max (500)"
        );
    }
}
