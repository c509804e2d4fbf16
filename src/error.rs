//! Error types for victim selection.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReplacementError>;

/// Errors raised while selecting a victim or validating a table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplacementError {
    /// A selector was handed a table with no records.
    #[error("page table is empty")]
    EmptyTable,

    /// The same page identifier appears more than once in a table.
    #[error("page {0} appears more than once in the table")]
    DuplicatePage(u32),

    /// A policy name did not match any known policy.
    #[error("unknown replacement policy '{0}'")]
    UnknownPolicy(String),
}
