//! Victim selection for classic page replacement policies.
//!
//! Given a small table of page metadata (load time, last reference time and
//! the R/M bits), each policy decides which page it would evict next. All
//! selectors are pure functions of the table they receive.
//!
//! ## Quick Reference
//!
//! | Policy | Selector | Evicts |
//! |--------|----------|--------|
//! | NRU | [`nru_victim`] | lowest `2*R + M` class, smallest page on ties |
//! | FIFO | [`fifo_victim`] | earliest `loaded` |
//! | LRU | [`lru_victim`] | earliest `last_ref` |
//! | Second Chance | [`second_chance_victim`] | first page in arrival order whose R bit is clear after the sweep |
//!
//! ## Example
//!
//! ```rust
//! use page_replacement::{PageRecord, Policy};
//!
//! let table = vec![
//!     PageRecord::new(0, 126, 280, true, false),
//!     PageRecord::new(1, 230, 265, false, true),
//!     PageRecord::new(2, 140, 270, false, false),
//!     PageRecord::new(3, 110, 285, true, true),
//! ];
//!
//! assert_eq!(Policy::Nru.select_victim(&table).unwrap(), 2);
//! assert_eq!(Policy::Fifo.select_victim(&table).unwrap(), 3);
//! assert_eq!(Policy::Lru.select_victim(&table).unwrap(), 1);
//! assert_eq!(Policy::SecondChance.select_victim(&table).unwrap(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`record`]: the per-page metadata record
//! - [`nru`], [`fifo`], [`lru`], [`second_chance`]: one selector per policy
//! - [`policy`]: enum dispatch over the four selectors
//! - [`error`]: error type shared by the selectors

/// Error type returned by the selectors.
pub mod error;

/// Per-page metadata.
///
/// Provides `PageRecord`, the fixed-field snapshot of one page, and the
/// table-level uniqueness check.
pub mod record;

/// Not Recently Used (NRU) victim selection.
pub mod nru;

/// First-In-First-Out (FIFO) victim selection.
pub mod fifo;

/// Least Recently Used (LRU) victim selection.
pub mod lru;

/// Second-Chance victim selection.
///
/// A FIFO queue in arrival order where a set reference bit buys the page one
/// trip to the back of the queue.
pub mod second_chance;

/// Policy enumeration and dispatch.
pub mod policy;

pub use error::{ReplacementError, Result};
pub use fifo::fifo_victim;
pub use lru::lru_victim;
pub use nru::nru_victim;
pub use policy::Policy;
pub use record::{check_unique_pages, PageRecord};
pub use second_chance::{second_chance_sweep, second_chance_victim, SweepOutcome};
