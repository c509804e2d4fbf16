//! Second-Chance Victim Selection
//!
//! Second-Chance keeps resident pages in a FIFO queue ordered by arrival.
//! The head of the queue is inspected:
//!
//! ```text
//!   head                                   tail
//!   [p3 R=1] [p0 R=1] [p2 R=0] [p1 R=0]
//!      |
//!      +-- R set: clear it, move p3 to the tail
//!
//!   [p0 R=1] [p2 R=0] [p1 R=0] [p3 R=0]
//!      |
//!      +-- R set: clear it, move p0 to the tail
//!
//!   [p2 R=0] [p1 R=0] [p3 R=0] [p0 R=0]
//!      |
//!      +-- R clear: p2 is the victim
//! ```
//!
//! Bits are only ever cleared, so a victim is found after at most one full
//! rotation. The sweep is still capped at `2 * N` steps; if the cap is hit
//! the page at the head is returned.
//!
//! The sweep runs on a private copy of the table. The caller's records are
//! never modified.

use std::collections::VecDeque;

use log::{trace, warn};

use crate::error::{ReplacementError, Result};
use crate::record::PageRecord;

/// Result of a Second-Chance sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepOutcome {
    /// Page chosen for eviction.
    pub victim: u32,
    /// Number of pages that had their R bit cleared and were requeued.
    pub rotations: usize,
    /// True if the step cap was reached and the head was taken as-is.
    pub fallback: bool,
}

/// Runs the Second-Chance sweep and reports how it ended.
///
/// The queue is ordered by ascending `loaded`, then by page identifier.
///
/// # Errors
///
/// [`ReplacementError::EmptyTable`] if `table` has no records.
pub fn second_chance_sweep(table: &[PageRecord]) -> Result<SweepOutcome> {
    let mut arrival = table.to_vec();
    arrival.sort_by_key(|record| (record.loaded, record.page));

    let limit = 2 * arrival.len();
    sweep(VecDeque::from(arrival), limit).ok_or(ReplacementError::EmptyTable)
}

/// Returns the page Second-Chance would evict.
///
/// # Errors
///
/// [`ReplacementError::EmptyTable`] if `table` has no records.
///
/// # Examples
///
/// ```
/// use page_replacement::{second_chance_victim, PageRecord};
///
/// // Oldest page was referenced, so it survives one more round
/// let table = [
///     PageRecord::new(0, 10, 50, true, false),
///     PageRecord::new(1, 20, 30, false, false),
/// ];
/// assert_eq!(second_chance_victim(&table).unwrap(), 1);
/// ```
pub fn second_chance_victim(table: &[PageRecord]) -> Result<u32> {
    second_chance_sweep(table).map(|outcome| outcome.victim)
}

fn sweep(mut queue: VecDeque<PageRecord>, limit: usize) -> Option<SweepOutcome> {
    let mut rotations = 0;

    while rotations < limit {
        let mut head = queue.pop_front()?;
        if !head.referenced {
            return Some(SweepOutcome {
                victim: head.page,
                rotations,
                fallback: false,
            });
        }

        trace!("second chance: page {} requeued with R cleared", head.page);
        head.referenced = false;
        queue.push_back(head);
        rotations += 1;
    }

    let head = queue.front()?;
    warn!(
        "second chance: no unreferenced page after {} steps, evicting head page {}",
        limit, head.page
    );
    Some(SweepOutcome {
        victim: head.page,
        rotations,
        fallback: true,
    })
}
