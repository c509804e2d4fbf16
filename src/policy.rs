//! Replacement Policy Enumeration
//!
//! `Policy` names the four supported policies and dispatches to their
//! selectors. Each policy carries a fixed report letter so that a report
//! restricted to a subset of policies still labels them consistently.
//!
//! | Policy | Letter | Name |
//! |--------|--------|------|
//! | `Nru` | a | NRU |
//! | `Fifo` | b | FIFO |
//! | `Lru` | c | LRU |
//! | `SecondChance` | d | Second Chance |

use core::fmt;
use core::str::FromStr;

use crate::error::{ReplacementError, Result};
use crate::record::PageRecord;
use crate::{fifo_victim, lru_victim, nru_victim, second_chance_victim};

/// Page replacement policies supported by the selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Policy {
    /// Not Recently Used.
    Nru,
    /// First-In-First-Out.
    Fifo,
    /// Least Recently Used.
    Lru,
    /// FIFO with a reference-bit second chance.
    SecondChance,
}

impl Policy {
    /// Display name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Nru => "NRU",
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::SecondChance => "Second Chance",
        }
    }

    /// Report letter.
    pub fn label(&self) -> char {
        match self {
            Policy::Nru => 'a',
            Policy::Fifo => 'b',
            Policy::Lru => 'c',
            Policy::SecondChance => 'd',
        }
    }

    /// All policies, in report order.
    pub fn all() -> Vec<Policy> {
        vec![
            Policy::Nru,
            Policy::Fifo,
            Policy::Lru,
            Policy::SecondChance,
        ]
    }

    /// Returns the page this policy would evict from `table`.
    ///
    /// # Errors
    ///
    /// [`ReplacementError::EmptyTable`] if `table` has no records.
    pub fn select_victim(&self, table: &[PageRecord]) -> Result<u32> {
        match self {
            Policy::Nru => nru_victim(table),
            Policy::Fifo => fifo_victim(table),
            Policy::Lru => lru_victim(table),
            Policy::SecondChance => second_chance_victim(table),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Policy {
    type Err = ReplacementError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "nru" => Ok(Policy::Nru),
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "second-chance" | "second_chance" | "sc" | "clock" => Ok(Policy::SecondChance),
            _ => Err(ReplacementError::UnknownPolicy(s.to_string())),
        }
    }
}
