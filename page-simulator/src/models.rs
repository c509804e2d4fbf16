// Data models for page replacement reports

use std::fmt;
use std::str::FromStr;

use page_replacement::{PageRecord, Policy, ReplacementError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Seed used when none is given on the command line
pub const DEFAULT_SEED: u64 = 18;

/// Seed for random table generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// Reproducible generation from a fixed value
    Fixed(u64),
    /// Seeded from the operating system, different on every run
    Entropy,
}

impl Seed {
    /// Build a generator instance for this seed
    pub fn rng(&self) -> StdRng {
        match self {
            Seed::Fixed(seed) => StdRng::seed_from_u64(*seed),
            Seed::Entropy => StdRng::from_entropy(),
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Fixed(DEFAULT_SEED)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Fixed(seed) => write!(f, "{seed}"),
            Seed::Entropy => write!(f, "none"),
        }
    }
}

impl FromStr for Seed {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") {
            return Ok(Seed::Entropy);
        }
        s.parse::<u64>()
            .map(Seed::Fixed)
            .map_err(|_| SimError::InvalidSeed(s.to_string()))
    }
}

/// Victims chosen by a set of policies for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VictimReport {
    /// (policy, victim page) in report order
    pub victims: Vec<(Policy, u32)>,
}

impl VictimReport {
    /// Run every policy over the table. Fails on the first policy that fails.
    pub fn compute(
        table: &[PageRecord],
        policies: &[Policy],
    ) -> std::result::Result<Self, ReplacementError> {
        let victims = policies
            .iter()
            .map(|&policy| policy.select_victim(table).map(|page| (policy, page)))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { victims })
    }

    /// Victim chosen by `policy`, if it was part of the report
    pub fn victim(&self, policy: Policy) -> Option<u32> {
        self.victims
            .iter()
            .find(|(p, _)| *p == policy)
            .map(|(_, page)| *page)
    }

    /// Rows for CSV export, tagged with the example they belong to
    pub fn csv_rows(&self, example: &str) -> Vec<CsvVictimRow> {
        self.victims
            .iter()
            .map(|(policy, page)| CsvVictimRow {
                example: example.to_string(),
                policy: policy.as_str().to_string(),
                victim: *page,
            })
            .collect()
    }
}

/// CSV export row for a chosen victim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvVictimRow {
    /// `static`, `random` or `file`
    pub example: String,
    /// Policy display name
    pub policy: String,
    /// Page the policy would evict
    pub victim: u32,
}

/// One page table row as stored in CSV (`page,loaded,last_ref,r,m`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvPageRow {
    /// Page identifier
    pub page: u32,
    /// Load timestamp
    pub loaded: u64,
    /// Last reference timestamp
    pub last_ref: u64,
    /// R bit, 0 or 1
    pub r: u8,
    /// M bit, 0 or 1
    pub m: u8,
}

impl CsvPageRow {
    /// Validate the row and convert it into a record
    pub fn into_record(self) -> Result<PageRecord> {
        let referenced = parse_bit(self.page, "R", self.r)?;
        let modified = parse_bit(self.page, "M", self.m)?;
        if self.last_ref < self.loaded {
            return Err(SimError::InvalidRecord {
                page: self.page,
                loaded: self.loaded,
                last_ref: self.last_ref,
            });
        }
        Ok(PageRecord::new(
            self.page,
            self.loaded,
            self.last_ref,
            referenced,
            modified,
        ))
    }
}

impl From<&PageRecord> for CsvPageRow {
    fn from(record: &PageRecord) -> Self {
        Self {
            page: record.page,
            loaded: record.loaded,
            last_ref: record.last_ref,
            r: u8::from(record.referenced),
            m: u8::from(record.modified),
        }
    }
}

fn parse_bit(page: u32, field: &'static str, value: u8) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(SimError::InvalidBit { page, field, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parsing() {
        assert_eq!("18".parse::<Seed>().unwrap(), Seed::Fixed(18));
        assert_eq!("none".parse::<Seed>().unwrap(), Seed::Entropy);
        assert_eq!("NONE".parse::<Seed>().unwrap(), Seed::Entropy);
        assert!(matches!(
            "abc".parse::<Seed>(),
            Err(SimError::InvalidSeed(s)) if s == "abc"
        ));
        assert!("-1".parse::<Seed>().is_err());
    }

    #[test]
    fn test_seed_default_and_display() {
        assert_eq!(Seed::default(), Seed::Fixed(DEFAULT_SEED));
        assert_eq!(Seed::Fixed(7).to_string(), "7");
        assert_eq!(Seed::Entropy.to_string(), "none");
    }

    #[test]
    fn test_victim_report_lookup_and_rows() {
        let table = [
            PageRecord::new(0, 10, 90, true, true),
            PageRecord::new(1, 20, 30, false, false),
        ];
        let report = VictimReport::compute(&table, &[Policy::Fifo, Policy::Lru]).unwrap();
        assert_eq!(report.victim(Policy::Fifo), Some(0));
        assert_eq!(report.victim(Policy::Lru), Some(1));
        assert_eq!(report.victim(Policy::Nru), None);

        let rows = report.csv_rows("static");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].example, "static");
        assert_eq!(rows[0].policy, "FIFO");
        assert_eq!(rows[1].victim, 1);
    }

    #[test]
    fn test_victim_report_empty_table() {
        assert_eq!(
            VictimReport::compute(&[], &Policy::all()),
            Err(ReplacementError::EmptyTable)
        );
    }

    #[test]
    fn test_csv_row_conversion() {
        let row = CsvPageRow {
            page: 3,
            loaded: 110,
            last_ref: 285,
            r: 1,
            m: 1,
        };
        let record = row.clone().into_record().unwrap();
        assert_eq!(record, PageRecord::new(3, 110, 285, true, true));
        assert_eq!(CsvPageRow::from(&record), row);
    }

    #[test]
    fn test_csv_row_rejects_bad_bit() {
        let row = CsvPageRow {
            page: 1,
            loaded: 0,
            last_ref: 0,
            r: 0,
            m: 2,
        };
        assert!(matches!(
            row.into_record(),
            Err(SimError::InvalidBit {
                page: 1,
                field: "M",
                value: 2
            })
        ));
    }

    #[test]
    fn test_csv_row_rejects_reference_before_load() {
        let row = CsvPageRow {
            page: 4,
            loaded: 50,
            last_ref: 49,
            r: 0,
            m: 0,
        };
        assert!(matches!(
            row.into_record(),
            Err(SimError::InvalidRecord { page: 4, .. })
        ));
    }
}
