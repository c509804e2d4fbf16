//! Page table generation
//!
//! Provides the fixed worked example and randomly sampled tables. Random
//! tables draw, per page and in this order: `loaded` from `[0, loaded_max]`,
//! `last_ref` from `[loaded, last_ref_max]`, then the R and M bits from
//! `{0, 1}`. With the same seed and parameters the output is identical.

use log::debug;
use page_replacement::PageRecord;
use rand::Rng;

use crate::error::{Result, SimError};

/// Parameters for generating a random page table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of pages; identifiers are `0..num_pages`
    pub num_pages: u32,
    /// Upper bound (inclusive) for load timestamps
    pub loaded_max: u64,
    /// Upper bound (inclusive) for last reference timestamps
    pub last_ref_max: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_pages: 5,
            loaded_max: 400,
            last_ref_max: 500,
        }
    }
}

impl TableConfig {
    /// Check that every page can get a `last_ref >= loaded`
    pub fn validate(&self) -> Result<()> {
        if self.loaded_max > self.last_ref_max {
            return Err(SimError::InvalidBounds {
                loaded_max: self.loaded_max,
                last_ref_max: self.last_ref_max,
            });
        }
        Ok(())
    }
}

/// Generator for random page tables
#[derive(Debug, Clone)]
pub struct TableGenerator {
    config: TableConfig,
}

impl TableGenerator {
    /// Create a new generator with the given configuration
    pub fn new(config: TableConfig) -> Self {
        Self { config }
    }

    /// Sample a table from `rng`
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<PageRecord>> {
        self.config.validate()?;

        let table: Vec<PageRecord> = (0..self.config.num_pages)
            .map(|page| {
                let loaded = rng.gen_range(0..=self.config.loaded_max);
                let last_ref = rng.gen_range(loaded..=self.config.last_ref_max);
                let referenced = rng.gen_range(0..=1u8) == 1;
                let modified = rng.gen_range(0..=1u8) == 1;
                PageRecord::new(page, loaded, last_ref, referenced, modified)
            })
            .collect();

        debug!("generated {} pages: {:?}", table.len(), table);
        Ok(table)
    }
}

/// The four-page worked example
pub fn static_table() -> Vec<PageRecord> {
    vec![
        PageRecord::new(0, 126, 280, true, false),
        PageRecord::new(1, 230, 265, false, true),
        PageRecord::new(2, 140, 270, false, false),
        PageRecord::new(3, 110, 285, true, true),
    ]
}
