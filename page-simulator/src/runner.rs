//! Simulation runner
//!
//! Produces the full console output of one invocation: the static worked
//! example (unless skipped), then the banner and report for the second
//! table, which is either generated from a seed or read from CSV. The
//! victims of every block are returned for CSV export.

use std::io::Write;
use std::path::PathBuf;

use log::debug;
use page_replacement::{PageRecord, Policy};

use crate::error::Result;
use crate::generator::{static_table, TableConfig, TableGenerator};
use crate::input::TableReader;
use crate::models::{CsvVictimRow, Seed};
use crate::report::{self, TABLE_TITLE};

/// Heading printed before the static worked example
pub const STATIC_HEADING: &str = "STATIC EXAMPLE (from the prompt):";

/// Configuration for one simulator run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Seed for the random table
    pub seed: Seed,
    /// Shape of the random table
    pub table: TableConfig,
    /// CSV table used instead of a random one
    pub table_path: Option<PathBuf>,
    /// Policies to report, in any order; duplicates are ignored
    pub policies: Vec<Policy>,
    /// Omit the static worked example
    pub skip_static: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: Seed::default(),
            table: TableConfig::default(),
            table_path: None,
            policies: Policy::all(),
            skip_static: false,
        }
    }
}

/// Runs the simulation, writing the report to `out`
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<Vec<CsvVictimRow>> {
    let mut policies = if config.policies.is_empty() {
        Policy::all()
    } else {
        config.policies.clone()
    };
    policies.sort();
    policies.dedup();

    let mut rows = Vec::new();

    if !config.skip_static {
        writeln!(out, "{STATIC_HEADING}")?;
        let victims = report::write_report(out, &static_table(), TABLE_TITLE, &policies)?;
        rows.extend(victims.csv_rows("static"));
    }

    let (table, banner, example) = second_table(config)?;
    writeln!(out, "{banner}")?;
    let victims = report::write_report(out, &table, TABLE_TITLE, &policies)?;
    rows.extend(victims.csv_rows(example));
    out.flush()?;

    Ok(rows)
}

fn second_table(config: &RunConfig) -> Result<(Vec<PageRecord>, String, &'static str)> {
    match &config.table_path {
        Some(path) => Ok((
            TableReader::new(path).read()?,
            format!("(Table loaded from {})", path.display()),
            "file",
        )),
        None => {
            debug!("generating random table with seed {}", config.seed);
            let mut rng = config.seed.rng();
            let table = TableGenerator::new(config.table.clone()).generate(&mut rng)?;
            Ok((table, report::seed_banner(&config.seed), "random"))
        }
    }
}
