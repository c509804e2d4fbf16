//! Console report for a page table
//!
//! A report block is the table sorted by page, a blank line, one
//! `x) <Policy> will replace page: <n>` line per policy and a separator:
//!
//! ```text
//!
//! === Table ===
//! Page   Loaded  LastRef   R   M
//!    0      126      280   1   0
//!    1      230      265   0   1
//!
//! a) NRU will replace page: 1
//! ----------------------------------------
//! ```
//!
//! Victims are computed before anything is written, so a failing table
//! produces no partial block.

use std::io::Write;

use page_replacement::{PageRecord, Policy};

use crate::error::Result;
use crate::models::{Seed, VictimReport};

/// Width of the dashed line closing each report block
pub const SEPARATOR_WIDTH: usize = 40;

/// Title used for every table in the console report
pub const TABLE_TITLE: &str = "Table";

/// Render the table view, sorted by ascending page
pub fn render_table(table: &[PageRecord], title: &str) -> String {
    let mut rows: Vec<&PageRecord> = table.iter().collect();
    rows.sort_by_key(|record| record.page);

    let mut text = format!(
        "\n=== {title} ===\n{:>4} {:>8} {:>8} {:>3} {:>3}\n",
        "Page", "Loaded", "LastRef", "R", "M"
    );
    for record in rows {
        text.push_str(&format!(
            "{:4} {:8} {:8} {:3} {:3}\n",
            record.page,
            record.loaded,
            record.last_ref,
            u8::from(record.referenced),
            u8::from(record.modified)
        ));
    }
    text
}

/// Line announcing where the second table came from
pub fn seed_banner(seed: &Seed) -> String {
    match seed {
        Seed::Fixed(seed) => format!("(Random table generated with seed={seed})"),
        Seed::Entropy => "(Random table generated with no fixed seed)".to_string(),
    }
}

/// Compute victims for `policies` and write one report block to `out`
pub fn write_report<W: Write>(
    out: &mut W,
    table: &[PageRecord],
    title: &str,
    policies: &[Policy],
) -> Result<VictimReport> {
    let report = VictimReport::compute(table, policies)?;

    write!(out, "{}", render_table(table, title))?;
    writeln!(out)?;
    for (policy, page) in &report.victims {
        writeln!(
            out,
            "{}) {} will replace page: {}",
            policy.label(),
            policy.as_str(),
            page
        )?;
    }
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

    Ok(report)
}
