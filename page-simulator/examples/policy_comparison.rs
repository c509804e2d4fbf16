use std::io::{self, Write};

use page_replacement::{second_chance_sweep, PageRecord, Policy};
use page_simulator::report::write_report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scenarios: Vec<(&str, Vec<PageRecord>)> = vec![
        (
            "Oldest page still in use",
            vec![
                PageRecord::new(0, 0, 300, true, false),
                PageRecord::new(1, 100, 120, false, true),
                PageRecord::new(2, 200, 210, true, true),
            ],
        ),
        (
            "Every page referenced",
            vec![
                PageRecord::new(0, 40, 90, true, false),
                PageRecord::new(1, 10, 95, true, true),
                PageRecord::new(2, 25, 80, true, false),
            ],
        ),
        (
            "Clean pages only",
            vec![
                PageRecord::new(0, 5, 50, false, false),
                PageRecord::new(1, 3, 70, false, false),
                PageRecord::new(2, 8, 20, false, false),
            ],
        ),
    ];

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (title, table) in &scenarios {
        write_report(&mut out, table, title, &Policy::all())?;
        let sweep = second_chance_sweep(table)?;
        writeln!(
            out,
            "Second Chance requeued {} page(s) before choosing page {}",
            sweep.rotations, sweep.victim
        )?;
    }

    Ok(())
}
