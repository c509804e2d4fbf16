use clap::Parser;
use std::io;
use std::path::PathBuf;

use page_replacement::Policy;
use page_simulator::export;
use page_simulator::generator::TableConfig;
use page_simulator::models::Seed;
use page_simulator::runner::{self, RunConfig};

/// Page replacement victim simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the random table: an integer, or "none" for a fresh table every run
    #[arg(long, default_value_t = Seed::default())]
    seed: Seed,

    /// Number of pages in the random table
    #[arg(long, default_value = "5")]
    pages: u32,

    /// Largest load timestamp in the random table
    #[arg(long, default_value = "400")]
    loaded_max: u64,

    /// Largest last reference timestamp in the random table
    #[arg(long, default_value = "500")]
    last_ref_max: u64,

    /// Read the second table from a CSV file instead of generating it
    #[arg(short, long, value_name = "PATH")]
    table: Option<PathBuf>,

    /// Policies to report (nru, fifo, lru, second-chance)
    /// If not provided, all policies are reported
    #[arg(short, long, value_name = "POLICIES", num_args = 1.., value_delimiter = ',')]
    policies: Option<Vec<Policy>>,

    /// Export chosen victims to CSV file
    #[arg(long, value_name = "PATH")]
    output_csv: Option<PathBuf>,

    /// Do not print the static worked example
    #[arg(long)]
    skip_static: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = RunConfig {
        seed: args.seed,
        table: TableConfig {
            num_pages: args.pages,
            loaded_max: args.loaded_max,
            last_ref_max: args.last_ref_max,
        },
        table_path: args.table,
        policies: args.policies.unwrap_or_default(),
        skip_static: args.skip_static,
    };

    let rows = runner::run(&config, &mut io::stdout().lock())?;

    if let Some(csv_path) = args.output_csv {
        export::export_csv(&csv_path, &rows)?;
    }

    Ok(())
}
