use clap::Parser;
use page_simulator::export::write_table_csv;
use page_simulator::generator::{TableConfig, TableGenerator};
use page_simulator::models::Seed;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Random page table generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed: an integer, or "none" for a fresh table every run
    #[arg(long, default_value_t = Seed::default())]
    seed: Seed,

    /// Number of pages
    #[arg(long, default_value = "5")]
    pages: u32,

    /// Largest load timestamp
    #[arg(long, default_value = "400")]
    loaded_max: u64,

    /// Largest last reference timestamp
    #[arg(long, default_value = "500")]
    last_ref_max: u64,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = TableConfig {
        num_pages: args.pages,
        loaded_max: args.loaded_max,
        last_ref_max: args.last_ref_max,
    };
    let table = TableGenerator::new(config).generate(&mut args.seed.rng())?;

    match args.output {
        Some(path) => {
            let file = File::create(&path)?;
            write_table_csv(BufWriter::new(file), &table)?;
            log::info!("wrote {} pages to {}", table.len(), path.display());
        }
        None => write_table_csv(io::stdout().lock(), &table)?,
    }

    Ok(())
}
