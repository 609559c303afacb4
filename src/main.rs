use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use vrp_fixtures::generator::{GeneratorConfig, run};
use vrp_fixtures::onemap::{OneMapClient, OneMapConfig};
use vrp_fixtures::output::SpreadsheetWriter;

/// Generate random address / pickup-delivery job tables for routing experiments.
#[derive(Debug, Parser)]
#[command(name = "vrp-fixtures", version)]
struct Args {
    /// Number of jobs to generate.
    #[arg(short = 'n', long, default_value_t = 30)]
    num_addresses: usize,

    /// Attach random time windows between 07:00 and 22:00.
    #[arg(long)]
    time_windows: bool,

    /// Generate pickup/delivery pairs instead of single addresses.
    #[arg(long)]
    pickup: bool,

    /// Seed for the random generator.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output file (.xlsx or .csv). Defaults to a file under <STORE_DIR>/data.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory holding postal_dict.yaml.
    #[arg(long, default_value = "store", env = "VRP_FIXTURES_STORE")]
    store_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    let args = Args::parse();
    let config = GeneratorConfig {
        num_addresses: args.num_addresses,
        time_windows: args.time_windows,
        output_path: args.output,
        random_seed: args.seed,
        pickup: args.pickup,
        store_dir: args.store_dir,
    };

    let resolver = OneMapClient::connect(OneMapConfig::from_env())?;
    let report = run(&config, &resolver, &SpreadsheetWriter)?;

    tracing::info!(
        path = %report.output_path.display(),
        "generated {} of {} requested jobs",
        report.written,
        report.requested
    );

    Ok(())
}
