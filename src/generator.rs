//! Job table generation.

use std::path::PathBuf;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;

use crate::error::FixtureError;
use crate::postal::{POSTAL_TABLE_FILE, PostalCodePool};
use crate::time_window::TimeWindow;
use crate::traits::{AddressResolver, TableSink};

pub const SINGLE_OUTPUT_FILE: &str = "travelling_salesman.xlsx";
pub const PICKUP_OUTPUT_FILE: &str = "pickup_delivery_jobs.xlsx";

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of jobs to generate. Jobs whose addresses fail to resolve are
    /// dropped, so the table may end up shorter.
    pub num_addresses: usize,
    /// Attach random time windows to every job.
    pub time_windows: bool,
    /// Destination file; defaults to a mode-specific file under `store_dir/data`.
    pub output_path: Option<PathBuf>,
    pub random_seed: u64,
    /// Generate pickup/delivery pairs instead of single addresses.
    pub pickup: bool,
    /// Holds the postal-code table and default outputs.
    pub store_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_addresses: 30,
            time_windows: false,
            output_path: None,
            random_seed: 42,
            pickup: false,
            store_dir: PathBuf::from("store"),
        }
    }
}

impl GeneratorConfig {
    pub fn postal_table_path(&self) -> PathBuf {
        self.store_dir.join(POSTAL_TABLE_FILE)
    }

    pub fn resolved_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => {
                let file = if self.pickup { PICKUP_OUTPUT_FILE } else { SINGLE_OUTPUT_FILE };
                self.store_dir.join("data").join(file)
            }
        }
    }

    fn validate(&self) -> Result<(), FixtureError> {
        if self.num_addresses == 0 {
            return Err(FixtureError::InvalidConfig(
                "num_addresses must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleJob {
    pub job_id: usize,
    pub postal_code: String,
    pub address: String,
    pub time_window: Option<TimeWindow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupDeliveryJob {
    pub job_id: usize,
    pub pickup_postal_code: String,
    pub pickup_address: String,
    pub delivery_postal_code: String,
    pub delivery_address: String,
    pub pickup_time_window: Option<TimeWindow>,
    pub delivery_time_window: Option<TimeWindow>,
}

/// A generated row, either flavour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobRecord {
    Single(SingleJob),
    PickupDelivery(PickupDeliveryJob),
}

impl JobRecord {
    pub fn job_id(&self) -> usize {
        match self {
            JobRecord::Single(job) => job.job_id,
            JobRecord::PickupDelivery(job) => job.job_id,
        }
    }
}

/// One table cell as handed to a sink.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Int(usize),
    Text(String),
    Empty,
}

/// Generated jobs, in generation order. The variant decides the columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobTable {
    Single(Vec<SingleJob>),
    PickupDelivery(Vec<PickupDeliveryJob>),
}

impl JobTable {
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            JobTable::Single(_) => &["job_id", "address", "time_window"],
            JobTable::PickupDelivery(_) => &[
                "job_id",
                "pickup_address",
                "delivery_address",
                "pickup_time_window",
                "delivery_time_window",
            ],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            JobTable::Single(jobs) => jobs.len(),
            JobTable::PickupDelivery(jobs) => jobs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn records(&self) -> Vec<JobRecord> {
        match self {
            JobTable::Single(jobs) => jobs.iter().cloned().map(JobRecord::Single).collect(),
            JobTable::PickupDelivery(jobs) => {
                jobs.iter().cloned().map(JobRecord::PickupDelivery).collect()
            }
        }
    }

    /// Rows of cells matching `headers()`. Windows become JSON label pairs.
    pub fn rows(&self) -> Result<Vec<Vec<Cell>>, FixtureError> {
        match self {
            JobTable::Single(jobs) => jobs
                .iter()
                .map(|job| {
                    Ok(vec![
                        Cell::Int(job.job_id),
                        Cell::Text(job.address.clone()),
                        window_cell(job.time_window.as_ref())?,
                    ])
                })
                .collect(),
            JobTable::PickupDelivery(jobs) => jobs
                .iter()
                .map(|job| {
                    Ok(vec![
                        Cell::Int(job.job_id),
                        Cell::Text(job.pickup_address.clone()),
                        Cell::Text(job.delivery_address.clone()),
                        window_cell(job.pickup_time_window.as_ref())?,
                        window_cell(job.delivery_time_window.as_ref())?,
                    ])
                })
                .collect(),
        }
    }
}

fn window_cell(window: Option<&TimeWindow>) -> Result<Cell, FixtureError> {
    match window {
        Some(window) => Ok(Cell::Text(serde_json::to_string(window)?)),
        None => Ok(Cell::Empty),
    }
}

/// Generates the job table.
///
/// Fails only when the configuration or the pool cannot satisfy the request;
/// jobs whose postal codes do not resolve are skipped.
pub fn generate<R, A>(
    config: &GeneratorConfig,
    pool: &PostalCodePool,
    resolver: &A,
    rng: &mut R,
) -> Result<JobTable, FixtureError>
where
    R: Rng + ?Sized,
    A: AddressResolver + ?Sized,
{
    config.validate()?;
    pool.ensure_capacity(config.num_addresses, config.pickup)?;

    let table = if config.pickup {
        JobTable::PickupDelivery(generate_pairs(config, pool, resolver, rng))
    } else {
        JobTable::Single(generate_singles(config, pool, resolver, rng))
    };

    let dropped = config.num_addresses - table.len();
    if dropped > 0 {
        tracing::info!(dropped, kept = table.len(), "some jobs were dropped after failed resolution");
    }

    Ok(table)
}

fn generate_singles<R, A>(
    config: &GeneratorConfig,
    pool: &PostalCodePool,
    resolver: &A,
    rng: &mut R,
) -> Vec<SingleJob>
where
    R: Rng + ?Sized,
    A: AddressResolver + ?Sized,
{
    let codes = pool.codes();
    let mut jobs = Vec::with_capacity(config.num_addresses);

    for job_id in 1..=config.num_addresses {
        let postal_code = &codes[rng.gen_range(0..codes.len())];

        let Some(address) = resolve(resolver, job_id, postal_code) else {
            continue;
        };

        let time_window = config.time_windows.then(|| TimeWindow::random(rng));

        jobs.push(SingleJob {
            job_id,
            postal_code: postal_code.clone(),
            address,
            time_window,
        });
    }

    jobs
}

fn generate_pairs<R, A>(
    config: &GeneratorConfig,
    pool: &PostalCodePool,
    resolver: &A,
    rng: &mut R,
) -> Vec<PickupDeliveryJob>
where
    R: Rng + ?Sized,
    A: AddressResolver + ?Sized,
{
    let codes = pool.codes();
    let mut jobs = Vec::with_capacity(config.num_addresses);

    for job_id in 1..=config.num_addresses {
        let picked = index::sample(rng, codes.len(), 2);
        let pickup_code = &codes[picked.index(0)];
        let delivery_code = &codes[picked.index(1)];

        let pickup_address = resolve(resolver, job_id, pickup_code);
        let delivery_address = resolve(resolver, job_id, delivery_code);
        let (Some(pickup_address), Some(delivery_address)) = (pickup_address, delivery_address) else {
            continue;
        };

        let (pickup_time_window, delivery_time_window) = if config.time_windows {
            let pickup = TimeWindow::random(rng);
            let delivery = TimeWindow::random_delivery(rng, &pickup);
            (Some(pickup), Some(delivery))
        } else {
            (None, None)
        };

        jobs.push(PickupDeliveryJob {
            job_id,
            pickup_postal_code: pickup_code.clone(),
            pickup_address,
            delivery_postal_code: delivery_code.clone(),
            delivery_address,
            pickup_time_window,
            delivery_time_window,
        });
    }

    jobs
}

fn resolve<A>(resolver: &A, job_id: usize, postal_code: &str) -> Option<String>
where
    A: AddressResolver + ?Sized,
{
    let address = resolver.resolve(postal_code).filter(|address| !address.is_empty());
    if address.is_none() {
        tracing::debug!(job_id, postal_code, "postal code did not resolve, dropping job");
    }
    address
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub output_path: PathBuf,
    pub requested: usize,
    pub written: usize,
}

/// Full run: load the pool, seed the RNG, generate and hand the table to `sink`.
///
/// Nothing is written unless generation succeeded.
pub fn run<A, S>(config: &GeneratorConfig, resolver: &A, sink: &S) -> Result<RunReport, FixtureError>
where
    A: AddressResolver + ?Sized,
    S: TableSink + ?Sized,
{
    config.validate()?;
    sink.check_path(&config.resolved_output_path())?;
    let pool = PostalCodePool::load(&config.postal_table_path())?;
    run_with_pool(config, &pool, resolver, sink)
}

/// Same as [`run`] with an already loaded pool.
pub fn run_with_pool<A, S>(
    config: &GeneratorConfig,
    pool: &PostalCodePool,
    resolver: &A,
    sink: &S,
) -> Result<RunReport, FixtureError>
where
    A: AddressResolver + ?Sized,
    S: TableSink + ?Sized,
{
    let output_path = config.resolved_output_path();
    sink.check_path(&output_path)?;

    let mut rng = StdRng::seed_from_u64(config.random_seed);
    let table = generate(config, pool, resolver, &mut rng)?;

    sink.write(&table, &output_path)?;

    tracing::info!(
        path = %output_path.display(),
        requested = config.num_addresses,
        written = table.len(),
        "job table written"
    );

    Ok(RunReport {
        output_path,
        requested: config.num_addresses,
        written: table.len(),
    })
}
