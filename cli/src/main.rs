//! isaac-bench: times bulk ISAAC generation against a xorshift64* baseline

mod bench;
mod config;
mod error;

use bench::BenchReport;
use clap::Parser;
use config::{BenchConfig, Variant};
use error::CliError;
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(name = "isaac-bench", about = "Compare ISAAC throughput with xorshift64*")]
struct Args {
    /// JSON config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// State size exponent (4 or 8)
    #[arg(long)]
    alpha: Option<usize>,

    /// Bytes to generate per generator
    #[arg(long)]
    bytes: Option<u64>,

    /// Scalar seed (defaults to wall-clock time)
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter, e.g. "debug" or "isaac_engine_core_rs=trace"
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn into_config(self) -> Result<BenchConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::from_file(path)?,
            None => BenchConfig::default(),
        };
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(alpha) = self.alpha {
            config.alpha = alpha;
        }
        if let Some(bytes) = self.bytes {
            config.bytes = bytes;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(filter: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder.init();
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn run_bench(config: &BenchConfig) -> Result<BenchReport, CliError> {
    let seed = config.seed.unwrap_or_else(clock_seed);
    match (config.variant, config.alpha) {
        (Variant::Isaac32, 4) => bench::run::<u32, 4>(config.bytes, seed),
        (Variant::Isaac32, 8) => bench::run::<u32, 8>(config.bytes, seed),
        (Variant::Isaac64, 4) => bench::run::<u64, 4>(config.bytes, seed),
        (Variant::Isaac64, 8) => bench::run::<u64, 8>(config.bytes, seed),
        (variant, alpha) => Err(CliError::InvalidConfig(format!(
            "{} is not built for alpha {}",
            variant.name(),
            alpha
        ))),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let report = args.into_config().and_then(|config| {
        log::info!("benchmark config: {:?}", config);
        run_bench(&config)
    });

    match report {
        Ok(report) => {
            log::debug!("checksum {:#018x}", report.checksum);
            println!("{}", report);
        }
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}
