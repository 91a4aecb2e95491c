use primetable::{
    config::SieveConfig, error::Error, oracle::PrimalityOracle, sieve::SieveBuilder,
    statistics::SieveStats,
};
use clap::Parser;
use serde::Serialize;
use std::{path::PathBuf, process::ExitCode};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Primality lookups backed by a precomputed sieve table
#[derive(Parser, Debug)]
#[command(name = "primetable")]
#[command(about = "Primality lookups backed by a precomputed sieve table", long_about = None)]
struct Args {
    /// Path to a JSON config file, e.g. {"max_number": 1000}
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Largest number the table covers (overrides the config file)
    #[arg(short, long)]
    max_number: Option<u64>,

    /// List every prime up to the bound
    #[arg(short, long)]
    list: bool,

    /// Print a JSON report instead of plain text
    #[arg(short, long)]
    json: bool,

    /// Numbers to test
    numbers: Vec<u64>,
}

#[derive(Serialize)]
struct QueryResult {
    number: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_prime: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct Report {
    max_number: u64,
    stats: SieveStats,
    results: Vec<QueryResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primes: Option<Vec<u64>>,
}

fn render_report(report: &Report) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn load_config(args: &Args) -> Result<SieveConfig, Error> {
    let config = match &args.config {
        Some(path) => SieveConfig::load_from_path(path)?,
        None => SieveConfig::default(),
    };
    Ok(config.with_max_number(args.max_number))
}

fn run(args: &Args) -> Result<bool, Error> {
    let config = load_config(args)?;
    let (table, stats) = SieveBuilder::new(config.max_number)?.build_with_stats();
    let oracle = PrimalityOracle::from_table(table);

    let mut all_in_range = true;
    let results: Vec<QueryResult> = args
        .numbers
        .iter()
        .map(|&number| match oracle.check(number) {
            Ok(is_prime) => QueryResult {
                number,
                is_prime: Some(is_prime),
                error: None,
            },
            Err(e) => {
                error!(number, max_number = e.max_number, "query out of range");
                all_in_range = false;
                QueryResult {
                    number,
                    is_prime: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    let primes = args.list.then(|| oracle.primes().collect::<Vec<_>>());

    if args.json {
        let report = Report {
            max_number: oracle.max_number(),
            stats,
            results,
            primes,
        };
        println!("{}", render_report(&report)?);
    } else {
        for result in &results {
            match (result.is_prime, &result.error) {
                (Some(true), _) => println!("{}: prime", result.number),
                (Some(false), _) => println!("{}: not prime", result.number),
                (None, Some(e)) => println!("{}: error: {e}", result.number),
                (None, None) => {}
            }
        }
        if let Some(primes) = primes {
            println!(
                "{} primes up to {}: {:?}",
                primes.len(),
                oracle.max_number(),
                primes
            );
        }
    }

    Ok(all_in_range)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "primetable failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
