//! RNG Battery CLI
//!
//! Reads raw bytes from standard input (or a ChaCha20 reference stream),
//! runs the estimator battery and prints one verdict per line.

use clap::Parser;
use rng_battery::{
    battery::Battery,
    config::FileConfig,
    report::{ColorMode, OutputFormat, Reporter},
    source::ReferenceSource,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "rng-battery")]
#[command(about = "Quick statistical smoke tests for a stream of random bytes")]
#[command(version = rng_battery::VERSION)]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// When to color status tags
    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Column the descriptions are aligned to
    #[arg(long)]
    width: Option<usize>,

    /// Test BYTES of ChaCha20 output instead of standard input
    #[arg(long, value_name = "BYTES")]
    reference: Option<u64>,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Invalid configuration: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => FileConfig::default(),
    };
    if let Some(color) = cli.color {
        config.report.color = color;
    }
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    if let Some(width) = cli.width {
        config.report.width = width;
    }

    info!("RNG Battery v{}", rng_battery::VERSION);

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        if let Err(e) = ctrlc::set_handler(move || stop.store(true, Ordering::Relaxed)) {
            warn!("Interrupt handler not installed: {}", e);
        }
    }

    let mut battery =
        Battery::from_kinds(&config.battery.tests).with_chunk_size(config.battery.chunk_size);

    let consumed = match cli.reference {
        Some(len) => {
            info!("Testing {} bytes of ChaCha20 reference output", len);
            battery.consume(ReferenceSource::from_os_entropy(len), Some(&*stop))
        }
        None => battery.consume(std::io::stdin().lock(), Some(&*stop)),
    };
    if let Err(e) = consumed {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let report = battery.finish();
    info!(
        "Consumed {} bytes: {} verdicts",
        report.bytes_consumed,
        report.verdicts.len()
    );

    let reporter = Reporter::new(
        config.report.format,
        config.report.color,
        config.report.width,
    );
    if let Err(e) = reporter.write(&report, std::io::stdout().lock()) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    // Verdicts are informational; they never change the exit code.
    ExitCode::SUCCESS
}
