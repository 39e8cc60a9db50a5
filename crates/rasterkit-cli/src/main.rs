//! `rasterkit` CLI - apply one transform to a binary PPM image.

mod exit;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exit::{transform_failure, CliError, Failure};
use rasterkit_core::{codec, Operation, Raster};

const SUPPORTED_COMMANDS: &str = "\
SUPPORTED COMMANDS:
   grayscale
   swap
   invert
   zoom-out
   rotate-right
   swirl <cx> <cy> <strength>
   edge-detection <threshold>";

/// Apply a single image processing operation to a PPM (P6) image.
#[derive(Parser, Debug)]
#[command(name = "rasterkit")]
#[command(version, about, long_about = None, after_help = SUPPORTED_COMMANDS)]
struct Args {
    /// Input PPM image path.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PPM image path.
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Operation name.
    #[arg(value_name = "OPERATION")]
    operation: String,

    /// Operation arguments. Use -1 for a swirl center coordinate to pick the
    /// middle of the image.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => Failure::MissingFilename.into(),
            };
        }
    };

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("rasterkit={log_level},rasterkit_core={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            err.failure.into()
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let operation = Operation::parse(&args.operation, args.args.as_slice())?;

    let mut raster = read_input(&args.input)?;
    tracing::info!(
        input = %args.input.display(),
        rows = raster.rows(),
        cols = raster.cols(),
        "read image"
    );

    operation.apply(&mut raster).map_err(transform_failure)?;
    tracing::info!(
        %operation,
        rows = raster.rows(),
        cols = raster.cols(),
        "applied operation"
    );

    write_output(&args.output, &raster)?;
    tracing::info!(output = %args.output.display(), "wrote image");
    Ok(())
}

fn read_input(path: &Path) -> Result<Raster, CliError> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file {} for reading", path.display()))
        .map_err(|e| CliError::new(Failure::OpenFailed, e))?;

    codec::read_ppm(BufReader::new(file))
        .with_context(|| format!("Failed to read input file {} as a PPM image", path.display()))
        .map_err(|e| CliError::new(Failure::InvalidPpm, e))
}

fn write_output(path: &Path, raster: &Raster) -> Result<(), CliError> {
    let file = File::create(path)
        .with_context(|| format!("Failed to open output file {} for writing", path.display()))
        .map_err(|e| CliError::new(Failure::WriteFailed, e))?;

    codec::write_ppm(BufWriter::new(file), raster)
        .with_context(|| format!("Failed to write output file {}", path.display()))
        .map_err(|e| CliError::new(Failure::WriteFailed, e))
}
