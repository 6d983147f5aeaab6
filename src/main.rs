//! `bmp2png` CLI - convert image trees to PNG with transparent backgrounds.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bmp2png::{Config, Pipeline, SourceFormat};

/// Convert every image under a directory to PNG, making background colors transparent.
#[derive(Parser, Debug)]
#[command(name = "bmp2png")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory tree to convert.
    #[arg(value_name = "INPUT_DIR")]
    input: PathBuf,

    /// Directory the converted tree is written to.
    #[arg(value_name = "OUTPUT_DIR")]
    output: PathBuf,

    /// Source format: BMP or PNG.
    #[arg(value_name = "FORMAT", default_value = "BMP")]
    format: SourceFormat,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            println!("{}", err.render());
            return ExitCode::FAILURE;
        }
    };

    // Logs go to stderr; stdout carries the per-file report
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("bmp2png={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run(&args) {
        tracing::debug!("{err:?}");
        println!("Error processing files: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let config = Config::new(&args.input, &args.output, args.format);

    let pipeline = Pipeline::new(config).context("Failed to initialize pipeline")?;

    let summary = pipeline
        .run(|task| {
            println!(
                "Successfully converted {} to {}",
                task.input.display(),
                task.output.display()
            );
        })
        .context("Failed to convert images")?;

    println!(
        "Converted {} file(s) from {} to {}",
        summary.converted,
        args.input.display(),
        args.output.display()
    );

    Ok(())
}
