//! Yolosplit: deterministic train/val/test splitting for YOLO datasets.
//!
//! Yolosplit takes a flat annotation export (images, per-image YOLO label
//! files, a JSON label catalog and a plain text class list) and reorganizes
//! it into the `images/{train,val,test}` + `labels/{train,val,test}` layout
//! expected by object-detection training pipelines, together with a
//! `data.yaml` manifest. The split is seeded and reproducible.
//!
//! # Modules
//!
//! - [`split`]: the seeded two-stage partitioner
//! - [`layout`]: sample discovery and output tree materialization
//! - [`check`]: pre-flight validation and issue reporting
//! - [`catalog`]: catalog and class list readers
//! - [`manifest`]: `data.yaml` emission
//! - [`error`]: error types for yolosplit operations

pub mod catalog;
pub mod check;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod split;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::SplitError;

/// The yolosplit CLI application.
#[derive(Parser)]
#[command(name = "yolosplit")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Split an export into train/val/test and write the manifest.
    Split(SplitArgs),
    /// Run pre-flight checks without writing anything.
    Check(CheckArgs),
}

/// Arguments for the split subcommand.
#[derive(clap::Args)]
struct SplitArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// Output dataset root.
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Fraction of the full set held out for validation.
    #[arg(long, default_value_t = 0.2)]
    val_size: f64,

    /// Fraction of the full set held out for testing.
    #[arg(long, default_value_t = 0.1)]
    test_size: f64,

    /// Shuffle seed; the fixed default keeps repeat runs identical.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Arguments for the check subcommand.
#[derive(clap::Args)]
struct CheckArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,
}

/// Input locations shared by both subcommands.
#[derive(clap::Args)]
struct InputArgs {
    /// Label catalog JSON file (must contain a 'categories' list).
    #[arg(long)]
    notes: PathBuf,

    /// Directory of image files.
    #[arg(long)]
    images: PathBuf,

    /// Directory of per-image YOLO label files.
    #[arg(long)]
    labels: PathBuf,

    /// Plain text class list, one name per line; defines manifest order.
    #[arg(long)]
    classes: PathBuf,
}

/// Run the yolosplit CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), SplitError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Split(args)) => run_split(args),
        Some(Commands::Check(args)) => run_check(args),
        None => {
            println!("yolosplit {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Deterministic train/val/test splitting for YOLO datasets.");
            println!();
            println!("Run 'yolosplit --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the split subcommand.
///
/// The pipeline is strictly sequential: read inputs, pre-flight, partition,
/// materialize, write the manifest. Any error aborts the run; the manifest
/// is only ever written after a fully successful materialization.
fn run_split(args: SplitArgs) -> Result<(), SplitError> {
    // Reject bad fractions before touching the filesystem.
    split::validate_fractions(args.val_size, args.test_size)?;

    let (class_names, report) = load_and_check(&args.inputs)?;

    if !report.is_ok() {
        print!("{}", report);
        return Err(SplitError::PreflightFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        });
    }

    if !report.is_clean() {
        print!("{}", report);
    }

    let samples = layout::discover_samples(&args.inputs.images)?;
    let partition = split::partition(&samples, args.val_size, args.test_size, args.seed)?;
    let written = layout::materialize(
        &partition,
        &args.inputs.images,
        &args.inputs.labels,
        &args.output,
    )?;
    manifest::write_manifest(&args.output, &class_names)?;

    println!(
        "Split {} sample(s): {} train, {} val, {} test",
        partition.total(),
        partition.train.len(),
        partition.val.len(),
        partition.test.len()
    );
    println!(
        "Wrote {} file(s) and {} under {}",
        written,
        manifest::MANIFEST_FILE_NAME,
        args.output.display()
    );

    Ok(())
}

/// Execute the check subcommand.
fn run_check(args: CheckArgs) -> Result<(), SplitError> {
    let (_, report) = load_and_check(&args.inputs)?;

    print!("{}", report);

    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (args.strict && has_warnings) {
        Err(SplitError::PreflightFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}

/// Load the catalog and class list, then run the pre-flight checks.
fn load_and_check(
    inputs: &InputArgs,
) -> Result<(Vec<String>, check::CheckReport), SplitError> {
    let catalog = catalog::read_catalog(&inputs.notes)?;
    let class_names = catalog::read_class_list(&inputs.classes)?;
    let report = check::check_dataset(&inputs.images, &inputs.labels, &catalog, &class_names)?;
    Ok((class_names, report))
}
