//! automl-io Command Line Interface
//!
//! Inspect challenge input directories, load sample files and stage
//! prediction files for submission.

use automl_io::core::{DataFormat, FeatureTypes, Matrix, Result};
use automl_io::report::{InventoryReport, ReconcileSummary};
use automl_io::{load_samples, reconcile, scan_inventory, SampleMatrix};
use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{error, info, warn};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "automl-io")]
#[command(about = "Dataset discovery, sample loading and result staging for AutoML bundles")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "automl-io contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the datasets found under an input directory
    Inventory(InventoryArgs),
    /// Load a sample file and print its shape
    Load(LoadArgs),
    /// Copy prediction files of every dataset into a submission directory
    Reconcile(ReconcileArgs),
}

#[derive(Args)]
struct InventoryArgs {
    /// Input directory (nested or flat layout)
    input_dir: PathBuf,

    /// Print a JSON report instead of plain names
    #[arg(long)]
    json: bool,

    /// Also save the JSON report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct LoadArgs {
    /// Sample file (e.g. adult_train.data)
    file: PathBuf,

    /// Declared data format
    #[arg(short, long, default_value = "dense")]
    format: CliDataFormat,

    /// Number of features (columns of sparse matrices)
    #[arg(short, long, default_value = "0")]
    num_features: usize,

    /// Print the first N rows
    #[arg(long, default_value = "0")]
    head: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliDataFormat {
    /// Whitespace-separated floats
    #[value(name = "dense")]
    Dense,
    /// index:value pairs
    #[value(name = "sparse")]
    Sparse,
    /// Indices of features equal to one
    #[value(name = "sparse_binary")]
    SparseBinary,
}

impl From<CliDataFormat> for DataFormat {
    fn from(cli_format: CliDataFormat) -> Self {
        match cli_format {
            CliDataFormat::Dense => DataFormat::Dense,
            CliDataFormat::Sparse => DataFormat::Sparse,
            CliDataFormat::SparseBinary => DataFormat::SparseBinary,
        }
    }
}

#[derive(Args)]
struct ReconcileArgs {
    /// Input directory holding the datasets
    #[arg(long)]
    input_dir: PathBuf,

    /// Directory holding the *.predict files
    #[arg(long)]
    result_dir: PathBuf,

    /// Submission directory receiving the copies
    #[arg(long)]
    output_dir: PathBuf,

    /// Print a JSON summary
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Inventory(args) => inventory_command(args),
        Commands::Load(args) => load_command(args),
        Commands::Reconcile(args) => reconcile_command(args),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(e) => {
            error!("Error: {e}");
            process::exit(1);
        }
    }
}

fn inventory_command(args: InventoryArgs) -> Result<bool> {
    info!("Scanning {:?}", args.input_dir);
    let inventory = scan_inventory(&args.input_dir)?;
    let report = InventoryReport::new(&args.input_dir, &inventory);

    if let Some(output) = &args.output {
        report.save_to_file(output)?;
        info!("Inventory report saved to: {output:?}");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for name in report.names() {
            println!("{name}");
        }
    }

    Ok(true)
}

fn load_command(args: LoadArgs) -> Result<bool> {
    let format: DataFormat = args.format.into();
    if format != DataFormat::Dense && args.num_features == 0 {
        warn!("--num-features is 0, every sparse index will be out of range");
    }

    info!("Loading {:?} as {:?}", args.file, format);
    let feature_types = FeatureTypes::numerical(args.num_features);
    let matrix = load_samples(&args.file, format, &feature_types)?;

    let kind = match &matrix {
        SampleMatrix::Dense(_) => "dense",
        SampleMatrix::Sparse(_) => "sparse",
    };
    println!("File: {:?}", args.file);
    println!("Representation: {kind}");
    println!("Rows: {}", matrix.n_rows());
    println!("Columns: {}", matrix.n_cols());
    println!("Stored entries: {}", matrix.nnz());

    for row in 0..args.head.min(matrix.n_rows()) {
        let values: Vec<String> = matrix
            .row_dense(row)
            .iter()
            .map(|v| automl_io::results::format_general(*v))
            .collect();
        println!("  [{row}] {}", values.join(" "));
    }

    Ok(true)
}

fn reconcile_command(args: ReconcileArgs) -> Result<bool> {
    let inventory = scan_inventory(&args.input_dir)?;
    if inventory.is_empty() {
        warn!("No dataset to reconcile in {:?}", args.input_dir);
    }

    let names = inventory.names();
    let report = reconcile(&names, &args.result_dir, &args.output_dir)?;
    let summary = ReconcileSummary::new(&args.output_dir, &report);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        summary.print_summary();
    }

    Ok(report.all_succeeded())
}
