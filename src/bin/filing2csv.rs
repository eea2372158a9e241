use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use filing_tables::{
    ColumnCountStrategy, ExtractOptions, ExtractionReport, HtmlDocument, catalog_tables,
    extract_html_to_csv,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "filing2csv",
    version,
    about = "Extract titled HTML tables from filings into CSV"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract the table following a title and write it as CSV.
    Extract(ExtractArgs),
    /// List every table in the document with its resolved title.
    List(ListArgs),
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Input HTML path.
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV path.
    #[arg(short, long)]
    output: PathBuf,

    /// Section title to look for, e.g. "Consolidated Balance Sheets".
    #[arg(short, long)]
    title: String,

    /// Which title match to use; negative values count from the last one.
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    index: isize,

    /// Column count policy: first-row or max-across-rows.
    #[arg(long, default_value = "first-row")]
    columns: String,

    /// Split the grid at dominating rows and prefix each row with its section name.
    #[arg(long)]
    split: bool,

    /// Keep blank rows and redundant columns.
    #[arg(long)]
    raw: bool,

    /// Output delimiter character.
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Enable verbose warning output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Input HTML path.
    #[arg(short, long)]
    input: PathBuf,

    /// Print each table's attribute-free markup below its title.
    #[arg(long)]
    markup: bool,
}

fn parse_options(args: &ExtractArgs) -> Result<ExtractOptions> {
    let column_count = ColumnCountStrategy::from_str(&args.columns)
        .map_err(|error| anyhow!(error))
        .context("failed to parse --columns")?;

    if !args.delimiter.is_ascii() {
        anyhow::bail!("delimiter must be a single ASCII character");
    }

    Ok(ExtractOptions {
        column_count,
        match_index: args.index,
        clean: !args.raw,
        split_subtables: args.split,
        delimiter: args.delimiter as u8,
    })
}

fn log_report(report: &ExtractionReport, verbose: bool) {
    if report.warnings.is_empty() {
        return;
    }

    eprintln!("warning: {} issue(s) detected", report.warnings.len());
    if verbose {
        for warning in &report.warnings {
            eprintln!(
                "  - {:?} row={:?} col={:?}: {}",
                warning.code, warning.row, warning.col, warning.message
            );
        }
    }
}

fn run_extract(args: &ExtractArgs) -> Result<ExtractionReport> {
    let options = parse_options(args)?;
    extract_html_to_csv(&args.input, &args.output, &args.title, &options)
        .with_context(|| format!("failed to extract tables from '{}'", args.input.display()))
}

fn run_list(args: &ListArgs) -> Result<usize> {
    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("failed to read '{}'", args.input.display()))?;
    let document = HtmlDocument::from_bytes(&bytes);
    let catalog = catalog_tables(&document.root());
    for entry in &catalog {
        let title = entry.title.as_deref().map_or("<untitled>", str::trim);
        println!("{}\t{}", entry.index, title);
        if args.markup {
            println!("{}", entry.markup());
        }
    }
    Ok(catalog.len())
}

fn main() -> ExitCode {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("filing_tables=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Extract(args) => run_extract(&args).map(|report| {
            log_report(&report, args.verbose);
            report.row_count
        }),
        Commands::List(args) => run_list(&args),
    };

    match outcome {
        Ok(0) => ExitCode::from(2),
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(1)
        }
    }
}
