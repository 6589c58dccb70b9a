use std::io::BufRead;
use std::path::PathBuf;

use catalog_tools::config::{
    ColumnSettings, DEFAULT_DISPLAY_COLUMN, DEFAULT_KEY_COLUMN, DEFAULT_PRICE_COLUMN,
};
use catalog_tools::dedupe::{self, DedupeReport};
use catalog_tools::{Result, ToolError};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    let pause = cli.pause();

    let code = match run(cli) {
        Ok(report) => {
            print_report(&report);
            0
        }
        Err(error) => {
            println!("{error}");
            1
        }
    };

    if pause {
        wait_for_enter();
    }
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<DedupeReport> {
    init_logging()?;
    match cli.command {
        Command::Run(args) => {
            let settings = args.settings();
            tracing::debug!(?settings, "column settings resolved");
            dedupe::run(&args.input, &settings)
        }
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn print_report(report: &DedupeReport) {
    println!("Done.");
    println!("Saved cleaned file: {}", report.deduped_path.display());
    println!("Saved removed rows: {}", report.removed_path.display());
    if report.sorted_by_display {
        println!("Sorted output by: {}", report.display_column);
    } else {
        println!(
            "{} column not found; kept original row order.",
            report.display_column
        );
    }
    println!("Note: All ID-like columns are saved as TEXT to avoid scientific notation.");
}

fn wait_for_enter() {
    println!("Press Enter to close...");
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Deduplicate product export variants, keeping the highest price per SKU."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn pause(&self) -> bool {
        match &self.command {
            Command::Run(args) => args.pause,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Deduplicate a spreadsheet and write the cleaned and removed rows.
    Run(RunArgs),
}

#[derive(clap::Args)]
struct RunArgs {
    /// Input workbook (.xlsx, .xlsm or .xls).
    input: PathBuf,

    /// Column rows are grouped by.
    #[arg(long, default_value = DEFAULT_KEY_COLUMN)]
    key_column: String,

    /// Column holding the price used to pick the surviving row.
    #[arg(long, default_value = DEFAULT_PRICE_COLUMN)]
    price_column: String,

    /// Column the output is sorted by when present.
    #[arg(long, default_value = DEFAULT_DISPLAY_COLUMN)]
    display_column: String,

    /// Wait for Enter before exiting.
    #[arg(long)]
    pause: bool,
}

impl RunArgs {
    fn settings(&self) -> ColumnSettings {
        ColumnSettings::new(
            self.key_column.clone(),
            self.price_column.clone(),
            self.display_column.clone(),
        )
    }
}
