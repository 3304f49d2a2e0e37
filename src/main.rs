//! CLI entry point for the automobile sales dashboard.
//!
//! Loads the sales table once, then renders the yearly or recession view for
//! a single selection (`render`) or for a sequence of console selections
//! (`interactive`).

use anyhow::{Context, Result};
use auto_sales_dashboard::{
    DashboardUpdate, Dataset,
    config::Config,
    output::{print_pretty, write_json, write_tables},
    selector::{
        DASHBOARD_TITLE, FIRST_YEAR, LAST_YEAR, RECESSION_STATISTICS, REPORT_TYPE_PLACEHOLDER,
        REPORT_TYPES, YEAR_PLACEHOLDER, YEARLY_STATISTICS, compute_enablement, year_options,
    },
};
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "auto-sales-dashboard")]
#[command(about = "Historical automobile sales statistics dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Table,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one view for a report type and optional year
    Render {
        /// "Yearly Statistics" or "Recession Period Statistics"
        #[arg(short, long)]
        report_type: Option<String>,

        /// Year to break down (yearly statistics only)
        #[arg(short, long)]
        year: Option<String>,

        /// Path to file or URL of the sales CSV (overrides DATASET_SOURCE)
        #[arg(short, long, value_name = "FILE_OR_URL")]
        source: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Pick report types and years from the console, re-rendering each time
    Interactive {
        /// Path to file or URL of the sales CSV (overrides DATASET_SOURCE)
        #[arg(short, long, value_name = "FILE_OR_URL")]
        source: Option<String>,
    },
    /// Show the dashboard's selectable options
    Options,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let _file_guard = init_tracing(&config.log_file_path);

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            report_type,
            year,
            source,
            format,
        } => {
            let config = config.with_source(source);
            let dataset = load_dataset(&config).await?;

            let update = DashboardUpdate::new(report_type.as_deref(), year.as_deref(), &dataset);
            print_pretty(&update);

            let stdout = io::stdout().lock();
            match format {
                Format::Json => write_json(stdout, &update)?,
                Format::Table => write_tables(stdout, &update)?,
            }
        }
        Commands::Interactive { source } => {
            let config = config.with_source(source);
            let dataset = load_dataset(&config).await?;
            run_interactive(&dataset)?;
        }
        Commands::Options => {
            println!("{DASHBOARD_TITLE}\n");
            println!("Report types ({REPORT_TYPE_PLACEHOLDER}):");
            for report_type in REPORT_TYPES {
                println!("  {report_type}");
            }
            println!("Years ({YEAR_PLACEHOLDER}): {FIRST_YEAR}-{LAST_YEAR}");
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
///
/// The returned guard must live until exit so buffered file lines are flushed.
fn init_tracing(log_file_path: &str) -> WorkerGuard {
    let log_dir = Path::new(log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("auto_sales_dashboard.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", "info"));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(env_filter("RUST_LOG_JSON", "debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    file_guard
}

/// Reads directives from `var`, falling back to `default` when unset or invalid.
fn env_filter(var: &str, default: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Loads the dataset; any failure here aborts startup.
async fn load_dataset(config: &Config) -> Result<Dataset> {
    Dataset::load(&config.dataset_source)
        .await
        .inspect_err(|e| error!(error = %e, source = %config.dataset_source, "Dataset load failed"))
        .context("cannot start dashboard without its dataset")
}

/// Console session: one render per selection until `q` or end of input.
fn run_interactive(dataset: &Dataset) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    info!(records = dataset.len(), "Interactive session started");
    println!("{DASHBOARD_TITLE}\n");

    loop {
        println!("Select Statistics:");
        println!("[1] {YEARLY_STATISTICS}");
        println!("[2] {RECESSION_STATISTICS}");
        println!("[q] Quit");
        let Some(choice) = prompt(&mut lines, "Enter choice: ")? else {
            break;
        };

        let report_type = match choice.as_str() {
            "q" | "Q" => break,
            "1" => Some(YEARLY_STATISTICS.to_string()),
            "2" => Some(RECESSION_STATISTICS.to_string()),
            "" => None,
            other => Some(other.to_string()),
        };

        let year = if compute_enablement(report_type.as_deref()) {
            let range = year_options();
            let label = format!("{YEAR_PLACEHOLDER} ({}-{}): ", range.start(), range.end());
            match prompt(&mut lines, &label)? {
                Some(year) => Some(year),
                None => break,
            }
        } else {
            None
        };

        let update = DashboardUpdate::new(report_type.as_deref(), year.as_deref(), dataset);
        println!();
        write_tables(io::stdout().lock(), &update)?;
    }

    println!("Exiting the dashboard.");
    Ok(())
}

/// Prints `label` and reads one trimmed line; `None` at end of input.
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
