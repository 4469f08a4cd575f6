use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use gridscout::{
    config::CliOverrides, load_puzzle, search, write_report, OutputFormat, SearchConfig,
    SearchError, SearchReport,
};
use std::{num::NonZeroUsize, path::PathBuf, process::ExitCode};
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, SearchError>;

/// Find words in a letter grid and mark them in uppercase
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle file: "ROWS COLS", the grid rows, then the words to find
    input: PathBuf,

    /// File to write the marked grid and the results to
    output: PathBuf,

    /// Number of worker threads (default: CPU cores)
    #[arg(short = 'j', long)]
    threads: Option<NonZeroUsize>,

    /// Configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format (text|json)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print search statistics after the run
    #[arg(short, long)]
    stats: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let config = SearchConfig::load_from(cli.config.as_deref())?.merge_with_cli(CliOverrides {
        thread_count: cli.threads,
        log_level: cli.log_level,
        output_format: cli.format,
    });
    init_logging(&config.log_level);
    debug!(
        "Solving {} into {} with {} workers ({} output)",
        cli.input.display(),
        cli.output.display(),
        config.thread_count,
        config.output_format
    );

    let puzzle = load_puzzle(&cli.input, config.max_word_len)?;
    let report = search(puzzle, &config)?;
    write_report(&report, &cli.output, config.output_format)?;

    if cli.stats {
        print_stats(&report);
    }
    println!(
        "Search complete. Results saved to {}",
        cli.output.display().to_string().blue()
    );
    Ok(())
}

fn print_stats(report: &SearchReport) {
    let stats = &report.stats;
    println!(
        "Found {} of {} words ({} not found)",
        report.found_count().to_string().green(),
        report.results.len(),
        report.not_found_count().to_string().red()
    );
    println!(
        "{} workers, {} critical section entries, {} cells uppercased",
        stats.workers_started, stats.lock_acquisitions, stats.cells_uppercased
    );
}
