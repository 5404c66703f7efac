// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use pi_forensics::utils::logging::{
    format_error, format_info, format_status, format_success, format_warning, init_logger,
};
use pi_forensics::{Config, ForensicsError, ReportWriter, Summarizer, read_summary};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "pi_forensics")]
#[command(version)]
#[command(about = "Raspberry Pi read-only forensics toolkit", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash boot files, compare against baselines, extract indicators and write summary.json
    Summarize {
        /// Run root directory (e.g. output/<timestamp>)
        #[arg(long, value_name = "DIR")]
        root: PathBuf,
    },

    /// Build reports/report.md (and report.html if requested) from summary.json
    Report {
        #[arg(long, value_name = "DIR")]
        root: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Md)]
        format: Format,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Md,
    Html,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.color {
        colored::control::set_override(false);
    }
    init_logger(cli.color, cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format_error(&format!("{:#}", err)));
            let missing_input = err
                .downcast_ref::<ForensicsError>()
                .is_some_and(ForensicsError::is_missing_input);
            if missing_input {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Summarize { root } => cmd_summarize(&config, &root, cli.color),
        Commands::Report { root, format } => cmd_report(&config, &root, format),
    }
}

fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        info!("Loading configuration from: {}", path.display());
        return Config::load(Some(path)).context("Failed to load configuration");
    }

    warn!(
        "Config file {} not found, using default configuration",
        path.display()
    );
    Ok(Config::load(None).unwrap_or_else(|e| {
        warn!("Falling back to built-in defaults: {}", e);
        Config::default_config()
    }))
}

fn cmd_summarize(config: &Config, root: &Path, colored: bool) -> Result<()> {
    let outcome = Summarizer::new(config.clone())
        .with_progress(colored)
        .run(root)?;

    info!("Run statistics: {}", outcome.stats.format_summary());

    for record in outcome.summary.discrepancies() {
        println!(
            "  {} {}",
            format_status(record.status),
            record.filename
        );
    }

    if !outcome.summary.skipped.is_empty() {
        println!(
            "{}",
            format_warning(&format!(
                "{} artifact(s) could not be read; see summary.json",
                outcome.summary.skipped.len()
            ))
        );
    }

    if let Some(compare_path) = &outcome.compare_path {
        println!(
            "{}",
            format_info(&format!("Baseline comparison: {}", compare_path.display()))
        );
    }

    println!(
        "{}",
        format_success(&format!(
            "Summary written to {}",
            outcome.summary_path.display()
        ))
    );
    Ok(())
}

fn cmd_report(config: &Config, root: &Path, format: Format) -> Result<()> {
    let summary = read_summary(&config.layout.summary_path(root))
        .context("Could not load summary JSON; run `pi_forensics summarize` first")?;

    let writer = ReportWriter::new(config.layout.reports(root), config.report.top_n)
        .context("Failed to prepare reports directory")?;

    let markdown_path = writer
        .write_markdown(&root.display().to_string(), &summary)
        .context("Failed to write markdown report")?;
    println!(
        "{}",
        format_success(&format!("Markdown report: {}", markdown_path.display()))
    );

    if format == Format::Html {
        match writer.write_html(&markdown_path) {
            Ok(html_path) => println!(
                "{}",
                format_success(&format!("HTML report: {}", html_path.display()))
            ),
            Err(e) => {
                warn!("HTML rendering failed: {}", e);
                eprintln!(
                    "{}",
                    format_warning(&format!("Failed to render HTML: {}", e))
                );
            }
        }
    }

    Ok(())
}
