//! Command-line entry point for the pattern catalog.
//!
//! `list` prints the catalog, `run <slug>` executes one example and
//! `run-all` executes every example (or an `--only` subset) and prints a
//! pass/fail table. Reports go to stdout, logs to stderr; the exit status is
//! 0 only when everything requested passed.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use patternrunner::telemetry::init_tracing;
use patternrunner::{
    ExecutionError, Outcome, Registry, RunError, RunReport, Runner, Slug, builtin_registry,
    parse_selection,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "pattern")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run the CD store design pattern catalog", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every registered example
    List,

    /// Run one example and compare it with its expectation
    Run {
        /// Example slug (see `pattern list`)
        slug: String,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run every example in catalog order
    RunAll {
        /// Comma or whitespace separated subset of slugs
        #[arg(long)]
        only: Option<String>,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Also write the JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("pattern: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    init_tracing(cli.log_json, level);

    let registry = builtin_registry().context("assembling the example catalog")?;
    match cli.command {
        Commands::List => {
            cmd_list(&registry);
            Ok(true)
        }
        Commands::Run { slug, json } => cmd_run(&registry, Slug(slug), json),
        Commands::RunAll { only, json, output } => {
            cmd_run_all(&registry, only.as_deref(), json, output.as_deref())
        }
    }
}

fn cmd_list(registry: &Registry) {
    for example in registry.list() {
        println!(
            "{:<16} {:<12} {}",
            example.slug(),
            example.family(),
            example.description()
        );
    }
}

fn cmd_run(registry: &Registry, slug: Slug, json: bool) -> Result<bool> {
    let outcome = match Runner::new(registry).run_one(&slug) {
        Ok(outcome) => outcome,
        Err(RunError::Execution(err)) => return report_execution_error(&err, json),
        Err(err @ RunError::Catalog(_)) => {
            eprintln!("pattern: {err}");
            return Ok(false);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        if let Some(observed) = &outcome.observed {
            println!("{observed}");
        }
        println!("{}", outcome.status());
    }
    Ok(outcome.succeeded)
}

fn report_execution_error(err: &ExecutionError, json: bool) -> Result<bool> {
    if json {
        println!("{}", serde_json::to_string_pretty(&Outcome::failed(err))?);
    } else {
        println!("ERROR: {err}");
    }
    Ok(false)
}

fn cmd_run_all(
    registry: &Registry,
    only: Option<&str>,
    json: bool,
    output: Option<&Path>,
) -> Result<bool> {
    let runner = Runner::new(registry);
    let report = match only.map(parse_selection) {
        Some(selection) if selection.is_empty() => {
            eprintln!("pattern: --only needs at least one slug");
            return Ok(false);
        }
        Some(selection) => match runner.run_selected(&selection) {
            Ok(report) => report,
            Err(err) => {
                eprintln!("pattern: {err}");
                return Ok(false);
            }
        },
        None => runner.run_all(),
    };

    if let Some(path) = output {
        write_report(&report, path)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report);
    }
    Ok(report.overall_succeeded())
}

fn print_table(report: &RunReport) {
    for outcome in report.outcomes() {
        match &outcome.error {
            Some(error) => println!("{:<16} {:<6} {error}", outcome.slug, outcome.status()),
            None => println!("{:<16} {}", outcome.slug, outcome.status()),
        }
    }
    println!("{}", report.summary_line());
}

fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Unable to create report file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("Unable to write report to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Unable to write report to {}", path.display()))?;
    Ok(())
}
