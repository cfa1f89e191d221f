mod config;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bottleneck::batch;
use bottleneck::dimacs;
use bottleneck::{Bottleneck, SolveOptions};

use config::Overrides;

/// Maximum bottleneck path solver for DIMACS-style graph fixtures
#[derive(Parser)]
#[command(name = "bottleneck", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// TOML file with solver options (strategy, [query] start/goal)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Solver strategy: binary-search, forest, both
    #[arg(long, global = true)]
    strategy: Option<String>,

    /// Start vertex (1-based, default 1)
    #[arg(long, global = true)]
    start: Option<usize>,

    /// Goal vertex (1-based, default 2)
    #[arg(long, global = true)]
    goal: Option<usize>,

    /// Log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Solve fixture files and print their bottleneck values.
    Solve {
        /// Fixture files
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Emit JSON instead of plain text.
        #[arg(long)]
        json: bool,
        /// Pretty-print JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// Check every fixture in a directory against its recorded answer.
    /// Exits with code 1 on any failure.
    Check {
        /// Directory of fixture files.
        dir: PathBuf,
        /// Output format: terminal, json.
        #[arg(long, default_value = "terminal")]
        format: String,
        /// Only show failures.
        #[arg(long)]
        quiet: bool,
    },
}

#[derive(Serialize)]
struct OutputResult {
    file: String,
    vertices: usize,
    edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected: Option<Bottleneck<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    binary_search: Option<Bottleneck<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    forest: Option<Bottleneck<i64>>,
    agree: bool,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let overrides = Overrides {
        strategy: cli.strategy.as_deref(),
        start: cli.start,
        goal: cli.goal,
    };
    let options = config::resolve(cli.config.as_deref(), &overrides)?;
    debug!(?options, "resolved solver options");

    match &cli.command {
        Command::Solve {
            files,
            json,
            pretty,
        } => cmd_solve(files, &options, *json, *pretty),
        Command::Check { dir, format, quiet } => cmd_check(dir, &options, format, *quiet),
    }
}

fn solve_file(path: &Path, options: &SolveOptions) -> Result<OutputResult> {
    let fixture = dimacs::load_fixture(path)
        .with_context(|| format!("failed to load fixture: {}", path.display()))?;
    let outcome = bottleneck::solve(&fixture.graph, options)
        .with_context(|| format!("invalid query for {}", path.display()))?;
    info!(fixture = %fixture.name, ?outcome, "solved");

    Ok(OutputResult {
        file: path.display().to_string(),
        vertices: fixture.graph.vertex_count(),
        edges: fixture.graph.edge_count(),
        expected: fixture.expected,
        binary_search: outcome.binary_search,
        forest: outcome.forest,
        agree: outcome.agrees(),
    })
}

fn cmd_solve(files: &[PathBuf], options: &SolveOptions, json: bool, pretty: bool) -> Result<()> {
    let results = files
        .iter()
        .map(|f| solve_file(f, options))
        .collect::<Result<Vec<_>>>()?;

    if json {
        let out = if pretty {
            serde_json::to_string_pretty(&results)?
        } else {
            serde_json::to_string(&results)?
        };
        println!("{out}");
    } else {
        for r in &results {
            match (r.binary_search, r.forest) {
                (Some(a), Some(b)) if a != b => {
                    println!("{}: binary-search={a} forest={b}", r.file)
                }
                (Some(a), _) | (None, Some(a)) => println!("{}: {a}", r.file),
                (None, None) => println!("{}: -", r.file),
            }
        }
    }

    let disagreements = results.iter().filter(|r| !r.agree).count();
    if disagreements > 0 {
        bail!("solvers disagreed on {disagreements} fixture(s)");
    }
    Ok(())
}

fn cmd_check(dir: &Path, options: &SolveOptions, format: &str, quiet: bool) -> Result<()> {
    let fixtures = dimacs::load_dir(dir)
        .with_context(|| format!("failed to load fixtures from {}", dir.display()))?;
    let full = batch::check(&fixtures, options);

    match format {
        "json" => println!("{}", report::to_json(&full)),
        _ => report::print_terminal(&full, quiet),
    }

    if !full.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}
