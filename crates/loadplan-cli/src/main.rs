use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use loadplan_core::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "loadplan",
    about = "Solve a 3D container loading batch and report placement + balance statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, global = true, help_heading = "Logging")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a batch file and emit placement + statistics as JSON
    Solve(SolveArgs),
}

#[derive(Parser, Debug, Clone)]
struct SolveArgs {
    /// Batch JSON file (container + items), per the documented wire schema
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output JSON file; defaults to stdout
    #[arg(short, long, help_heading = "Input/Output")]
    out: Option<PathBuf>,
    /// YAML file overriding EngineConfig heuristic constants
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,
    /// Print the effective EngineConfig and exit without solving
    #[arg(long, default_value_t = false, help_heading = "Config")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", help_heading = "Config")]
    print_config_format: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Solve(args) => run_solve(args),
    }
}

/// Wire-format batch: mirrors the solver input schema (container geometry
/// in `l`/`w`/`h`, item lines with `qty`), kept separate from the core's
/// own `SolverInput` so the core model can use descriptive field names.
#[derive(Debug, Deserialize)]
struct BatchFile {
    container: BatchContainer,
    items: Vec<ItemSpec>,
}

#[derive(Debug, Deserialize)]
struct BatchContainer {
    l: f64,
    w: f64,
    h: f64,
    #[serde(default = "default_max_weight")]
    max_weight: f64,
    #[serde(default = "default_true")]
    allow_stacking: bool,
}

fn default_max_weight() -> f64 {
    28_000.0
}
fn default_true() -> bool {
    true
}

impl From<BatchContainer> for (f64, f64, f64, f64, bool) {
    fn from(c: BatchContainer) -> Self {
        (c.l, c.w, c.h, c.max_weight, c.allow_stacking)
    }
}

#[derive(Debug, Serialize)]
struct SolveReport {
    container: Container,
    stats: PackStats,
}

fn run_solve(args: &SolveArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;

    if args.print_config {
        match args.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(());
    }

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("reading batch file {}", args.input.display()))?;
    let batch: BatchFile = serde_json::from_str(&raw).context("parsing batch JSON")?;

    let (length, width, height, max_weight, allow_stacking) = batch.container.into();
    let input = SolverInput {
        length,
        width,
        height,
        max_weight,
        allow_stacking,
        items: batch.items,
    };

    let container = solve(&input, &cfg).context("solving batch")?;
    let stats = loadplan_core::stats::compute(&container);
    info!(summary = %stats.summary(), "solve complete");

    let report = SolveReport { container, stats };
    let out = serde_json::to_string_pretty(&report)?;
    match &args.out {
        Some(path) => {
            fs::write(path, out).with_context(|| format!("writing {}", path.display()))?;
        }
        None => println!("{out}"),
    }
    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<EngineConfig> {
    let cfg = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_yaml::from_str(&raw).context("parsing config YAML")?
        }
        None => EngineConfig::default(),
    };
    cfg.validate().context("validating engine config")?;
    Ok(cfg)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
