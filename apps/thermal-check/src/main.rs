//! Thermal Compliance Checker Binary
//!
//! Loads a model exported as JSON, checks walls, windows and roofs against the
//! climate-zone limits and prints the result. Exit code 0 means compliant,
//! 1 means non-compliant elements were found, 2 means the run was aborted.

mod report;
mod sink;
mod source;


use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use thermal_compliance::{run_automation, FunctionInputs, MemorySink, MetricModel};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::report::AutomationReport;
use crate::sink::ConsoleSink;
use crate::source::JsonFileSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "thermal-check")]
#[command(
    version,
    about = "Check building elements against climate-zone thermal performance limits"
)]
struct Args {
    /// Model JSON: a nested root object or {"rootId": ..., "objects": [...]}
    #[arg(short, long)]
    model: PathBuf,

    /// Function inputs JSON (climateZone, checkWalls, checkWindows, checkRoofs, metricModel)
    #[arg(short, long)]
    inputs: Option<PathBuf>,

    /// Climate zone code or identifier, e.g. Cfa or Cfa_HumidSubtropical
    #[arg(short = 'z', long)]
    climate_zone: Option<String>,

    /// Metric to check: u-value or r-value
    #[arg(long, value_parser = parse_metric)]
    metric: Option<MetricModel>,

    #[arg(long)]
    skip_walls: bool,

    #[arg(long)]
    skip_windows: bool,

    #[arg(long)]
    skip_roofs: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn parse_metric(s: &str) -> Result<MetricModel, String> {
    MetricModel::parse(s).ok_or_else(|| format!("unknown metric '{}', use u-value or r-value", s))
}

/// Function inputs from file (or defaults) with command-line overrides applied
fn build_inputs(args: &Args) -> anyhow::Result<FunctionInputs> {
    let mut inputs = match &args.inputs {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading function inputs {}", path.display()))?;
            FunctionInputs::from_json_str(&text)?
        }
        None => FunctionInputs::default(),
    };

    if let Some(zone) = &args.climate_zone {
        inputs.climate_zone = zone.clone();
    }
    if let Some(metric) = args.metric {
        inputs.metric_model = metric;
    }
    inputs.check_walls &= !args.skip_walls;
    inputs.check_windows &= !args.skip_windows;
    inputs.check_roofs &= !args.skip_roofs;

    Ok(inputs)
}

/// Run one check; `Ok(true)` when every checked element complies
fn run(args: &Args) -> anyhow::Result<bool> {
    let inputs = build_inputs(args)?;
    let mut source = JsonFileSource::new(&args.model);

    match args.format {
        OutputFormat::Text => {
            let mut sink = ConsoleSink::new(std::io::stdout());
            let outcome = run_automation(&mut source, &mut sink, &inputs)?;
            Ok(outcome.passed)
        }
        OutputFormat::Json => {
            let mut sink = MemorySink::default();
            let outcome = run_automation(&mut source, &mut sink, &inputs)?;
            let passed = outcome.passed;
            let report = AutomationReport::new(inputs, outcome, sink);
            serde_json::to_writer_pretty(std::io::stdout().lock(), &report)?;
            println!();
            Ok(passed)
        }
    }
}

/// `RUST_LOG` directives when given and valid, `info` otherwise
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries the report; logs go to stderr
    tracing_subscriber::registry()
        .with(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting thermal-check v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Model: {}", args.model.display());

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::from(2)
        }
    }
}
