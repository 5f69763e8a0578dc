use anyhow::Context;
use battcore::estimate::{compute_costs, project_feasible};
use clap::Parser;
use input::{CliOverrides, EstimatorConfig};
use log::info;
use std::io;
use std::path::PathBuf;

mod input;
mod report;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Estimates feasible sensing scenarios from a battery voltage reading"
)]
struct Args {
    /// Present battery voltage (V)
    #[arg(long)]
    voltage: Option<f64>,
    /// Acquisition time (minutes)
    #[arg(long)]
    acquisition_minutes: Option<f64>,
    /// Remaining hours of sunlight; enables the solar recharge credit
    #[arg(long)]
    sunny_hours: Option<f64>,
    /// Interval between periodic acquisitions (minutes)
    #[arg(long)]
    interval_minutes: Option<f64>,
    /// Total duration of periodic acquisitions (hours)
    #[arg(long)]
    duration_hours: Option<f64>,
    /// Load every estimation input from a YAML file instead of prompting
    #[arg(long)]
    config: Option<PathBuf>,
    /// Append the printed report lines to this run log
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = &args.config {
        EstimatorConfig::load(path)?
    } else {
        let overrides = CliOverrides {
            voltage: args.voltage,
            acquisition_minutes: args.acquisition_minutes,
            sunny_hours: args.sunny_hours,
            interval_minutes: args.interval_minutes,
            duration_hours: args.duration_hours,
        };
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        input::collect(&overrides, &mut input, &mut output)
            .context("collecting estimation inputs")?
    };

    info!(
        "estimating for {:.2} V, {:.1} min acquisition (periodic: {})",
        config.voltage,
        config.acquisition_minutes,
        config.periodic.is_some()
    );

    let plan = config.plan();
    let cost_report = compute_costs(&plan, None);
    let projections = project_feasible(&plan, &cost_report, config.sunny());

    let lines = report::render_lines(&cost_report, &projections);
    report::emit(&lines, args.report.as_deref())
}
