//! pipesim - simulated AI-powered CI/CD pipeline run
//!
//! Prints a scripted, colored pipeline run: strategy analysis, environment
//! setup, per-group test execution with biased random outcomes, aggregation,
//! recommendations and a closing summary. Runs with no arguments.
//!
//! Exits 0 whatever the simulated outcome; only operator errors (bad config,
//! unwritable report path, closed stdout) exit non-zero.

mod render;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use pipesim_ci::{Pacer, PipelineSpec, SimulatedPipeline};
use pipesim_core::{seeded_rng, write_run_report_json, SimulatorConfig};
use tracing::{info, Level};

use render::{ConsoleRenderer, Palette};

#[derive(Parser)]
#[command(name = "pipesim")]
#[command(version = pipesim_core::VERSION)]
#[command(about = "Simulated AI-powered CI/CD pipeline run", long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    /// Seed for the outcome draw (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding groups, overrides, outcome policy and pacing
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip cosmetic delays
    #[arg(long)]
    no_pacing: bool,

    /// Print without ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Write a JSON report of the run to this path
    #[arg(long)]
    report_json: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    pipesim_core::init_tracing(cli.json, level);

    let config = load_config(cli.config.as_deref())?;
    let palette = if cli.no_color {
        Palette::plain()
    } else {
        Palette::ansi()
    };

    cmd_run(
        config,
        cli.seed,
        cli.no_pacing,
        palette,
        cli.report_json.as_deref(),
        std::io::stdout(),
    )
    .await?;
    Ok(())
}

/// Load the simulator config, falling back to the built-in demo pipeline.
fn load_config(path: Option<&Path>) -> Result<SimulatorConfig> {
    match path {
        Some(path) => SimulatorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(SimulatorConfig::default()),
    }
}

/// Run the simulated pipeline once and render it to `out`.
async fn cmd_run<W: Write>(
    config: SimulatorConfig,
    seed: Option<u64>,
    no_pacing: bool,
    palette: Palette,
    report_json: Option<&Path>,
    out: W,
) -> Result<W> {
    let spec = PipelineSpec::new(&config.groups, seed);
    let mut rng = seeded_rng(seed);
    let mut pacer = if no_pacing {
        Pacer::disabled()
    } else {
        Pacer::new(config.pacing.clone())
    };

    let mut renderer = ConsoleRenderer::new(out, palette);
    let result = SimulatedPipeline::run(&config, &spec, &mut rng, &mut pacer, &mut renderer).await;
    renderer.render_summary(&result);
    let out = renderer
        .finish()
        .context("Failed to write pipeline output")?;

    if let Some(path) = report_json {
        write_run_report_json(path, &result.to_artifact())
            .with_context(|| format!("Failed to write run report {}", path.display()))?;
        info!(path = %path.display(), "run report written");
    }

    info!(
        overall = %result.verdict.overall,
        passed = result.report.passed,
        total = result.report.total,
        "simulated run complete"
    );
    Ok(out)
}
