// main.rs - Evolve a toroidal Life grid and append a shape census
//
// Usage:
//   conway-census                           - input.txt in, output.txt appended
//   conway-census -i run.txt -o report.txt  - explicit files
//   conway-census --random --seed 7         - random 20% start instead of empty
//   conway-census --gosper --grid-size 64   - add a glider gun, override size

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use conway::{Grid, RunMeta};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod coro;
mod scenario;
mod seed;

use coro::{Simulation, StepMode};
use scenario::Scenario;

#[derive(Parser, Debug)]
#[command(
    name = "conway-census",
    about = "Runs Conway's Game of Life on a torus and appends a shape census",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Scenario file
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// Report file, appended to
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Square grid size, overrides the scenario dimensions
    #[arg(long = "grid-size")]
    grid_size: Option<usize>,

    /// Census generation, overrides the scenario
    #[arg(long)]
    generations: Option<usize>,

    /// Add a glider at (1, 1)
    #[arg(long, default_value_t = false)]
    glider: bool,

    /// Add a Gosper glider gun at (1, 1)
    #[arg(long, default_value_t = false)]
    gosper: bool,

    /// Add a named pattern at (1, 1) (glider, blinker, toad, beacon, pulsar, r-pentomino)
    #[arg(long)]
    pattern: Option<String>,

    /// Start from a random grid instead of an empty one
    #[arg(long, default_value_t = false)]
    random: bool,

    /// RNG seed for --random
    #[arg(long)]
    seed: Option<u64>,

    /// Step with the plain sequential stepper instead of row coroutines
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Write logs to a file (in addition to stderr)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file.as_deref())?;
    run(&cli).await
}

/// Installs the subscriber. The returned guard flushes the log file on drop.
fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("log file path has no file name: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "conway=info,conway_census=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let started = Instant::now();

    let mut scenario = Scenario::load(&cli.input)?;
    if let Some(n) = cli.grid_size {
        scenario = scenario.with_grid_size(n)?;
    }
    if let Some(generations) = cli.generations {
        scenario = scenario.with_generations(generations);
    }

    let grid = initial_grid(cli, &scenario)?;
    tracing::info!(
        width = grid.width(),
        height = grid.height(),
        population = grid.population(),
        "initial grid ready"
    );

    let mode = if cli.sequential { StepMode::Sequential } else { StepMode::Coroutines };
    let mut sim = Simulation::new(grid, mode);
    sim.run_to(scenario.generations).await?;

    let result = conway::classify(sim.grid());
    let meta = RunMeta {
        timestamp: chrono::Local::now().naive_local(),
        width: scenario.width,
        height: scenario.height,
        generation: sim.generation(),
    };

    let mut sink = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.output)
        .with_context(|| format!("failed to open report {}", cli.output.display()))?;
    conway::publish(&mut sink, &result, &meta)
        .with_context(|| format!("failed to append to {}", cli.output.display()))?;

    tracing::info!(
        generation = sim.generation(),
        population = sim.grid().population(),
        matches = result.total(),
        cycle_at = ?sim.cycle_at(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        report = %cli.output.display(),
        "census appended"
    );
    Ok(())
}

fn initial_grid(cli: &Cli, scenario: &Scenario) -> anyhow::Result<Grid> {
    let mut grid = if cli.random {
        seed::random_grid(scenario.width, scenario.height, cli.seed)?
    } else {
        Grid::new(scenario.width, scenario.height)?
    };

    for &(x, y) in &scenario.seeds {
        if x >= scenario.width || y >= scenario.height {
            tracing::warn!(x, y, "glider seed outside the grid, wrapped");
        }
        seed::add_glider(&mut grid, x, y);
    }

    let mut extra = Vec::new();
    if cli.glider {
        extra.push("glider");
    }
    if cli.gosper {
        extra.push("gosper glider gun");
    }
    if let Some(name) = cli.pattern.as_deref() {
        extra.push(name);
    }
    for name in extra {
        let stamp = seed::find_stamp(name).with_context(|| format!("unknown pattern: {name}"))?;
        seed::apply_stamp(&mut grid, stamp, 1, 1);
        tracing::debug!(pattern = stamp.name, "pattern stamped");
    }

    Ok(grid)
}
