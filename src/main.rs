use orbitsim::{ScenarioConfig, Scenario, Snapshot};
use orbitsim::{bench_step, bench_retention};

use clap::Parser;
use anyhow::{Context, Result};
use log::info;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Headless central-mass orbit simulator")]
struct Args {
    /// Scenario file, looked up under scenarios/ if not found as given
    #[arg(short, long, default_value = "solar_system_j2000.yaml")]
    file_name: String,

    /// Override the number of one-day steps
    #[arg(long)]
    steps: Option<usize>,

    /// Write final positions, velocities and trajectories as YAML
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run the step benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

fn resolve_scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serde_yaml::to_writer(BufWriter::new(file), snapshot)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_step()?;
        bench_retention()?;
        return Ok(());
    }

    let config_path = resolve_scenario_path(&args.file_name);
    let scenario_cfg = ScenarioConfig::from_path(&config_path)?;
    let Scenario { mut engine, mut system } = Scenario::build_scenario(scenario_cfg)
        .with_context(|| format!("invalid scenario {}", config_path.display()))?;

    if let Some(steps) = args.steps {
        engine.steps = steps;
    }

    // One step per frame, as the animation loop would drive it
    for n in 1..=engine.steps {
        let frame = system
            .step()
            .with_context(|| format!("simulation aborted at step {n}"))?;
        if engine.should_report(n) {
            info!("step {n}/{}: t = JD {:.1}", engine.steps, frame.time);
            for (id, x) in frame.positions() {
                info!("  {id}: ({:+.4}, {:+.4}, {:+.4}) AU", x.x, x.y, x.z);
            }
        }
    }

    if let Some(path) = args.output {
        let snapshot = system.frame()?.snapshot();
        write_snapshot(&path, &snapshot)?;
        info!("wrote {} bodies to {}", snapshot.bodies.len(), path.display());
    }

    Ok(())
}
