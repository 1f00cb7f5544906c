use plife::{Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "particle_life.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let scenario_cfg = load_scenario_from_yaml()?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    let ticks = scenario.engine.ticks;
    info!("running {} ticks headless", ticks);
    for _ in 0..ticks {
        scenario.tick()?;
    }

    // Per-group summary: population, centroid, mean speed
    for group in &scenario.world.groups {
        let n = group.particles.len();
        if n == 0 {
            println!("{:>8}: empty", group.name);
            continue;
        }
        let inv_n = 1.0 / n as f64;
        let centroid = group.particles.iter().map(|p| p.x).sum::<plife::NVec2>() * inv_n;
        let mean_speed = group.particles.iter().map(|p| p.v.norm()).sum::<f64>() * inv_n;
        println!(
            "{:>8}: {:5} particles, centroid ({:8.2}, {:8.2}), mean speed {:8.4}",
            group.name, n, centroid.x, centroid.y, mean_speed
        );
    }

    //plife::bench_tick();

    Ok(())
}
