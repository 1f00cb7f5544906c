use std::time::Instant;

use crate::simulation::integrator::{tick_sequential, tick_snapshot};
use crate::simulation::interaction::InteractionModel;
use crate::simulation::params::{Bounds, Parameters};
use crate::simulation::states::{Color, Group, NVec2, Particle, World};

const BENCH_COLORS: [Color; 4] = [Color::WHITE, Color::BLUE, Color::RED, Color::GREEN];

/// Build a 4-group world with `n` particles per group, deterministic
/// positions (no rand needed)
fn bench_world(n: usize) -> World {
    let groups = (0..4)
        .map(|g| {
            let mut particles = Vec::with_capacity(n);
            for i in 0..n {
                let i_f = (g * n + i) as f64;
                particles.push(Particle {
                    x: NVec2::new(
                        ((i_f * 0.37).sin() * 0.5 + 0.5) * 1600.0,
                        ((i_f * 0.13).cos() * 0.5 + 0.5) * 1200.0,
                    ),
                    v: NVec2::zeros(),
                });
            }
            Group {
                name: format!("group{g}"),
                color: BENCH_COLORS[g],
                particles,
            }
        })
        .collect();

    World { groups, t: 0 }
}

fn bench_model() -> InteractionModel {
    let mut model = InteractionModel::new(4);
    let radii = [455.0, 112.0, 80.0, 150.0];
    for source in 0..4 {
        model.set_radius(source, radii[source]).unwrap();
        for target in 0..4 {
            // alternating mild attraction/repulsion, enough to keep the
            // distance band populated
            let value = if (source + target) % 2 == 0 { -0.3 } else { 0.2 };
            model.set_coefficient(source, target, value).unwrap();
        }
    }
    model
}

fn bench_params() -> Parameters {
    Parameters {
        damping: 0.2,
        min_separation: 12.0,
        bounds: Bounds {
            x_min: 0.0,
            x_max: 1390.0,
            y_min: 0.0,
            y_max: 1190.0,
        },
        seed: 42,
    }
}

/// Time one full tick of both update modes across group sizes
pub fn bench_tick() {
    // Particles per group to test (total is 4x this)
    let ns = [125, 250, 500, 1000, 2000];

    let model = bench_model();
    let params = bench_params();

    for n in ns {
        let world = bench_world(n);

        // Warm up
        let mut warm = world.clone();
        tick_sequential(&mut warm, &model, &params).unwrap();

        // Time sequential
        let mut seq = world.clone();
        let t0 = Instant::now();
        tick_sequential(&mut seq, &model, &params).unwrap();
        let dt_seq = t0.elapsed().as_secs_f64();

        // Time snapshot
        let mut snap = world.clone();
        let t1 = Instant::now();
        tick_snapshot(&mut snap, &model, &params).unwrap();
        let dt_snap = t1.elapsed().as_secs_f64();

        println!(
            "N = {:5} x 4, sequential = {:8.6} s, snapshot = {:8.6} s",
            n, dt_seq, dt_snap
        );
    }
}
