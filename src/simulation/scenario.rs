//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - world state (`World` with all groups spawned at t = 0)
//! - the interaction model (`InteractionModel` coefficient matrix + radii)
//!
//! The scenario is consumed by the headless runner and by whatever external
//! render loop reads the world's render view between ticks.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::error::ModelError;
use crate::simulation::integrator;
use crate::simulation::interaction::InteractionModel;
use crate::simulation::params::{Bounds, Parameters};
use crate::simulation::states::{Color, Group, NVec2, Particle, World};

/// Spawn `count` particles uniformly over `[0, width) x [0, height)` with
/// zero initial velocity
pub fn spawn_uniform(rng: &mut impl Rng, count: usize, width: f64, height: f64) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x: NVec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height)),
            v: NVec2::zeros(),
        })
        .collect()
}

/// A fully-initialized runtime scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, current world state, and the
/// interaction model. The model stays externally tunable between ticks
/// (`set_coefficient` / `set_radius`); the stepping functions read it as a
/// consistent snapshot for the duration of one tick.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub world: World,
    pub model: InteractionModel,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ModelError> {
        let group_count = cfg.groups.len();

        // Model: radius per group plus one coefficient row per group,
        // validated as it is filled in
        let mut model = InteractionModel::new(group_count);
        for (source, gc) in cfg.groups.iter().enumerate() {
            model.set_radius(source, gc.radius)?;
            if gc.coefficients.len() != group_count {
                return Err(ModelError::InvalidIndex {
                    index: gc.coefficients.len(),
                    groups: group_count,
                });
            }
            for (target, &value) in gc.coefficients.iter().enumerate() {
                model.set_coefficient(source, target, value)?;
            }
        }

        // Groups: spawn each population uniformly over the spawn rectangle,
        // reproducible via the configured seed
        let p_cfg = &cfg.parameters;
        let mut rng = StdRng::seed_from_u64(p_cfg.seed);
        let groups: Vec<Group> = cfg
            .groups
            .iter()
            .map(|gc| Group {
                name: gc.name.clone(),
                color: Color(gc.color),
                particles: spawn_uniform(&mut rng, gc.count, p_cfg.spawn.width, p_cfg.spawn.height),
            })
            .collect();

        // Initial world state: all groups at t = 0
        let world = World { groups, t: 0 };

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            damping: p_cfg.damping,
            min_separation: p_cfg.min_separation,
            bounds: Bounds {
                x_min: p_cfg.bounds.x_min,
                x_max: p_cfg.bounds.x_max,
                y_min: p_cfg.bounds.y_min,
                y_max: p_cfg.bounds.y_max,
            },
            seed: p_cfg.seed,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            update: cfg.engine.update,
            ticks: cfg.engine.ticks,
        };

        info!(
            "built scenario: {} groups, {} particles, update mode {:?}",
            group_count,
            world.particle_count(),
            engine.update,
        );

        Ok(Self {
            engine,
            parameters,
            world,
            model,
        })
    }

    /// Advance the world by one tick under the configured update mode
    pub fn tick(&mut self) -> Result<(), ModelError> {
        integrator::tick(&mut self.world, &self.model, &self.parameters, &self.engine)
    }

    /// Read-only `(position, color)` pairs for external rendering
    pub fn render_view(&self) -> impl Iterator<Item = (NVec2, Color)> + '_ {
        self.world.render_view()
    }
}
