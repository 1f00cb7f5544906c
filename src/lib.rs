pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Color, Group, NVec2, Particle, World};
pub use simulation::params::{Bounds, Parameters};
pub use simulation::error::ModelError;
pub use simulation::interaction::InteractionModel;
pub use simulation::forces::accumulate_force;
pub use simulation::integrator::{advance_positions, step_group, tick, tick_sequential, tick_snapshot};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    BoundsConfig, EngineConfig, GroupConfig, ParametersConfig, ScenarioConfig, SpawnConfig,
    UpdateConfig,
};

pub use benchmark::benchmark::bench_tick;
