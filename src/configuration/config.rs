//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! particle-life scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – runtime options (update mode, headless tick count)
//! - [`ParametersConfig`] – numerical parameters (damping, dead zone, bounds)
//! - [`GroupConfig`]      – one particle group with its coefficient row
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   update: "sequential"   # or "snapshot" (frozen-position variant)
//!   ticks: 1000            # headless run length
//!
//! parameters:
//!   damping: 0.2           # velocity decay per tick
//!   min_separation: 12.0   # dead zone below which force is suppressed
//!   seed: 42               # deterministic spawn seed
//!   spawn:                 # uniform spawn rectangle, origin at (0, 0)
//!     width: 1600.0
//!     height: 1200.0
//!   bounds:                # reflective rectangle, inset from the spawn
//!     x_max: 1390.0
//!     y_max: 1190.0
//!
//! groups:
//!   - name: "white"
//!     color: [255, 255, 255, 255]
//!     count: 1000
//!     radius: 455.0
//!     coefficients: [-0.15, -0.37, -0.43, -0.003]  # row toward each group,
//!   # ...                                          # in declaration order
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! representation (`Scenario`), validating radii and row lengths.

use serde::Deserialize;

/// Which position update mode the engine uses
/// `update: "sequential"` or `update: "snapshot"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateConfig {
    #[serde(rename = "sequential")] // In-place per-group update; later groups in a tick see already-moved particles. Reference behavior
    Sequential,

    #[serde(rename = "snapshot")] // All forces read a frozen position snapshot, positions committed in a separate drift pass
    Snapshot,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub update: UpdateConfig, // position update ordering within one tick
    pub ticks: u64, // number of ticks the headless runner advances
}

/// Uniform spawn rectangle with origin at (0, 0)
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct SpawnConfig {
    pub width: f64,
    pub height: f64,
}

/// Reflective world rectangle; low bounds default to 0
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct BoundsConfig {
    #[serde(default)]
    pub x_min: f64,
    pub x_max: f64,
    #[serde(default)]
    pub y_min: f64,
    pub y_max: f64,
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub damping: f64, // velocity decay per tick, 0.2 in the reference scenario
    pub min_separation: f64, // dead zone radius, 12 in the reference scenario
    pub seed: u64, // deterministic seed to make spawns reproducable
    pub spawn: SpawnConfig, // spawn rectangle
    pub bounds: BoundsConfig, // reflective bounds, inset from the spawn rectangle
}

/// Configuration for a single particle group
#[derive(Deserialize, Debug, Clone)]
pub struct GroupConfig {
    pub name: String, // display name used in logs and summaries
    pub color: [u8; 4], // RGBA display tag
    pub count: usize, // fixed population, spawned once at build time
    pub radius: f64, // outgoing interaction radius, must be positive
    pub coefficients: Vec<f64>, // coefficient toward each group in declaration order, length must equal the group count
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration (update mode, tick count)
    pub parameters: ParametersConfig, // global numerical parameters
    pub groups: Vec<GroupConfig>, // groups that define the initial state and coefficient matrix
}
