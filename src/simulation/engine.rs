//! High-level runtime engine settings
//!
//! Selects the position update mode (sequential or snapshot) and the
//! headless run length used when building and running a `Scenario`

use crate::configuration::config::UpdateConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub update: UpdateConfig, // sequential (reference behavior) or snapshot
    pub ticks: u64, // tick count for the headless runner
}
