//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`CentralConfig`]    – the stationary central mass
//! - [`ParametersConfig`] – gravitational parameter override and trajectory retention
//! - [`EngineConfig`]     – how many steps the driver runs and how often it reports
//! - [`BodyConfig`]       – initial state for each orbiting body
//! - [`ScenarioConfig`]   – top-level wrapper, including the start epoch
//!
//! # YAML format
//!
//! ```yaml
//! central:
//!   name: Sun
//!   mass: 1.0                 # solar masses
//!
//! parameters:                 # optional
//!   gravitational_parameter: 2.959e-4   # AU^3/day^2, default 2.959e-4 * mass
//!   retention:
//!     policy: ring_buffer     # unbounded | ring_buffer | decimate
//!     capacity: 1000
//!
//! engine:                     # optional
//!   steps: 8030
//!   report_every: 365
//!
//! epoch_jd: 2451544.5         # Julian day of the initial state
//!
//! bodies:
//!   - id: Earth               # name or number
//!     x: [ -0.177171, 0.967214, 0.0 ]      # AU
//!     v: [ -0.01720312, -0.00316425, 0.0 ] # AU/day
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::engine::{Engine, REFERENCE_STEPS};
use crate::simulation::states::BodyId;
use crate::simulation::trajectory::RetentionPolicy;

/// How much trajectory history to keep per body
/// `policy: unbounded`, `policy: ring_buffer` (+ `capacity`) or `policy: decimate` (+ `every`)
#[derive(Deserialize, Debug, Clone, Copy, Default)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum RetentionConfig {
    #[default]
    Unbounded,
    RingBuffer { capacity: usize },
    Decimate { every: usize },
}

impl From<RetentionConfig> for RetentionPolicy {
    fn from(cfg: RetentionConfig) -> Self {
        match cfg {
            RetentionConfig::Unbounded => RetentionPolicy::Unbounded,
            RetentionConfig::RingBuffer { capacity } => RetentionPolicy::RingBuffer { capacity },
            RetentionConfig::Decimate { every } => RetentionPolicy::Decimate { every },
        }
    }
}

/// The central mass
#[derive(Deserialize, Debug, Clone)]
pub struct CentralConfig {
    pub name: String, // label only
    pub mass: f64,    // solar masses
}

/// Physical parameters and history retention
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ParametersConfig {
    pub gravitational_parameter: Option<f64>, // overrides MU_SUN * mass when set
    pub retention: RetentionConfig,
}

/// Driver settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub steps: usize,        // number of one-day steps to run
    pub report_every: usize, // progress log cadence, 0 disables
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            steps: REFERENCE_STEPS,
            report_every: 365,
        }
    }
}

impl From<EngineConfig> for Engine {
    fn from(cfg: EngineConfig) -> Self {
        Engine {
            steps: cfg.steps,
            report_every: cfg.report_every,
        }
    }
}

/// Initial state of one orbiting body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub id: BodyId,  // name or number
    pub x: Vec<f64>, // position, AU; must have 3 components
    pub v: Vec<f64>, // velocity, AU/day; must have 3 components
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub central: CentralConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    pub epoch_jd: f64, // simulated time of the initial state
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
