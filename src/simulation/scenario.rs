//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario` holding:
//! - driver settings (`Engine`)
//! - a `System` with every body validated and added, and time set to the epoch
//!
//! The result is ready for its first `step()`.

use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimResult;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, CentralBody, System};

pub struct Scenario {
    pub engine: Engine,
    pub system: System,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let central = CentralBody::new(cfg.central.name, cfg.central.mass)?;

        // Parameters: explicit mu wins over the one implied by the central mass
        let parameters = match cfg.parameters.gravitational_parameter {
            Some(mu) => Parameters::new(mu)?,
            None => Parameters::for_central_mass(central.mass)?,
        };
        let parameters = parameters.with_retention(cfg.parameters.retention.into())?;

        let mut system = System::with_parameters(central, parameters);

        // Bodies: validated `BodyConfig` -> runtime `Body`, in file order
        for bc in cfg.bodies {
            let BodyConfig { id, x, v } = bc;
            system.add_body(Body::from_components(id, &x, &v)?);
        }

        system.set_initial_time(cfg.epoch_jd)?;

        info!(
            "scenario ready: {} bodies around {} (mu = {:e} AU^3/day^2), epoch JD {}",
            system.bodies().len(),
            system.central().id,
            system.parameters().mu(),
            cfg.epoch_jd,
        );

        Ok(Self {
            engine: cfg.engine.into(),
            system,
        })
    }
}
