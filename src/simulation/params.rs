//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational parameter of the central mass (`mu`, AU^3/day^2),
//! - the fixed step size (`dt`, one day),
//! - the trajectory retention policy applied to every body

use crate::error::{SimError, SimResult};
use crate::simulation::trajectory::RetentionPolicy;

/// Gravitational parameter of one solar mass in AU^3/day^2
pub const MU_SUN: f64 = 2.959e-4;

/// Fixed step size in days
pub const DT_DAYS: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    mu: f64, // gravitational parameter
    dt: f64, // step size, always DT_DAYS
    retention: RetentionPolicy, // trajectory history policy
}

impl Parameters {
    /// Parameters for an explicit gravitational parameter
    pub fn new(mu: f64) -> SimResult<Self> {
        if !mu.is_finite() || mu <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "gravitational_parameter",
                reason: format!("must be finite and positive, got {mu}"),
            });
        }
        Ok(Self {
            mu,
            dt: DT_DAYS,
            retention: RetentionPolicy::Unbounded,
        })
    }

    /// Parameters for a central mass given in solar masses
    pub fn for_central_mass(mass_solar: f64) -> SimResult<Self> {
        Self::new(MU_SUN * mass_solar)
    }

    pub fn with_retention(mut self, retention: RetentionPolicy) -> SimResult<Self> {
        self.retention = retention.validate()?;
        Ok(self)
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn retention(&self) -> RetentionPolicy {
        self.retention
    }
}
