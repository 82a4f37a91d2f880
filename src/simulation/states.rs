//! Core state types for the orbit simulation
//!
//! - `Body`        one orbiting point mass with its trajectory
//! - `CentralBody` the stationary mass at the origin
//! - `System`      the central body, the ordered bodies, and simulated time
//!
//! Positions are in AU, velocities in AU/day, time in Julian days.

use std::fmt;

use log::debug;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::simulation::forces::{AccelSet, CentralGravity};
use crate::simulation::frame::Frame;
use crate::simulation::integrator::symplectic_euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::trajectory::Trajectory;

pub type NVec3 = Vector3<f64>;

/// Opaque label of a body: a catalogue number or a name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BodyId {
    Number(u32),
    Name(String),
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyId::Number(n) => write!(f, "#{n}"),
            BodyId::Name(name) => f.write_str(name),
        }
    }
}

impl From<u32> for BodyId {
    fn from(n: u32) -> Self {
        BodyId::Number(n)
    }
}

impl From<&str> for BodyId {
    fn from(name: &str) -> Self {
        BodyId::Name(name.to_string())
    }
}

impl From<String> for BodyId {
    fn from(name: String) -> Self {
        BodyId::Name(name)
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    id: BodyId,
    pub(crate) x: NVec3, // position
    pub(crate) v: NVec3, // velocity
    trajectory: Trajectory, // recorded (x, y) history
}

impl Body {
    /// Create a body with an empty trajectory
    /// Fails with `InvalidState` if any component is NaN or infinite
    pub fn new(id: impl Into<BodyId>, x: NVec3, v: NVec3) -> SimResult<Self> {
        let id = id.into();
        if let Some(reason) = non_finite("position", &x).or_else(|| non_finite("velocity", &v)) {
            return Err(SimError::InvalidState { body: id, reason });
        }
        Ok(Self {
            id,
            x,
            v,
            trajectory: Trajectory::default(),
        })
    }

    /// Create a body from raw component slices, as delivered by an ephemeris
    /// source. Both slices must hold exactly three components.
    pub fn from_components(id: impl Into<BodyId>, x: &[f64], v: &[f64]) -> SimResult<Self> {
        let id = id.into();
        let x = match three_vector("position", x) {
            Ok(x) => x,
            Err(reason) => return Err(SimError::InvalidState { body: id, reason }),
        };
        let v = match three_vector("velocity", v) {
            Ok(v) => v,
            Err(reason) => return Err(SimError::InvalidState { body: id, reason }),
        };
        Self::new(id, x, v)
    }

    /// Append the planar projection of the current position to the trajectory
    pub fn record_position(&mut self) {
        self.trajectory.record([self.x.x, self.x.y]);
    }

    pub fn id(&self) -> &BodyId {
        &self.id
    }

    pub fn position(&self) -> &NVec3 {
        &self.x
    }

    pub fn velocity(&self) -> &NVec3 {
        &self.v
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Distance from the central mass
    pub fn orbital_radius(&self) -> f64 {
        self.x.norm()
    }

    pub(crate) fn trajectory_mut(&mut self) -> &mut Trajectory {
        &mut self.trajectory
    }
}

fn non_finite(what: &str, vec: &NVec3) -> Option<String> {
    vec.iter()
        .position(|c| !c.is_finite())
        .map(|i| format!("{what} component {i} is {}", vec[i]))
}

fn three_vector(what: &str, comps: &[f64]) -> Result<NVec3, String> {
    match comps {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(format!("{what} needs 3 components, got {}", comps.len())),
    }
}

/// The dominant mass, fixed at the origin and never advanced
#[derive(Debug, Clone)]
pub struct CentralBody {
    pub id: BodyId,
    pub mass: f64, // solar masses
}

impl CentralBody {
    pub fn new(id: impl Into<BodyId>, mass: f64) -> SimResult<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "central.mass",
                reason: format!("must be finite and positive, got {mass}"),
            });
        }
        Ok(Self { id: id.into(), mass })
    }

    /// One solar mass
    pub fn sun() -> Self {
        Self {
            id: BodyId::Name("Sun".to_string()),
            mass: 1.0,
        }
    }
}

pub struct System {
    central: CentralBody,
    pub(crate) bodies: Vec<Body>, // insertion order is output order
    pub(crate) t: Option<f64>, // simulated time, Julian days
    pub(crate) steps: usize, // completed steps
    pub(crate) parameters: Parameters,
    pub(crate) forces: AccelSet,
}

impl System {
    /// New system with no bodies and unset time; mu follows the central mass
    pub fn new(central: CentralBody) -> SimResult<Self> {
        let parameters = Parameters::for_central_mass(central.mass)?;
        Ok(Self::with_parameters(central, parameters))
    }

    pub fn with_parameters(central: CentralBody, parameters: Parameters) -> Self {
        let forces = AccelSet::new().with(CentralGravity { mu: parameters.mu() });
        Self {
            central,
            bodies: Vec::new(),
            t: None,
            steps: 0,
            parameters,
            forces,
        }
    }

    /// Append a body; duplicate ids are allowed
    /// The system's retention policy is applied to the body's trajectory
    pub fn add_body(&mut self, mut body: Body) {
        // retention was validated by Parameters::with_retention
        body.trajectory_mut().apply_policy(self.parameters.retention());
        debug!("added body {} at |x| = {:.6} AU", body.id(), body.orbital_radius());
        self.bodies.push(body);
    }

    /// Set the simulated time (Julian day) stepping starts from
    pub fn set_initial_time(&mut self, t: f64) -> SimResult<()> {
        if !t.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "initial_time",
                reason: format!("must be finite, got {t}"),
            });
        }
        debug!("simulated time set to JD {t}");
        self.t = Some(t);
        Ok(())
    }

    /// Advance every body and the clock by one fixed step
    ///
    /// On error nothing is modified.
    pub fn step(&mut self) -> SimResult<Frame<'_>> {
        symplectic_euler_step(self)?;
        self.frame()
    }

    /// Call [`System::step`] `n` times and return the final time
    pub fn advance(&mut self, n: usize) -> SimResult<f64> {
        for _ in 0..n {
            self.step()?;
        }
        self.t.ok_or(SimError::UninitializedTime)
    }

    /// Read-only view of the current state
    pub fn frame(&self) -> SimResult<Frame<'_>> {
        let time = self.t.ok_or(SimError::UninitializedTime)?;
        Ok(Frame::new(time, &self.bodies))
    }

    pub fn central(&self) -> &CentralBody {
        &self.central
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// First body carrying `id`
    pub fn body(&self, id: &BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn simulated_time(&self) -> Option<f64> {
        self.t
    }

    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}
