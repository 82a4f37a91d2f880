//! Acceleration contributors for the orbit engine
//!
//! Orbiting bodies feel only the central mass, never each other, so every
//! term maps a single position to an acceleration.

use crate::simulation::states::NVec3;

/// Trait for acceleration sources acting on one body position
/// Returns `None` where the term is undefined (e.g. at a singularity)
pub trait Acceleration {
    fn acceleration(&self, t: f64, x: &NVec3) -> Option<NVec3>;
}

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total acceleration at time `t` and position `x`
    /// `None` if any term is undefined there
    pub fn accumulate(&self, t: f64, x: &NVec3) -> Option<NVec3> {
        self.terms
            .iter()
            .try_fold(NVec3::zeros(), |acc, term| Some(acc + term.acceleration(t, x)?))
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Inverse-square attraction toward a stationary mass at the origin
///
/// a = -mu * x / |x|^3, with no softening: the law is undefined at |x| = 0
pub struct CentralGravity {
    pub mu: f64, // gravitational parameter, AU^3/day^2
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, _t: f64, x: &NVec3) -> Option<NVec3> {
        let r2 = x.norm_squared();
        if r2 == 0.0 || !r2.is_finite() {
            return None;
        }
        // 1 / |x|^3
        let inv_r3 = (r2 * r2.sqrt()).recip();
        Some(-self.mu * inv_r3 * x)
    }
}
