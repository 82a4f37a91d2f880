//! Fixed-step time integrator for the orbit system
//!
//! Semi-implicit (symplectic) Euler: drift the position with the velocity
//! from the start of the step, then kick the velocity with the acceleration
//! at the new position.

use log::trace;

use super::states::{Body, NVec3, System};
use super::forces::AccelSet;
use crate::error::{SimError, SimResult};

/// Advance the system by one step of `params.dt()`
///
/// All new states are computed into a buffer first and only committed when
/// every body succeeded, so a failed step leaves `sys` untouched.
pub fn symplectic_euler_step(sys: &mut System) -> SimResult<()> {
    let t = sys.t.ok_or(SimError::UninitializedTime)?;
    let dt = sys.parameters.dt();
    let t_next = t + dt;

    let updates = sys
        .bodies
        .iter()
        .map(|b| advance_body(b, t_next, dt, &sys.forces))
        .collect::<SimResult<Vec<(NVec3, NVec3)>>>()?;

    for (b, (x, v)) in sys.bodies.iter_mut().zip(updates) {
        b.x = x;
        b.v = v;
        b.record_position();
    }

    sys.t = Some(t_next);
    sys.steps += 1;
    trace!("step {} done, t = JD {}", sys.steps, t_next);
    Ok(())
}

/// New (position, velocity) of one body after a step
fn advance_body(b: &Body, t_next: f64, dt: f64, forces: &AccelSet) -> SimResult<(NVec3, NVec3)> {
    let degenerate = || SimError::DegenerateState { body: b.id().clone() };

    // a body sitting on the central mass has no defined force
    if b.x.norm_squared() == 0.0 {
        return Err(degenerate());
    }

    // Drift: x_n+1 = x_n + dt * v_n
    let x = b.x + dt * b.v;

    // a_n+1 from x_n+1
    let a = forces.accumulate(t_next, &x).ok_or_else(degenerate)?;

    // Kick: v_n+1 = v_n + dt * a_n+1
    let v = b.v + dt * a;

    if x.iter().chain(v.iter()).any(|c| !c.is_finite()) {
        return Err(degenerate());
    }
    Ok((x, v))
}
