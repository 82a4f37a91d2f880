//! Read-only view of the system handed to renderers after each step
//!
//! A [`Frame`] borrows the bodies; [`Snapshot`] is its owned, serializable
//! form for writing the feed to disk.

use serde::Serialize;

use super::states::{Body, BodyId, NVec3};

#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub time: f64, // simulated time, Julian days
    bodies: &'a [Body],
}

impl<'a> Frame<'a> {
    pub(crate) fn new(time: f64, bodies: &'a [Body]) -> Self {
        Self { time, bodies }
    }

    /// Bodies in insertion order
    pub fn bodies(&self) -> &'a [Body] {
        self.bodies
    }

    /// Current (id, position) of every body, for marker placement
    pub fn positions(&self) -> impl Iterator<Item = (&'a BodyId, &'a NVec3)> + 'a {
        self.bodies.iter().map(|b| (b.id(), b.position()))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            time: self.time,
            bodies: self.bodies.iter().map(BodySnapshot::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub time: f64,
    pub bodies: Vec<BodySnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    pub trajectory: Vec<[f64; 2]>,
}

impl From<&Body> for BodySnapshot {
    fn from(b: &Body) -> Self {
        let x = b.position();
        let v = b.velocity();
        Self {
            id: b.id().clone(),
            position: [x.x, x.y, x.z],
            velocity: [v.x, v.y, v.z],
            trajectory: b.trajectory().points().copied().collect(),
        }
    }
}
