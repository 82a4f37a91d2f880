//! Planar position history of a body
//!
//! A [`Trajectory`] stores the (x, y) projection of a body's position once
//! per recorded step. How many points are kept is decided by a
//! [`RetentionPolicy`]; physics never reads the history back.

use std::collections::VecDeque;

use crate::error::{SimError, SimResult};

/// How much of the history a trajectory keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetentionPolicy {
    /// Keep every point for the lifetime of the simulation
    #[default]
    Unbounded,
    /// Keep only the most recent `capacity` points
    RingBuffer { capacity: usize },
    /// Keep every `every`-th recorded point (the `every`-th, `2 * every`-th, ...)
    Decimate { every: usize },
}

impl RetentionPolicy {
    /// Reject policies that could never hold a point
    pub fn validate(self) -> SimResult<Self> {
        match self {
            RetentionPolicy::RingBuffer { capacity: 0 } => Err(SimError::InvalidParameter {
                name: "retention.capacity",
                reason: "ring buffer capacity must be at least 1".to_string(),
            }),
            RetentionPolicy::Decimate { every: 0 } => Err(SimError::InvalidParameter {
                name: "retention.every",
                reason: "decimation interval must be at least 1".to_string(),
            }),
            policy => Ok(policy),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    points: VecDeque<[f64; 2]>, // retained (x, y) points, oldest first
    recorded: usize, // total number of record calls, retained or not
    policy: RetentionPolicy,
}

impl Trajectory {
    /// Empty trajectory; fails with `InvalidParameter` for a zero-sized policy
    pub fn new(policy: RetentionPolicy) -> SimResult<Self> {
        Ok(Self {
            points: VecDeque::new(),
            recorded: 0,
            policy: policy.validate()?,
        })
    }

    /// Append one point, subject to the retention policy
    pub fn record(&mut self, point: [f64; 2]) {
        self.recorded += 1;
        match self.policy {
            RetentionPolicy::Unbounded => self.points.push_back(point),
            RetentionPolicy::RingBuffer { capacity } => {
                if self.points.len() == capacity {
                    self.points.pop_front();
                }
                self.points.push_back(point);
            }
            RetentionPolicy::Decimate { every } => {
                if self.recorded % every == 0 {
                    self.points.push_back(point);
                }
            }
        }
    }

    /// Switch policy. A ring buffer drops the oldest points that no longer
    /// fit; already retained points are otherwise left alone.
    /// A rejected policy leaves the trajectory unchanged.
    pub fn set_policy(&mut self, policy: RetentionPolicy) -> SimResult<()> {
        self.apply_policy(policy.validate()?);
        Ok(())
    }

    /// `policy` must already be validated
    pub(crate) fn apply_policy(&mut self, policy: RetentionPolicy) {
        if let RetentionPolicy::RingBuffer { capacity } = policy {
            while self.points.len() > capacity {
                self.points.pop_front();
            }
        }
        self.policy = policy;
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }

    /// Retained points in chronological order
    pub fn points(&self) -> impl Iterator<Item = &[f64; 2]> + '_ {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&[f64; 2]> {
        self.points.back()
    }

    /// Number of retained points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points ever recorded, including those the policy dropped
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    /// Retained x coordinates, for path plotting
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p[0]).collect()
    }

    /// Retained y coordinates, for path plotting
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p[1]).collect()
    }
}
