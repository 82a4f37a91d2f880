//! Error types for the simulation core
//!
//! Every fallible operation in the library returns [`SimResult`]. The driver
//! binary wraps these in `anyhow` with extra context.

use crate::simulation::states::BodyId;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("simulated time is not set; call set_initial_time before stepping")]
    UninitializedTime,
    #[error("body {body} reached the origin of the central mass; gravity is undefined there")]
    DegenerateState { body: BodyId },
    #[error("invalid initial state for body {body}: {reason}")]
    InvalidState { body: BodyId, reason: String },
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

pub type SimResult<T> = Result<T, SimError>;
