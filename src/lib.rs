pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, BodyId, CentralBody, System, NVec3};
pub use simulation::forces::{Acceleration, AccelSet, CentralGravity};
pub use simulation::integrator::symplectic_euler_step;
pub use simulation::params::{Parameters, MU_SUN, DT_DAYS};
pub use simulation::trajectory::{Trajectory, RetentionPolicy};
pub use simulation::frame::{Frame, Snapshot, BodySnapshot};
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, CentralConfig, ParametersConfig, EngineConfig, BodyConfig, RetentionConfig};

pub use benchmark::benchmark::{bench_step, bench_retention};
