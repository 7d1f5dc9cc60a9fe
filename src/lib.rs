//! motion_primitives - short-horizon motion primitives for a linearized
//! bicycle vehicle model
//!
//! This crate is the expansion kernel of a kinodynamic sampling-based
//! planner: given a current state and a sampled target configuration, it
//! sweeps a discretized steering range, advances the linearized bicycle
//! dynamics one control interval per candidate, and returns the candidate
//! state closest to the target. It also provides the uniform configuration
//! sampler that generates targets and an offline reference-trajectory
//! simulator for validation and plotting.

// Core modules
pub mod common;
pub mod utils;

// Kernel modules
pub mod vehicle;
pub mod integration;
pub mod planning;
pub mod simulation;

// Re-export common types for convenience
pub use common::{Point2D, Segment, VehicleState};
pub use common::{NoOpObstacleChecker, ObstacleChecker, SegmentObstacles};
pub use common::{ModelError, ModelResult};
pub use integration::{rk4_step, AdaptiveRkf45};
pub use planning::{expand_all, sample_config, select_best_input, SteerSweep};
pub use simulation::ReferenceSimulator;
pub use vehicle::{LinearBicycleModel, VehicleParams};
