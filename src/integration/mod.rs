//! Numerical integrators for the vehicle dynamics
//!
//! Two clearly separated strategies: a deterministic fixed-step RK4 for the
//! input-search hot path, and an adaptive RKF45 for offline reference
//! trajectories. They are expected to agree within tolerance, not exactly.

pub mod rk4;
pub mod rkf45;

pub use rk4::rk4_step;
pub use rkf45::AdaptiveRkf45;
