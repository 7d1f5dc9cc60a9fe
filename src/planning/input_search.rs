//! Discretized steering-input search
//!
//! One tree-expansion step of a kinodynamic sampling-based planner: sweep
//! the steering range, integrate one control interval per candidate, and
//! keep the candidate ending closest to the target position.

use std::f64::consts::PI;

use itertools::Itertools;
use ordered_float::NotNan;

use crate::common::error::{ModelError, ModelResult};
use crate::common::traits::ObstacleChecker;
use crate::common::types::VehicleState;
use crate::integration::rk4_step;
use crate::vehicle::LinearBicycleModel;

/// Discretization of the steering range.
///
/// Candidates are `min_steer, min_steer + step, ...` while strictly below
/// `max_steer`. The upper bound itself is excluded, and floating-point
/// accumulation decides whether a candidate lands exactly on it; this
/// matches the reference sweep and is kept deliberately, since planners may
/// depend on the exact candidate set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteerSweep {
    /// Lowest steering angle [rad], included
    pub min_steer: f64,
    /// Upper steering bound [rad], excluded
    pub max_steer: f64,
    /// Angular increment between candidates [rad]
    pub step: f64,
}

impl Default for SteerSweep {
    fn default() -> Self {
        // +/-30 degrees swept in ~3 degree increments
        Self {
            min_steer: -PI / 6.0,
            max_steer: PI / 6.0,
            step: PI / 60.0,
        }
    }
}

impl SteerSweep {
    pub fn new(min_steer: f64, max_steer: f64, step: f64) -> Self {
        Self {
            min_steer,
            max_steer,
            step,
        }
    }

    fn validate(&self) -> ModelResult<()> {
        if !(self.min_steer.is_finite() && self.max_steer.is_finite() && self.step.is_finite()) {
            return Err(ModelError::EmptyCandidateSet(format!(
                "non-finite sweep bounds [{}, {}) step {}",
                self.min_steer, self.max_steer, self.step
            )));
        }
        if self.step <= 0.0 {
            return Err(ModelError::EmptyCandidateSet(format!(
                "steer step must be positive, got {}",
                self.step
            )));
        }
        if self.min_steer >= self.max_steer {
            return Err(ModelError::EmptyCandidateSet(format!(
                "empty steer range [{}, {})",
                self.min_steer, self.max_steer
            )));
        }
        Ok(())
    }

    /// Candidate angles in ascending order
    pub fn angles(&self) -> impl Iterator<Item = f64> + '_ {
        let max = self.max_steer;
        itertools::iterate(self.min_steer, move |s| s + self.step).take_while(move |s| *s < max)
    }
}

/// Select the steering candidate whose next state lands closest to `target`.
///
/// Returns the resulting next state (not the steering value). Distance is
/// planar (x, y) only; heading and velocities are ignored. Ties are won by
/// the first candidate in ascending-angle order, i.e. the smaller angle:
/// all candidate distances are computed before the minimum is taken, so the
/// selection stays deterministic regardless of evaluation order.
///
/// Candidates the `obstacles` checker rejects are skipped; per-candidate
/// integration failures are held back and surface only if no candidate
/// survives at all.
pub fn select_best_input(
    model: &LinearBicycleModel,
    target: &VehicleState,
    near: &VehicleState,
    sweep: &SteerSweep,
    dt: f64,
    obstacles: &dyn ObstacleChecker,
) -> ModelResult<VehicleState> {
    sweep.validate()?;
    if !target.is_finite() {
        return Err(ModelError::NonFiniteResult(
            "select_best_input called with non-finite target".to_string(),
        ));
    }
    if !near.is_finite() {
        return Err(ModelError::NonFiniteResult(
            "select_best_input called with non-finite near state".to_string(),
        ));
    }

    let mut last_err = None;
    let mut candidates = Vec::new();

    for steer in sweep.angles() {
        let next = match rk4_step(model, near, steer, dt) {
            Ok(next) => next,
            Err(e) => {
                last_err = Some(e);
                continue;
            }
        };
        if obstacles.collides(&next) {
            continue;
        }
        // Planar distance; non-NaN because both endpoints are finite
        let distance = NotNan::new(next.distance_xy(target)).unwrap();
        candidates.push((distance, next));
    }

    candidates
        .into_iter()
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, state)| state)
        .ok_or_else(|| match last_err {
            Some(e) => e,
            None => ModelError::EmptyCandidateSet(
                "every steering candidate was rejected".to_string(),
            ),
        })
}

/// All reachable next states for one sweep, in ascending-angle order.
///
/// The expansion fan of `near`; useful for visualization and for planners
/// that score candidates themselves.
pub fn expand_all(
    model: &LinearBicycleModel,
    near: &VehicleState,
    sweep: &SteerSweep,
    dt: f64,
) -> ModelResult<Vec<VehicleState>> {
    sweep.validate()?;
    sweep
        .angles()
        .map(|steer| rk4_step(model, near, steer, dt))
        .try_collect()
}
