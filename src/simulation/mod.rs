//! Offline reference-trajectory generation
//!
//! Integrates the same dynamics as the hot path over a longer horizon with
//! the adaptive solver, reporting time-stamped states on a fixed grid.
//! Intended for validation and plotting, never for the input search.

use crate::common::error::{ModelError, ModelResult};
use crate::common::types::VehicleState;
use crate::integration::AdaptiveRkf45;
use crate::vehicle::LinearBicycleModel;

/// Reporting interval for reference trajectories [s]
pub const DEFAULT_REPORT_INTERVAL: f64 = 0.05;

/// Configuration for reference-trajectory generation
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Spacing of the reported samples [s]
    pub report_interval: f64,
    /// Adaptive solver settings; `h_max` is clamped to the reporting
    /// interval at construction
    pub solver: AdaptiveRkf45,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            report_interval: DEFAULT_REPORT_INTERVAL,
            solver: AdaptiveRkf45::with_h_max(DEFAULT_REPORT_INTERVAL),
        }
    }
}

/// Reference-trajectory generator for a fixed model
#[derive(Debug, Clone, Copy)]
pub struct ReferenceSimulator<'a> {
    model: &'a LinearBicycleModel,
    config: SimulationConfig,
}

impl<'a> ReferenceSimulator<'a> {
    pub fn new(model: &'a LinearBicycleModel) -> Self {
        Self {
            model,
            config: SimulationConfig::default(),
        }
    }

    pub fn with_config(model: &'a LinearBicycleModel, config: SimulationConfig) -> Self {
        Self { model, config }
    }

    /// Lazily simulate from `initial` over `[0, horizon]` with a constant
    /// steering angle.
    ///
    /// Yields `(time, state)` every `report_interval`, starting at time 0
    /// with the initial state and ending exactly at `horizon` (the last
    /// step is shortened to land on it). The iterator is `Clone`, so a
    /// trajectory can be restarted from any saved copy of it.
    pub fn simulate(
        &self,
        initial: &VehicleState,
        horizon: f64,
        steer: f64,
    ) -> ModelResult<Trajectory<'a>> {
        if !initial.is_finite() {
            return Err(ModelError::NonFiniteResult(
                "simulate called with non-finite initial state".to_string(),
            ));
        }
        if !(horizon.is_finite() && horizon >= 0.0) {
            return Err(ModelError::InvalidParameter(format!(
                "horizon must be finite and non-negative, got {}",
                horizon
            )));
        }
        if !(self.config.report_interval.is_finite() && self.config.report_interval > 0.0) {
            return Err(ModelError::InvalidParameter(format!(
                "report interval must be positive, got {}",
                self.config.report_interval
            )));
        }

        let mut solver = self.config.solver;
        solver.h_max = solver.h_max.min(self.config.report_interval);

        Ok(Trajectory {
            model: self.model,
            solver,
            report_interval: self.config.report_interval,
            steer,
            horizon,
            state: *initial,
            t: 0.0,
            started: false,
            failed: false,
        })
    }
}

/// Lazy sequence of time-stamped states produced by [`ReferenceSimulator`].
///
/// Fused after the first error: once an `Err` is yielded the iterator only
/// returns `None`.
#[derive(Debug, Clone)]
pub struct Trajectory<'a> {
    model: &'a LinearBicycleModel,
    solver: AdaptiveRkf45,
    report_interval: f64,
    steer: f64,
    horizon: f64,
    state: VehicleState,
    t: f64,
    started: bool,
    failed: bool,
}

impl<'a> Iterator for Trajectory<'a> {
    type Item = ModelResult<(f64, VehicleState)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(Ok((self.t, self.state)));
        }
        if self.t >= self.horizon {
            return None;
        }

        let t_next = (self.t + self.report_interval).min(self.horizon);
        match self
            .solver
            .integrate_to(self.model, &self.state, self.steer, self.t, t_next)
        {
            Ok(next) => {
                self.t = t_next;
                self.state = next;
                Some(Ok((self.t, self.state)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
