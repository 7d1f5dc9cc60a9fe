//! Adaptive Runge-Kutta-Fehlberg 4(5) integration
//!
//! Variable-step solver for offline reference trajectories. Not used in the
//! input-search hot path, which stays on the deterministic fixed-step RK4.

use nalgebra::Vector5;

use crate::common::error::{ModelError, ModelResult};
use crate::common::types::VehicleState;
use crate::vehicle::LinearBicycleModel;

/// Embedded Fehlberg 4(5) scheme with proportional step-size control.
///
/// The internal step is clamped to `[h_min, h_max]`; callers bound `h_max`
/// by their reporting interval so no output sample is skipped over.
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveRkf45 {
    /// Absolute error tolerance per step
    pub abs_tol: f64,
    /// Relative error tolerance per step
    pub rel_tol: f64,
    /// Largest internal step [s]
    pub h_max: f64,
    /// Smallest internal step before giving up on refinement [s]
    pub h_min: f64,
}

impl Default for AdaptiveRkf45 {
    fn default() -> Self {
        Self {
            abs_tol: 1e-8,
            rel_tol: 1e-8,
            h_max: 0.05,
            h_min: 1e-6,
        }
    }
}

impl AdaptiveRkf45 {
    pub fn with_h_max(h_max: f64) -> Self {
        Self {
            h_max,
            ..Default::default()
        }
    }

    /// Integrate from `t0` to `t1` under a constant steering angle.
    pub fn integrate_to(
        &self,
        model: &LinearBicycleModel,
        state: &VehicleState,
        steer: f64,
        t0: f64,
        t1: f64,
    ) -> ModelResult<VehicleState> {
        if !state.is_finite() {
            return Err(ModelError::NonFiniteResult(
                "integrate_to called with non-finite state".to_string(),
            ));
        }
        if !(t0.is_finite() && t1.is_finite() && t1 >= t0) {
            return Err(ModelError::InvalidParameter(format!(
                "invalid integration interval [{}, {}]",
                t0, t1
            )));
        }
        if !(self.h_max > 0.0 && self.h_min > 0.0 && self.h_max >= self.h_min) {
            return Err(ModelError::InvalidParameter(format!(
                "invalid step bounds h_min {}, h_max {}",
                self.h_min, self.h_max
            )));
        }

        let mut x = state.to_vector();
        let mut t = t0;
        let mut h = self.h_max.min(t1 - t0);

        while t < t1 {
            // Never step past t1; steps at or below h_min are force-accepted
            h = h.max(self.h_min).min(t1 - t).min(self.h_max);

            let (x5, err) = fehlberg_step(model, &x, steer, h);
            let scale = self.abs_tol + self.rel_tol * x.amax().max(x5.amax());
            let err_ratio = err / scale;

            if err_ratio <= 1.0 || h <= self.h_min {
                t += h;
                x = x5;
                if !x.iter().all(|v| v.is_finite()) {
                    return Err(ModelError::NonFiniteResult(format!(
                        "adaptive integration diverged at t = {}",
                        t
                    )));
                }
            }

            // Proportional controller on the 4th-order error estimate,
            // with the usual safety factor and growth limits
            let factor = if err_ratio > 0.0 {
                (0.9 * err_ratio.powf(-0.2)).max(0.2).min(5.0)
            } else {
                5.0
            };
            h *= factor;
        }

        Ok(VehicleState::from(x))
    }
}

// Fehlberg coefficients (RKF45)
const A2: f64 = 1.0 / 4.0;
const B31: f64 = 3.0 / 32.0;
const B32: f64 = 9.0 / 32.0;
const B41: f64 = 1932.0 / 2197.0;
const B42: f64 = -7200.0 / 2197.0;
const B43: f64 = 7296.0 / 2197.0;
const B51: f64 = 439.0 / 216.0;
const B52: f64 = -8.0;
const B53: f64 = 3680.0 / 513.0;
const B54: f64 = -845.0 / 4104.0;
const B61: f64 = -8.0 / 27.0;
const B62: f64 = 2.0;
const B63: f64 = -3544.0 / 2565.0;
const B64: f64 = 1859.0 / 4104.0;
const B65: f64 = -11.0 / 40.0;

// 5th-order solution weights
const C1: f64 = 16.0 / 135.0;
const C3: f64 = 6656.0 / 12825.0;
const C4: f64 = 28561.0 / 56430.0;
const C5: f64 = -9.0 / 50.0;
const C6: f64 = 2.0 / 55.0;

// 4th-order solution weights (for the embedded error estimate)
const D1: f64 = 25.0 / 216.0;
const D3: f64 = 1408.0 / 2565.0;
const D4: f64 = 2197.0 / 4104.0;
const D5: f64 = -1.0 / 5.0;

/// One embedded step: returns the 5th-order solution and the error estimate
fn fehlberg_step(
    model: &LinearBicycleModel,
    x: &Vector5<f64>,
    steer: f64,
    h: f64,
) -> (Vector5<f64>, f64) {
    let k1 = model.derivative_vector(x, steer) * h;
    let k2 = model.derivative_vector(&(x + k1 * A2), steer) * h;
    let k3 = model.derivative_vector(&(x + k1 * B31 + k2 * B32), steer) * h;
    let k4 = model.derivative_vector(&(x + k1 * B41 + k2 * B42 + k3 * B43), steer) * h;
    let k5 = model.derivative_vector(&(x + k1 * B51 + k2 * B52 + k3 * B53 + k4 * B54), steer) * h;
    let k6 = model.derivative_vector(
        &(x + k1 * B61 + k2 * B62 + k3 * B63 + k4 * B64 + k5 * B65),
        steer,
    ) * h;

    let x5 = x + k1 * C1 + k3 * C3 + k4 * C4 + k5 * C5 + k6 * C6;
    let x4 = x + k1 * D1 + k3 * D3 + k4 * D4 + k5 * D5;

    (x5, (x5 - x4).amax())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::rk4::rk4_step;

    #[test]
    fn test_rkf45_matches_fine_rk4() {
        let model = LinearBicycleModel::with_defaults();
        let initial = VehicleState::new(0.0, 0.0, 0.0, 2.0, 0.1);
        let steer = 0.05;
        let horizon = 1.0;

        let solver = AdaptiveRkf45::default();
        let adaptive = solver
            .integrate_to(&model, &initial, steer, 0.0, horizon)
            .unwrap();

        // Many small RK4 steps as the cross-check
        let n = 1000;
        let dt = horizon / n as f64;
        let mut fixed = initial;
        for _ in 0..n {
            fixed = rk4_step(&model, &fixed, steer, dt).unwrap();
        }

        assert!((adaptive.x - fixed.x).abs() < 1e-5);
        assert!((adaptive.y - fixed.y).abs() < 1e-5);
        assert!((adaptive.theta - fixed.theta).abs() < 1e-6);
        assert!((adaptive.vy - fixed.vy).abs() < 1e-5);
        assert!((adaptive.r - fixed.r).abs() < 1e-6);
    }

    #[test]
    fn test_rkf45_straight_line() {
        let model = LinearBicycleModel::with_defaults();
        let vx = model.params().longitudinal_speed;

        let end = AdaptiveRkf45::default()
            .integrate_to(&model, &VehicleState::origin(), 0.0, 0.0, 2.0)
            .unwrap();

        assert!((end.x - vx * 2.0).abs() < 1e-6);
        assert!(end.y.abs() < 1e-9);
        assert!(end.vy.abs() < 1e-9);
    }

    #[test]
    fn test_rkf45_empty_interval() {
        let model = LinearBicycleModel::with_defaults();
        let initial = VehicleState::new(1.0, 2.0, 0.3, 0.0, 0.0);
        let end = AdaptiveRkf45::default()
            .integrate_to(&model, &initial, 0.0, 1.0, 1.0)
            .unwrap();
        assert_eq!(end, initial);
    }

    #[test]
    fn test_rkf45_rejects_reversed_interval() {
        let model = LinearBicycleModel::with_defaults();
        let result =
            AdaptiveRkf45::default().integrate_to(&model, &VehicleState::origin(), 0.0, 1.0, 0.0);
        assert!(matches!(result, Err(ModelError::InvalidParameter(_))));
    }
}
