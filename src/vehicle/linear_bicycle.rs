//! Linearized bicycle vehicle dynamics
//!
//! Dynamic bicycle model with a small-angle approximation on the lateral
//! dynamics and the longitudinal speed held constant. The state is
//! [x, y, theta, vy, r]; the single control input is the front steering
//! angle.

use nalgebra::Vector5;

use crate::common::error::{ModelError, ModelResult};
use crate::common::types::VehicleState;

/// Vehicle parameter bundle for the linearized bicycle model.
///
/// All coefficients of the lateral dynamics derive from these values; there
/// are no hidden model constants. `Default` is the reference mid-size-car
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleParams {
    /// Vehicle mass [kg]
    pub mass: f64,
    /// Constant longitudinal speed [m/s]
    pub longitudinal_speed: f64,
    /// Distance from the front axle to the center of gravity [m]
    pub front_axle_length: f64,
    /// Distance from the rear axle to the center of gravity [m]
    pub rear_axle_length: f64,
    /// Front tire cornering stiffness [N/rad]
    pub front_cornering_stiffness: f64,
    /// Rear tire cornering stiffness [N/rad]
    pub rear_cornering_stiffness: f64,
    /// Yaw moment of inertia [kg m^2]
    pub yaw_inertia: f64,
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            mass: 1500.0,
            longitudinal_speed: 20.0,
            front_axle_length: 1.3,
            rear_axle_length: 1.7,
            front_cornering_stiffness: 10000.0,
            rear_cornering_stiffness: 12000.0,
            yaw_inertia: 6000.0,
        }
    }
}

/// Lateral-dynamics coefficients, fixed once the parameters are known
#[derive(Debug, Clone, Copy)]
struct Coefficients {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Coefficients {
    fn from_params(p: &VehicleParams) -> Self {
        let m = p.mass;
        let vx = p.longitudinal_speed;
        let lf = p.front_axle_length;
        let lr = p.rear_axle_length;
        let cf = p.front_cornering_stiffness;
        let cr = p.rear_cornering_stiffness;
        let iz = p.yaw_inertia;

        Self {
            a: -(cf + cr) / (m * vx),
            b: (-lf * cf + lr * cr) / (m * vx) - vx,
            c: (-lf * cf + lr * cr) / (iz * vx),
            d: -(lf * lf * cf + lr * lr * cr) / (iz * vx),
            e: cf / m,
            f: lf * iz / m,
        }
    }
}

/// Linearized bicycle model.
///
/// Stateless apart from its fixed parameters; `derivative` is a pure
/// function of state and steering input.
#[derive(Debug, Clone, Copy)]
pub struct LinearBicycleModel {
    params: VehicleParams,
    coeffs: Coefficients,
}

impl LinearBicycleModel {
    /// Create a model, rejecting parameter values that would divide by zero
    /// in the coefficient computation.
    pub fn new(params: VehicleParams) -> ModelResult<Self> {
        if !params.longitudinal_speed.is_finite() || params.longitudinal_speed == 0.0 {
            return Err(ModelError::InvalidParameter(format!(
                "longitudinal_speed must be finite and non-zero, got {}",
                params.longitudinal_speed
            )));
        }
        if !params.mass.is_finite() || params.mass <= 0.0 {
            return Err(ModelError::InvalidParameter(format!(
                "mass must be finite and positive, got {}",
                params.mass
            )));
        }
        if !params.yaw_inertia.is_finite() || params.yaw_inertia <= 0.0 {
            return Err(ModelError::InvalidParameter(format!(
                "yaw_inertia must be finite and positive, got {}",
                params.yaw_inertia
            )));
        }

        let coeffs = Coefficients::from_params(&params);
        Ok(Self { params, coeffs })
    }

    /// Model with the reference parameter configuration
    pub fn with_defaults() -> Self {
        // Default params are known non-degenerate
        Self::new(VehicleParams::default()).unwrap()
    }

    pub fn params(&self) -> &VehicleParams {
        &self.params
    }

    /// State derivative under the given steering angle.
    ///
    /// Returns a rate vector packed in `VehicleState` fields
    /// (x_dot, y_dot, theta_dot, vy_dot, r_dot). Steering range is not
    /// checked here; the input search only generates in-range candidates.
    pub fn derivative(&self, state: &VehicleState, steer: f64) -> ModelResult<VehicleState> {
        if !state.is_finite() {
            return Err(ModelError::NonFiniteResult(
                "derivative called with non-finite state".to_string(),
            ));
        }
        if !steer.is_finite() {
            return Err(ModelError::NonFiniteResult(format!(
                "derivative called with non-finite steer {}",
                steer
            )));
        }

        let dot = VehicleState::from(self.derivative_vector(&state.to_vector(), steer));
        if !dot.is_finite() {
            return Err(ModelError::NonFiniteResult(format!(
                "derivative diverged at state {:?}, steer {}",
                state, steer
            )));
        }
        Ok(dot)
    }

    /// Raw derivative on `Vector5`, no validation. Hot path for the
    /// integrators, which validate their own inputs and outputs.
    pub(crate) fn derivative_vector(&self, x: &Vector5<f64>, steer: f64) -> Vector5<f64> {
        let vx = self.params.longitudinal_speed;
        let theta = x[2];
        let vy = x[3];
        let r = x[4];

        let cos_theta = theta.cos();
        let sin_theta = theta.sin();
        let k = &self.coeffs;

        Vector5::new(
            vx * cos_theta - vy * sin_theta,
            vx * sin_theta + vy * cos_theta,
            r,
            k.a * vy + k.b * r + k.e * steer,
            k.c * vy + k.d * r + k.f * steer,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivative_matches_formulas() {
        let p = VehicleParams::default();
        let model = LinearBicycleModel::new(p).unwrap();

        let state = VehicleState::new(0.0, 0.0, 0.0, 10.0, 0.0);
        let dot = model.derivative(&state, 0.0).unwrap();

        // Recompute the expected coefficients from the formulas directly
        let a = -(p.front_cornering_stiffness + p.rear_cornering_stiffness)
            / (p.mass * p.longitudinal_speed);
        let c = (-p.front_axle_length * p.front_cornering_stiffness
            + p.rear_axle_length * p.rear_cornering_stiffness)
            / (p.yaw_inertia * p.longitudinal_speed);

        assert!((dot.x - p.longitudinal_speed).abs() < 1e-12);
        assert!((dot.y - state.vy).abs() < 1e-12);
        assert!(dot.theta.abs() < 1e-12);
        assert!((dot.vy - a * state.vy).abs() < 1e-12);
        assert!((dot.r - c * state.vy).abs() < 1e-12);
    }

    #[test]
    fn test_derivative_linear_in_inputs() {
        let model = LinearBicycleModel::with_defaults();

        // At theta = 0 the lateral rates are a linear combination of
        // (vy, r, steer); check superposition
        let base = VehicleState::new(0.0, 0.0, 0.0, 0.0, 0.0);
        let s_vy = VehicleState::new(0.0, 0.0, 0.0, 2.0, 0.0);
        let s_r = VehicleState::new(0.0, 0.0, 0.0, 0.0, 0.5);
        let s_both = VehicleState::new(0.0, 0.0, 0.0, 2.0, 0.5);

        let d_vy = model.derivative(&s_vy, 0.0).unwrap();
        let d_r = model.derivative(&s_r, 0.0).unwrap();
        let d_steer = model.derivative(&base, 0.1).unwrap();
        let d_all = model.derivative(&s_both, 0.1).unwrap();

        assert!((d_all.vy - (d_vy.vy + d_r.vy + d_steer.vy)).abs() < 1e-12);
        assert!((d_all.r - (d_vy.r + d_r.r + d_steer.r)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_input_invariance() {
        let model = LinearBicycleModel::with_defaults();

        for &theta in &[0.0, 0.7, -1.3, 3.0, 6.0] {
            let state = VehicleState::new(5.0, -2.0, theta, 0.0, 0.0);
            let dot = model.derivative(&state, 0.0).unwrap();
            assert_eq!(dot.vy, 0.0);
            assert_eq!(dot.r, 0.0);
            assert_eq!(dot.theta, 0.0);
        }
    }

    #[test]
    fn test_zero_longitudinal_speed_rejected() {
        let params = VehicleParams {
            longitudinal_speed: 0.0,
            ..Default::default()
        };
        let result = LinearBicycleModel::new(params);
        assert!(matches!(result, Err(ModelError::InvalidParameter(_))));
    }

    #[test]
    fn test_non_finite_state_rejected() {
        let model = LinearBicycleModel::with_defaults();
        let bad = VehicleState::new(0.0, 0.0, f64::INFINITY, 0.0, 0.0);
        assert!(matches!(
            model.derivative(&bad, 0.0),
            Err(ModelError::NonFiniteResult(_))
        ));
    }
}
