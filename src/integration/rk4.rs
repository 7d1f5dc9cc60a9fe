//! Fixed-step fourth-order Runge-Kutta integration

use crate::common::error::{ModelError, ModelResult};
use crate::common::types::VehicleState;
use crate::vehicle::LinearBicycleModel;

/// Reference control interval [s]
pub const DEFAULT_DT: f64 = 0.2;

/// Advance `state` by exactly `dt` under a constant steering angle.
///
/// Classical 4-stage RK4. The steering input is held across all four
/// stages, the standard treatment for a single control interval. There is
/// no adaptivity and no error estimate; a numerically diverging result is
/// reported as [`ModelError::NonFiniteResult`], never retried.
pub fn rk4_step(
    model: &LinearBicycleModel,
    state: &VehicleState,
    steer: f64,
    dt: f64,
) -> ModelResult<VehicleState> {
    if !state.is_finite() {
        return Err(ModelError::NonFiniteResult(
            "rk4_step called with non-finite state".to_string(),
        ));
    }
    if !steer.is_finite() || !dt.is_finite() || dt <= 0.0 {
        return Err(ModelError::InvalidParameter(format!(
            "rk4_step requires finite steer and positive finite dt, got steer {}, dt {}",
            steer, dt
        )));
    }

    let x = state.to_vector();

    let k1 = model.derivative_vector(&x, steer);
    let k2 = model.derivative_vector(&(x + k1 * (dt / 2.0)), steer);
    let k3 = model.derivative_vector(&(x + k2 * (dt / 2.0)), steer);
    let k4 = model.derivative_vector(&(x + k3 * dt), steer);

    let next = VehicleState::from(x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0));
    if !next.is_finite() {
        return Err(ModelError::NonFiniteResult(format!(
            "integration diverged from state {:?} with steer {}, dt {}",
            state, steer, dt
        )));
    }
    Ok(next)
}
