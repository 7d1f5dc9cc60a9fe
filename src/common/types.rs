//! Common types used throughout motion_primitives

use nalgebra::Vector5;

use crate::common::error::{ModelError, ModelResult};

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(tuple: (f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

/// Line segment obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2D,
    pub end: Point2D,
}

impl Segment {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Distance from a point to the closest point on this segment
    pub fn distance_to_point(&self, p: &Point2D) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len_sq = dx * dx + dy * dy;

        if len_sq == 0.0 {
            return self.start.distance(p);
        }

        let t = ((p.x - self.start.x) * dx + (p.y - self.start.y) * dy) / len_sq;
        let t = t.max(0.0).min(1.0);
        let closest = Point2D::new(self.start.x + t * dx, self.start.y + t * dy);
        closest.distance(p)
    }
}

/// Vehicle state for the linearized bicycle model.
///
/// Fields: center-of-gravity position (`x`, `y`), heading `theta` [rad],
/// lateral velocity `vy` and yaw rate `r`. Longitudinal velocity is a model
/// parameter, not part of the state.
///
/// `theta` is not wrapped to any canonical range; `vy` and `r` are free
/// real-valued outputs of integration and are never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
    pub vy: f64,
    pub r: f64,
}

/// Number of scalar fields in a [`VehicleState`]
pub const STATE_DIM: usize = 5;

impl VehicleState {
    pub fn new(x: f64, y: f64, theta: f64, vy: f64, r: f64) -> Self {
        Self { x, y, theta, vy, r }
    }

    pub fn origin() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
            vy: 0.0,
            r: 0.0,
        }
    }

    /// Build a state from a raw slice, validating arity and finiteness.
    ///
    /// This is the boundary for loosely-typed inputs: exactly 5 finite
    /// values, in the order `[x, y, theta, vy, r]`.
    pub fn from_slice(values: &[f64]) -> ModelResult<Self> {
        if values.len() != STATE_DIM {
            return Err(ModelError::InvalidStateDimension {
                expected: STATE_DIM,
                actual: values.len(),
            });
        }
        if !values.iter().all(|v| v.is_finite()) {
            return Err(ModelError::NonFiniteResult(
                "state contains NaN or infinite component".to_string(),
            ));
        }
        Ok(Self::new(values[0], values[1], values[2], values[3], values[4]))
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Planar Euclidean distance considering only (x, y).
    ///
    /// Heading, lateral velocity and yaw rate are deliberately ignored;
    /// this is the metric the input search optimizes.
    pub fn distance_xy(&self, other: &VehicleState) -> f64 {
        self.position().distance(&other.position())
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.theta.is_finite()
            && self.vy.is_finite()
            && self.r.is_finite()
    }

    pub fn to_vector(&self) -> Vector5<f64> {
        Vector5::new(self.x, self.y, self.theta, self.vy, self.r)
    }
}

impl From<Vector5<f64>> for VehicleState {
    fn from(v: Vector5<f64>) -> Self {
        Self {
            x: v[0],
            y: v[1],
            theta: v[2],
            vy: v[3],
            r: v[4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point2d_distance() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(3.0, 4.0);
        assert!((p1.distance(&p2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_segment_distance_to_point() {
        let seg = Segment::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
        // Perpendicular projection falls inside the segment
        assert!((seg.distance_to_point(&Point2D::new(5.0, 2.0)) - 2.0).abs() < 1e-10);
        // Projection falls past the end, distance is to the endpoint
        assert!((seg.distance_to_point(&Point2D::new(13.0, 4.0)) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_segment_degenerate() {
        let seg = Segment::new(Point2D::new(1.0, 1.0), Point2D::new(1.0, 1.0));
        assert!((seg.distance_to_point(&Point2D::new(4.0, 5.0)) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_state_from_slice() {
        let state = VehicleState::from_slice(&[1.0, 2.0, 0.5, -0.1, 0.2]).unwrap();
        assert_eq!(state.x, 1.0);
        assert_eq!(state.y, 2.0);
        assert_eq!(state.theta, 0.5);
        assert_eq!(state.vy, -0.1);
        assert_eq!(state.r, 0.2);
    }

    #[test]
    fn test_state_from_slice_wrong_arity() {
        let result = VehicleState::from_slice(&[1.0, 2.0, 0.5]);
        assert!(matches!(
            result,
            Err(ModelError::InvalidStateDimension { expected: 5, actual: 3 })
        ));
    }

    #[test]
    fn test_state_from_slice_non_finite() {
        let result = VehicleState::from_slice(&[1.0, f64::NAN, 0.0, 0.0, 0.0]);
        assert!(matches!(result, Err(ModelError::NonFiniteResult(_))));
    }

    #[test]
    fn test_state_distance_ignores_heading() {
        let a = VehicleState::new(0.0, 0.0, 0.0, 0.0, 0.0);
        let b = VehicleState::new(3.0, 4.0, 2.5, 10.0, -3.0);
        assert!((a.distance_xy(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_state_vector_round_trip() {
        let state = VehicleState::new(1.0, -2.0, 0.3, 0.4, -0.5);
        let back = VehicleState::from(state.to_vector());
        assert_eq!(state, back);
    }
}
