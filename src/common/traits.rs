//! Common traits defining extension points for the kernel

use crate::common::types::{Segment, VehicleState};

/// Capability for rejecting candidate states during input search.
///
/// The input search consults the checker once per candidate next state and
/// skips candidates for which `collides` returns true. The default
/// [`NoOpObstacleChecker`] rejects nothing, so a search without obstacles
/// behaves exactly like a plain steering sweep.
pub trait ObstacleChecker {
    /// Whether the given state is in collision and must be discarded
    fn collides(&self, state: &VehicleState) -> bool;
}

/// Obstacle checker that accepts every state
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObstacleChecker;

impl ObstacleChecker for NoOpObstacleChecker {
    fn collides(&self, _state: &VehicleState) -> bool {
        false
    }
}

/// Checker rejecting states closer than `clearance` to any line segment
#[derive(Debug, Clone)]
pub struct SegmentObstacles {
    segments: Vec<Segment>,
    clearance: f64,
}

impl SegmentObstacles {
    pub fn new(segments: Vec<Segment>, clearance: f64) -> Self {
        Self { segments, clearance }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl ObstacleChecker for SegmentObstacles {
    fn collides(&self, state: &VehicleState) -> bool {
        let p = state.position();
        self.segments
            .iter()
            .any(|seg| seg.distance_to_point(&p) < self.clearance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::Point2D;

    #[test]
    fn test_noop_checker_accepts_everything() {
        let checker = NoOpObstacleChecker;
        let state = VehicleState::new(1e9, -1e9, 3.0, 50.0, -20.0);
        assert!(!checker.collides(&state));
    }

    #[test]
    fn test_segment_obstacles() {
        let wall = Segment::new(Point2D::new(0.0, 5.0), Point2D::new(10.0, 5.0));
        let checker = SegmentObstacles::new(vec![wall], 1.0);

        let near_wall = VehicleState::new(5.0, 4.5, 0.0, 0.0, 0.0);
        let clear = VehicleState::new(5.0, 0.0, 0.0, 0.0, 0.0);

        assert!(checker.collides(&near_wall));
        assert!(!checker.collides(&clear));
    }
}
