//! Utility modules for motion_primitives

pub mod visualization;

pub use visualization::{colors, PointStyle, TrajectoryStyle, Visualizer};
