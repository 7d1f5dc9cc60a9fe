//! Visualization utilities for motion_primitives
//!
//! Provides a unified interface for plotting trajectories, candidate fans
//! and sampled configurations using gnuplot.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::types::{Point2D, Segment, VehicleState};

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const CYAN: &str = "#00FFFF";
    pub const GRAY: &str = "#808080";

    // Semantic colors
    pub const OBSTACLE: &str = BLACK;
    pub const TRAJECTORY: &str = "#DD3355";
    pub const CANDIDATE: &str = GRAY;
    pub const TARGET: &str = BLUE;
    pub const SELECTED: &str = GREEN;
    pub const VEHICLE: &str = CYAN;
}

/// Style for trajectory rendering
#[derive(Debug, Clone)]
pub struct TrajectoryStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl TrajectoryStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for TrajectoryStyle {
    fn default() -> Self {
        Self {
            color: colors::TRAJECTORY.to_string(),
            line_width: 2.0,
            caption: "Trajectory".to_string(),
        }
    }
}

/// Style for point rendering
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.0,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

/// Plotting front end wrapping a gnuplot figure
pub struct Visualizer {
    figure: Figure,
    title: String,
    x_label: String,
    y_label: String,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
    aspect_ratio: Option<f64>,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
            x_label: "X [m]".to_string(),
            y_label: "Y [m]".to_string(),
            x_range: None,
            y_range: None,
            aspect_ratio: Some(1.0),
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set X axis range
    pub fn set_x_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_range = Some((min, max));
        self
    }

    /// Set Y axis range
    pub fn set_y_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_range = Some((min, max));
        self
    }

    /// Plot the x-y track of a time-stamped trajectory
    pub fn plot_trajectory(
        &mut self,
        trace: &[(f64, VehicleState)],
        style: &TrajectoryStyle,
    ) -> &mut Self {
        let x: Vec<f64> = trace.iter().map(|(_, s)| s.x).collect();
        let y: Vec<f64> = trace.iter().map(|(_, s)| s.y).collect();

        self.figure.axes2d().lines(
            &x,
            &y,
            &[
                Caption(&style.caption),
                Color(&style.color),
                LineWidth(style.line_width),
            ],
        );
        self
    }

    /// Plot the positions of a set of states
    pub fn plot_states(&mut self, states: &[VehicleState], style: &PointStyle) -> &mut Self {
        let x: Vec<f64> = states.iter().map(|s| s.x).collect();
        let y: Vec<f64> = states.iter().map(|s| s.y).collect();

        self.figure.axes2d().points(
            &x,
            &y,
            &[
                Caption(&style.caption),
                Color(&style.color),
                PointSymbol(style.symbol),
                PointSize(style.size),
            ],
        );
        self
    }

    /// Plot a single point (vehicle, target, etc.)
    pub fn plot_point(&mut self, point: Point2D, style: &PointStyle) -> &mut Self {
        self.figure.axes2d().points(
            &[point.x],
            &[point.y],
            &[
                Caption(&style.caption),
                Color(&style.color),
                PointSymbol(style.symbol),
                PointSize(style.size),
            ],
        );
        self
    }

    /// Plot obstacle segments
    pub fn plot_segments(&mut self, segments: &[Segment]) -> &mut Self {
        for seg in segments {
            self.figure.axes2d().lines(
                &[seg.start.x, seg.end.x],
                &[seg.start.y, seg.end.y],
                &[Color(colors::OBSTACLE), LineWidth(2.0)],
            );
        }
        self
    }

    /// Plot a vehicle state with a heading indicator
    pub fn plot_vehicle(&mut self, state: &VehicleState, size: f64) -> &mut Self {
        self.figure.axes2d().points(
            &[state.x],
            &[state.y],
            &[
                Caption("Vehicle"),
                Color(colors::VEHICLE),
                PointSymbol('O'),
                PointSize(size),
            ],
        );

        // Direction line (arrow substitute)
        let arrow_len = size * 0.5;
        let end_x = state.x + arrow_len * state.theta.cos();
        let end_y = state.y + arrow_len * state.theta.sin();

        self.figure.axes2d().lines(
            &[state.x, end_x],
            &[state.y, end_y],
            &[Color(colors::VEHICLE), LineWidth(2.0)],
        );
        self
    }

    /// Finalize and show the plot
    pub fn show(&mut self) -> Result<(), String> {
        self.apply_settings();
        self.figure.show().map_err(|e| e.to_string()).map(|_| ())
    }

    /// Save plot to SVG file
    pub fn save_svg(&mut self, path: &str) -> Result<(), String> {
        self.apply_settings();
        self.figure
            .save_to_svg(path, 800, 600)
            .map_err(|e| e.to_string())
    }

    fn apply_settings(&mut self) {
        let axes = self.figure.axes2d();

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label(&self.x_label, &[]);
        axes.set_y_label(&self.y_label, &[]);

        if let Some((min, max)) = self.x_range {
            axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some((min, max)) = self.y_range {
            axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some(ratio) = self.aspect_ratio {
            axes.set_aspect_ratio(AutoOption::Fix(ratio));
        }
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visualizer_creation() {
        let vis = Visualizer::new();
        assert!(vis.aspect_ratio.is_some());
    }

    #[test]
    fn test_trajectory_style() {
        let style = TrajectoryStyle::new(colors::RED, "Reference").with_line_width(3.0);
        assert_eq!(style.line_width, 3.0);
        assert_eq!(style.color, colors::RED);
    }
}
