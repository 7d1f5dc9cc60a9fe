// Steering-fan demo: one tree-expansion step of the kernel
//
// Expands the full candidate fan from a start state next to a wall, samples
// random target configurations, highlights the candidate the input search
// selects for the first target, and overlays the reference trajectory the
// vehicle would follow if that steering were held.

use rand::rngs::StdRng;
use rand::SeedableRng;

use motion_primitives::utils::{colors, PointStyle, TrajectoryStyle, Visualizer};
use motion_primitives::{
    expand_all, sample_config, select_best_input, LinearBicycleModel, Point2D, ReferenceSimulator,
    Segment, SegmentObstacles, SteerSweep, VehicleState,
};

fn main() {
    let model = LinearBicycleModel::with_defaults();
    let sweep = SteerSweep::default();
    let dt = 0.2;

    let near = VehicleState::new(10.0, 10.0, 0.5, 0.0, 0.0);
    let fan = expand_all(&model, &near, &sweep, dt).expect("expansion failed");

    let wall = Segment::new(Point2D::new(12.0, 14.0), Point2D::new(16.0, 14.0));
    let obstacles = SegmentObstacles::new(vec![wall], 1.0);

    let mut rng = StdRng::seed_from_u64(12);
    let targets: Vec<VehicleState> = (0..5)
        .map(|_| sample_config(20.0, 20.0, &mut rng).expect("sampling failed"))
        .collect();

    let best = select_best_input(&model, &targets[0], &near, &sweep, dt, &obstacles)
        .expect("no candidate");

    // Trajectory under zero steering from the start state, for reference
    let trace: Vec<(f64, VehicleState)> = ReferenceSimulator::new(&model)
        .simulate(&near, 0.5, 0.0)
        .expect("simulation setup failed")
        .collect::<Result<_, _>>()
        .expect("integration diverged");

    let mut vis = Visualizer::new();
    vis.set_title("Steering fan")
        .plot_segments(obstacles.segments())
        .plot_vehicle(&near, 2.0)
        .plot_trajectory(&trace, &TrajectoryStyle::new(colors::TRAJECTORY, "Zero steer"))
        .plot_states(&fan, &PointStyle::new(colors::CANDIDATE, "Candidates"))
        .plot_states(&targets, &PointStyle::new(colors::TARGET, "Sampled targets"))
        .plot_point(
            best.position(),
            &PointStyle::new(colors::SELECTED, "Selected").with_size(1.5),
        );

    vis.show().unwrap();
}
