// Reference-trajectory demo for the linearized bicycle model
//
// Simulates 20 seconds from (5, 5, 0, 10, 0) with zero steering and saves
// the x-y track as an SVG. The lateral velocity decays while the vehicle
// keeps its constant longitudinal speed, so the track bends right and then
// straightens out.

use plotlib::page::Page;
use plotlib::repr::Plot;
use plotlib::style::LineStyle;
use plotlib::view::ContinuousView;

use motion_primitives::{LinearBicycleModel, ReferenceSimulator, VehicleState};

fn main() {
    let model = LinearBicycleModel::with_defaults();
    let sim = ReferenceSimulator::new(&model);

    let initial = VehicleState::new(5.0, 5.0, 0.0, 10.0, 0.0);
    let trace: Vec<(f64, VehicleState)> = sim
        .simulate(&initial, 20.0, 0.0)
        .expect("simulation setup failed")
        .collect::<Result<_, _>>()
        .expect("integration diverged");

    for (t, state) in &trace {
        println!(
            "{:6.2}  x {:10.4}  y {:10.4}  theta {:8.4}  vy {:8.4}  r {:8.4}",
            t, state.x, state.y, state.theta, state.vy, state.r
        );
    }

    let track: Vec<(f64, f64)> = trace.iter().map(|(_, s)| (s.x, s.y)).collect();
    let s1: Plot = Plot::new(track).line_style(LineStyle::new().colour("#DD3355"));

    let v = ContinuousView::new()
        .add(s1)
        .x_label("x [m]")
        .y_label("y [m]");

    Page::single(&v)
        .save("./img/reference_trajectory.svg")
        .unwrap();
}
