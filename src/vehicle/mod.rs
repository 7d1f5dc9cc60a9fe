//! Vehicle dynamics models

pub mod linear_bicycle;

pub use linear_bicycle::{LinearBicycleModel, VehicleParams};
