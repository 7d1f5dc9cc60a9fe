//! Kinodynamic expansion kernel: steering-input search and target sampling

pub mod input_search;
pub mod sampling;

pub use input_search::{expand_all, select_best_input, SteerSweep};
pub use sampling::{sample_config, sample_config_thread};
