//! Common types, traits, and error definitions for motion_primitives
//!
//! This module provides the foundational building blocks used across
//! the kernel: the vehicle state, obstacle geometry, the obstacle-checker
//! capability, and the error taxonomy.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
