// src/core/mod.rs

//! Core data structures and types

pub mod constants;
pub mod error;
pub mod state;

// Re-export public types for convenient access via `qwalk::core::TypeName`
pub use constants::{DEFAULT_TOLERANCE, DIM, MARKED_VERTEX};
pub use error::WalkError;
pub use state::{Amplitudes, StateVector};
