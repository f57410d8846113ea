//! Error handling logic

use std::fmt;

/// Error types raised while building operators, decomposing them, or
/// aggregating host outcomes.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum WalkError {
    /// An operator is malformed or fails a physical requirement
    /// (unitarity, Hermiticity, marking shape, tessellation cover).
    InvalidOperator {
        /// InvalidOperator failure message
        message: String
    },

    /// A state could not be normalized (zero or non-finite norm).
    DegenerateState {
        /// DegenerateState failure message
        message: String
    },

    /// The eigendecomposition or a dependent linear solve did not succeed.
    Decomposition {
        /// Decomposition failure message
        message: String
    },

    /// An aggregation configuration is not usable.
    InvalidConfig {
        /// InvalidConfig failure message
        message: String
    },

    /// The external simulation host reported a failure.
    HostFailure {
        /// HostFailure failure message
        message: String
    },

    /// The host returned an outcome outside `0..outcomes`.
    OutcomeOutOfRange {
        /// Time parameter of the failing call
        time: u32,
        /// The offending outcome
        outcome: usize,
        /// Size of the configured outcome range
        outcomes: usize,
    },

    /// The plotting backend failed to produce a figure.
    Render {
        /// Render failure message
        message: String
    },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::InvalidOperator { message } => write!(f, "Invalid Operator: {}", message),
            WalkError::DegenerateState { message } => write!(f, "Degenerate State: {}", message),
            WalkError::Decomposition { message } => write!(f, "Decomposition Failure: {}", message),
            WalkError::InvalidConfig { message } => write!(f, "Invalid Configuration: {}", message),
            WalkError::HostFailure { message } => write!(f, "Simulation Host Failure: {}", message),
            WalkError::OutcomeOutOfRange { time, outcome, outcomes } => write!(
                f,
                "Outcome Out Of Range: host returned {} at t={} (expected 0..{})",
                outcome, time, outcomes
            ),
            WalkError::Render { message } => write!(f, "Render Failure: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for WalkError {}
