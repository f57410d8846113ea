//! Constants shared by the spectral and aggregation flows.

/// Number of graph vertices, and the dimension of every state and operator.
pub const DIM: usize = 8;

/// The distinguished vertex flipped by the marking operator ("vertex 5", 0-based 4).
pub const MARKED_VERTEX: usize = 4;

/// Tolerance used for unitarity, Hermiticity and normalization checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Eigenvalues closer than this are treated as one degenerate eigenspace.
pub const EIGEN_CLUSTER_TOLERANCE: f64 = 1e-6;

/// Step counts of the figure 7 frequency run.
pub const FIGURE7_TIMES: [u32; 8] = [1, 2, 3, 4, 8, 10, 25, 100];

/// Repetitions per step count in the figure 7 run.
pub const FIGURE7_REPETITIONS: usize = 10_000;

/// Bit positions reported by the Grover search host.
pub const GROVER_BIT_OUTCOMES: usize = 16;

/// Repetitions used for the Grover bit-position histogram.
pub const GROVER_REPETITIONS: usize = 1_000;
