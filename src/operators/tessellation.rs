// src/operators/tessellation.rs

use num_complex::Complex;
use std::fmt;

use super::Operator;
use crate::core::{DIM, WalkError};

/// A partition of the vertex set into polygons (cliques).
///
/// Every vertex belongs to exactly one polygon. Vertices that take no part in
/// a local reflection appear as singleton polygons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tessellation {
    polygons: Vec<Vec<usize>>,
}

impl Tessellation {
    /// Creates a tessellation, checking that the polygons are non-empty,
    /// disjoint, in range and cover all vertices.
    pub fn new(polygons: Vec<Vec<usize>>) -> Result<Self, WalkError> {
        let mut seen = [false; DIM];
        for polygon in &polygons {
            if polygon.is_empty() {
                return Err(WalkError::InvalidOperator { message: "Tessellation contains an empty polygon".to_string() });
            }
            for &v in polygon {
                if v >= DIM {
                    return Err(WalkError::InvalidOperator {
                        message: format!("Polygon vertex {} is outside the graph (0..{})", v, DIM),
                    });
                }
                if seen[v] {
                    return Err(WalkError::InvalidOperator {
                        message: format!("Vertex {} appears in more than one polygon", v),
                    });
                }
                seen[v] = true;
            }
        }
        if let Some(missing) = seen.iter().position(|covered| !covered) {
            return Err(WalkError::InvalidOperator {
                message: format!("Vertex {} is not covered by the tessellation", missing),
            });
        }
        Ok(Self { polygons })
    }

    /// The three tessellations of the figure 10 graph, in the order `(H1, H2, H3)`.
    pub fn figure10() -> Result<[Tessellation; 3], WalkError> {
        Ok([
            Self::new(vec![vec![0, 1, 2], vec![3], vec![4, 5, 6], vec![7]])?,
            Self::new(vec![vec![0, 6, 7], vec![1], vec![2, 3, 4], vec![5]])?,
            Self::new(vec![vec![0, 2, 4, 6], vec![1], vec![3], vec![5], vec![7]])?,
        ])
    }

    /// The polygons, in construction order.
    pub fn polygons(&self) -> &[Vec<usize>] {
        &self.polygons
    }

    /// Local reflection `Σ_α (2|α⟩⟨α| − I_α)` with `|α⟩` uniform on polygon α.
    ///
    /// Inside a polygon of size `k` the diagonal is `2/k − 1` and the
    /// off-diagonal entries are `2/k`; a singleton polygon contributes `+1`.
    pub fn reflection(&self) -> Operator {
        let mut h = Operator::zeros();
        for polygon in &self.polygons {
            let weight = 2.0 / polygon.len() as f64;
            for &r in polygon {
                for &c in polygon {
                    let entry = if r == c { weight - 1.0 } else { weight };
                    h[(r, c)] = Complex::new(entry, 0.0);
                }
            }
        }
        h
    }
}

impl fmt::Display for Tessellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, polygon) in self.polygons.iter().enumerate() {
            write!(f, "{}{:?}", if i > 0 { " | " } else { "" }, polygon)?;
        }
        Ok(())
    }
}
