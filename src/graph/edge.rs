//! Edge representation: a pipeline segment between two junctions

use super::vertex::VertexId;
use serde::{Deserialize, Serialize};

/// An undirected weighted connection between two junctions
///
/// Symmetric: a segment between `a` and `b` is traversable in both
/// directions at the same weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// One endpoint
    pub a: VertexId,
    /// The other endpoint
    pub b: VertexId,
    /// Segment cost (length); finite and non-negative
    pub weight: f64,
}

impl Edge {
    /// Create a new edge
    pub fn new(a: impl Into<VertexId>, b: impl Into<VertexId>, weight: f64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            weight,
        }
    }
}

/// Adjacency entry: a neighboring junction and the weight of the segment
/// connecting to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// The adjacent junction
    pub vertex: VertexId,
    /// Weight of the connecting segment
    pub weight: f64,
}
