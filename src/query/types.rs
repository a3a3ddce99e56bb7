//! Query types and result structures

use crate::graph::VertexId;
use serde::Serialize;

/// Result of a route query
///
/// Unreachability is a computed outcome, not an error: `not_found()` carries
/// an empty path with `found == false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    /// Whether a route was found
    pub found: bool,
    /// Vertices along the route from start to finish (inclusive)
    pub path: Vec<VertexId>,
    /// Sum of segment weights along the route
    pub total_weight: f64,
    /// Number of segments traversed
    pub hops: usize,
}

impl RouteResult {
    pub fn not_found() -> Self {
        Self {
            found: false,
            path: Vec::new(),
            total_weight: 0.0,
            hops: 0,
        }
    }

    pub fn found(path: Vec<VertexId>, total_weight: f64) -> Self {
        let hops = path.len().saturating_sub(1);
        Self {
            found: true,
            path,
            total_weight,
            hops,
        }
    }
}
