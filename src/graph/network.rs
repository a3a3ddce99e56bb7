//! Network: the undirected weighted junction graph

use super::edge::{Edge, Neighbor};
use super::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur in network operations
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Vertex not found: {0}")]
    VertexNotFound(VertexId),

    #[error("Edge endpoint not registered: {0}")]
    UnknownEndpoint(VertexId),

    #[error("Invalid edge weight: {0} (must be finite and non-negative)")]
    InvalidWeight(f64),
}

/// Result type for network operations
pub type NetworkResult<T> = Result<T, NetworkError>;

/// An undirected weighted graph of pipeline junctions
///
/// Maps each vertex to the list of segments incident on it. Edge insertion
/// updates both endpoints' adjacency lists or, on a precondition failure,
/// neither.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    /// Adjacency lists keyed by vertex
    adjacency: HashMap<VertexId, Vec<Neighbor>>,
    /// Every inserted segment, in insertion order
    edges: Vec<Edge>,
}

impl Network {
    /// Create a new empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex
    ///
    /// Idempotent: re-adding an existing vertex leaves its adjacency list
    /// untouched. Returns the registered id.
    pub fn add_vertex(&mut self, id: impl Into<VertexId>) -> VertexId {
        let id = id.into();
        self.adjacency.entry(id.clone()).or_default();
        id
    }

    /// Insert an undirected weighted segment between two registered vertices
    ///
    /// Both endpoints must already be registered and the weight finite and
    /// non-negative; on error the network is left unchanged.
    pub fn add_edge(
        &mut self,
        a: impl Into<VertexId>,
        b: impl Into<VertexId>,
        weight: f64,
    ) -> NetworkResult<()> {
        let a = a.into();
        let b = b.into();

        if !weight.is_finite() || weight < 0.0 {
            return Err(NetworkError::InvalidWeight(weight));
        }
        if !self.adjacency.contains_key(&a) {
            return Err(NetworkError::UnknownEndpoint(a));
        }
        if !self.adjacency.contains_key(&b) {
            return Err(NetworkError::UnknownEndpoint(b));
        }

        self.adjacency.entry(a.clone()).or_default().push(Neighbor {
            vertex: b.clone(),
            weight,
        });
        self.adjacency.entry(b.clone()).or_default().push(Neighbor {
            vertex: a.clone(),
            weight,
        });
        self.edges.push(Edge::new(a, b, weight));

        Ok(())
    }

    /// Check whether a vertex is registered
    pub fn contains(&self, id: &VertexId) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Get a vertex's incident segments
    pub fn neighbors(&self, id: &VertexId) -> Option<&[Neighbor]> {
        self.adjacency.get(id).map(|list| list.as_slice())
    }

    /// Iterate over all registered vertices
    pub fn vertices(&self) -> impl Iterator<Item = &VertexId> {
        self.adjacency.keys()
    }

    /// Iterate over all inserted segments
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Get the number of registered vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the number of inserted segments
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut network = Network::new();
        let a = network.add_vertex("A");
        network.add_vertex("B");
        network.add_edge("A", "B", 3.5).unwrap();

        // Re-adding must not clear the adjacency list
        let again = network.add_vertex("A");
        assert_eq!(a, again);
        assert_eq!(network.vertex_count(), 2);
        assert_eq!(network.neighbors(&a).unwrap().len(), 1);
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut network = Network::new();
        let a = network.add_vertex("A");
        let b = network.add_vertex("B");
        network.add_edge("A", "B", 3.5).unwrap();

        let from_a = network.neighbors(&a).unwrap();
        assert_eq!(from_a.len(), 1);
        assert_eq!(from_a[0].vertex, b);
        assert_eq!(from_a[0].weight, 3.5);

        let from_b = network.neighbors(&b).unwrap();
        assert_eq!(from_b.len(), 1);
        assert_eq!(from_b[0].vertex, a);
        assert_eq!(from_b[0].weight, 3.5);

        assert_eq!(network.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_unknown_endpoint_leaves_network_unchanged() {
        let mut network = Network::new();
        let a = network.add_vertex("A");

        let err = network.add_edge("A", "Z", 1.0).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownEndpoint(ref v) if v.as_str() == "Z"));

        assert!(network.neighbors(&a).unwrap().is_empty());
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_rejects_negative_weight() {
        let mut network = Network::new();
        network.add_vertex("A");
        network.add_vertex("B");

        let err = network.add_edge("A", "B", -2.0).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidWeight(_)));
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_rejects_non_finite_weight() {
        let mut network = Network::new();
        network.add_vertex("A");
        network.add_vertex("B");

        assert!(matches!(
            network.add_edge("A", "B", f64::NAN),
            Err(NetworkError::InvalidWeight(_))
        ));
        assert!(matches!(
            network.add_edge("A", "B", f64::INFINITY),
            Err(NetworkError::InvalidWeight(_))
        ));
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn test_counts() {
        let mut network = Network::new();
        for id in ["A", "B", "C"] {
            network.add_vertex(id);
        }
        network.add_edge("A", "B", 1.0).unwrap();
        network.add_edge("B", "C", 2.0).unwrap();

        assert_eq!(network.vertex_count(), 3);
        assert_eq!(network.edge_count(), 2);
        assert_eq!(network.edges().count(), 2);
        assert_eq!(network.vertices().count(), 3);
    }

    #[test]
    fn test_zero_weight_edge_is_accepted() {
        let mut network = Network::new();
        let a = network.add_vertex("A");
        network.add_vertex("B");
        network.add_edge("A", "B", 0.0).unwrap();
        assert_eq!(network.neighbors(&a).unwrap()[0].weight, 0.0);
    }
}
