//! Flowline: Weighted Route Engine for Pipeline Networks
//!
//! An in-memory engine for computing minimum-weight routes across an
//! undirected, weighted network of named pipeline junctions.
//!
//! # Core Concepts
//!
//! - **Vertices**: named junctions and endpoints in the network
//! - **Edges**: symmetric weighted segments connecting two junctions
//! - **Routes**: minimum-total-weight paths computed with Dijkstra's
//!   algorithm, consumed by a rendering layer to highlight a route
//!
//! # Example
//!
//! ```
//! use flowline::{Network, RouteQuery};
//!
//! let mut network = Network::new();
//! network.add_vertex("A");
//! network.add_vertex("B");
//! network.add_edge("A", "B", 4.0).unwrap();
//!
//! let route = RouteQuery::between("A", "B").execute(&network).unwrap();
//! assert!(route.found);
//! assert_eq!(route.total_weight, 4.0);
//! ```

mod graph;
pub mod query;

pub use graph::{Edge, Neighbor, Network, NetworkError, NetworkResult, VertexId};
pub use query::{MinQueue, RouteQuery, RouteResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
