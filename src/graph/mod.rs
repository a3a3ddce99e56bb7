//! Core graph data structures

mod edge;
mod network;
mod vertex;


pub use edge::{Edge, Neighbor};
pub use network::{Network, NetworkError, NetworkResult};
pub use vertex::VertexId;
