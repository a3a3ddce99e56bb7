//! Route finding over the pipeline network

use std::collections::HashMap;

use crate::graph::{Network, NetworkError, NetworkResult, VertexId};

use super::queue::MinQueue;
use super::types::RouteResult;

/// Query for the minimum-weight route between two junctions
#[derive(Debug, Clone)]
pub struct RouteQuery {
    /// Start vertex
    pub start: VertexId,
    /// Finish vertex
    pub finish: VertexId,
}

impl RouteQuery {
    /// Create a new route query between two vertices
    pub fn between(start: impl Into<VertexId>, finish: impl Into<VertexId>) -> Self {
        Self {
            start: start.into(),
            finish: finish.into(),
        }
    }

    /// Execute the query (Dijkstra's algorithm)
    ///
    /// Returns the minimum-total-weight route from start to finish, or the
    /// not-found outcome when the finish is unreachable. Errs when either
    /// endpoint is not a registered vertex. The network is only read; all
    /// search state is local to this call, so repeated queries against the
    /// same network are independent.
    #[tracing::instrument(skip(self, network), fields(start = %self.start, finish = %self.finish))]
    pub fn execute(&self, network: &Network) -> NetworkResult<RouteResult> {
        if !network.contains(&self.start) {
            return Err(NetworkError::VertexNotFound(self.start.clone()));
        }
        if !network.contains(&self.finish) {
            return Err(NetworkError::VertexNotFound(self.finish.clone()));
        }

        if self.start == self.finish {
            return Ok(RouteResult::found(vec![self.start.clone()], 0.0));
        }

        let mut distances: HashMap<VertexId, f64> = HashMap::new();
        let mut previous: HashMap<VertexId, VertexId> = HashMap::new();
        let mut queue = MinQueue::new();

        for vertex in network.vertices() {
            let distance = if *vertex == self.start {
                0.0
            } else {
                f64::INFINITY
            };
            distances.insert(vertex.clone(), distance);
            queue.push(vertex.clone(), distance);
        }

        while let Some((current, priority)) = queue.pop() {
            let settled = distances.get(&current).copied().unwrap_or(f64::INFINITY);

            // A better entry for this vertex was already processed
            if priority > settled {
                continue;
            }

            // Everything still queued is unreachable from the start
            if settled.is_infinite() {
                break;
            }

            if current == self.finish {
                let path = self.reconstruct_path(&previous);
                tracing::debug!(total_weight = settled, hops = path.len() - 1, "route found");
                return Ok(RouteResult::found(path, settled));
            }

            let Some(neighbors) = network.neighbors(&current) else {
                continue;
            };

            for neighbor in neighbors {
                let candidate = settled + neighbor.weight;
                let known = distances
                    .get(&neighbor.vertex)
                    .copied()
                    .unwrap_or(f64::INFINITY);
                if candidate < known {
                    distances.insert(neighbor.vertex.clone(), candidate);
                    previous.insert(neighbor.vertex.clone(), current.clone());
                    queue.push(neighbor.vertex.clone(), candidate);
                }
            }
        }

        tracing::debug!("finish unreachable from start");
        Ok(RouteResult::not_found())
    }

    /// Walk the predecessor chain from finish back to start and reverse it
    fn reconstruct_path(&self, previous: &HashMap<VertexId, VertexId>) -> Vec<VertexId> {
        let mut path = vec![self.finish.clone()];
        let mut current = &self.finish;

        while let Some(pred) = previous.get(current) {
            path.push(pred.clone());
            if *pred == self.start {
                break;
            }
            current = pred;
        }

        path.reverse();
        path
    }
}
