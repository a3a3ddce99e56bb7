//! Query system for pipeline networks
//!
//! Provides the minimum-weight route computation consumed by the
//! rendering layer.

mod queue;
mod route;
mod types;

pub use queue::MinQueue;
pub use route::RouteQuery;
pub use types::RouteResult;
