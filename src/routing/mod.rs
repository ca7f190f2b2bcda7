//! Routing module
//!
//! Route collaborators consumed by the dispatcher:
//! - The `RouteProvider` seam and the `DefaultRoute` snapshot it produces
//! - A path-segment provider used by the HTTP shell

mod path;
mod provider;

pub use path::PathRouteProvider;
pub use provider::{DefaultRoute, RouteProvider};
