//! waypath library entry points.
//!
//! This crate holds the location registry, the weighted route graph and the
//! lowest-cost path search. Presentation layers (the CLI) should only depend
//! on the items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

mod collections;

pub mod definition;
pub mod error;
pub mod graph;
pub mod location;
pub mod network;
pub mod path;
pub mod registry;

pub use definition::{
    load_network_definition, sample_network, LocationDefinition, NetworkDefinition,
    RouteDefinition,
};
pub use error::{Error, Result};
pub use graph::{Edge, RouteGraph};
pub use location::{Coordinates, Location, LocationEntry, LocationKey};
pub use network::{RouteNetwork, RoutePlan, RouteStep};
pub use path::{find_route_dijkstra, PathResult};
pub use registry::LocationRegistry;
