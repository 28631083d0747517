//! Route network facade.
//!
//! [`RouteNetwork`] pairs a [`LocationRegistry`] with a [`RouteGraph`] and is
//! the only type presentation layers need:
//! - [`RouteNetwork::add_location`] registers a vertex
//! - [`RouteNetwork::add_route`] inserts a one-way or mirrored edge
//! - [`RouteNetwork::list_locations`] returns the numbered listing
//! - [`RouteNetwork::shortest_path`] answers lowest-cost path queries
//!
//! Queries take `&self` and touch no shared mutable state, so a built network
//! can be wrapped in an `Arc` and queried from several threads.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::RouteGraph;
use crate::location::{Coordinates, Location, LocationEntry, LocationKey};
use crate::path::{find_route_dijkstra, PathResult};
use crate::registry::LocationRegistry;

/// Step along a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    /// 1-based position within the route.
    pub index: usize,
    pub id: String,
    pub name: String,
    /// Weight of the edge used to reach this step; `None` for the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// Lowest-cost route between two locations.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoutePlan {
    pub start: String,
    pub goal: String,
    pub steps: Vec<RouteStep>,
    pub total_cost: f64,
}

impl RoutePlan {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Display names along the route, start first.
    pub fn names(&self) -> Vec<String> {
        self.steps.iter().map(|step| step.name.clone()).collect()
    }
}

/// Locations plus the weighted, directed routes between them.
#[derive(Debug, Clone, Default)]
pub struct RouteNetwork {
    registry: LocationRegistry,
    graph: RouteGraph,
}

impl RouteNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location and add it to the graph as a vertex.
    ///
    /// Fails with [`Error::DuplicateLocation`] if `id` is taken; the stored
    /// location is not modified in that case.
    pub fn add_location(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        coordinates: Coordinates,
    ) -> Result<LocationKey> {
        let key = self
            .registry
            .insert(Location::new(id, name, description, coordinates))?;
        let vertex = self.graph.add_vertex();
        debug_assert_eq!(key, vertex, "registry and graph keys diverged");
        Ok(key)
    }

    /// Connect two registered locations.
    ///
    /// Inserts `from -> to` with `weight`. When `mirror` is `true` the reverse
    /// edge `to -> from` is inserted as well with the same weight, producing a
    /// two-way route; with `false` only the forward edge exists.
    ///
    /// Success reflects the forward edge only. If the reverse edge already
    /// exists it is left alone, a warning is logged, and the call still succeeds.
    pub fn add_route(&mut self, from: &str, to: &str, mirror: bool, weight: f64) -> Result<()> {
        let from_key = self.registry.require(from)?;
        let to_key = self.registry.require(to)?;

        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }

        if !self.graph.add_edge(from_key, to_key, weight) {
            return Err(Error::DuplicateRoute {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        debug!(from, to, weight, mirror, "added route");

        if mirror && !self.graph.add_edge(to_key, from_key, weight) {
            warn!(
                from = to,
                to = from,
                "reverse edge already present; mirrored route left unchanged"
            );
        }

        Ok(())
    }

    /// Lookup a location by identifier.
    pub fn find_by_id(&self, id: &str) -> Option<&Location> {
        self.registry.find_by_id(id)
    }

    /// Every registered location, in insertion order.
    pub fn locations(&self) -> impl ExactSizeIterator<Item = &Location> + '_ {
        self.registry.list_all()
    }

    /// Numbered `(index, id, name)` listing for menus.
    ///
    /// Indices start at 1 and follow insertion order; pass one back to
    /// [`resolve_selection`](Self::resolve_selection) to get the location.
    pub fn list_locations(&self) -> Vec<LocationEntry> {
        self.registry
            .list_all()
            .enumerate()
            .map(|(position, location)| LocationEntry {
                index: position + 1,
                id: location.id().to_string(),
                name: location.name().to_string(),
            })
            .collect()
    }

    /// Resolve a 1-based listing index back to its location.
    pub fn resolve_selection(&self, index: usize) -> Option<&Location> {
        index.checked_sub(1).and_then(|key| self.registry.get(key))
    }

    /// Names of the locations along the lowest-cost path from `from` to `to`.
    ///
    /// Returns `None` when either identifier is unknown or when no path exists;
    /// callers cannot tell the two apart. A query from a location to itself
    /// yields a single-name path. The returned path is never empty.
    pub fn shortest_path(&self, from: &str, to: &str) -> Option<Vec<String>> {
        let start = self.registry.key_of(from)?;
        let goal = self.registry.key_of(to)?;
        let result = find_route_dijkstra(&self.graph, &self.registry, start, goal)?;
        let names: Vec<String> = result
            .keys
            .iter()
            .filter_map(|&key| self.registry.get(key))
            .map(|location| location.name().to_string())
            .collect();
        (!names.is_empty()).then_some(names)
    }

    /// Plan the lowest-cost route and report every step with its leg cost.
    ///
    /// Unlike [`shortest_path`](Self::shortest_path) this separates unknown
    /// identifiers ([`Error::UnknownLocation`], with suggestions) from
    /// disconnected endpoints ([`Error::RouteNotFound`]).
    pub fn plan_route(&self, from: &str, to: &str) -> Result<RoutePlan> {
        let start = self.registry.require(from)?;
        let goal = self.registry.require(to)?;

        let PathResult { keys, cost } = find_route_dijkstra(&self.graph, &self.registry, start, goal)
            .ok_or_else(|| Error::RouteNotFound {
                start: from.to_string(),
                goal: to.to_string(),
            })?;
        debug!(from, to, hops = keys.len().saturating_sub(1), cost, "planned route");

        let mut steps = Vec::with_capacity(keys.len());
        let mut previous: Option<LocationKey> = None;
        for (position, &key) in keys.iter().enumerate() {
            let Some(location) = self.registry.get(key) else {
                continue;
            };
            steps.push(RouteStep {
                index: position + 1,
                id: location.id().to_string(),
                name: location.name().to_string(),
                cost: previous.and_then(|prev| self.graph.edge_weight(prev, key)),
            });
            previous = Some(key);
        }

        Ok(RoutePlan {
            start: from.to_string(),
            goal: to.to_string(),
            steps,
            total_cost: cost,
        })
    }

    /// Weight of the direct `from -> to` edge, if one exists.
    pub fn route_weight(&self, from: &str, to: &str) -> Option<f64> {
        let from_key = self.registry.key_of(from)?;
        let to_key = self.registry.key_of(to)?;
        self.graph.edge_weight(from_key, to_key)
    }

    pub fn location_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of directed edges; a mirrored route counts twice.
    pub fn route_count(&self) -> usize {
        self.graph.edge_count()
    }
}
