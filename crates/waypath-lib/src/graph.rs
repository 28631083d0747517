use crate::location::LocationKey;

/// Directed, weighted edge within the route graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: LocationKey,
    pub weight: f64,
}

/// Adjacency-list graph keyed by [`LocationKey`].
///
/// The graph knows nothing about identifiers; the registry maps ids to keys.
/// At most one edge exists per ordered pair.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex and return its key. Keys are dense and assigned in order.
    pub fn add_vertex(&mut self) -> LocationKey {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Insert a directed edge.
    ///
    /// Returns `false` without modifying the graph when either endpoint is not a
    /// vertex or when `from -> to` is already connected.
    pub fn add_edge(&mut self, from: LocationKey, to: LocationKey, weight: f64) -> bool {
        if to >= self.adjacency.len() || self.contains_edge(from, to) {
            return false;
        }
        let Some(edges) = self.adjacency.get_mut(from) else {
            return false;
        };
        edges.push(Edge { target: to, weight });
        self.edge_count += 1;
        true
    }

    pub fn contains_edge(&self, from: LocationKey, to: LocationKey) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Weight of the `from -> to` edge, if present.
    pub fn edge_weight(&self, from: LocationKey, to: LocationKey) -> Option<f64> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.weight)
    }

    /// Return the outgoing edges of a vertex, in insertion order.
    pub fn neighbours(&self, vertex: LocationKey) -> &[Edge] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
