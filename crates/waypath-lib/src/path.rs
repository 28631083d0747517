use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use crate::graph::RouteGraph;
use crate::location::LocationKey;
use crate::registry::LocationRegistry;

/// Lowest-cost path found by a search.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Vertices from start to goal, both included.
    pub keys: Vec<LocationKey>,
    /// Sum of the edge weights along `keys`.
    pub cost: f64,
}

/// Run Dijkstra's algorithm from `start` and return the cheapest path to `goal`.
///
/// Vertices with equal tentative cost are settled in ascending identifier
/// order, so the result is the same on every call for a given graph. The
/// search stops as soon as `goal` is settled. Weights are assumed to be
/// non-negative; [`RouteNetwork`](crate::RouteNetwork) validates them on insert.
pub fn find_route_dijkstra(
    graph: &RouteGraph,
    registry: &LocationRegistry,
    start: LocationKey,
    goal: LocationKey,
) -> Option<PathResult> {
    let vertex_count = graph.vertex_count();
    if start >= vertex_count || goal >= vertex_count {
        return None;
    }
    if start == goal {
        return Some(PathResult {
            keys: vec![start],
            cost: 0.0,
        });
    }

    let id_of = move |key: LocationKey| registry.get(key).map(|location| location.id()).unwrap_or("");

    let mut distances: Vec<f64> = vec![f64::INFINITY; vertex_count];
    let mut parents: Vec<Option<LocationKey>> = vec![None; vertex_count];
    let mut settled = vec![false; vertex_count];
    let mut queue = BinaryHeap::new();

    distances[start] = 0.0;
    queue.push(QueueEntry::new(start, id_of(start), 0.0));

    while let Some(entry) = queue.pop() {
        if settled[entry.node] {
            continue;
        }
        settled[entry.node] = true;
        let current_distance = distances[entry.node];
        trace!(node = entry.id, cost = current_distance, "settled vertex");

        if entry.node == goal {
            return Some(PathResult {
                keys: reconstruct_path(&parents, start, goal),
                cost: current_distance,
            });
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            if settled[next] {
                continue;
            }

            let next_cost = current_distance + edge.weight;
            if next_cost < distances[next] {
                distances[next] = next_cost;
                parents[next] = Some(entry.node);
                queue.push(QueueEntry::new(next, id_of(next), next_cost));
            }
        }
    }

    None
}

fn reconstruct_path(
    parents: &[Option<LocationKey>],
    start: LocationKey,
    goal: LocationKey,
) -> Vec<LocationKey> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: LocationKey,
    id: &'a str,
    cost: FloatOrd,
}

impl<'a> QueueEntry<'a> {
    fn new(node: LocationKey, id: &'a str, cost: f64) -> Self {
        Self {
            node,
            id,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then by id.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.id.cmp(self.id))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
