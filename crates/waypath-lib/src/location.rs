use serde::{Deserialize, Serialize};

/// Stable handle the graph uses to refer to a registered location.
///
/// Keys are insertion indices and never change once assigned.
pub type LocationKey = usize;

/// Raw coordinate pair attached to a location.
///
/// Routing never reads these; they are carried for display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: String,
    pub y: String,
}

impl Coordinates {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// A place that can act as a vertex in the route graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    id: String,
    name: String,
    description: String,
    coordinates: Coordinates,
}

impl Location {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            coordinates,
        }
    }

    /// Unique identifier; the join key for every graph operation.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-facing display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }
}

/// One row of the numbered location listing.
///
/// `index` is 1-based and matches the order used by
/// [`RouteNetwork::resolve_selection`](crate::RouteNetwork::resolve_selection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationEntry {
    pub index: usize,
    pub id: String,
    pub name: String,
}
