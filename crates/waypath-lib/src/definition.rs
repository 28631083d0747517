//! Declarative network definitions.
//!
//! A [`NetworkDefinition`] lists locations and routes as plain data so the
//! routing engine never embeds a particular map. Definitions can be loaded
//! from JSON or taken from [`sample_network`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::location::Coordinates;
use crate::network::RouteNetwork;

/// Location entry within a [`NetworkDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub coordinates: Coordinates,
}

/// Route entry within a [`NetworkDefinition`].
///
/// `mirror: true` produces a two-way route (two directed edges of equal
/// weight); `false`, the default, produces a single one-way edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteDefinition {
    pub from: String,
    pub to: String,
    pub weight: f64,
    #[serde(default)]
    pub mirror: bool,
}

/// Locations and routes used to populate a [`RouteNetwork`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkDefinition {
    #[serde(default)]
    pub locations: Vec<LocationDefinition>,
    #[serde(default)]
    pub routes: Vec<RouteDefinition>,
}

impl NetworkDefinition {
    /// Parse a definition from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the definition as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Load a network definition from a JSON file.
pub fn load_network_definition(path: &Path) -> Result<NetworkDefinition> {
    let contents = fs::read_to_string(path)?;
    let definition = NetworkDefinition::from_json_str(&contents)?;
    debug!(
        path = %path.display(),
        locations = definition.locations.len(),
        routes = definition.routes.len(),
        "loaded network definition"
    );
    Ok(definition)
}

impl RouteNetwork {
    /// Build a network from a definition.
    ///
    /// Locations are registered first, then routes, both in the order given.
    /// The first invalid entry aborts the build with its error.
    pub fn from_definition(definition: &NetworkDefinition) -> Result<Self> {
        let mut network = RouteNetwork::new();
        for location in &definition.locations {
            network.add_location(
                location.id.clone(),
                location.name.clone(),
                location.description.clone(),
                location.coordinates.clone(),
            )?;
        }
        for route in &definition.routes {
            network.add_route(&route.from, &route.to, route.mirror, route.weight)?;
        }
        info!(
            locations = network.location_count(),
            edges = network.route_count(),
            "route network ready"
        );
        Ok(network)
    }
}

/// Built-in nine-location, eleven-route town map.
///
/// Weights model congestion. Letters in the comments name the vertices used
/// by the regression fixtures (`A`..`I`).
pub fn sample_network() -> NetworkDefinition {
    let coordinates = Coordinates::new("1235", "37462");
    let place = |id: &str, name: &str, description: &str| LocationDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        coordinates: coordinates.clone(),
    };
    let route = |from: &str, to: &str, mirror: bool, weight: f64| RouteDefinition {
        from: from.to_string(),
        to: to.to_string(),
        weight,
        mirror,
    };

    NetworkDefinition {
        locations: vec![
            // A
            place("1234", "Plaza de la villa", "Tree-lined town square"),
            // B
            place("1874", "Plaza Seis de Septiembre", "Public gardens and playgrounds"),
            // C
            place("8904", "Plaza de Mercado", "Market hall with fresh produce"),
            // D
            place("8023", "Colegio Gustavo Jimenez", "Secondary school"),
            // E
            place("0934", "Parque Conchucua", "Quiet park with walking trails"),
            // F
            place("7321", "UPTC - Seccional Sogamoso", "Public university campus"),
            // G
            place("7653", "Barrio Mochaca", "Residential neighbourhood"),
            // H
            place("8752", "Acerías Paz del Río", "Steel works"),
            // I
            place("6948", "Parque Recreacional del Norte", "Recreation grounds"),
        ],
        routes: vec![
            route("1234", "1874", true, 30.0),
            route("1874", "8904", true, 10.0),
            route("8904", "8023", true, 10.0),
            route("1234", "0934", false, 70.0),
            route("1874", "7321", false, 80.0),
            route("8904", "7653", false, 85.0),
            route("8023", "8752", false, 30.0),
            route("0934", "7321", true, 5.0),
            route("7321", "7653", true, 13.0),
            route("7653", "8752", true, 25.0),
            route("7653", "6948", false, 30.0),
        ],
    }
}
