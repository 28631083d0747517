use indexmap::map::Entry;
use tracing::debug;

use crate::collections::FxIndexMap;
use crate::error::{Error, Result};
use crate::location::{Location, LocationKey};

/// Minimum Jaro-Winkler similarity for an identifier or name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Identifier-indexed store of locations.
///
/// Locations keep their insertion order, which doubles as their
/// [`LocationKey`]. Nothing is ever removed, so keys stay stable for the
/// lifetime of the registry.
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    locations: FxIndexMap<String, Location>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location and return its key.
    ///
    /// A duplicate identifier is rejected and the stored record is left untouched.
    pub fn insert(&mut self, location: Location) -> Result<LocationKey> {
        match self.locations.entry(location.id().to_string()) {
            Entry::Occupied(entry) => Err(Error::DuplicateLocation {
                id: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                let key = entry.index();
                debug!(id = %location.id(), key, "registered location");
                entry.insert(location);
                Ok(key)
            }
        }
    }

    /// Lookup a location by its identifier.
    pub fn find_by_id(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Lookup the graph key assigned to an identifier.
    pub fn key_of(&self, id: &str) -> Option<LocationKey> {
        self.locations.get_index_of(id)
    }

    /// Lookup a location by graph key.
    pub fn get(&self, key: LocationKey) -> Option<&Location> {
        self.locations.get_index(key).map(|(_, location)| location)
    }

    /// Resolve an identifier to its key, or build an [`Error::UnknownLocation`]
    /// carrying the closest matches.
    pub fn require(&self, id: &str) -> Result<LocationKey> {
        self.key_of(id).ok_or_else(|| Error::UnknownLocation {
            id: id.to_string(),
            suggestions: self.fuzzy_matches(id, 3),
        })
    }

    /// Every registered location, in insertion order.
    pub fn list_all(&self) -> impl ExactSizeIterator<Item = &Location> + '_ {
        self.locations.values()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Suggest up to `limit` identifiers whose id or display name resembles `query`.
    ///
    /// Results are ordered by similarity, highest first, with ties broken by identifier.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .locations
            .values()
            .map(|location| {
                let by_id = strsim::jaro_winkler(&needle, &location.id().to_lowercase());
                let by_name = strsim::jaro_winkler(&needle, &location.name().to_lowercase());
                (by_id.max(by_name), location.id())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, id)| id.to_string())
            .collect()
    }
}
