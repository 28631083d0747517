use thiserror::Error;

/// Convenient result alias for the waypath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every variant is recoverable: callers branch on it and carry on.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location identifier is not registered.
    #[error("unknown location id: {id}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        id: String,
        suggestions: Vec<String>,
    },

    /// Raised when registering a location whose identifier is already taken.
    #[error("location {id} is already registered")]
    DuplicateLocation { id: String },

    /// Raised when an edge already connects the ordered pair.
    #[error("route from {from} to {to} already exists")]
    DuplicateRoute { from: String, to: String },

    /// Raised when a route weight is negative, NaN or infinite.
    #[error("invalid weight {weight} for route from {from} to {to}; weights must be finite and non-negative")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Raised when both endpoints exist but no path connects them.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for network definition parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_location_without_suggestions() {
        let err = Error::UnknownLocation {
            id: "9999".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown location id: 9999");
    }

    #[test]
    fn unknown_location_lists_suggestions() {
        let err = Error::UnknownLocation {
            id: "123".to_string(),
            suggestions: vec!["1234".to_string(), "1235".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown location id: 123. Did you mean one of: '1234', '1235'?"
        );
    }
}
