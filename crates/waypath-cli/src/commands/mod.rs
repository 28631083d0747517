// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments, builds the
// network once and dispatches to these handlers.

pub mod interactive;
pub mod list;
pub mod route;

/// Result of a command that queries a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// A route was found and printed.
    Found,
    /// Both locations exist but no route connects them.
    NoRoute,
}
