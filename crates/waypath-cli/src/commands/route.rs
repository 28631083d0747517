//! Route command handler for computing the lowest-cost path between two locations.

use std::io::Write;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use waypath_lib::{Error as RouteError, RouteNetwork};

use super::RouteOutcome;
use crate::output::{render_json, render_no_route, render_route, OutputFormat};
use crate::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting location identifier.
    pub from: String,
    /// Destination location identifier.
    pub to: String,
}

/// Handle the route subcommand.
///
/// Unknown identifiers are errors; disconnected endpoints print the no-route
/// message and report [`RouteOutcome::NoRoute`].
pub fn handle_route_command(
    network: &RouteNetwork,
    args: &RouteCommandArgs,
    format: OutputFormat,
    palette: ColorPalette,
    out: &mut impl Write,
) -> Result<RouteOutcome> {
    match network.plan_route(&args.from, &args.to) {
        Ok(plan) => {
            info!(from = %args.from, to = %args.to, cost = plan.total_cost, "route found");
            match format {
                OutputFormat::Text => render_route(out, &plan, palette)?,
                OutputFormat::Json => render_json(out, &plan)?,
            }
            Ok(RouteOutcome::Found)
        }
        Err(RouteError::RouteNotFound { start, goal }) => {
            info!(from = %start, to = %goal, "no route");
            match format {
                OutputFormat::Text => render_no_route(out, palette)?,
                OutputFormat::Json => render_json(
                    out,
                    &json!({ "start": start, "goal": goal, "route": null }),
                )?,
            }
            Ok(RouteOutcome::NoRoute)
        }
        Err(err) => Err(err)
            .with_context(|| format!("failed to plan route from {} to {}", args.from, args.to)),
    }
}
