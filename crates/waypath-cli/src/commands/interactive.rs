//! Interactive menu session: pick an origin and a destination by number and
//! print the lowest-cost route between them.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use tracing::debug;

use waypath_lib::{Location, RouteNetwork};

use super::RouteOutcome;
use crate::output::{render_menu, render_no_route, render_path};
use crate::terminal::ColorPalette;

/// Run one origin/destination session over the given input and output streams.
///
/// Malformed or out-of-range selections print a hint and prompt again. Running
/// out of input before both locations are chosen is an error.
pub fn run_session<R: BufRead, W: Write>(
    network: &RouteNetwork,
    input: &mut R,
    out: &mut W,
    palette: ColorPalette,
) -> Result<RouteOutcome> {
    if network.location_count() == 0 {
        bail!("the network has no locations to choose from");
    }

    writeln!(
        out,
        "{heading}Pick where you are leaving from and where you are going; the least congested route will be calculated.{reset}",
        heading = palette.heading,
        reset = palette.reset
    )?;
    writeln!(out, "Locations:")?;
    render_menu(out, &network.list_locations(), palette)?;

    let origin = prompt_selection(network, input, out, palette, "Origin")?;
    let destination = prompt_selection(network, input, out, palette, "Destination")?;
    debug!(from = origin.id(), to = destination.id(), "selection complete");

    match network.shortest_path(origin.id(), destination.id()) {
        Some(names) => {
            writeln!(
                out,
                "{heading}The fastest route is:{reset}",
                heading = palette.heading,
                reset = palette.reset
            )?;
            render_path(out, &names)?;
            Ok(RouteOutcome::Found)
        }
        None => {
            render_no_route(out, palette)?;
            Ok(RouteOutcome::NoRoute)
        }
    }
}

fn prompt_selection<'n, R: BufRead, W: Write>(
    network: &'n RouteNetwork,
    input: &mut R,
    out: &mut W,
    palette: ColorPalette,
    label: &str,
) -> Result<&'n Location> {
    let count = network.location_count();
    let mut buffer = Vec::new();
    loop {
        write!(out, "{label} [1-{count}]: ")?;
        out.flush()?;

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            bail!("input ended before the {} was selected", label.to_lowercase());
        }

        // Bytes that are not UTF-8 become U+FFFD and fail to parse below.
        let line = String::from_utf8_lossy(&buffer);
        let selected = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|index| network.resolve_selection(index));
        if let Some(location) = selected {
            return Ok(location);
        }

        debug!(input = line.trim(), "rejected selection");
        writeln!(
            out,
            "{error}Invalid selection; enter a number between 1 and {count}{reset}",
            error = palette.error,
            reset = palette.reset
        )?;
    }
}
