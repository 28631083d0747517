//! List command handler for printing the numbered location menu.

use std::io::Write;

use anyhow::Result;

use waypath_lib::RouteNetwork;

use crate::output::{render_json, render_menu, OutputFormat};
use crate::terminal::ColorPalette;

/// Print every location with its menu number.
pub fn handle_list_command(
    network: &RouteNetwork,
    format: OutputFormat,
    palette: ColorPalette,
    out: &mut impl Write,
) -> Result<()> {
    let entries = network.list_locations();
    match format {
        OutputFormat::Text => render_menu(out, &entries, palette),
        OutputFormat::Json => render_json(out, &entries),
    }
}
