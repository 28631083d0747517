//! Output formatting for location menus and routes.
//!
//! Renderers write to any [`Write`] so the same code serves stdout and tests.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use waypath_lib::{LocationEntry, RoutePlan};

use crate::terminal::ColorPalette;

/// Message printed when two locations are not connected.
pub const NO_ROUTE_MESSAGE: &str = "No route available";

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Render the numbered location menu, one `N. name` line per location.
pub fn render_menu(
    out: &mut impl Write,
    entries: &[LocationEntry],
    palette: ColorPalette,
) -> Result<()> {
    for entry in entries {
        writeln!(
            out,
            "{muted}{}.{reset} {}",
            entry.index,
            entry.name,
            muted = palette.muted,
            reset = palette.reset
        )?;
    }
    Ok(())
}

/// Render a route as a heading, one 1-indexed name per line and the total cost.
pub fn render_route(out: &mut impl Write, plan: &RoutePlan, palette: ColorPalette) -> Result<()> {
    let start = plan.steps.first().map_or(plan.start.as_str(), |s| s.name.as_str());
    let goal = plan.steps.last().map_or(plan.goal.as_str(), |s| s.name.as_str());
    writeln!(
        out,
        "{heading}Route from {} to {} ({} {}):{reset}",
        start,
        goal,
        plan.hop_count(),
        if plan.hop_count() == 1 { "hop" } else { "hops" },
        heading = palette.heading,
        reset = palette.reset
    )?;
    render_path(out, &plan.names())?;
    writeln!(
        out,
        "{total}Total cost: {}{reset}",
        plan.total_cost,
        total = palette.total,
        reset = palette.reset
    )?;
    Ok(())
}

/// Render a path of names, one per line, numbered from 1.
pub fn render_path(out: &mut impl Write, names: &[String]) -> Result<()> {
    for (position, name) in names.iter().enumerate() {
        writeln!(out, "{} {}", position + 1, name)?;
    }
    Ok(())
}

pub fn render_no_route(out: &mut impl Write, palette: ColorPalette) -> Result<()> {
    writeln!(
        out,
        "{error}{NO_ROUTE_MESSAGE}{reset}",
        error = palette.error,
        reset = palette.reset
    )?;
    Ok(())
}

/// Serialize any value as pretty-printed JSON followed by a newline.
pub fn render_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypath_lib::RouteStep;

    fn step(index: usize, id: &str, name: &str, cost: Option<f64>) -> RouteStep {
        RouteStep {
            index,
            id: id.to_string(),
            name: name.to_string(),
            cost,
        }
    }

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).expect("render succeeds");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn menu_lists_numbered_names() {
        let entries = vec![
            LocationEntry {
                index: 1,
                id: "a".to_string(),
                name: "Alpha".to_string(),
            },
            LocationEntry {
                index: 2,
                id: "b".to_string(),
                name: "Beta".to_string(),
            },
        ];
        let text = rendered(|out| render_menu(out, &entries, ColorPalette::plain()));
        assert_eq!(text, "1. Alpha\n2. Beta\n");
    }

    #[test]
    fn route_lists_steps_and_total() {
        let plan = RoutePlan {
            start: "a".to_string(),
            goal: "c".to_string(),
            steps: vec![
                step(1, "a", "Alpha", None),
                step(2, "b", "Beta", Some(1.5)),
                step(3, "c", "Gamma", Some(2.0)),
            ],
            total_cost: 3.5,
        };
        let text = rendered(|out| render_route(out, &plan, ColorPalette::plain()));
        assert_eq!(
            text,
            "Route from Alpha to Gamma (2 hops):\n1 Alpha\n2 Beta\n3 Gamma\nTotal cost: 3.5\n"
        );
    }

    #[test]
    fn single_location_route_uses_singular_hop() {
        let plan = RoutePlan {
            start: "a".to_string(),
            goal: "b".to_string(),
            steps: vec![step(1, "a", "Alpha", None), step(2, "b", "Beta", Some(4.0))],
            total_cost: 4.0,
        };
        let text = rendered(|out| render_route(out, &plan, ColorPalette::plain()));
        assert!(text.starts_with("Route from Alpha to Beta (1 hop):"));
    }

    #[test]
    fn json_omits_start_cost() {
        let plan = RoutePlan {
            start: "a".to_string(),
            goal: "a".to_string(),
            steps: vec![step(1, "a", "Alpha", None)],
            total_cost: 0.0,
        };
        let text = rendered(|out| render_json(out, &plan));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value["steps"][0].get("cost").is_none());
        assert_eq!(value["total_cost"], 0.0);
    }
}
