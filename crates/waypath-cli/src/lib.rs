//! waypath CLI library.
//!
//! Presentation layer for the routing engine: numbered menus, interactive
//! prompts and route rendering. All routing decisions live in `waypath-lib`.

pub mod commands;
pub mod output;
pub mod terminal;
