//! Tile Crush (workspace facade crate).
//!
//! Re-exports the member crates as `tile_crush::{types, core, level}` and hosts
//! the JSON turn records emitted by the headless runner.

pub mod report;

pub use tile_crush_core as core;
pub use tile_crush_level as level;
pub use tile_crush_types as types;
