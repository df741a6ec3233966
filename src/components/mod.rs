//! Reusable TUI components
//!
//! - `keybindings` - Per-view key tables, nav bar items and help content
//! - `help_overlay` - Modal help popup built from those tables

pub mod help_overlay;
pub mod keybindings;
