//! Theme for the AcceptMe TUI.
//!
//! - `palette`: raw color constants, including the per-role accents
//! - `styles`: semantic style builder functions

pub mod palette;
pub mod styles;
