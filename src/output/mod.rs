//! Terminal output formatting
//!
//! Colored letter cells and the end-of-game share grid.

pub mod formatters;

pub use formatters::{colored_cell, colored_row, share_grid, share_square};
