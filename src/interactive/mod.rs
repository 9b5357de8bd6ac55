//! Interactive TUI interfaces for both games

pub mod app;
pub mod rendering;
pub mod spelling_app;

pub use app::{GenedleApp, run_genedle};
pub use spelling_app::{SpellingApp, run_spelling};
