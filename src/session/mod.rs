//! Game session state machines
//!
//! One controller per game variant. Both own their oracle, gate every
//! mutating operation on the in-flight-call flag, and surface failures as
//! messages instead of panics.

mod genedle;
mod spelling;

pub use genedle::{GameStatus, GenedleSession, LOSS_MESSAGE, MAX_ATTEMPTS, WIN_MESSAGE};
pub use spelling::SpellingSession;
