//! Core module - pure game logic with no terminal or I/O dependencies
//!
//! Everything in here is deterministic given an RNG seed, which keeps the
//! whole session replayable under test.

pub mod board;
pub mod engine;
pub mod game;
pub mod pairs;
pub mod problem;
pub mod rng;
pub mod timer;

// Re-export commonly used types
pub use board::SlotBoard;
pub use engine::{MatchEngine, SelectOutcome};
pub use game::{GameConfig, GameEvent, GameSession, Phase};
pub use pairs::{Pair, PairSession};
pub use problem::{generate_distinct, generate_problem, Problem};
pub use rng::GameRng;
pub use timer::Countdown;
