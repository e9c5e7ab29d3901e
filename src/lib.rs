//! calc-match: arithmetic pair-matching against the clock.
//!
//! Players pair an expression tile with its answer tile on a 16-slot
//! board while a countdown runs; every fifth match buys extra time.
//! The match engine is pure and deterministic per seed; presentation
//! layers consume its event stream.
//!
//! # Module structure
//!
//! - [`core`]: problems, slot board, pair ownership, selection state
//!   machine, countdown and the session orchestrator
//! - [`protocol`]: line-delimited JSON form of the event stream
//! - [`input`] / [`term`]: the bundled crossterm front end
//!
//! # Example
//!
//! ```
//! use calc_match::core::GameSession;
//! use calc_match::types::Role;
//!
//! let mut session = GameSession::new(12345);
//! session.start().unwrap();
//!
//! // Pair the first problem's two tiles.
//! let id = session.pairs().pairs()[0].id;
//! session.select_tile(id, Role::Calc);
//! session.select_tile(id, Role::Answer);
//!
//! assert_eq!(session.score(), 2);
//! ```

pub mod core;
pub mod error;
pub mod input;
pub mod protocol;
pub mod term;
pub mod types;
