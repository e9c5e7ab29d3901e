//! Terminal presentation layer.
//!
//! `view` is pure and unit-tested; `renderer` owns the raw-mode terminal.

pub mod renderer;
pub mod view;

pub use renderer::TerminalRenderer;
pub use view::{GameView, Line, Span, Tone, UiState};
