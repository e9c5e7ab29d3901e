//! Invariant-violation errors.
//!
//! These are programmer-facing assertion failures, never shown to the
//! player. A wrong match is a normal state-machine outcome, not an error.

use thiserror::Error;

use crate::types::SlotId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no empty slot available on the board")]
    Full,

    #[error("slot {0} is already empty")]
    SlotEmpty(SlotId),

    #[error("slot {0} is already occupied")]
    SlotOccupied(SlotId),
}
