//! Match engine - the tile selection state machine
//!
//! Two states: no selection, or exactly one selected tile. Every click
//! resolves to a `SelectOutcome`; scoring and event emission stay with the
//! session so the machine itself is trivially testable.

use crate::core::pairs::PairSession;
use crate::types::TileRef;

/// Resolution of one `select` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Pair missing or not active; no transition, no event.
    Ignored,
    /// First tile of an attempt selected.
    Selected(TileRef),
    /// The selected tile was clicked again; selection cleared.
    Cleared,
    /// Same pair and role re-picked; the new tile is now the sole selection.
    Swapped(TileRef),
    /// Calc and answer of the same pair; the pair is now matched.
    Matched(TileRef, TileRef),
    /// Tiles from two different pairs; selection cleared immediately.
    Mismatched { first: TileRef, second: TileRef },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchEngine {
    selection: Option<TileRef>,
}

impl MatchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<TileRef> {
        self.selection
    }

    /// Drop any pending selection (session end or restart).
    pub fn clear(&mut self) {
        self.selection = None;
    }

    /// Apply one click to the state machine.
    ///
    /// On `Matched` the pair's status flips to `Matched` here; everything
    /// else (score, bonus, replacement scheduling) is the caller's job.
    pub fn select(&mut self, pairs: &mut PairSession, tile: TileRef) -> SelectOutcome {
        if pairs.find_active(tile.pair_id).is_none() {
            return SelectOutcome::Ignored;
        }

        let Some(prev) = self.selection else {
            self.selection = Some(tile);
            return SelectOutcome::Selected(tile);
        };

        if prev == tile {
            self.selection = None;
            return SelectOutcome::Cleared;
        }

        if prev.pair_id == tile.pair_id && prev.role != tile.role {
            pairs.mark_matched(tile.pair_id);
            self.selection = None;
            return SelectOutcome::Matched(prev, tile);
        }

        if prev.pair_id != tile.pair_id {
            self.selection = None;
            return SelectOutcome::Mismatched {
                first: prev,
                second: tile,
            };
        }

        // Same pair, same role: the new tile replaces the old selection.
        self.selection = Some(tile);
        SelectOutcome::Swapped(tile)
    }
}
