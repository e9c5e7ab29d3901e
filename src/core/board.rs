//! Slot board - fixed grid positions that hold at most one tile each
//!
//! The board knows nothing about pairing or matching; it only tracks
//! occupancy. Capacity is fixed at construction and never resized.

use arrayvec::ArrayVec;

use crate::core::rng::GameRng;
use crate::error::BoardError;
use crate::types::{SlotId, TileRef, SLOT_COUNT};

/// Fixed collection of display positions, each empty or holding one tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBoard {
    slots: [Option<TileRef>; SLOT_COUNT],
}

impl SlotBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            slots: [None; SLOT_COUNT],
        }
    }

    pub fn capacity(&self) -> usize {
        SLOT_COUNT
    }

    /// Tile occupying the slot, if any. Out-of-range slots read as empty.
    pub fn get(&self, slot: SlotId) -> Option<TileRef> {
        self.slots.get(slot).copied().flatten()
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Currently empty slots in ascending index order.
    ///
    /// The deterministic order matters: placement randomness comes only
    /// from the RNG, so stubbed-seed tests see stable layouts.
    pub fn empty_slots(&self) -> ArrayVec<SlotId, SLOT_COUNT> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Place a tile on a uniformly chosen empty slot.
    pub fn place_random(&mut self, tile: TileRef, rng: &mut GameRng) -> Result<SlotId, BoardError> {
        let empty = self.empty_slots();
        if empty.is_empty() {
            return Err(BoardError::Full);
        }
        let slot = empty[rng.next_range(empty.len() as u32) as usize];
        self.slots[slot] = Some(tile);
        Ok(slot)
    }

    /// Place a tile on a specific slot (initial layout path).
    pub fn place_at(&mut self, slot: SlotId, tile: TileRef) -> Result<(), BoardError> {
        let cell = self
            .slots
            .get_mut(slot)
            .ok_or(BoardError::SlotOccupied(slot))?;
        if cell.is_some() {
            return Err(BoardError::SlotOccupied(slot));
        }
        *cell = Some(tile);
        Ok(())
    }

    /// Mark a slot empty, returning the tile that occupied it.
    pub fn release(&mut self, slot: SlotId) -> Result<TileRef, BoardError> {
        self.slots
            .get_mut(slot)
            .and_then(|cell| cell.take())
            .ok_or(BoardError::SlotEmpty(slot))
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots = [None; SLOT_COUNT];
    }
}

impl Default for SlotBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn tile(id: u32) -> TileRef {
        TileRef::new(id, Role::Calc)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = SlotBoard::new();
        assert_eq!(board.capacity(), SLOT_COUNT);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.empty_slots().len(), SLOT_COUNT);
    }

    #[test]
    fn test_empty_slots_ascending_order() {
        let mut board = SlotBoard::new();
        board.place_at(3, tile(1)).unwrap();
        board.place_at(7, tile(2)).unwrap();

        let empty = board.empty_slots();
        let mut sorted = empty.clone();
        sorted.sort_unstable();
        assert_eq!(empty, sorted);
        assert!(!empty.contains(&3));
        assert!(!empty.contains(&7));
    }

    #[test]
    fn test_place_random_fills_every_slot() {
        let mut board = SlotBoard::new();
        let mut rng = GameRng::new(42);

        for id in 0..SLOT_COUNT as u32 {
            board.place_random(tile(id), &mut rng).unwrap();
        }
        assert_eq!(board.occupied_count(), SLOT_COUNT);
        assert_eq!(
            board.place_random(tile(99), &mut rng),
            Err(BoardError::Full)
        );
    }

    #[test]
    fn test_place_random_is_deterministic_per_seed() {
        let mut a = SlotBoard::new();
        let mut b = SlotBoard::new();
        let mut rng_a = GameRng::new(11);
        let mut rng_b = GameRng::new(11);

        for id in 0..8 {
            assert_eq!(
                a.place_random(tile(id), &mut rng_a),
                b.place_random(tile(id), &mut rng_b)
            );
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_release_round_trip() {
        let mut board = SlotBoard::new();
        let mut rng = GameRng::new(5);

        let slot = board.place_random(tile(1), &mut rng).unwrap();
        assert_eq!(board.get(slot), Some(tile(1)));

        assert_eq!(board.release(slot), Ok(tile(1)));
        assert_eq!(board.get(slot), None);
        assert_eq!(board.release(slot), Err(BoardError::SlotEmpty(slot)));
    }

    #[test]
    fn test_release_out_of_range_is_an_error() {
        let mut board = SlotBoard::new();
        assert_eq!(
            board.release(SLOT_COUNT),
            Err(BoardError::SlotEmpty(SLOT_COUNT))
        );
    }

    #[test]
    fn test_place_at_rejects_occupied_slot() {
        let mut board = SlotBoard::new();
        board.place_at(0, tile(1)).unwrap();
        assert_eq!(
            board.place_at(0, tile(2)),
            Err(BoardError::SlotOccupied(0))
        );
    }

    #[test]
    fn test_clear_empties_the_board() {
        let mut board = SlotBoard::new();
        let mut rng = GameRng::new(9);
        for id in 0..4 {
            board.place_random(tile(id), &mut rng).unwrap();
        }
        board.clear();
        assert_eq!(board.occupied_count(), 0);
    }
}
