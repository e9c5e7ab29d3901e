//! Pair ownership - the set of problems currently on the board
//!
//! Keeps the active-pair count at the configured size while the session
//! runs; replacement of matched pairs is driven from the session tick.

use crate::core::board::SlotBoard;
use crate::core::problem::{self, Problem};
use crate::core::rng::GameRng;
use crate::error::BoardError;
use crate::types::{PairId, PairStatus, Role, SlotId, TileRef};

/// One problem instance on the board: two tiles on two distinct slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub id: PairId,
    pub label: String,
    pub answer: u32,
    pub status: PairStatus,
    pub calc_slot: SlotId,
    pub answer_slot: SlotId,
}

impl Pair {
    pub fn slot_for(&self, role: Role) -> SlotId {
        match role {
            Role::Calc => self.calc_slot,
            Role::Answer => self.answer_slot,
        }
    }

    /// Text shown on the tile with the given role.
    pub fn text_for(&self, role: Role) -> String {
        match role {
            Role::Calc => self.label.clone(),
            Role::Answer => self.answer.to_string(),
        }
    }
}

/// Owner of all pairs currently on the board.
///
/// Ids are monotonic across restarts and never reused, so a stale deferred
/// callback can never alias a newer pair.
#[derive(Debug, Clone, Default)]
pub struct PairSession {
    pairs: Vec<Pair>,
    next_id: PairId,
}

impl PairSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> PairId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Clear state and lay out `count` fresh pairs.
    ///
    /// All `2 * count` tiles are shuffled together before slots are filled
    /// in order, so a pair's two tiles never land in correlated positions.
    pub fn initialize(
        &mut self,
        board: &mut SlotBoard,
        rng: &mut GameRng,
        count: usize,
    ) -> Result<(), BoardError> {
        self.pairs.clear();
        board.clear();

        let problems = problem::generate_distinct(rng, count);
        let base = self.next_id;
        let ids: Vec<PairId> = problems.iter().map(|_| self.alloc_id()).collect();

        let mut tiles: Vec<TileRef> = Vec::with_capacity(count * 2);
        for &id in &ids {
            tiles.push(TileRef::new(id, Role::Calc));
            tiles.push(TileRef::new(id, Role::Answer));
        }
        rng.shuffle(&mut tiles);

        let mut calc_slots = vec![0; count];
        let mut answer_slots = vec![0; count];
        for (slot, &tile) in tiles.iter().enumerate() {
            board.place_at(slot, tile)?;
            let idx = (tile.pair_id - base) as usize;
            match tile.role {
                Role::Calc => calc_slots[idx] = slot,
                Role::Answer => answer_slots[idx] = slot,
            }
        }

        for (idx, (problem, id)) in problems.into_iter().zip(ids).enumerate() {
            self.pairs.push(Pair {
                id,
                label: problem.label,
                answer: problem.answer,
                status: PairStatus::Active,
                calc_slot: calc_slots[idx],
                answer_slot: answer_slots[idx],
            });
        }
        Ok(())
    }

    /// Generate one fresh pair and place both tiles on random empty slots.
    pub fn add_pair(&mut self, board: &mut SlotBoard, rng: &mut GameRng) -> Result<PairId, BoardError> {
        let Problem { label, answer } = problem::generate_problem(rng);
        let id = self.alloc_id();
        let calc_slot = board.place_random(TileRef::new(id, Role::Calc), rng)?;
        let answer_slot = board.place_random(TileRef::new(id, Role::Answer), rng)?;
        self.pairs.push(Pair {
            id,
            label,
            answer,
            status: PairStatus::Active,
            calc_slot,
            answer_slot,
        });
        Ok(id)
    }

    /// Release both slots and drop the pair.
    ///
    /// Removing an absent id is a silent no-op (`Ok(None)`), so duplicate
    /// end-of-match callbacks are harmless.
    pub fn remove_pair(
        &mut self,
        board: &mut SlotBoard,
        id: PairId,
    ) -> Result<Option<Pair>, BoardError> {
        let Some(idx) = self.pairs.iter().position(|p| p.id == id) else {
            return Ok(None);
        };
        let pair = self.pairs.remove(idx);
        board.release(pair.calc_slot)?;
        board.release(pair.answer_slot)?;
        Ok(Some(pair))
    }

    pub fn find(&self, id: PairId) -> Option<&Pair> {
        self.pairs.iter().find(|p| p.id == id)
    }

    pub fn find_active(&self, id: PairId) -> Option<&Pair> {
        self.find(id).filter(|p| p.status == PairStatus::Active)
    }

    /// Flip a pair to `Matched`. Returns false when the id is absent.
    pub fn mark_matched(&mut self, id: PairId) -> bool {
        match self.pairs.iter_mut().find(|p| p.id == id) {
            Some(pair) => {
                pair.status = PairStatus::Matched;
                true
            }
            None => false,
        }
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn active_count(&self) -> usize {
        self.pairs
            .iter()
            .filter(|p| p.status == PairStatus::Active)
            .count()
    }
}
