//! Game session - lifecycle, scoring, bonus time and the event stream
//!
//! This module ties together all core components: problems, slot board,
//! pairs, match engine and countdown. All state transitions happen
//! synchronously inside `start`, `select_tile` and `tick`; the only
//! deferred work is the replacement of a matched pair, modeled as a
//! millisecond countdown driven from `tick`.

use arrayvec::ArrayVec;

use crate::core::engine::{MatchEngine, SelectOutcome};
use crate::core::pairs::PairSession;
use crate::core::rng::GameRng;
use crate::core::timer::Countdown;
use crate::core::SlotBoard;
use crate::error::BoardError;
use crate::types::{
    selection_prompt, GameResult, PairId, Role, SlotId, TileRef, Urgency, BONUS_EVERY,
    BONUS_SECONDS, INITIAL_TIME_SECS, MATCH_CLEAR_DELAY_MS, SLOT_COUNT, TILES_ON_BOARD,
    TOTAL_TO_WIN,
};

/// Session event consumed by a presentation layer.
///
/// The engine never owns a rendering handle; these carry everything a
/// front end needs to mirror the session.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    TileSelected {
        pair_id: PairId,
        role: Role,
        label: String,
        prompt: String,
    },
    SelectionCleared,
    MatchSucceeded {
        pair_id: PairId,
    },
    MatchFailed {
        first: TileRef,
        second: TileRef,
    },
    PairAdded {
        pair_id: PairId,
        label: String,
        answer: u32,
        calc_slot: SlotId,
        answer_slot: SlotId,
    },
    PairRemoved {
        pair_id: PairId,
    },
    ScoreChanged {
        score: u32,
    },
    BonusGranted {
        seconds: u32,
    },
    TimerTick {
        time_left: i32,
        urgency: Urgency,
    },
    GameEnded {
        result: GameResult,
        final_score: u32,
    },
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Won,
    Lost,
}

/// Gameplay knobs. `Default` is the canonical rule set; tests shrink the
/// win threshold or the replacement delay where convenient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub tiles_on_board: usize,
    pub initial_time_secs: u32,
    pub bonus_every: u32,
    pub bonus_seconds: u32,
    pub total_to_win: u32,
    pub match_clear_delay_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tiles_on_board: TILES_ON_BOARD,
            initial_time_secs: INITIAL_TIME_SECS,
            bonus_every: BONUS_EVERY,
            bonus_seconds: BONUS_SECONDS,
            total_to_win: TOTAL_TO_WIN,
            match_clear_delay_ms: MATCH_CLEAR_DELAY_MS,
        }
    }
}

/// A matched pair waiting out its clear delay before replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingReplace {
    pair_id: PairId,
    delay_ms: u32,
}

/// Complete match session state.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    board: SlotBoard,
    pairs: PairSession,
    engine: MatchEngine,
    timer: Countdown,
    phase: Phase,
    score: u32,
    /// How many bonus thresholds have been granted so far.
    last_bonus_at: u32,
    pending: Vec<PendingReplace>,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session with the canonical rules and the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    pub fn with_config(seed: u32, config: GameConfig) -> Self {
        Self {
            config,
            rng: GameRng::new(seed),
            board: SlotBoard::new(),
            pairs: PairSession::new(),
            engine: MatchEngine::new(),
            timer: Countdown::new(config.initial_time_secs),
            phase: Phase::NotStarted,
            score: 0,
            last_bonus_at: 0,
            pending: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> i32 {
        self.timer.remaining_secs()
    }

    pub fn urgency(&self) -> Urgency {
        self.timer.urgency()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &SlotBoard {
        &self.board
    }

    pub fn pairs(&self) -> &PairSession {
        &self.pairs
    }

    pub fn selection(&self) -> Option<TileRef> {
        self.engine.selection()
    }

    /// Slot currently holding the given tile, if its pair is on the board.
    pub fn tile_slot(&self, tile: TileRef) -> Option<SlotId> {
        self.pairs.find(tile.pair_id).map(|p| p.slot_for(tile.role))
    }

    /// Take all events emitted since the last drain, in emission order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start or restart the session. Legal from any phase; fully resets
    /// score, selection, bonus counter, board layout and countdown.
    pub fn start(&mut self) -> Result<(), BoardError> {
        self.timer.stop();
        self.score = 0;
        self.last_bonus_at = 0;
        self.engine.clear();
        self.pending.clear();
        self.events.clear();

        self.pairs
            .initialize(&mut self.board, &mut self.rng, self.config.tiles_on_board)?;
        self.timer.restart(self.config.initial_time_secs);
        self.phase = Phase::Running;

        self.events.push(GameEvent::ScoreChanged { score: 0 });
        let added: Vec<PairId> = self.pairs.pairs().iter().map(|p| p.id).collect();
        for id in added {
            self.emit_pair_added(id);
        }
        Ok(())
    }

    /// Handle one tile click. Ignored unless the session is running and
    /// the pair is active.
    pub fn select_tile(&mut self, pair_id: PairId, role: Role) {
        if self.phase != Phase::Running {
            return;
        }
        let tile = TileRef::new(pair_id, role);
        match self.engine.select(&mut self.pairs, tile) {
            SelectOutcome::Ignored => {}
            SelectOutcome::Selected(tile) | SelectOutcome::Swapped(tile) => {
                self.emit_tile_selected(tile);
            }
            SelectOutcome::Cleared => {
                self.events.push(GameEvent::SelectionCleared);
            }
            SelectOutcome::Matched(_, second) => {
                let pair_id = second.pair_id;
                self.events.push(GameEvent::MatchSucceeded { pair_id });
                self.pending.push(PendingReplace {
                    pair_id,
                    delay_ms: self.config.match_clear_delay_ms,
                });
                self.score += 2;
                self.events.push(GameEvent::ScoreChanged { score: self.score });
                self.check_bonus();
                self.check_win();
            }
            SelectOutcome::Mismatched { first, second } => {
                self.events.push(GameEvent::MatchFailed { first, second });
            }
        }
    }

    /// Advance the session by `elapsed_ms` of wall-clock time: fire due
    /// pair replacements, then drive the countdown one whole second at a
    /// time so loss is detected on the exact tick that exhausts it.
    pub fn tick(&mut self, elapsed_ms: u32) -> Result<(), BoardError> {
        if self.phase != Phase::Running {
            return Ok(());
        }

        let mut due: ArrayVec<PairId, SLOT_COUNT> = ArrayVec::new();
        self.pending.retain_mut(|p| {
            p.delay_ms = p.delay_ms.saturating_sub(elapsed_ms);
            if p.delay_ms == 0 {
                due.push(p.pair_id);
                false
            } else {
                true
            }
        });
        for pair_id in due {
            self.replace_pair(pair_id)?;
        }

        let seconds = self.timer.advance(elapsed_ms);
        for _ in 0..seconds {
            if self.phase != Phase::Running {
                break;
            }
            let time_left = self.timer.step();
            self.events.push(GameEvent::TimerTick {
                time_left,
                urgency: self.timer.urgency(),
            });
            if time_left <= 0 {
                self.end(GameResult::Lost);
            }
        }
        Ok(())
    }

    /// Deferred end-of-match callback: remove the matched pair and bring a
    /// fresh one in. A stale id (pair gone after a restart) is a no-op.
    fn replace_pair(&mut self, pair_id: PairId) -> Result<(), BoardError> {
        let Some(removed) = self.pairs.remove_pair(&mut self.board, pair_id)? else {
            return Ok(());
        };
        self.events.push(GameEvent::PairRemoved { pair_id: removed.id });
        let new_id = self.pairs.add_pair(&mut self.board, &mut self.rng)?;
        self.emit_pair_added(new_id);
        Ok(())
    }

    /// Grant a time bonus when the completed-match count crosses the next
    /// multiple of `bonus_every`. Fires at most once per match since the
    /// match count grows by exactly one at a time.
    fn check_bonus(&mut self) {
        let match_count = self.score / 2;
        let threshold = match_count / self.config.bonus_every;
        if threshold > self.last_bonus_at {
            self.last_bonus_at = threshold;
            self.timer.add_seconds(self.config.bonus_seconds);
            self.events.push(GameEvent::BonusGranted {
                seconds: self.config.bonus_seconds,
            });
        }
    }

    fn check_win(&mut self) {
        if self.score >= self.config.total_to_win {
            self.end(GameResult::Won);
        }
    }

    fn end(&mut self, result: GameResult) {
        self.phase = match result {
            GameResult::Won => Phase::Won,
            GameResult::Lost => Phase::Lost,
        };
        self.timer.stop();
        self.engine.clear();
        self.events.push(GameEvent::GameEnded {
            result,
            final_score: self.score,
        });
    }

    fn emit_tile_selected(&mut self, tile: TileRef) {
        if let Some(pair) = self.pairs.find(tile.pair_id) {
            let label = pair.text_for(tile.role);
            let prompt = selection_prompt(tile.role, &label);
            self.events.push(GameEvent::TileSelected {
                pair_id: tile.pair_id,
                role: tile.role,
                label,
                prompt,
            });
        }
    }

    fn emit_pair_added(&mut self, id: PairId) {
        if let Some(pair) = self.pairs.find(id) {
            self.events.push(GameEvent::PairAdded {
                pair_id: pair.id,
                label: pair.label.clone(),
                answer: pair.answer,
                calc_slot: pair.calc_slot,
                answer_slot: pair.answer_slot,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PairStatus;

    fn started(seed: u32) -> GameSession {
        let mut session = GameSession::new(seed);
        session.start().unwrap();
        session.drain_events();
        session
    }

    fn first_active(session: &GameSession) -> PairId {
        session
            .pairs()
            .pairs()
            .iter()
            .find(|p| p.status == PairStatus::Active)
            .map(|p| p.id)
            .unwrap()
    }

    /// Match one pair and return its id (does not tick).
    fn match_one(session: &mut GameSession) -> PairId {
        let id = first_active(session);
        session.select_tile(id, Role::Calc);
        session.select_tile(id, Role::Answer);
        id
    }

    fn count<F: Fn(&GameEvent) -> bool>(events: &[GameEvent], pred: F) -> usize {
        events.iter().filter(|e| pred(e)).count()
    }

    #[test]
    fn test_new_session_not_started() {
        let session = GameSession::new(1);
        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.score(), 0);
        assert_eq!(session.pairs().pairs().len(), 0);
    }

    #[test]
    fn test_start_lays_out_full_board() {
        let mut session = GameSession::new(12345);
        session.start().unwrap();

        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.pairs().active_count(), TILES_ON_BOARD);
        assert_eq!(session.board().occupied_count(), SLOT_COUNT);
        assert!(session.board().empty_slots().is_empty());
        assert_eq!(session.time_left(), INITIAL_TIME_SECS as i32);

        let events = session.drain_events();
        assert_eq!(
            count(&events, |e| matches!(e, GameEvent::PairAdded { .. })),
            TILES_ON_BOARD
        );
        assert_eq!(
            count(&events, |e| matches!(e, GameEvent::ScoreChanged { score: 0 })),
            1
        );
    }

    #[test]
    fn test_select_before_start_is_ignored() {
        let mut session = GameSession::new(1);
        session.select_tile(0, Role::Calc);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_match_round_trip() {
        let mut session = started(12345);
        let id = match_one(&mut session);

        let events = session.drain_events();
        assert_eq!(
            count(&events, |e| matches!(e, GameEvent::MatchSucceeded { pair_id } if *pair_id == id)),
            1
        );
        assert_eq!(count(&events, |e| matches!(e, GameEvent::MatchFailed { .. })), 0);
        assert_eq!(session.score(), 2);
        assert_eq!(
            session.pairs().find(id).map(|p| p.status),
            Some(PairStatus::Matched)
        );
    }

    #[test]
    fn test_mismatch_round_trip() {
        let mut session = started(12345);
        let pairs: Vec<PairId> = session.pairs().pairs().iter().map(|p| p.id).collect();
        let (a, b) = (pairs[0], pairs[1]);

        session.select_tile(a, Role::Calc);
        session.select_tile(b, Role::Answer);

        let events = session.drain_events();
        assert_eq!(
            count(&events, |e| matches!(
                e,
                GameEvent::MatchFailed { first, second }
                    if first.pair_id == a && second.pair_id == b
            )),
            1
        );
        assert_eq!(count(&events, |e| matches!(e, GameEvent::MatchSucceeded { .. })), 0);
        assert_eq!(session.score(), 0);
        assert!(session.pairs().find_active(a).is_some());
        assert!(session.pairs().find_active(b).is_some());
    }

    #[test]
    fn test_same_tile_twice_deselects_without_score() {
        let mut session = started(12345);
        let id = first_active(&session);

        session.select_tile(id, Role::Calc);
        session.select_tile(id, Role::Calc);

        let events = session.drain_events();
        assert_eq!(count(&events, |e| matches!(e, GameEvent::TileSelected { .. })), 1);
        assert_eq!(count(&events, |e| matches!(e, GameEvent::SelectionCleared)), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_selection_prompt_names_the_tile() {
        let mut session = started(12345);
        let id = first_active(&session);
        let label = session.pairs().find(id).unwrap().label.clone();

        session.select_tile(id, Role::Calc);
        let events = session.drain_events();
        match &events[0] {
            GameEvent::TileSelected { prompt, label: l, .. } => {
                assert_eq!(l, &label);
                assert!(prompt.contains(&label));
            }
            other => panic!("expected TileSelected, got {other:?}"),
        }
    }

    #[test]
    fn test_matched_pair_replaced_after_delay() {
        let mut session = started(12345);
        let id = match_one(&mut session);
        session.drain_events();

        // One millisecond short of the delay: still on the board.
        session.tick(MATCH_CLEAR_DELAY_MS - 1).unwrap();
        assert!(session.pairs().find(id).is_some());
        assert!(session.drain_events().is_empty());

        session.tick(1).unwrap();
        let events = session.drain_events();
        assert_eq!(
            count(&events, |e| matches!(e, GameEvent::PairRemoved { pair_id } if *pair_id == id)),
            1
        );
        assert_eq!(count(&events, |e| matches!(e, GameEvent::PairAdded { .. })), 1);
        assert!(session.pairs().find(id).is_none());
        assert_eq!(session.pairs().active_count(), TILES_ON_BOARD);
        assert_eq!(session.board().occupied_count(), SLOT_COUNT);
    }

    #[test]
    fn test_replacement_fires_on_oversized_tick() {
        let mut session = started(7);
        let id = match_one(&mut session);
        session.drain_events();

        session.tick(5000).unwrap();
        let events = session.drain_events();
        assert_eq!(
            count(&events, |e| matches!(e, GameEvent::PairRemoved { pair_id } if *pair_id == id)),
            1
        );
        assert_eq!(session.pairs().active_count(), TILES_ON_BOARD);
    }

    #[test]
    fn test_restart_cancels_pending_replacement() {
        let mut session = started(12345);
        let id = match_one(&mut session);

        session.start().unwrap();
        session.drain_events();
        session.tick(MATCH_CLEAR_DELAY_MS).unwrap();

        let events = session.drain_events();
        assert_eq!(count(&events, |e| matches!(e, GameEvent::PairRemoved { .. })), 0);
        assert!(session.pairs().find(id).is_none());
        assert_eq!(session.pairs().active_count(), TILES_ON_BOARD);
        assert_eq!(session.board().occupied_count(), SLOT_COUNT);
    }

    #[test]
    fn test_score_stays_even_through_mixed_play() {
        let mut session = started(42);
        for _ in 0..6 {
            let pairs: Vec<PairId> = session
                .pairs()
                .pairs()
                .iter()
                .filter(|p| p.status == PairStatus::Active)
                .map(|p| p.id)
                .collect();
            // One mismatch, then one match.
            session.select_tile(pairs[0], Role::Calc);
            session.select_tile(pairs[1], Role::Answer);
            session.select_tile(pairs[0], Role::Calc);
            session.select_tile(pairs[0], Role::Answer);
            session.tick(MATCH_CLEAR_DELAY_MS).unwrap();
            assert_eq!(session.score() % 2, 0);
        }
        assert_eq!(session.score(), 12);
    }

    #[test]
    fn test_bonus_fires_once_per_threshold() {
        let mut session = started(12345);
        let before = session.time_left();

        for _ in 0..4 {
            match_one(&mut session);
            session.tick(MATCH_CLEAR_DELAY_MS).unwrap();
        }
        let events = session.drain_events();
        assert_eq!(count(&events, |e| matches!(e, GameEvent::BonusGranted { .. })), 0);

        match_one(&mut session); // fifth match
        let events = session.drain_events();
        assert_eq!(
            count(&events, |e| matches!(e, GameEvent::BonusGranted { seconds } if *seconds == BONUS_SECONDS)),
            1
        );
        // 2 whole seconds of clear delay elapsed (4 x 600ms), +20 bonus.
        assert_eq!(session.time_left(), before - 2 + BONUS_SECONDS as i32);

        session.tick(MATCH_CLEAR_DELAY_MS).unwrap();
        match_one(&mut session); // sixth match, same threshold
        let events = session.drain_events();
        assert_eq!(count(&events, |e| matches!(e, GameEvent::BonusGranted { .. })), 0);
    }

    #[test]
    fn test_win_on_sixtieth_match() {
        let mut session = started(999);
        let mut bonuses = 0;
        let mut matches = 0;

        while session.is_running() {
            match_one(&mut session);
            matches += 1;
            for event in session.drain_events() {
                if matches!(event, GameEvent::BonusGranted { .. }) {
                    bonuses += 1;
                }
                if let GameEvent::GameEnded { result, final_score } = event {
                    assert_eq!(result, GameResult::Won);
                    assert_eq!(final_score, TOTAL_TO_WIN);
                }
            }
            if session.is_running() {
                assert!(session.score() < TOTAL_TO_WIN);
                session.tick(MATCH_CLEAR_DELAY_MS).unwrap();
            }
        }

        assert_eq!(session.phase(), Phase::Won);
        assert_eq!(matches, 60);
        assert_eq!(session.score(), TOTAL_TO_WIN);
        assert_eq!(bonuses, 12);
    }

    #[test]
    fn test_bonus_precedes_game_end_on_winning_match() {
        let config = GameConfig {
            total_to_win: 20, // ten matches; the second bonus lands there too
            ..GameConfig::default()
        };
        let mut session = GameSession::with_config(31, config);
        session.start().unwrap();
        session.drain_events();

        for _ in 0..9 {
            match_one(&mut session);
            session.tick(MATCH_CLEAR_DELAY_MS).unwrap();
        }
        session.drain_events();
        match_one(&mut session);

        let tail: Vec<GameEvent> = session.drain_events();
        let bonus_idx = tail
            .iter()
            .position(|e| matches!(e, GameEvent::BonusGranted { .. }))
            .expect("bonus on tenth match");
        let end_idx = tail
            .iter()
            .position(|e| matches!(e, GameEvent::GameEnded { .. }))
            .expect("win on tenth match");
        assert!(bonus_idx < end_idx);
    }

    #[test]
    fn test_lose_after_sixty_seconds() {
        let mut session = started(12345);
        let mut ticks = 0;

        for _ in 0..INITIAL_TIME_SECS {
            session.tick(1000).unwrap();
            ticks += count(&session.drain_events(), |e| {
                matches!(e, GameEvent::TimerTick { .. })
            });
        }

        assert_eq!(ticks, INITIAL_TIME_SECS as usize);
        assert_eq!(session.phase(), Phase::Lost);
        assert_eq!(session.time_left(), 0);
    }

    #[test]
    fn test_game_ended_event_on_loss() {
        let mut session = started(3);
        session.tick(1000 * INITIAL_TIME_SECS).unwrap();

        let events = session.drain_events();
        assert_eq!(
            count(&events, |e| matches!(
                e,
                GameEvent::GameEnded { result: GameResult::Lost, final_score: 0 }
            )),
            1
        );
        // Ticks stop once the session is over even on an oversized tick.
        assert_eq!(
            count(&events, |e| matches!(e, GameEvent::TimerTick { .. })),
            INITIAL_TIME_SECS as usize
        );
    }

    #[test]
    fn test_urgency_in_tick_events() {
        let mut session = started(8);
        session.tick(40_000).unwrap(); // down to 20s
        let events = session.drain_events();
        match events.last() {
            Some(GameEvent::TimerTick { time_left: 20, urgency }) => {
                assert_eq!(*urgency, Urgency::Warning)
            }
            other => panic!("unexpected tail event {other:?}"),
        }

        session.tick(10_000).unwrap(); // down to 10s
        let events = session.drain_events();
        match events.last() {
            Some(GameEvent::TimerTick { time_left: 10, urgency }) => {
                assert_eq!(*urgency, Urgency::Low)
            }
            other => panic!("unexpected tail event {other:?}"),
        }
    }

    #[test]
    fn test_terminal_phase_clears_selection_and_ignores_input() {
        let mut session = started(12345);
        let id = first_active(&session);
        session.select_tile(id, Role::Calc);
        assert!(session.selection().is_some());

        session.tick(1000 * INITIAL_TIME_SECS).unwrap();
        assert_eq!(session.phase(), Phase::Lost);
        assert_eq!(session.selection(), None);

        session.drain_events();
        session.select_tile(id, Role::Answer);
        assert!(session.drain_events().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_restart_from_terminal_state() {
        let mut session = started(12345);
        session.tick(1000 * INITIAL_TIME_SECS).unwrap();
        assert_eq!(session.phase(), Phase::Lost);

        session.start().unwrap();
        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.time_left(), INITIAL_TIME_SECS as i32);
        assert_eq!(session.pairs().active_count(), TILES_ON_BOARD);

        // The fresh session is fully playable.
        match_one(&mut session);
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn test_restart_mid_run_resets_everything() {
        let mut session = started(12345);
        match_one(&mut session);
        session.tick(MATCH_CLEAR_DELAY_MS).unwrap();
        match_one(&mut session);
        assert_eq!(session.score(), 4);

        session.start().unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.selection(), None);
        assert_eq!(session.board().occupied_count(), SLOT_COUNT);
        assert_eq!(session.pairs().active_count(), TILES_ON_BOARD);
    }

    #[test]
    fn test_win_and_loss_cannot_both_fire() {
        // Reach the winning match with one second left: the win is checked
        // synchronously on the score update, so the session ends Won and
        // the exhausted countdown never reports Lost.
        let config = GameConfig {
            total_to_win: 2,
            ..GameConfig::default()
        };
        let mut session = GameSession::with_config(5, config);
        session.start().unwrap();
        session.tick(1000 * (INITIAL_TIME_SECS - 1)).unwrap();
        assert_eq!(session.time_left(), 1);
        session.drain_events();

        match_one(&mut session);
        assert_eq!(session.phase(), Phase::Won);

        session.tick(10_000).unwrap();
        let events = session.drain_events();
        assert_eq!(
            count(&events, |e| matches!(e, GameEvent::GameEnded { .. })),
            1
        );
        assert_eq!(session.phase(), Phase::Won);
    }
}
