//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Number of pairs visible on the board at once.
pub const TILES_ON_BOARD: usize = 8;
/// Fixed number of display slots (two tiles per pair).
pub const SLOT_COUNT: usize = TILES_ON_BOARD * 2;

/// Score required to win (each match is worth 2 points).
pub const TOTAL_TO_WIN: u32 = 120;
/// A time bonus is granted every this many completed matches.
pub const BONUS_EVERY: u32 = 5;
/// Seconds added per bonus.
pub const BONUS_SECONDS: u32 = 20;
/// Countdown length at session start, in seconds.
pub const INITIAL_TIME_SECS: u32 = 60;

/// Fixed-timestep tick length for the interactive loop (milliseconds).
pub const TICK_MS: u32 = 16;
/// Delay before a matched pair is cleared and replaced (milliseconds).
pub const MATCH_CLEAR_DELAY_MS: u32 = 600;
/// How long the wrong-match flash stays visible (milliseconds, view-side).
pub const MISMATCH_FLASH_MS: u32 = 700;
/// How long the bonus popup stays visible (milliseconds, view-side).
pub const BONUS_POPUP_MS: u32 = 1500;

/// Multiplication operands and division quotients are drawn from [1, OPERAND_MAX].
pub const OPERAND_MAX: u32 = 50;
/// Divisors are drawn from [1, DIVISOR_MAX].
pub const DIVISOR_MAX: u32 = 49;
/// Attempts per batch slot before a duplicate answer is accepted.
pub const DISTINCT_ATTEMPT_LIMIT: u32 = 20;

/// Feedback line shown after a wrong match.
pub const MISMATCH_MESSAGE: &str = "Wrong! Try again.";

/// Monotonic pair identifier, never reused.
pub type PairId = u32;
/// Index of a board slot in [0, SLOT_COUNT).
pub type SlotId = usize;

/// Which half of a pair a tile shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Calc,
    Answer,
}

impl Role {
    /// The role that completes a match with this one.
    pub fn other(self) -> Self {
        match self {
            Role::Calc => Role::Answer,
            Role::Answer => Role::Calc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Calc => "calc",
            Role::Answer => "answer",
        }
    }
}

/// Abstract reference to one half of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRef {
    pub pair_id: PairId,
    pub role: Role,
}

impl TileRef {
    pub fn new(pair_id: PairId, role: Role) -> Self {
        Self { pair_id, role }
    }
}

/// Lifecycle of a pair on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairStatus {
    Active,
    Matched,
}

/// Visual urgency tier derived from the time left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    Warning,
    Low,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Normal => "normal",
            Urgency::Warning => "warning",
            Urgency::Low => "low",
        }
    }
}

/// Terminal outcome of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
}

impl GameResult {
    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::Won => "won",
            GameResult::Lost => "lost",
        }
    }
}

/// Prompt shown when a tile is selected, telling the player what to pick next.
pub fn selection_prompt(role: Role, label: &str) -> String {
    match role {
        Role::Calc => format!("\"{label}\" selected - now pick its answer!"),
        Role::Answer => format!("\"{label}\" selected - now pick its expression!"),
    }
}
