//! GameView: maps the session state onto styled text rows.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameEvent, GameSession, Phase};
use crate::types::{
    PairStatus, SlotId, Urgency, BONUS_POPUP_MS, MISMATCH_FLASH_MS, MISMATCH_MESSAGE, SLOT_COUNT,
    TOTAL_TO_WIN,
};

/// Grid geometry: 16 slots as four rows of four.
pub const GRID_COLS: usize = 4;
pub const GRID_ROWS: usize = SLOT_COUNT / GRID_COLS;

/// Widest tile text is a division label like "2450 ÷ 49".
const CELL_INNER_W: usize = 9;

/// Semantic color tone; the renderer maps tones to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Default,
    Dim,
    Title,
    Calc,
    Answer,
    Selected,
    Matched,
    Wrong,
    Good,
    Warn,
    Bad,
}

/// One run of text in a single tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

pub type Line = Vec<Span>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flash {
    slots: [Option<SlotId>; 2],
    ms: u32,
}

/// Transient front-end state: cursor position and timed visual feedback.
///
/// The wrong-match flash and the bonus popup are view-side countdowns fed
/// by session events, mirroring the self-clearing animations of a
/// graphical presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    cursor: SlotId,
    message: String,
    flash: Option<Flash>,
    bonus_ms: u32,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            message: String::new(),
            flash: None,
            bonus_ms: 0,
        }
    }

    /// Clear transient feedback, keeping the cursor where it is.
    pub fn reset(&mut self) {
        self.message.clear();
        self.flash = None;
        self.bonus_ms = 0;
    }

    pub fn cursor(&self) -> SlotId {
        self.cursor
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Move the cursor on the grid, wrapping at the edges.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let col = (self.cursor % GRID_COLS) as i32;
        let row = (self.cursor / GRID_COLS) as i32;
        let col = (col + dx).rem_euclid(GRID_COLS as i32) as usize;
        let row = (row + dy).rem_euclid(GRID_ROWS as i32) as usize;
        self.cursor = row * GRID_COLS + col;
    }

    /// Decay timed feedback by `elapsed_ms`.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if let Some(mut flash) = self.flash {
            flash.ms = flash.ms.saturating_sub(elapsed_ms);
            if flash.ms == 0 {
                self.flash = None;
                self.message.clear();
            } else {
                self.flash = Some(flash);
            }
        }
        self.bonus_ms = self.bonus_ms.saturating_sub(elapsed_ms);
    }

    /// Fold one session event into the transient state.
    pub fn apply_event(&mut self, event: &GameEvent, session: &GameSession) {
        match event {
            GameEvent::TileSelected { prompt, .. } => {
                self.message = prompt.clone();
            }
            GameEvent::SelectionCleared | GameEvent::MatchSucceeded { .. } => {
                self.message.clear();
            }
            GameEvent::MatchFailed { first, second } => {
                self.flash = Some(Flash {
                    slots: [session.tile_slot(*first), session.tile_slot(*second)],
                    ms: MISMATCH_FLASH_MS,
                });
                self.message = MISMATCH_MESSAGE.to_string();
            }
            GameEvent::BonusGranted { .. } => {
                self.bonus_ms = BONUS_POPUP_MS;
            }
            _ => {}
        }
    }

    pub fn is_flashed(&self, slot: SlotId) -> bool {
        self.flash
            .map(|f| f.slots.contains(&Some(slot)))
            .unwrap_or(false)
    }

    pub fn bonus_visible(&self) -> bool {
        self.bonus_ms > 0
    }
}

/// Pad and center `text` inside `width` columns.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Renders the session into styled lines; the renderer flushes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn render(&self, session: &GameSession, ui: &UiState) -> Vec<Line> {
        let mut lines = Vec::new();
        lines.push(vec![Span::new("  CALC MATCH", Tone::Title)]);
        lines.push(self.status_line(session, ui));
        lines.push(Vec::new());

        match session.phase() {
            Phase::NotStarted => self.push_menu(
                &mut lines,
                "Pair each expression with its answer before time runs out.",
                "Press Enter to start",
            ),
            Phase::Won => self.push_menu(
                &mut lines,
                &format!("You win! Final score {}", session.score()),
                "Press R to play again, Q to quit",
            ),
            Phase::Lost => self.push_menu(
                &mut lines,
                &format!("Time's up! Final score {}", session.score()),
                "Press R to play again, Q to quit",
            ),
            Phase::Running => {
                self.push_grid(&mut lines, session, ui);
                lines.push(Vec::new());
                lines.push(vec![Span::new(format!("  {}", ui.message()), Tone::Default)]);
                lines.push(vec![Span::new(
                    "  arrows/wasd move · enter select · r restart · q quit",
                    Tone::Dim,
                )]);
            }
        }
        lines
    }

    fn status_line(&self, session: &GameSession, ui: &UiState) -> Line {
        let time_tone = match session.urgency() {
            Urgency::Normal => Tone::Good,
            Urgency::Warning => Tone::Warn,
            Urgency::Low => Tone::Bad,
        };
        let mut line = vec![
            Span::new(
                format!("  Score {:>3}/{}", session.score(), TOTAL_TO_WIN),
                Tone::Default,
            ),
            Span::new(format!("   Time {:>3}s", session.time_left()), time_tone),
        ];
        if ui.bonus_visible() {
            line.push(Span::new("   +20s!", Tone::Good));
        }
        line
    }

    fn push_menu(&self, lines: &mut Vec<Line>, headline: &str, hint: &str) {
        lines.push(vec![Span::new(format!("  {headline}"), Tone::Default)]);
        lines.push(Vec::new());
        lines.push(vec![Span::new(format!("  {hint}"), Tone::Dim)]);
    }

    fn push_grid(&self, lines: &mut Vec<Line>, session: &GameSession, ui: &UiState) {
        for row in 0..GRID_ROWS {
            let mut line: Line = vec![Span::new("  ", Tone::Default)];
            for col in 0..GRID_COLS {
                let slot = row * GRID_COLS + col;
                line.push(self.cell_span(session, ui, slot));
            }
            lines.push(line);
            lines.push(Vec::new());
        }
    }

    fn cell_span(&self, session: &GameSession, ui: &UiState, slot: SlotId) -> Span {
        let (text, tone) = match session.board().get(slot) {
            Some(tile) => match session.pairs().find(tile.pair_id) {
                Some(pair) => {
                    let tone = if ui.is_flashed(slot) {
                        Tone::Wrong
                    } else if pair.status == PairStatus::Matched {
                        Tone::Matched
                    } else if session.selection() == Some(tile) {
                        Tone::Selected
                    } else {
                        match tile.role {
                            crate::types::Role::Calc => Tone::Calc,
                            crate::types::Role::Answer => Tone::Answer,
                        }
                    };
                    (pair.text_for(tile.role), tone)
                }
                None => (String::new(), Tone::Dim),
            },
            None => ("·".to_string(), Tone::Dim),
        };

        let content = center(&text, CELL_INNER_W);
        let framed = if slot == ui.cursor() {
            format!("[{content}]")
        } else {
            format!(" {content} ")
        };
        Span::new(framed, tone)
    }
}
