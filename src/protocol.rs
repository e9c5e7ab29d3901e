//! Protocol module - JSON wire representation of the session event stream
//!
//! One line-delimited JSON object per event, tagged with `type`, for
//! presentation layers that live outside this process. The internal
//! `GameEvent` enum stays serde-free; conversions happen here.

use serde::{Deserialize, Serialize};

use crate::core::GameEvent;
use crate::types::{GameResult, Role, Urgency};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleWire {
    Calc,
    Answer,
}

impl From<Role> for RoleWire {
    fn from(role: Role) -> Self {
        match role {
            Role::Calc => RoleWire::Calc,
            Role::Answer => RoleWire::Answer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyWire {
    Normal,
    Warning,
    Low,
}

impl From<Urgency> for UrgencyWire {
    fn from(urgency: Urgency) -> Self {
        match urgency {
            Urgency::Normal => UrgencyWire::Normal,
            Urgency::Warning => UrgencyWire::Warning,
            Urgency::Low => UrgencyWire::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultWire {
    Won,
    Lost,
}

impl From<GameResult> for ResultWire {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::Won => ResultWire::Won,
            GameResult::Lost => ResultWire::Lost,
        }
    }
}

/// Wire form of one session event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventMessage {
    TileSelected {
        pair_id: u32,
        role: RoleWire,
        label: String,
        prompt: String,
    },
    SelectionCleared,
    MatchSucceeded {
        pair_id: u32,
    },
    MatchFailed {
        pair_id1: u32,
        pair_id2: u32,
    },
    PairAdded {
        pair_id: u32,
        label: String,
        answer: u32,
        calc_slot: usize,
        answer_slot: usize,
    },
    PairRemoved {
        pair_id: u32,
    },
    ScoreChanged {
        score: u32,
    },
    BonusGranted {
        seconds: u32,
    },
    TimerTick {
        time_left: i32,
        urgency: UrgencyWire,
    },
    GameEnded {
        result: ResultWire,
        final_score: u32,
    },
}

impl From<&GameEvent> for EventMessage {
    fn from(event: &GameEvent) -> Self {
        match event {
            GameEvent::TileSelected {
                pair_id,
                role,
                label,
                prompt,
            } => EventMessage::TileSelected {
                pair_id: *pair_id,
                role: (*role).into(),
                label: label.clone(),
                prompt: prompt.clone(),
            },
            GameEvent::SelectionCleared => EventMessage::SelectionCleared,
            GameEvent::MatchSucceeded { pair_id } => EventMessage::MatchSucceeded {
                pair_id: *pair_id,
            },
            GameEvent::MatchFailed { first, second } => EventMessage::MatchFailed {
                pair_id1: first.pair_id,
                pair_id2: second.pair_id,
            },
            GameEvent::PairAdded {
                pair_id,
                label,
                answer,
                calc_slot,
                answer_slot,
            } => EventMessage::PairAdded {
                pair_id: *pair_id,
                label: label.clone(),
                answer: *answer,
                calc_slot: *calc_slot,
                answer_slot: *answer_slot,
            },
            GameEvent::PairRemoved { pair_id } => EventMessage::PairRemoved {
                pair_id: *pair_id,
            },
            GameEvent::ScoreChanged { score } => EventMessage::ScoreChanged { score: *score },
            GameEvent::BonusGranted { seconds } => EventMessage::BonusGranted {
                seconds: *seconds,
            },
            GameEvent::TimerTick { time_left, urgency } => EventMessage::TimerTick {
                time_left: *time_left,
                urgency: (*urgency).into(),
            },
            GameEvent::GameEnded {
                result,
                final_score,
            } => EventMessage::GameEnded {
                result: (*result).into(),
                final_score: *final_score,
            },
        }
    }
}

/// Serialize one event as a single JSON line (without trailing newline).
pub fn event_to_json_line(event: &GameEvent) -> serde_json::Result<String> {
    serde_json::to_string(&EventMessage::from(event))
}
