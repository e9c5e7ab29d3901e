//! Countdown timer - wall-clock milliseconds in, whole seconds out
//!
//! A millisecond accumulator fed from the session tick stands in for an
//! interval timer, so arbitrary tick lengths are handled and the
//! countdown is fully deterministic under test.

use crate::types::Urgency;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining_secs: i32,
    accum_ms: u32,
    running: bool,
}

impl Countdown {
    /// A stopped countdown holding `initial_secs`.
    pub fn new(initial_secs: u32) -> Self {
        Self {
            remaining_secs: initial_secs as i32,
            accum_ms: 0,
            running: false,
        }
    }

    /// Reset to `initial_secs` and begin counting.
    pub fn restart(&mut self, initial_secs: u32) {
        self.remaining_secs = initial_secs as i32;
        self.accum_ms = 0;
        self.running = true;
    }

    /// Stop counting. Safe to call any number of times.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> i32 {
        self.remaining_secs
    }

    /// Inject bonus time. Uncapped.
    pub fn add_seconds(&mut self, secs: u32) {
        self.remaining_secs += secs as i32;
    }

    /// Feed elapsed wall-clock time; returns how many whole seconds have
    /// accumulated. The caller steps the countdown once per returned
    /// second so it can observe every intermediate value.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        self.accum_ms += elapsed_ms;
        let seconds = self.accum_ms / 1000;
        self.accum_ms %= 1000;
        seconds
    }

    /// Count one second down; returns the new remaining time.
    pub fn step(&mut self) -> i32 {
        self.remaining_secs -= 1;
        self.remaining_secs
    }

    pub fn urgency(&self) -> Urgency {
        match self.remaining_secs {
            s if s <= 10 => Urgency::Low,
            s if s <= 20 => Urgency::Warning,
            _ => Urgency::Normal,
        }
    }
}
