//! Per-session view limit.
//!
//! ```text
//! OPEN(0) --view--> OPEN(1) --view--> ... OPEN(max-1) --view--> LOCKED
//!   any   --reset--> OPEN(0)
//! ```
//! A view requested while locked (or at capacity) is refused and leaves the
//! gate locked. Every transition and its notice are computed in one call.

use crate::errors::{AppError, AppResult};
use crate::models::notice::Notice;
use serde::Serialize;

pub const MAX_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GateState {
    Open(u32),
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttemptGate {
    successful_views: u32,
    locked: bool,
    max_attempts: u32,
}

impl Default for AttemptGate {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptGate {
    pub fn new() -> Self {
        Self::with_limit(MAX_ATTEMPTS)
    }

    /// A fresh gate allowing `max_attempts` views (at least one).
    pub fn with_limit(max_attempts: u32) -> Self {
        Self {
            successful_views: 0,
            locked: false,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Rebuild a gate from stored values. Counts past the limit are clamped
    /// and lock the gate.
    pub fn restore(successful_views: u32, locked: bool, max_attempts: u32) -> Self {
        let max_attempts = max_attempts.max(1);
        let successful_views = successful_views.min(max_attempts);
        Self {
            successful_views,
            locked: locked || successful_views >= max_attempts,
            max_attempts,
        }
    }

    pub fn successful_views(&self) -> u32 {
        self.successful_views
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Views still allowed before the limit.
    pub fn remaining(&self) -> u32 {
        self.max_attempts.saturating_sub(self.successful_views)
    }

    pub fn state(&self) -> GateState {
        if self.locked {
            GateState::Locked
        } else {
            GateState::Open(self.successful_views)
        }
    }

    pub fn can_view(&self) -> bool {
        !self.locked && self.successful_views < self.max_attempts
    }

    /// Refuse a view: the gate becomes (or stays) locked.
    pub fn block(&mut self) -> AppError {
        self.locked = true;
        AppError::AttemptsExhausted(self.max_attempts)
    }

    /// Count one delivered view and return the threshold notice, if any.
    pub fn record_view(&mut self) -> AppResult<Option<Notice>> {
        if !self.can_view() {
            return Err(self.block());
        }
        self.successful_views += 1;

        let notice = match self.remaining() {
            2 => Some(Notice::warning(
                "Attention: only 2 more timetable views remain in this session. Please choose your name carefully.",
            )),
            1 => Some(Notice::error(
                "Last chance: only 1 final timetable view remains. Make sure you pick the right name; this is your last attempt.",
            )),
            0 => {
                self.locked = true;
                Some(Notice::info(format!(
                    "You have just used your final view ({} of {}). No further views are allowed in this session.",
                    self.successful_views, self.max_attempts
                )))
            }
            _ => None,
        };
        Ok(notice)
    }

    pub fn reset(&mut self) {
        self.successful_views = 0;
        self.locked = false;
    }

    /// Advisory shown before a request while few views are left.
    pub fn advisory(&self) -> Option<Notice> {
        let left = self.remaining();
        if self.locked || left == 0 || left > 2 {
            return None;
        }
        Some(Notice::warning(format!(
            "Please note: you have {left} successful timetable view(s) left in this session. Please look up only your own timetable."
        )))
    }

    /// Message shown instead of a view once the gate is locked.
    pub fn block_notice(&self) -> Notice {
        Notice::error(AppError::AttemptsExhausted(self.max_attempts).to_string())
    }

    pub fn status_line(&self) -> String {
        format!(
            "Attempts used this session: {} / {}",
            self.successful_views, self.max_attempts
        )
    }
}
