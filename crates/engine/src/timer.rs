//! Round timer - the cancellable scheduled tick for timed mode.
//!
//! The original interval callback becomes an explicit countdown object owned
//! by the session controller. Only an armed timer can fire; disarming is
//! synchronous, so a cancelled timer can never tick into a superseded
//! session.

use tui_sumstack_types::TIMED_ROUND_SECS;

/// A one-second-resolution round countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTimer {
    duration_s: u32,
    remaining_s: u32,
    armed: bool,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self::with_duration(TIMED_ROUND_SECS)
    }

    pub fn with_duration(duration_s: u32) -> Self {
        debug_assert!(duration_s > 0);
        Self {
            duration_s,
            remaining_s: duration_s,
            armed: false,
        }
    }

    /// Arm the timer and start a full round.
    pub fn arm(&mut self) {
        self.armed = true;
        self.remaining_s = self.duration_s;
    }

    /// Disarm the timer. Takes effect immediately: a cancelled timer never
    /// fires again until re-armed.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Restart the countdown at the full round duration.
    pub fn reset(&mut self) {
        self.remaining_s = self.duration_s;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Seconds left in the current round.
    pub fn remaining_s(&self) -> u32 {
        self.remaining_s
    }

    /// Advance one second. Returns `true` exactly when the round expires;
    /// the countdown then restarts at the full duration.
    pub fn tick_second(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        if self.remaining_s > 1 {
            self.remaining_s -= 1;
            false
        } else {
            self.remaining_s = self.duration_s;
            true
        }
    }
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new()
    }
}
