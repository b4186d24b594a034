// src/timer.rs

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimerState {
    /// Still waiting, with the time left.
    Pending(Duration),
    /// Crossed the deadline on this poll.
    Fired,
    /// Fired on an earlier poll.
    Done,
}

/// Fires once, `delay` after the first poll. Dropping it cancels it.
///
/// Time is whatever clock the caller passes in (egui's `input.time` in the app),
/// so tests can drive it with plain numbers.
#[derive(Clone, Debug)]
pub struct OneShotTimer {
    delay: Duration,
    armed_at: Option<f64>,
    fired: bool,
}

impl OneShotTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            armed_at: None,
            fired: false,
        }
    }

    pub fn poll(&mut self, now: f64) -> TimerState {
        if self.fired {
            return TimerState::Done;
        }
        let armed_at = *self.armed_at.get_or_insert(now);
        let elapsed = (now - armed_at).max(0.0);
        let delay = self.delay.as_secs_f64();
        if elapsed >= delay {
            self.fired = true;
            TimerState::Fired
        } else {
            TimerState::Pending(Duration::from_secs_f64(delay - elapsed))
        }
    }
}
