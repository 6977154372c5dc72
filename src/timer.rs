//! Discussion countdown.
//!
//! The timer never reads a clock. The host calls [`DiscussionTimer::tick`]
//! once per [`TICK_INTERVAL`] from whatever scheduler it has; tests step it
//! by hand.

use core::fmt;
use core::time::Duration;

use crate::observer::RoundObserver;

/// How often the host should call [`DiscussionTimer::tick`].
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Remaining time at or below which low-time feedback fires.
pub const LOW_TIME_SECONDS: u32 = 10;

/// Lifecycle of a [`DiscussionTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    /// Created but not started.
    Idle,
    /// Counting down.
    Running,
    /// Reached zero.
    Expired,
    /// Ended early by the players.
    Stopped,
}

impl TimerStatus {
    /// Returns whether the timer has reached a terminal state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Expired | Self::Stopped)
    }
}

/// Snapshot of the countdown.
///
/// Displays as zero-padded `MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    /// Seconds left on the clock.
    pub remaining_seconds: u32,
    /// Whether the timer is counting down.
    pub running: bool,
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.remaining_seconds / 60;
        let seconds = self.remaining_seconds % 60;
        write!(f, "{minutes:02}:{seconds:02}")
    }
}

/// Countdown for the group discussion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscussionTimer {
    duration: u32,
    remaining: u32,
    status: TimerStatus,
}

impl DiscussionTimer {
    /// Creates an idle timer. A zero duration is raised to one second.
    #[must_use]
    pub fn new(duration_seconds: u32) -> Self {
        let duration = duration_seconds.max(1);
        Self {
            duration,
            remaining: duration,
            status: TimerStatus::Idle,
        }
    }

    /// Configured length in seconds.
    #[must_use]
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    /// Current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TimerStatus {
        self.status
    }

    /// Current countdown snapshot.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        TimerState {
            remaining_seconds: self.remaining,
            running: matches!(self.status, TimerStatus::Running),
        }
    }

    /// Starts counting down.
    ///
    /// Fires low-time feedback right away when the whole discussion fits in
    /// the low-time window. Returns `false` if the timer was not idle.
    pub fn start<O: RoundObserver + ?Sized>(&mut self, observer: &mut O) -> bool {
        if self.status != TimerStatus::Idle {
            return false;
        }

        self.status = TimerStatus::Running;
        if self.remaining <= LOW_TIME_SECONDS {
            observer.on_low_time(self.remaining);
        }
        true
    }

    /// Advances the countdown by one second.
    ///
    /// Fires a tick with the new remaining time, low-time feedback inside the
    /// last ten seconds, and expiry once when zero is reached. Returns `false`
    /// (and fires nothing) unless the timer is running.
    pub fn tick<O: RoundObserver + ?Sized>(&mut self, observer: &mut O) -> bool {
        if self.status != TimerStatus::Running {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(1);
        observer.on_tick(self.remaining);

        if self.remaining == 0 {
            self.status = TimerStatus::Expired;
            observer.on_expired();
        } else if self.remaining <= LOW_TIME_SECONDS {
            observer.on_low_time(self.remaining);
        }
        true
    }

    /// Ends the discussion before the clock runs out.
    ///
    /// Fires the stop event once. Returns `false` if the timer had already
    /// expired or stopped.
    pub fn stop_early<O: RoundObserver + ?Sized>(&mut self, observer: &mut O) -> bool {
        if self.status.is_terminal() {
            return false;
        }

        self.status = TimerStatus::Stopped;
        self.remaining = 0;
        observer.on_stopped();
        true
    }
}
