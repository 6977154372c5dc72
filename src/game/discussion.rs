use alloc::vec::Vec;

use tracing::{debug, info};

use crate::error::TimerError;
use crate::observer::RoundEvent;
use crate::result::RoundResult;
use crate::timer::{DiscussionTimer, TimerState, TimerStatus};

use super::{GameSession, GameState};

impl GameSession {
    /// Advances the discussion timer by one second.
    ///
    /// Meant to be called once per [`TICK_INTERVAL`](crate::TICK_INTERVAL).
    /// When the timer expires the results are disclosed. Calls after the
    /// discussion has ended are no-ops.
    ///
    /// # Errors
    ///
    /// Returns an error if the discussion has not started.
    pub fn tick(&self) -> Result<TimerState, TimerError> {
        self.drive_timer(DiscussionTimer::tick)
    }

    /// Ends the discussion early and discloses the results.
    ///
    /// Calls after the discussion has ended are no-ops.
    ///
    /// # Errors
    ///
    /// Returns an error if the discussion has not started.
    pub fn stop_early(&self) -> Result<TimerState, TimerError> {
        self.drive_timer(DiscussionTimer::stop_early)
    }

    fn drive_timer(
        &self,
        step: fn(&mut DiscussionTimer, &mut Vec<RoundEvent>) -> bool,
    ) -> Result<TimerState, TimerError> {
        let mut events: Vec<RoundEvent> = Vec::new();
        let snapshot = {
            let mut state = self.state.lock();
            if !matches!(*state, GameState::Discussion | GameState::GameOver) {
                return Err(TimerError::InvalidState);
            }

            let mut timer = self.timer.lock();
            let timer = timer.as_mut().ok_or(TimerError::InvalidState)?;
            step(timer, &mut events);
            let snapshot = timer.state();

            if *state == GameState::Discussion && timer.status().is_terminal() {
                self.conclude(&mut state, timer.status());
            }

            snapshot
        };

        self.notify(&events);
        Ok(snapshot)
    }

    /// Builds the result snapshot and moves to game over.
    fn conclude(&self, state: &mut GameState, status: TimerStatus) {
        let round = self.round.lock();
        if let Some(round) = round.as_ref() {
            *self.result.lock() = Some(RoundResult::new(&round.roles, round.word.clone()));
        }
        drop(round);

        *state = GameState::GameOver;
        match status {
            TimerStatus::Stopped => info!("discussion ended early, results disclosed"),
            _ => info!("discussion time up, results disclosed"),
        }
        debug!(?status, "timer finished");
    }
}
