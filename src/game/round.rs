use alloc::vec::Vec;

use tracing::{debug, info, trace};

use crate::error::{RoundError, TurnError};
use crate::observer::RoundEvent;
use crate::roles::allocate;
use crate::timer::DiscussionTimer;

use super::{GameSession, GameState, Round, RoleCard, TurnPhase, TurnSequencer, TurnState};

impl GameSession {
    /// Starts a round: assigns roles, draws the secret word, and hands the
    /// device to the first player.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, or if roles or the
    /// word cannot be drawn. The session stays in setup on failure.
    pub fn start_round(&self) -> Result<(), RoundError> {
        let mut state = self.state.lock();
        if *state != GameState::Setup {
            return Err(RoundError::InvalidState);
        }

        let config = self.config.lock().clone();
        // Draw from a copy so a failed start leaves the seeded sequence intact.
        let mut rng = self.rng.lock();
        let mut draw = rng.clone();
        let roles = allocate(
            config.player_count,
            config.impostor_count,
            config.spy_count,
            &mut draw,
        )?;
        let word = self.words.select(&config.category, &mut draw)?;
        *rng = draw;
        drop(rng);

        *self.round.lock() = Some(Round {
            roles,
            word,
            turns: TurnSequencer::new(config.player_count),
        });
        *self.timer.lock() = None;
        *self.result.lock() = None;
        *state = GameState::Reveals;

        // Secrets stay out of the logs.
        info!(
            players = config.player_count,
            impostors = config.impostor_count,
            spies = config.spy_count,
            category = %config.category,
            "round started"
        );

        Ok(())
    }

    /// Shows the player holding the device their role card.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::InvalidState`] outside the reveal phase and
    /// [`TurnError::InvalidTransition`] if the role is already on screen.
    pub fn reveal(&self) -> Result<RoleCard, TurnError> {
        let mut events: Vec<RoundEvent> = Vec::new();
        let card = {
            let state = self.state.lock();
            if *state != GameState::Reveals {
                return Err(TurnError::InvalidState);
            }

            let mut round = self.round.lock();
            let round = round.as_mut().ok_or(TurnError::InvalidState)?;
            let card = round.turns.reveal(&round.roles, &round.word, &mut events)?;
            trace!(player = round.turns.state().current_player, "role revealed");
            card
        };

        self.notify(&events);
        Ok(card)
    }

    /// Hides the role and passes the device to the next player.
    ///
    /// After the last player the discussion timer starts.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::InvalidState`] outside the reveal phase and
    /// [`TurnError::InvalidTransition`] if no role is on screen.
    pub fn advance(&self) -> Result<TurnState, TurnError> {
        let mut events: Vec<RoundEvent> = Vec::new();
        let turn = {
            let mut state = self.state.lock();
            if *state != GameState::Reveals {
                return Err(TurnError::InvalidState);
            }

            let mut round = self.round.lock();
            let round = round.as_mut().ok_or(TurnError::InvalidState)?;
            let turn = round.turns.advance(&mut events)?;
            trace!(player = turn.current_player, "device passed");

            if turn.phase == TurnPhase::Exhausted {
                let seconds = self.config.lock().timer_seconds;
                let mut timer = DiscussionTimer::new(seconds);
                timer.start(&mut events);
                *self.timer.lock() = Some(timer);
                *state = GameState::Discussion;
                debug!(seconds, "all roles revealed, discussion started");
            }

            turn
        };

        self.notify(&events);
        Ok(turn)
    }
}
