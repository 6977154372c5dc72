//! Session engine and round lifecycle.

use alloc::boxed::Box;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::sync::Mutex;

use crate::error::ConfigError;
use crate::observer::{RoundEvent, RoundObserver};
use crate::options::{ConfigUpdate, RoundConfig};
use crate::result::RoundResult;
use crate::roles::RoleAssignment;
use crate::timer::{DiscussionTimer, TimerState};
use crate::words::{SecretWord, WordBank};

mod discussion;
mod round;
pub mod state;
pub mod turn;

pub use state::{GameState, TurnPhase, TurnState, View};
pub use turn::{RoleCard, TurnSequencer};

/// Per-round secrets and the reveal sequence, discarded on reset.
#[derive(Debug)]
struct Round {
    roles: RoleAssignment,
    word: SecretWord,
    turns: TurnSequencer,
}

/// A pass-and-play session: configure, reveal roles, discuss, disclose.
///
/// The session owns the configuration, the word bank, and all per-round
/// state. Methods take `&self`; each piece of state sits behind its own lock
/// so a host may drive the timer from another thread, but calls on one
/// session should still be serialized.
///
/// # Example
///
/// ```
/// use impostor::{GameSession, GameState, RoundConfig, WordBank};
///
/// let config = RoundConfig::default().with_players(3).with_timer_seconds(2);
/// let session = GameSession::new(config, WordBank::builtin(), 42);
///
/// session.start_round().unwrap();
/// for _ in 0..3 {
///     session.reveal().unwrap();
///     session.advance().unwrap();
/// }
/// assert_eq!(session.state(), GameState::Discussion);
///
/// session.tick().unwrap();
/// session.tick().unwrap();
/// assert_eq!(session.state(), GameState::GameOver);
/// assert_eq!(session.result().unwrap().impostors.len(), 1);
/// ```
pub struct GameSession {
    /// Word lists the secret word is drawn from.
    words: WordBank,
    /// Configuration for the next round.
    config: Mutex<RoundConfig>,
    /// Current session state.
    state: Mutex<GameState>,
    /// Secrets and turn position of the current round.
    round: Mutex<Option<Round>>,
    /// Discussion countdown, once every player has seen their role.
    timer: Mutex<Option<DiscussionTimer>>,
    /// Disclosed results, once the discussion is over.
    result: Mutex<Option<RoundResult>>,
    /// Feedback hooks.
    observer: Mutex<Box<dyn RoundObserver + Send>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl GameSession {
    /// Creates a session in the setup state with the given seed.
    ///
    /// The configuration is repaired before use.
    #[must_use]
    pub fn new(config: RoundConfig, words: WordBank, seed: u64) -> Self {
        Self {
            words,
            config: Mutex::new(config.repaired()),
            state: Mutex::new(GameState::Setup),
            round: Mutex::new(None),
            timer: Mutex::new(None),
            result: Mutex::new(None),
            observer: Mutex::new(Box::new(())),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Installs the feedback hooks.
    #[must_use]
    pub fn with_observer<O: RoundObserver + Send + 'static>(mut self, observer: O) -> Self {
        *self.observer.get_mut() = Box::new(observer);
        self
    }

    /// Replaces the feedback hooks.
    pub fn set_observer<O: RoundObserver + Send + 'static>(&self, observer: O) {
        *self.observer.lock() = Box::new(observer);
    }

    /// Returns the word bank.
    pub const fn words(&self) -> &WordBank {
        &self.words
    }

    /// Returns the configuration for the current or next round.
    pub fn config(&self) -> RoundConfig {
        self.config.lock().clone()
    }

    /// Returns the current session state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Applies a partial configuration change and repairs the role counts.
    ///
    /// Returns the configuration now in effect.
    ///
    /// # Errors
    ///
    /// Returns an error unless the session is in the setup state, or if the
    /// update names a category missing from the word bank. The configuration
    /// is left untouched on failure.
    pub fn configure(&self, update: ConfigUpdate) -> Result<RoundConfig, ConfigError> {
        let state = self.state.lock();
        if *state != GameState::Setup {
            return Err(ConfigError::InvalidState);
        }

        let mut config = self.config.lock();
        let updated = update.apply(config.clone());
        if !self.words.contains(&updated.category) {
            return Err(ConfigError::UnknownCategory);
        }
        *config = updated;
        debug!(
            players = config.player_count,
            impostors = config.impostor_count,
            spies = config.spy_count,
            category = %config.category,
            timer_seconds = config.timer_seconds,
            "configuration updated"
        );
        Ok(config.clone())
    }

    /// Returns the current turn position.
    ///
    /// Returns `None` if no round has started.
    pub fn turn_state(&self) -> Option<TurnState> {
        self.round.lock().as_ref().map(|round| round.turns.state())
    }

    /// Returns the discussion countdown.
    ///
    /// Returns `None` before the discussion starts.
    pub fn timer_state(&self) -> Option<TimerState> {
        self.timer.lock().as_ref().map(DiscussionTimer::state)
    }

    /// Returns the round results.
    ///
    /// Returns `None` until the discussion has ended.
    pub fn result(&self) -> Option<RoundResult> {
        self.result.lock().clone()
    }

    /// Returns the view the host should be showing.
    pub fn current_view(&self) -> View {
        let state = self.state.lock();
        match *state {
            GameState::Setup => View::Setup,
            GameState::Reveals => match self.turn_state() {
                Some(TurnState {
                    current_player,
                    phase: TurnPhase::AwaitingReveal,
                }) => View::Reveal {
                    player: current_player,
                },
                Some(TurnState { current_player, .. }) => View::Pass {
                    player: current_player,
                },
                None => View::Setup,
            },
            GameState::Discussion => self
                .timer_state()
                .map_or(View::GameOver, |timer| View::Discussion { timer }),
            GameState::GameOver => View::GameOver,
        }
    }

    /// Discards the round, if any, and returns to setup.
    ///
    /// A running timer is dropped without firing further events.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        *self.round.lock() = None;
        *self.timer.lock() = None;
        *self.result.lock() = None;
        if *state != GameState::Setup {
            info!(from = ?*state, "session reset");
        }
        *state = GameState::Setup;
    }

    /// Delivers recorded events once state locks have been released.
    fn notify(&self, events: &[RoundEvent]) {
        if events.is_empty() {
            return;
        }

        let mut observer = self.observer.lock();
        for &event in events {
            event.dispatch(&mut **observer);
        }
    }
}
