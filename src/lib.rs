//! A round engine for pass-and-play impostor word games, with optional
//! `no_std` support.
//!
//! One device goes around the table. Each player privately sees a role card:
//! regular players get the secret word, spies get only its category, and
//! impostors get nothing. Then a discussion timer runs, and finally every
//! secret is disclosed.
//!
//! The crate provides a [`GameSession`] type that manages that flow, built
//! from smaller pieces usable on their own: [`allocate`] for roles,
//! [`WordBank`] for the secret word, [`RoundConfig`] for count repair,
//! [`TurnSequencer`] for reveals, and [`DiscussionTimer`] for the countdown.
//! Feedback (sounds, vibration) hooks in through [`RoundObserver`].
//!
//! # Example
//!
//! ```no_run
//! use impostor::{GameSession, RoundConfig, WordBank};
//!
//! let session = GameSession::new(RoundConfig::default(), WordBank::builtin(), 42);
//! let _ = session;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod error;
pub mod game;
pub mod observer;
pub mod options;
pub mod result;
pub mod roles;
mod sync;
pub mod timer;
pub mod words;

// Re-export main types
pub use error::{AllocationError, ConfigError, RoundError, TimerError, TurnError, WordError};
pub use game::{GameSession, GameState, RoleCard, TurnPhase, TurnSequencer, TurnState, View};
pub use observer::{RoundEvent, RoundObserver};
pub use options::{ConfigUpdate, DEFAULT_PLAYERS, DEFAULT_TIMER_SECONDS, RoundConfig};
pub use result::{RoundResult, player_number};
pub use roles::{Role, RoleAssignment, allocate};
pub use timer::{DiscussionTimer, LOW_TIME_SECONDS, TICK_INTERVAL, TimerState, TimerStatus};
pub use words::{Category, SecretWord, WordBank};
