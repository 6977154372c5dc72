//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur while allocating roles.
///
/// These only surface when [`allocate`](crate::roles::allocate) is called with
/// counts that bypassed [`RoundConfig::repaired`](crate::RoundConfig::repaired).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// There are no players to assign roles to.
    #[error("invalid config: no players")]
    NoPlayers,
    /// Impostors and spies together leave no regular player.
    #[error("invalid config: special roles must leave at least one regular player")]
    TooManySpecialRoles,
}

/// Errors that can occur while drawing the secret word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    /// The category is not present in the word bank.
    #[error("unknown category")]
    UnknownCategory,
    /// The selected pool contains no words.
    #[error("word pool is empty")]
    EmptyDataset,
}

/// Errors that can occur while changing the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Configuration can only change between rounds.
    #[error("invalid game state for configuration")]
    InvalidState,
    /// The category is not present in the word bank.
    #[error("unknown category")]
    UnknownCategory,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A round is already in progress.
    #[error("invalid game state for starting a round")]
    InvalidState,
    /// Role allocation failed.
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    /// Word selection failed.
    #[error(transparent)]
    Word(#[from] WordError),
}

/// Errors that can occur while passing the device around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// No reveals are in progress.
    #[error("invalid game state for a turn action")]
    InvalidState,
    /// The action does not apply to the current turn phase.
    #[error("invalid turn transition")]
    InvalidTransition,
}

/// Errors that can occur while driving the discussion timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// The discussion has not started.
    #[error("invalid game state for the discussion timer")]
    InvalidState,
}
