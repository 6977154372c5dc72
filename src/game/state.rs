//! Session state types.

use crate::timer::TimerState;

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Between rounds; configuration may change.
    Setup,
    /// The device is being passed around for role reveals.
    Reveals,
    /// The discussion timer is running.
    Discussion,
    /// Roles and the word have been disclosed.
    GameOver,
}

/// Where the current turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// The device is handed to the current player, role hidden.
    AwaitingPass,
    /// The current player's role is on screen.
    AwaitingReveal,
    /// Every player has seen their role.
    Exhausted,
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    /// Index of the player holding the device. Equals the player count once
    /// exhausted.
    pub current_player: usize,
    /// Phase of the current turn.
    pub phase: TurnPhase,
}

/// What the host should be showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The configuration screen.
    Setup,
    /// "Pass the device to" `player`.
    Pass {
        /// 0-based player index.
        player: usize,
    },
    /// `player`'s role card.
    Reveal {
        /// 0-based player index.
        player: usize,
    },
    /// The discussion countdown.
    Discussion {
        /// Current countdown snapshot.
        timer: TimerState,
    },
    /// The results screen.
    GameOver,
}
