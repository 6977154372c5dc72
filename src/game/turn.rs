//! Turn-by-turn role reveals.

use crate::error::TurnError;
use crate::observer::RoundObserver;
use crate::roles::{Role, RoleAssignment};
use crate::words::{Category, SecretWord};

use super::state::{TurnPhase, TurnState};

/// What a player sees when their role is revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleCard {
    /// A regular player sees the word and its topic.
    Regular {
        /// The secret word.
        word: SecretWord,
    },
    /// An impostor sees neither word nor topic.
    Impostor,
    /// A spy sees the topic only.
    Spy {
        /// The topic of the secret word.
        category: Category,
    },
}

impl RoleCard {
    /// Returns the role this card belongs to.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Regular { .. } => Role::Regular,
            Self::Impostor => Role::Impostor,
            Self::Spy { .. } => Role::Spy,
        }
    }
}

/// Walks the device around the table one player at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSequencer {
    player_count: usize,
    current: usize,
    phase: TurnPhase,
}

impl TurnSequencer {
    /// Creates a sequencer waiting to hand the device to player 0.
    #[must_use]
    pub const fn new(player_count: usize) -> Self {
        Self {
            player_count,
            current: 0,
            phase: if player_count == 0 {
                TurnPhase::Exhausted
            } else {
                TurnPhase::AwaitingPass
            },
        }
    }

    /// Returns the current turn position.
    #[must_use]
    pub const fn state(&self) -> TurnState {
        TurnState {
            current_player: self.current,
            phase: self.phase,
        }
    }

    /// Returns whether every player has seen their role.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.phase, TurnPhase::Exhausted)
    }

    /// Shows the current player their role.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::InvalidTransition`] unless the device has just
    /// been passed.
    pub fn reveal<O: RoundObserver + ?Sized>(
        &mut self,
        roles: &RoleAssignment,
        word: &SecretWord,
        observer: &mut O,
    ) -> Result<RoleCard, TurnError> {
        if self.phase != TurnPhase::AwaitingPass {
            return Err(TurnError::InvalidTransition);
        }

        let card = match roles.role_of(self.current) {
            Role::Impostor => RoleCard::Impostor,
            Role::Spy => RoleCard::Spy {
                category: word.category.clone(),
            },
            Role::Regular => RoleCard::Regular { word: word.clone() },
        };

        self.phase = TurnPhase::AwaitingReveal;
        observer.on_role_revealed();
        Ok(card)
    }

    /// Hides the role and moves on to the next player.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::InvalidTransition`] unless a role is on screen.
    pub fn advance<O: RoundObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<TurnState, TurnError> {
        if self.phase != TurnPhase::AwaitingReveal {
            return Err(TurnError::InvalidTransition);
        }

        observer.on_turn_passed();
        self.current += 1;
        self.phase = if self.current >= self.player_count {
            TurnPhase::Exhausted
        } else {
            TurnPhase::AwaitingPass
        };
        Ok(self.state())
    }
}
