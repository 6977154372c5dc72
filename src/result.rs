//! Round results revealed after the discussion.

use alloc::vec::Vec;

use crate::roles::RoleAssignment;
use crate::words::SecretWord;

/// Returns the 1-based number players see for a 0-based index.
#[must_use]
pub const fn player_number(index: usize) -> usize {
    index + 1
}

/// Everything that was secret during the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Sorted impostor indices.
    pub impostors: Vec<usize>,
    /// Sorted spy indices.
    pub spies: Vec<usize>,
    /// The word regular players were shown.
    pub secret_word: SecretWord,
}

impl RoundResult {
    pub(crate) fn new(roles: &RoleAssignment, secret_word: SecretWord) -> Self {
        Self {
            impostors: roles.impostors().to_vec(),
            spies: roles.spies().to_vec(),
            secret_word,
        }
    }

    /// Returns whether the round had any spies.
    #[must_use]
    pub fn has_spies(&self) -> bool {
        !self.spies.is_empty()
    }
}
