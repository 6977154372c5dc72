//! Secret roles and their allocation to players.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::AllocationError;

/// A player's secret role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Knows the secret word.
    Regular,
    /// Knows neither the word nor the category.
    Impostor,
    /// Knows the category but not the word.
    Spy,
}

/// Which player indices hold a special role this round.
///
/// Both lists are sorted, disjoint, and within `0..player_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    player_count: usize,
    impostors: Vec<usize>,
    spies: Vec<usize>,
}

impl RoleAssignment {
    /// Number of players the assignment covers.
    #[must_use]
    pub const fn player_count(&self) -> usize {
        self.player_count
    }

    /// Sorted impostor indices.
    #[must_use]
    pub fn impostors(&self) -> &[usize] {
        &self.impostors
    }

    /// Sorted spy indices.
    #[must_use]
    pub fn spies(&self) -> &[usize] {
        &self.spies
    }

    /// Returns the role held by `player`.
    ///
    /// Indices outside the round are reported as [`Role::Regular`].
    #[must_use]
    pub fn role_of(&self, player: usize) -> Role {
        if self.impostors.binary_search(&player).is_ok() {
            Role::Impostor
        } else if self.spies.binary_search(&player).is_ok() {
            Role::Spy
        } else {
            Role::Regular
        }
    }
}

/// Assigns impostors and spies to player indices uniformly at random.
///
/// The indices `0..player_count` are shuffled; the first `impostors` become
/// impostors and the next `spies` become spies. Every valid assignment is
/// equally likely and the cost is linear in `player_count`.
///
/// # Errors
///
/// Returns [`AllocationError::NoPlayers`] for an empty round and
/// [`AllocationError::TooManySpecialRoles`] if no regular player would remain.
///
/// # Example
///
/// ```
/// use impostor::{allocate, Role};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let roles = allocate(5, 1, 1, &mut rng).unwrap();
/// assert_eq!(roles.impostors().len(), 1);
/// assert_eq!(roles.spies().len(), 1);
/// assert_eq!(roles.role_of(roles.impostors()[0]), Role::Impostor);
/// ```
pub fn allocate<R: Rng + ?Sized>(
    player_count: usize,
    impostors: usize,
    spies: usize,
    rng: &mut R,
) -> Result<RoleAssignment, AllocationError> {
    if player_count == 0 {
        return Err(AllocationError::NoPlayers);
    }

    let special = impostors
        .checked_add(spies)
        .ok_or(AllocationError::TooManySpecialRoles)?;
    if special >= player_count {
        return Err(AllocationError::TooManySpecialRoles);
    }

    let mut pool: Vec<usize> = (0..player_count).collect();
    pool.shuffle(rng);

    let mut impostor_indices = pool[..impostors].to_vec();
    let mut spy_indices = pool[impostors..special].to_vec();
    impostor_indices.sort_unstable();
    spy_indices.sort_unstable();

    Ok(RoleAssignment {
        player_count,
        impostors: impostor_indices,
        spies: spy_indices,
    })
}
