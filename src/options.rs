//! Round configuration.

use tracing::warn;

use crate::words::Category;

/// Number of players in the default configuration.
pub const DEFAULT_PLAYERS: usize = 4;

/// Discussion length in the default configuration.
pub const DEFAULT_TIMER_SECONDS: u32 = 3 * 60;

/// Configuration for a single round.
///
/// Use the builder pattern to customize a configuration, then call
/// [`RoundConfig::repaired`] to bring the counts back within bounds:
///
/// ```
/// use impostor::{Category, RoundConfig};
///
/// let config = RoundConfig::default()
///     .with_players(6)
///     .with_impostors(2)
///     .with_spies(1)
///     .with_category(Category::named("animals"))
///     .with_timer_minutes(5)
///     .repaired();
/// assert_eq!(config.timer_seconds, 300);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    /// Number of players sharing the device.
    pub player_count: usize,
    /// Number of impostors (no word, no category).
    pub impostor_count: usize,
    /// Number of spies (category only).
    pub spy_count: usize,
    /// Category the secret word is drawn from.
    pub category: Category,
    /// Discussion length in seconds.
    pub timer_seconds: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYERS,
            impostor_count: 1,
            spy_count: 0,
            category: Category::Mixed,
            timer_seconds: DEFAULT_TIMER_SECONDS,
        }
    }
}

impl RoundConfig {
    /// Sets the number of players.
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.player_count = players;
        self
    }

    /// Sets the number of impostors.
    #[must_use]
    pub const fn with_impostors(mut self, impostors: usize) -> Self {
        self.impostor_count = impostors;
        self
    }

    /// Sets the number of spies.
    #[must_use]
    pub const fn with_spies(mut self, spies: usize) -> Self {
        self.spy_count = spies;
        self
    }

    /// Sets the word category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the discussion length in seconds.
    #[must_use]
    pub const fn with_timer_seconds(mut self, seconds: u32) -> Self {
        self.timer_seconds = seconds;
        self
    }

    /// Sets the discussion length in whole minutes.
    ///
    /// # Example
    ///
    /// ```
    /// use impostor::RoundConfig;
    ///
    /// let config = RoundConfig::default().with_timer_minutes(2);
    /// assert_eq!(config.timer_seconds, 120);
    /// ```
    #[must_use]
    pub const fn with_timer_minutes(mut self, minutes: u32) -> Self {
        self.timer_seconds = minutes.saturating_mul(60);
        self
    }

    /// Upper bound to display for the impostor count input.
    #[must_use]
    pub const fn impostor_input_max(&self) -> usize {
        let max = self.player_count.saturating_sub(1);
        if max < 1 { 1 } else { max }
    }

    /// Upper bound to display for the spy count input.
    #[must_use]
    pub const fn spy_input_max(&self) -> usize {
        self.player_count.saturating_sub(1)
    }

    /// Returns whether the counts leave at least one regular player.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.player_count >= 1
            && self.impostor_count < self.player_count
            && self.impostor_count.saturating_add(self.spy_count) < self.player_count
            && self.timer_seconds > 0
    }

    /// Returns a corrected copy whose counts leave at least one regular player.
    ///
    /// Repairs are applied in order:
    ///
    /// 1. An impostor count of at least the player count drops to
    ///    `max(1, players / 3)`.
    /// 2. If impostors and spies exceed `players - 1`, spies drop to whatever
    ///    room is left.
    ///
    /// The player count is raised to at least one, impostors are finally
    /// capped at `players - 1` (rule 1 alone leaves a lone player as the
    /// impostor), and the timer is raised to at least one second.
    /// Applying this to its own output is a no-op.
    ///
    /// # Example
    ///
    /// ```
    /// use impostor::RoundConfig;
    ///
    /// let config = RoundConfig::default()
    ///     .with_players(6)
    ///     .with_impostors(6)
    ///     .with_spies(5)
    ///     .repaired();
    /// assert_eq!(config.impostor_count, 2);
    /// assert_eq!(config.spy_count, 3);
    /// ```
    #[must_use]
    pub fn repaired(mut self) -> Self {
        let before = (self.player_count, self.impostor_count, self.spy_count);

        self.player_count = self.player_count.max(1);
        let players = self.player_count;
        let max_special = players - 1;

        if self.impostor_count >= players {
            self.impostor_count = (players / 3).max(1);
        }

        if self.impostor_count.saturating_add(self.spy_count) > max_special {
            self.spy_count = max_special.saturating_sub(self.impostor_count);
        }

        self.impostor_count = self.impostor_count.min(max_special);
        self.timer_seconds = self.timer_seconds.max(1);

        let after = (self.player_count, self.impostor_count, self.spy_count);
        if before != after {
            warn!(
                players = after.0,
                impostors = after.1,
                spies = after.2,
                "role counts out of range, repaired"
            );
        }

        self
    }
}

/// A partial configuration change.
///
/// Unset fields keep their current value. See
/// [`GameSession::configure`](crate::GameSession::configure).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    /// New number of players.
    pub player_count: Option<usize>,
    /// New number of impostors.
    pub impostor_count: Option<usize>,
    /// New number of spies.
    pub spy_count: Option<usize>,
    /// New word category.
    pub category: Option<Category>,
    /// New discussion length in seconds.
    pub timer_seconds: Option<u32>,
}

impl ConfigUpdate {
    /// Changes the number of players.
    #[must_use]
    pub const fn players(mut self, players: usize) -> Self {
        self.player_count = Some(players);
        self
    }

    /// Changes the number of impostors.
    #[must_use]
    pub const fn impostors(mut self, impostors: usize) -> Self {
        self.impostor_count = Some(impostors);
        self
    }

    /// Changes the number of spies.
    #[must_use]
    pub const fn spies(mut self, spies: usize) -> Self {
        self.spy_count = Some(spies);
        self
    }

    /// Changes the word category.
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Changes the discussion length in seconds.
    #[must_use]
    pub const fn timer_seconds(mut self, seconds: u32) -> Self {
        self.timer_seconds = Some(seconds);
        self
    }

    /// Changes the discussion length in whole minutes.
    #[must_use]
    pub const fn timer_minutes(mut self, minutes: u32) -> Self {
        self.timer_seconds = Some(minutes.saturating_mul(60));
        self
    }

    /// Applies the update to `config` and repairs the result.
    #[must_use]
    pub fn apply(self, mut config: RoundConfig) -> RoundConfig {
        if let Some(players) = self.player_count {
            config.player_count = players;
        }
        if let Some(impostors) = self.impostor_count {
            config.impostor_count = impostors;
        }
        if let Some(spies) = self.spy_count {
            config.spy_count = spies;
        }
        if let Some(category) = self.category {
            config.category = category;
        }
        if let Some(seconds) = self.timer_seconds {
            config.timer_seconds = seconds;
        }
        config.repaired()
    }
}
