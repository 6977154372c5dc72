//! Feedback hooks fired as a round progresses.
//!
//! Hosts map these to sounds, vibration, or nothing at all. Every hook has a
//! no-op default, so an observer only overrides what it cares about.

use alloc::vec::Vec;

/// Receives round events.
///
/// [`on_role_revealed`](Self::on_role_revealed) fires the same way for every
/// role, so feedback never gives a role away.
pub trait RoundObserver {
    /// A player's role card was shown.
    fn on_role_revealed(&mut self) {}

    /// The device was passed on.
    fn on_turn_passed(&mut self) {}

    /// The discussion timer ticked down to `remaining` seconds.
    fn on_tick(&mut self, _remaining: u32) {}

    /// The discussion is in its last ten seconds.
    fn on_low_time(&mut self, _remaining: u32) {}

    /// The discussion timer ran out.
    fn on_expired(&mut self) {}

    /// The discussion was ended early.
    fn on_stopped(&mut self) {}
}

/// Ignores every event.
impl RoundObserver for () {}

/// A single round event, as recorded by a [`Vec<RoundEvent>`] observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// See [`RoundObserver::on_role_revealed`].
    RoleRevealed,
    /// See [`RoundObserver::on_turn_passed`].
    TurnPassed,
    /// See [`RoundObserver::on_tick`].
    Tick(u32),
    /// See [`RoundObserver::on_low_time`].
    LowTime(u32),
    /// See [`RoundObserver::on_expired`].
    Expired,
    /// See [`RoundObserver::on_stopped`].
    Stopped,
}

impl RoundEvent {
    /// Delivers this event to `observer`.
    pub fn dispatch<O: RoundObserver + ?Sized>(self, observer: &mut O) {
        match self {
            Self::RoleRevealed => observer.on_role_revealed(),
            Self::TurnPassed => observer.on_turn_passed(),
            Self::Tick(remaining) => observer.on_tick(remaining),
            Self::LowTime(remaining) => observer.on_low_time(remaining),
            Self::Expired => observer.on_expired(),
            Self::Stopped => observer.on_stopped(),
        }
    }
}

/// Records events in the order they fire.
impl RoundObserver for Vec<RoundEvent> {
    fn on_role_revealed(&mut self) {
        self.push(RoundEvent::RoleRevealed);
    }

    fn on_turn_passed(&mut self) {
        self.push(RoundEvent::TurnPassed);
    }

    fn on_tick(&mut self, remaining: u32) {
        self.push(RoundEvent::Tick(remaining));
    }

    fn on_low_time(&mut self, remaining: u32) {
        self.push(RoundEvent::LowTime(remaining));
    }

    fn on_expired(&mut self) {
        self.push(RoundEvent::Expired);
    }

    fn on_stopped(&mut self) {
        self.push(RoundEvent::Stopped);
    }
}
