//! The `Character` entity and its combat operations.

use tracing::debug;

use crate::config::CombatConfig;
use crate::error::CombatError;
use crate::health::{Health, Level};

/// A combat entity owning a mutable [`Health`] and a fixed [`Level`].
///
/// Health is private and only changes through [`attack`](Character::attack),
/// [`heal`](Character::heal), and [`die`](Character::die); the accessors hand
/// out value snapshots. A character is alive exactly while its health is
/// non-empty, and nothing in this model brings a dead character back.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    health: Health,
    level: Level,
}

impl Character {
    /// Creates a fresh character at full health and level 1.
    pub fn spawn() -> Self {
        Self {
            health: Health::at(CombatConfig::SPAWN_HEALTH),
            level: Level::of(CombatConfig::SPAWN_LEVEL),
        }
    }

    /// Current health snapshot.
    pub fn health(&self) -> Health {
        self.health
    }

    /// Level, fixed at spawn.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Quick liveness check: alive iff any health remains.
    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }

    /// Deals `damage` to `target`, clamped at zero health.
    ///
    /// There is no liveness precondition on either side: a dead target can
    /// be attacked and stays at zero. The attacker is unaffected.
    pub fn attack(&self, target: &mut Character, damage: u32) {
        target.health = target.health.subtract(damage);
        debug!(
            target: "arena_core::combat",
            damage,
            remaining = target.health.points(),
            "attack applied"
        );
    }

    /// Restores `amount` health to `target`.
    ///
    /// Healing requires life: if the target is dead the call fails with
    /// [`CombatError::InvalidOperation`] and mutates nothing. Healing has no
    /// upper bound, and it never revives.
    pub fn heal(&self, target: &mut Character, amount: u32) -> Result<(), CombatError> {
        if !target.is_alive() {
            return Err(CombatError::InvalidOperation);
        }
        target.health = target.health.add(amount);
        debug!(
            target: "arena_core::combat",
            amount,
            remaining = target.health.points(),
            "heal applied"
        );
        Ok(())
    }

    /// Zeroes health unconditionally.
    ///
    /// Idempotent logical death; distinct from dropping the value.
    pub fn die(&mut self) {
        self.health = Health::empty();
        debug!(target: "arena_core::combat", "character died");
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::spawn()
    }
}
