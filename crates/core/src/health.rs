//! Health and level value types.

use std::fmt;

/// Non-negative vitality magnitude with saturating arithmetic.
///
/// `Health` is an immutable value: [`subtract`](Health::subtract) and
/// [`add`](Health::add) return new values and never mutate in place. The
/// unsigned representation makes negative points unrepresentable, so the
/// arithmetic only has to clamp at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health(u32);

impl Health {
    /// Constructs a health value with the given magnitude.
    pub const fn at(points: u32) -> Self {
        Self(points)
    }

    /// Constructs a depleted health value. Equivalent to `at(0)`.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Remaining points.
    pub const fn points(self) -> u32 {
        self.0
    }

    /// Returns true if no points remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns a new value reduced by `amount`, clamped at zero.
    #[must_use]
    pub const fn subtract(self, amount: u32) -> Self {
        Self(self.0.saturating_sub(amount))
    }

    /// Returns a new value raised by `amount`.
    ///
    /// The model has no upper health bound; the addition saturates at the
    /// integer ceiling rather than overflowing.
    #[must_use]
    pub const fn add(self, amount: u32) -> Self {
        Self(self.0.saturating_add(amount))
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} HP", self.0)
    }
}

/// Positive level attribute, fixed for a character's lifetime.
///
/// No leveling-up operation exists in this model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level(u32);

impl Level {
    /// Constructs a level with the given value.
    pub const fn of(value: u32) -> Self {
        Self(value)
    }

    /// The level's numeric value.
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lv{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtract_clamps_at_zero() {
        let health = Health::at(10);

        assert_eq!(health.subtract(15), Health::empty());
        assert!(health.subtract(15).is_empty());
    }

    #[test]
    fn subtract_of_exact_points_reaches_empty() {
        assert!(Health::at(10).subtract(10).is_empty());
    }

    #[test]
    fn subtract_below_current_points_stays_positive() {
        assert_eq!(Health::at(1000).subtract(900), Health::at(100));
    }

    #[test]
    fn add_has_no_upper_clamp() {
        assert_eq!(Health::at(1000).add(5000), Health::at(6000));
    }

    #[test]
    fn add_saturates_at_integer_ceiling() {
        assert_eq!(Health::at(u32::MAX).add(1), Health::at(u32::MAX));
    }

    #[test]
    fn empty_equals_at_zero() {
        assert_eq!(Health::empty(), Health::at(0));
        assert!(Health::at(0).is_empty());
        assert!(!Health::at(1).is_empty());
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Health::at(42), Health::at(42));
        assert_ne!(Health::at(42), Health::at(43));
        assert_eq!(Level::of(3), Level::of(3));
    }

    #[test]
    fn display_formats_points_and_level() {
        assert_eq!(Health::at(250).to_string(), "250 HP");
        assert_eq!(Level::of(1).to_string(), "Lv1");
    }
}
