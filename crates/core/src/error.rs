//! Error types for combat operations.

/// Error raised when an operation is not permitted given the entity's
/// current state.
///
/// The only such operation today is healing a dead character. The variant is
/// deliberately distinguishable so callers can assert on the kind of failure
/// rather than its presence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// The operation requires a living target.
    #[error("operation not permitted: target is dead")]
    InvalidOperation,
}
