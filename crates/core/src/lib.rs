//! Deterministic character-combat value model.
//!
//! `arena-core` defines a minimal combat core: a [`Health`] value type with
//! saturating arithmetic and a [`Character`] entity whose `attack`, `heal`,
//! and `die` operations enforce the liveness rules. All health mutation flows
//! through [`Character`]'s operations, and the types re-exported here are the
//! entire public surface.
pub mod character;
pub mod config;
pub mod error;
pub mod health;

pub use character::Character;
pub use config::CombatConfig;
pub use error::CombatError;
pub use health::{Health, Level};
