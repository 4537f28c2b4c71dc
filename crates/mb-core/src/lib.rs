//! Core data model for Mystery Box: creatures, probing actions, and outcomes.
//!
//! This crate defines the immutable definitions the engine plays against. It
//! holds no game rules: a [`Catalog`] can be constructed programmatically,
//! taken from [`Catalog::standard`], or deserialized from JSON.

/// Probing action definitions.
pub mod action;
/// The validated creature and action catalog.
pub mod catalog;
/// Creature types, categories, and guessable profiles.
pub mod creature;
/// Error types used throughout the crate.
pub mod error;
/// Reaction and stress values produced by resolving an action.
pub mod outcome;

/// Re-export action types.
pub use action::{Action, ActionKind};
/// Re-export the catalog.
pub use catalog::Catalog;
/// Re-export creature types.
pub use creature::{Category, Creature, CreatureTraits, Profile, Size, Temperament};
/// Re-export error types.
pub use error::{CatalogError, CatalogResult};
/// Re-export outcome types.
pub use outcome::{Outcome, Reaction, StressEffect};
