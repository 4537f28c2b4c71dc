//! Decision and resource engine for Mystery Box sessions.
//!
//! Selects the concealed creature, resolves probing actions through an
//! outcome table, tracks the action-point budget and the creature's stress,
//! and settles the player's final guess. The engine is synchronous and holds
//! no presentation state: callers observe [`SessionEvent`]s and render them
//! however they like.

pub mod config;
pub mod data;
pub mod error;
pub mod event;
pub mod flavor;
pub mod guess;
pub mod random;
pub mod selection;
pub mod session;
pub mod stress;
pub mod table;

pub use config::SessionConfig;
pub use data::GameData;
pub use error::{EngineError, EngineResult};
pub use event::{SessionEvent, SessionObserver, SessionStatus};
pub use flavor::FlavorText;
pub use guess::{Guess, Verdict, VerdictKind, resolve_guess};
pub use random::RandomSource;
pub use session::Session;
pub use stress::StressTrack;
pub use table::OutcomeTable;
