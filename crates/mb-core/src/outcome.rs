//! The observable result of probing a creature.
//!
//! An [`Outcome`] pairs a box reaction with optional narrative feedback and
//! the stress the probe caused.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How visibly the box reacts to a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    /// Nothing moves.
    None,
    /// A small shake.
    Small,
    /// A big shake.
    Large,
    /// The creature strikes the player.
    Attack,
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Small => write!(f, "small shake"),
            Self::Large => write!(f, "big shake"),
            Self::Attack => write!(f, "attack"),
        }
    }
}

/// Stress caused by a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressEffect {
    /// Add this much stress (may be zero).
    Add(u32),
    /// End the session immediately, whatever the stress total.
    EndSession,
}

/// Result of resolving one action against one creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The box reaction to show.
    pub reaction: Reaction,
    /// Narrative text; empty means there is nothing to show.
    #[serde(default)]
    pub feedback: String,
    /// Stress caused by the probe.
    pub stress: StressEffect,
}

impl Outcome {
    /// An outcome that adds `delta` stress.
    pub fn new(reaction: Reaction, feedback: impl Into<String>, delta: u32) -> Self {
        Self {
            reaction,
            feedback: feedback.into(),
            stress: StressEffect::Add(delta),
        }
    }

    /// An outcome that ends the session on the spot.
    pub fn terminal(reaction: Reaction, feedback: impl Into<String>) -> Self {
        Self {
            reaction,
            feedback: feedback.into(),
            stress: StressEffect::EndSession,
        }
    }

    /// Returns true if this outcome ends the session regardless of stress.
    pub fn ends_session(&self) -> bool {
        self.stress == StressEffect::EndSession
    }

    /// Returns true if there is narrative text to show.
    pub fn has_feedback(&self) -> bool {
        !self.feedback.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_outcome() {
        let o = Outcome::terminal(Reaction::Attack, "Ouch!");
        assert!(o.ends_session());
        assert!(o.has_feedback());
    }

    #[test]
    fn zero_delta_is_not_terminal() {
        let o = Outcome::new(Reaction::None, "", 0);
        assert!(!o.ends_session());
        assert!(!o.has_feedback());
        assert_eq!(o.stress, StressEffect::Add(0));
    }

    #[test]
    fn stress_effect_json_shape() {
        assert_eq!(
            serde_json::to_string(&StressEffect::Add(20)).unwrap(),
            r#"{"add":20}"#
        );
        assert_eq!(
            serde_json::to_string(&StressEffect::EndSession).unwrap(),
            r#""end_session""#
        );
    }

    #[test]
    fn feedback_defaults_to_empty() {
        let json = r#"{"reaction":"small","stress":{"add":5}}"#;
        let o: Outcome = serde_json::from_str(json).unwrap();
        assert_eq!(o, Outcome::new(Reaction::Small, "", 5));
    }

    #[test]
    fn reaction_ordering() {
        assert!(Reaction::None < Reaction::Small);
        assert!(Reaction::Large < Reaction::Attack);
    }
}
