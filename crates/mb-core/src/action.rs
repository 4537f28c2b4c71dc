use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of ways the player can probe the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Pour liquid through the air holes.
    Liquid,
    /// Reach a hand inside.
    Touch,
    /// Pick the box up and shake it.
    Agitate,
}

impl ActionKind {
    /// Parse an action kind from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "liquid" | "water" | "pour" => Some(Self::Liquid),
            "touch" | "hand" | "reach" => Some(Self::Touch),
            "agitate" | "shake" => Some(Self::Agitate),
            _ => None,
        }
    }

    /// All action kinds.
    pub fn all() -> &'static [Self] {
        &[Self::Liquid, Self::Touch, Self::Agitate]
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Liquid => write!(f, "liquid"),
            Self::Touch => write!(f, "touch"),
            Self::Agitate => write!(f, "agitate"),
        }
    }
}

/// A probing action the player can spend action points on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Display name, also used to look the action up.
    pub name: String,
    /// Which kind of probe this is.
    pub kind: ActionKind,
    /// Action points spent when performed.
    pub cost: u32,
}

impl Action {
    /// Create a new action.
    pub fn new(name: impl Into<String>, kind: ActionKind, cost: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            cost,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, cost {})", self.name, self.kind, self.cost)
    }
}
