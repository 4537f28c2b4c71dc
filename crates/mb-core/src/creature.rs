use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed top-level classification of a creature.
///
/// The category decides which trait fields are meaningful and which
/// partition of the outcome table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A digging animal whose size and temperament can be probed.
    Burrower,
    /// A snake. Reaching into its box ends the session.
    Serpent,
}

impl Category {
    /// Parse a category from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "burrower" | "dog" => Some(Self::Burrower),
            "serpent" | "snake" => Some(Self::Serpent),
            _ => None,
        }
    }

    /// All categories in catalog order.
    pub fn all() -> &'static [Self] {
        &[Self::Burrower, Self::Serpent]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Burrower => write!(f, "burrower"),
            Self::Serpent => write!(f, "serpent"),
        }
    }
}

/// Body size of a burrower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    /// Fits in one hand.
    Small,
    /// Fills the box.
    Big,
}

impl Size {
    /// Parse a size from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "small" | "s" => Some(Self::Small),
            "big" | "large" | "b" => Some(Self::Big),
            _ => None,
        }
    }

    /// All sizes.
    pub fn all() -> &'static [Self] {
        &[Self::Small, Self::Big]
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small => write!(f, "small"),
            Self::Big => write!(f, "big"),
        }
    }
}

/// How a burrower behaves when disturbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperament {
    /// Calm and tolerant.
    Docile,
    /// Nervous and easily unsettled.
    Restless,
    /// Bites first.
    Aggressive,
}

impl Temperament {
    /// Parse a temperament from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "docile" | "calm" => Some(Self::Docile),
            "restless" | "nervous" => Some(Self::Restless),
            "aggressive" | "angry" => Some(Self::Aggressive),
            _ => None,
        }
    }

    /// All temperaments, from calmest to fiercest.
    pub fn all() -> &'static [Self] {
        &[Self::Docile, Self::Restless, Self::Aggressive]
    }
}

impl fmt::Display for Temperament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Docile => write!(f, "docile"),
            Self::Restless => write!(f, "restless"),
            Self::Aggressive => write!(f, "aggressive"),
        }
    }
}

/// Category-specific attributes of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureTraits {
    /// Attributes of a burrower.
    Burrower {
        /// Body size.
        size: Size,
        /// Behaviour when disturbed.
        temperament: Temperament,
    },
    /// Attributes of a serpent.
    Serpent {
        /// Whether the serpent is venomous enough to kill outright.
        /// Descriptive only: every serpent attacks a reaching hand.
        #[serde(default)]
        instant_threat: bool,
    },
}

impl CreatureTraits {
    /// The category these traits belong to.
    pub fn category(&self) -> Category {
        match self {
            Self::Burrower { .. } => Category::Burrower,
            Self::Serpent { .. } => Category::Serpent,
        }
    }

    /// The guessable shape of these traits.
    pub fn profile(&self) -> Profile {
        match *self {
            Self::Burrower { size, temperament } => Profile::Burrower { size, temperament },
            Self::Serpent { .. } => Profile::Serpent,
        }
    }
}

/// The attribute combination that outcomes and guesses are keyed by.
///
/// Mirrors [`CreatureTraits`] minus purely descriptive fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// A burrower of a given size and temperament.
    Burrower {
        /// Body size.
        size: Size,
        /// Behaviour when disturbed.
        temperament: Temperament,
    },
    /// Any serpent.
    Serpent,
}

impl Profile {
    /// The category of this profile.
    pub fn category(&self) -> Category {
        match self {
            Self::Burrower { .. } => Category::Burrower,
            Self::Serpent => Category::Serpent,
        }
    }

    /// Every profile that exists, burrowers first.
    pub fn all() -> Vec<Self> {
        let mut profiles = Vec::with_capacity(Size::all().len() * Temperament::all().len() + 1);
        for &size in Size::all() {
            for &temperament in Temperament::all() {
                profiles.push(Self::Burrower { size, temperament });
            }
        }
        profiles.push(Self::Serpent);
        profiles
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Burrower { size, temperament } => {
                write!(f, "burrower ({size}, {temperament})")
            }
            Self::Serpent => write!(f, "serpent"),
        }
    }
}

/// A creature that can be sealed in the box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Display name (unique within a catalog).
    pub name: String,
    /// Category-specific attributes.
    pub traits: CreatureTraits,
}

impl Creature {
    /// Create a creature from a name and traits.
    pub fn new(name: impl Into<String>, traits: CreatureTraits) -> Self {
        Self {
            name: name.into(),
            traits,
        }
    }

    /// Create a burrower.
    pub fn burrower(name: impl Into<String>, size: Size, temperament: Temperament) -> Self {
        Self::new(name, CreatureTraits::Burrower { size, temperament })
    }

    /// Create a serpent.
    pub fn serpent(name: impl Into<String>, instant_threat: bool) -> Self {
        Self::new(name, CreatureTraits::Serpent { instant_threat })
    }

    /// The creature's category.
    pub fn category(&self) -> Category {
        self.traits.category()
    }

    /// The creature's guessable profile.
    pub fn profile(&self) -> Profile {
        self.traits.profile()
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.traits {
            CreatureTraits::Burrower { size, temperament } => {
                write!(f, "{} (burrower, {size}, {temperament})", self.name)
            }
            CreatureTraits::Serpent { instant_threat } => {
                let threat = if instant_threat { ", deadly" } else { "" };
                write!(f, "{} (serpent{threat})", self.name)
            }
        }
    }
}
