//! Resolving the player's final guess.
//!
//! A guess names a category and, for burrowers, the size and temperament.
//! Only an exact match wins; there is no partial credit.

use std::fmt;

use serde::{Deserialize, Serialize};

use mb_core::{Category, Creature, CreatureTraits, Profile, Size, Temperament};

use crate::flavor::FlavorText;

/// What the player thinks is in the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    /// The guessed category and attributes.
    pub profile: Profile,
}

impl Guess {
    /// Guess a serpent.
    pub fn serpent() -> Self {
        Self {
            profile: Profile::Serpent,
        }
    }

    /// Guess a burrower with the given attributes.
    pub fn burrower(size: Size, temperament: Temperament) -> Self {
        Self {
            profile: Profile::Burrower { size, temperament },
        }
    }

    /// The guessed category.
    pub fn category(&self) -> Category {
        self.profile.category()
    }
}

impl From<Profile> for Guess {
    fn from(profile: Profile) -> Self {
        Self { profile }
    }
}

/// Whether the guess was right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictKind {
    /// The guess matched.
    Win,
    /// The guess missed, or the session was lost before guessing.
    Lose,
}

impl fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => write!(f, "Win"),
            Self::Lose => write!(f, "Lose"),
        }
    }
}

/// The final outcome of a session with its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Win or lose.
    pub kind: VerdictKind,
    /// What to tell the player.
    pub message: String,
}

impl Verdict {
    /// A winning verdict.
    pub fn win(message: impl Into<String>) -> Self {
        Self {
            kind: VerdictKind::Win,
            message: message.into(),
        }
    }

    /// A losing verdict.
    pub fn lose(message: impl Into<String>) -> Self {
        Self {
            kind: VerdictKind::Lose,
            message: message.into(),
        }
    }

    /// Returns true if the player won.
    pub fn is_win(&self) -> bool {
        self.kind == VerdictKind::Win
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Compare a guess with the concealed creature.
pub fn resolve_guess(creature: &Creature, guess: &Guess, flavor: &FlavorText) -> Verdict {
    match creature.traits {
        CreatureTraits::Serpent { .. } => match guess.profile {
            Profile::Serpent => Verdict::win(&flavor.serpent_win),
            Profile::Burrower { .. } => Verdict::lose(&flavor.serpent_lose),
        },
        CreatureTraits::Burrower { size, temperament } => match guess.profile {
            Profile::Serpent => Verdict::lose(&flavor.wrong_category),
            Profile::Burrower {
                size: guessed_size,
                temperament: guessed_temperament,
            } => {
                if guessed_size == size && guessed_temperament == temperament {
                    Verdict::win(flavor.burrower_win_message(size, temperament))
                } else {
                    Verdict::lose(&flavor.wrong_traits)
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serpent_guessed() {
        let flavor = FlavorText::default();
        let v = resolve_guess(&Creature::serpent("Boa", false), &Guess::serpent(), &flavor);
        assert!(v.is_win());
        assert_eq!(v.message, flavor.serpent_win);
    }

    #[test]
    fn serpent_missed_with_full_burrower_guess() {
        let flavor = FlavorText::default();
        let v = resolve_guess(
            &Creature::serpent("Coral Snake", true),
            &Guess::burrower(Size::Big, Temperament::Aggressive),
            &flavor,
        );
        assert_eq!(v.kind, VerdictKind::Lose);
        assert_eq!(v.message, flavor.serpent_lose);
    }

    #[test]
    fn burrower_exact_match_wins() {
        let flavor = FlavorText::default();
        let rottweiler = Creature::burrower("Rottweiler", Size::Big, Temperament::Aggressive);
        let v = resolve_guess(
            &rottweiler,
            &Guess::burrower(Size::Big, Temperament::Aggressive),
            &flavor,
        );
        assert!(v.is_win());
        assert!(v.message.contains("Rottweiler"));
    }

    #[test]
    fn burrower_one_field_off_loses() {
        let flavor = FlavorText::default();
        let rottweiler = Creature::burrower("Rottweiler", Size::Big, Temperament::Aggressive);
        let wrong_temperament = resolve_guess(
            &rottweiler,
            &Guess::burrower(Size::Big, Temperament::Restless),
            &flavor,
        );
        let wrong_size = resolve_guess(
            &rottweiler,
            &Guess::burrower(Size::Small, Temperament::Aggressive),
            &flavor,
        );
        assert_eq!(wrong_temperament, Verdict::lose(&flavor.wrong_traits));
        assert_eq!(wrong_size, Verdict::lose(&flavor.wrong_traits));
    }

    #[test]
    fn burrower_guessed_as_serpent() {
        let flavor = FlavorText::default();
        let v = resolve_guess(
            &Creature::burrower("Pug", Size::Small, Temperament::Docile),
            &Guess::serpent(),
            &flavor,
        );
        assert_eq!(v, Verdict::lose(&flavor.wrong_category));
    }

    #[test]
    fn win_message_uses_flavor_breed_not_creature_name() {
        let flavor = FlavorText::default();
        let v = resolve_guess(
            &Creature::burrower("Rex", Size::Small, Temperament::Restless),
            &Guess::burrower(Size::Small, Temperament::Restless),
            &flavor,
        );
        assert_eq!(v.message, "You got it! It was a Pomeranian!");
    }

    #[test]
    fn display() {
        assert_eq!(Verdict::win("Yay").to_string(), "Win: Yay");
        assert_eq!(Guess::serpent().category(), Category::Serpent);
    }
}
