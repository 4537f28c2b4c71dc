//! Player-facing end-of-session messages.

use serde::{Deserialize, Serialize};

use mb_core::{Size, Temperament};

/// Placeholder replaced by the breed name in [`FlavorText::burrower_win`].
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Display name for one burrower size/temperament combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedName {
    /// Body size.
    pub size: Size,
    /// Temperament.
    pub temperament: Temperament,
    /// What the player is told the animal was.
    pub name: String,
}

/// Message lookup used to compose verdicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorText {
    /// Correctly guessed a serpent.
    pub serpent_win: String,
    /// Guessed a burrower, but it was a serpent.
    pub serpent_lose: String,
    /// Correctly guessed a burrower; `{name}` is replaced by the breed.
    pub burrower_win: String,
    /// Guessed a serpent, but it was a burrower.
    pub wrong_category: String,
    /// Guessed a burrower with the wrong size or temperament.
    pub wrong_traits: String,
    /// The creature was stressed past its limit.
    pub stress_exceeded: String,
    /// The player reached into a serpent's box.
    pub attacked: String,
    /// Breed used when a combination has no entry in `breeds`.
    pub unknown_breed: String,
    /// Breed names by size and temperament.
    pub breeds: Vec<BreedName>,
}

impl FlavorText {
    /// Breed name for a size/temperament combination.
    pub fn breed(&self, size: Size, temperament: Temperament) -> &str {
        self.breeds
            .iter()
            .find(|b| b.size == size && b.temperament == temperament)
            .map_or(self.unknown_breed.as_str(), |b| b.name.as_str())
    }

    /// Compose the winning message for a correctly guessed burrower.
    pub fn burrower_win_message(&self, size: Size, temperament: Temperament) -> String {
        self.burrower_win
            .replace(NAME_PLACEHOLDER, self.breed(size, temperament))
    }
}

impl Default for FlavorText {
    fn default() -> Self {
        use Size::{Big, Small};
        use Temperament::{Aggressive, Docile, Restless};

        let breed = |size, temperament, name: &str| BreedName {
            size,
            temperament,
            name: name.to_string(),
        };

        Self {
            serpent_win: "You got it! It was a snake. That was dangerous!".to_string(),
            serpent_lose: "Wrong... it was a snake! At least you didn't get bitten.".to_string(),
            burrower_win: "You got it! It was a {name}!".to_string(),
            wrong_category: "Wrong! It was a dog, not a snake.".to_string(),
            wrong_traits: "You got the traits wrong...".to_string(),
            stress_exceeded: "You stressed the animal out and it ran away.".to_string(),
            attacked: "You reached into the box and got bitten by a snake.".to_string(),
            unknown_breed: "mystery dog".to_string(),
            breeds: vec![
                breed(Small, Docile, "Dachshund"),
                breed(Small, Restless, "Pomeranian"),
                breed(Small, Aggressive, "Pinscher"),
                breed(Big, Docile, "Saint Bernard"),
                breed(Big, Restless, "Golden Retriever"),
                breed(Big, Aggressive, "Rottweiler"),
            ],
        }
    }
}
