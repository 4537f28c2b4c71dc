//! Configuration for a single session.

use crate::error::{EngineError, EngineResult};

/// Settings for one playthrough.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// RNG seed for reproducible creature selection.
    pub seed: u64,
    /// Action points available at the start.
    pub initial_budget: u32,
    /// Stress at which the creature flees and the session is lost.
    pub max_stress: u32,
    /// Chance (0-100) that the box holds a serpent.
    pub serpent_probability: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            initial_budget: 6,
            max_stress: 100,
            serpent_probability: 25.0,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting action-point budget.
    pub fn with_budget(mut self, budget: u32) -> Self {
        self.initial_budget = budget;
        self
    }

    /// Set the stress ceiling.
    pub fn with_max_stress(mut self, max_stress: u32) -> Self {
        self.max_stress = max_stress;
        self
    }

    /// Set the serpent probability in percent.
    pub fn with_serpent_probability(mut self, percent: f64) -> Self {
        self.serpent_probability = percent;
        self
    }

    /// Check that the settings describe a playable session.
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_stress == 0 {
            return Err(EngineError::Configuration(
                "max stress must be greater than zero".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.serpent_probability) {
            return Err(EngineError::Configuration(format!(
                "serpent probability must be within 0-100, got {}",
                self.serpent_probability
            )));
        }
        Ok(())
    }
}
