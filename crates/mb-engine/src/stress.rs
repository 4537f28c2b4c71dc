//! The creature's stress level.
//!
//! Stress only ever rises and is clamped at its ceiling.

use std::fmt;

/// Accumulated stress, clamped to `[0, max]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressTrack {
    current: u32,
    max: u32,
}

impl StressTrack {
    /// Create an empty track with the given ceiling.
    pub fn new(max: u32) -> Self {
        Self { current: 0, max }
    }

    /// Add stress, clamping to the ceiling. Returns the new value.
    pub fn add(&mut self, delta: u32) -> u32 {
        self.current = self.current.saturating_add(delta).min(self.max);
        self.current
    }

    /// Current stress.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Stress ceiling.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Returns true once the ceiling has been reached.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Fraction of the ceiling reached (0.0 to 1.0).
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            return 1.0;
        }
        f64::from(self.current) / f64::from(self.max)
    }
}

impl fmt::Display for StressTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stress: {}/{}", self.current, self.max)
    }
}
