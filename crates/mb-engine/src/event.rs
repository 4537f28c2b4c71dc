//! Notifications emitted by a session.
//!
//! Every state change a presentation layer may want to animate is reported
//! as a [`SessionEvent`]. Events are returned from each call and also pushed
//! synchronously to subscribed [`SessionObserver`]s.

use std::fmt;

use serde::{Deserialize, Serialize};

use mb_core::Reaction;

use crate::guess::Verdict;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Probing and guessing are still allowed.
    InProgress,
    /// The player guessed correctly.
    Victory,
    /// The player guessed wrong, stressed the creature out, or was attacked.
    GameOver,
}

impl SessionStatus {
    /// Returns true for `Victory` and `GameOver`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Victory => write!(f, "victory"),
            Self::GameOver => write!(f, "game over"),
        }
    }
}

/// A single notification from a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Action points were spent.
    BudgetChanged {
        /// Points left after spending.
        remaining: u32,
        /// Points just spent.
        spent: u32,
    },
    /// The box reacted to a probe.
    Reaction(Reaction),
    /// Stress was applied. `delta` is the raw table value, so a zero delta
    /// still produces this event.
    StressChanged {
        /// Stress after clamping.
        total: u32,
        /// Stress the probe asked to add.
        delta: u32,
    },
    /// Narrative text to show. Never empty.
    Feedback(String),
    /// The session ended.
    Terminal {
        /// Final status.
        status: SessionStatus,
        /// Final verdict and message.
        verdict: Verdict,
    },
}

/// Receives session events as they happen.
pub trait SessionObserver {
    /// Called once per event, in emission order.
    fn notify(&mut self, event: &SessionEvent);
}

impl<F: FnMut(&SessionEvent)> SessionObserver for F {
    fn notify(&mut self, event: &SessionEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses() {
        assert!(!SessionStatus::InProgress.is_terminal());
        assert!(SessionStatus::Victory.is_terminal());
        assert!(SessionStatus::GameOver.is_terminal());
    }

    #[test]
    fn closures_are_observers() {
        let mut seen = Vec::new();
        {
            let mut observer = |e: &SessionEvent| seen.push(e.clone());
            observer.notify(&SessionEvent::Reaction(Reaction::Small));
        }
        assert_eq!(seen, vec![SessionEvent::Reaction(Reaction::Small)]);
    }

    #[test]
    fn status_display() {
        assert_eq!(SessionStatus::GameOver.to_string(), "game over");
    }
}
