//! Session management.
//!
//! A [`Session`] owns the mutable state of one playthrough: the action-point
//! budget, the creature's stress, and the status. It selects the concealed
//! creature on start, resolves probes through the outcome table, and settles
//! the final guess. Every call either fully applies or leaves the state
//! untouched.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use mb_core::{Action, Creature, StressEffect};

use crate::config::SessionConfig;
use crate::data::GameData;
use crate::error::{EngineError, EngineResult};
use crate::event::{SessionEvent, SessionObserver, SessionStatus};
use crate::guess::{Guess, Verdict, resolve_guess};
use crate::random::RandomSource;
use crate::selection::select_creature;
use crate::stress::StressTrack;

/// One playthrough against a concealed creature.
pub struct Session {
    data: Arc<GameData>,
    creature: usize,
    budget: u32,
    stress: StressTrack,
    status: SessionStatus,
    verdict: Option<Verdict>,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Session {
    /// Start a session, drawing the creature from an RNG seeded by the config.
    pub fn start(data: Arc<GameData>, config: SessionConfig) -> EngineResult<Self> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        Self::start_with(data, config, &mut rng)
    }

    /// Start a session, drawing the creature from the given source.
    pub fn start_with(
        data: Arc<GameData>,
        config: SessionConfig,
        rng: &mut impl RandomSource,
    ) -> EngineResult<Self> {
        config.validate()?;
        data.validate()?;
        let creature = select_creature(&data.catalog, config.serpent_probability, rng)?;
        Ok(Self::assemble(data, &config, creature))
    }

    /// Start a session with a known creature (by catalog index), skipping
    /// the random draw.
    pub fn start_with_creature(
        data: Arc<GameData>,
        config: SessionConfig,
        creature: usize,
    ) -> EngineResult<Self> {
        config.validate()?;
        data.validate()?;
        if data.catalog.creature(creature).is_none() {
            return Err(EngineError::Configuration(format!(
                "creature index {creature} out of bounds"
            )));
        }
        Ok(Self::assemble(data, &config, creature))
    }

    fn assemble(data: Arc<GameData>, config: &SessionConfig, creature: usize) -> Self {
        tracing::info!(
            budget = config.initial_budget,
            max_stress = config.max_stress,
            "session started"
        );
        Self {
            data,
            creature,
            budget: config.initial_budget,
            stress: StressTrack::new(config.max_stress),
            status: SessionStatus::InProgress,
            verdict: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer. It receives every later event synchronously.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Perform the catalog action with this name (case-insensitive).
    pub fn execute_action(&mut self, name: &str) -> EngineResult<Vec<SessionEvent>> {
        self.ensure_in_progress()?;
        let data = Arc::clone(&self.data);
        let action = data
            .catalog
            .action(name)
            .ok_or_else(|| EngineError::UnknownAction(name.trim().to_string()))?;
        self.execute(action)
    }

    /// Perform a probing action.
    ///
    /// Fails without touching any state when the session is over, the action
    /// is unaffordable, or the outcome table has no entry for it.
    pub fn execute(&mut self, action: &Action) -> EngineResult<Vec<SessionEvent>> {
        self.ensure_in_progress()?;
        if action.cost > self.budget {
            return Err(EngineError::InsufficientBudget {
                cost: action.cost,
                remaining: self.budget,
            });
        }
        let outcome = self.data.table.resolve(self.creature(), action.kind)?;

        self.budget -= action.cost;
        tracing::debug!(
            action = %action.name,
            kind = %action.kind,
            cost = action.cost,
            remaining = self.budget,
            "action executed"
        );

        let mut events = vec![
            SessionEvent::BudgetChanged {
                remaining: self.budget,
                spent: action.cost,
            },
            SessionEvent::Reaction(outcome.reaction),
        ];

        match outcome.stress {
            StressEffect::EndSession => {
                if outcome.has_feedback() {
                    events.push(SessionEvent::Feedback(outcome.feedback));
                }
                let verdict = Verdict::lose(&self.data.flavor.attacked);
                events.push(self.finish(SessionStatus::GameOver, verdict));
            }
            StressEffect::Add(delta) => {
                let total = self.stress.add(delta);
                events.push(SessionEvent::StressChanged { total, delta });
                if outcome.has_feedback() {
                    events.push(SessionEvent::Feedback(outcome.feedback));
                }
                if self.stress.is_full() {
                    let verdict = Verdict::lose(&self.data.flavor.stress_exceeded);
                    events.push(self.finish(SessionStatus::GameOver, verdict));
                }
            }
        }

        self.dispatch(&events);
        Ok(events)
    }

    /// Settle the session with the player's guess.
    pub fn submit_guess(&mut self, guess: &Guess) -> EngineResult<Verdict> {
        self.ensure_in_progress()?;
        let verdict = resolve_guess(self.creature(), guess, &self.data.flavor);
        let status = if verdict.is_win() {
            SessionStatus::Victory
        } else {
            SessionStatus::GameOver
        };
        let event = self.finish(status, verdict.clone());
        self.dispatch(std::slice::from_ref(&event));
        Ok(verdict)
    }

    /// Action points left.
    pub fn remaining_budget(&self) -> u32 {
        self.budget
    }

    /// Stress accumulated so far.
    pub fn current_stress(&self) -> u32 {
        self.stress.current()
    }

    /// Stress ceiling.
    pub fn max_stress(&self) -> u32 {
        self.stress.max()
    }

    /// The stress track.
    pub fn stress(&self) -> &StressTrack {
        &self.stress
    }

    /// Current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns true once the session has been won or lost.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The final verdict, once the session is over.
    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Returns true if the action fits in the remaining budget.
    pub fn can_afford(&self, action: &Action) -> bool {
        action.cost <= self.budget
    }

    /// The game data this session plays against.
    pub fn data(&self) -> &GameData {
        &self.data
    }

    /// The concealed creature, available only once the session is over.
    pub fn revealed_creature(&self) -> Option<&Creature> {
        self.is_terminal().then(|| self.creature())
    }

    fn creature(&self) -> &Creature {
        &self.data.catalog.creatures()[self.creature]
    }

    fn ensure_in_progress(&self) -> EngineResult<()> {
        if self.is_terminal() {
            return Err(EngineError::SessionAlreadyEnded);
        }
        Ok(())
    }

    fn finish(&mut self, status: SessionStatus, verdict: Verdict) -> SessionEvent {
        tracing::info!(%status, verdict = %verdict.kind, "session ended");
        self.status = status;
        self.verdict = Some(verdict.clone());
        SessionEvent::Terminal { status, verdict }
    }

    fn dispatch(&mut self, events: &[SessionEvent]) {
        for event in events {
            for observer in &mut self.observers {
                observer.notify(event);
            }
        }
    }
}
