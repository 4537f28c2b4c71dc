//! The outcome table: what each probe does to each kind of creature.
//!
//! Entries are keyed by a creature [`Profile`] and an [`ActionKind`]. Lookups
//! are pure and never fall back to a default: a missing entry is reported as
//! [`EngineError::UnhandledCombination`]. Reaching into a serpent's box is a
//! fixed rule that bypasses the table entirely.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use mb_core::{
    ActionKind, Catalog, Creature, Outcome, Profile, Reaction, Size, StressEffect, Temperament,
};

use crate::error::{EngineError, EngineResult};

/// Feedback shown when a serpent strikes.
pub const SERPENT_ATTACK_FEEDBACK: &str = "You were attacked!";

/// The fixed outcome of touching a serpent.
pub fn serpent_attack() -> Outcome {
    Outcome::terminal(Reaction::Attack, SERPENT_ATTACK_FEEDBACK)
}

/// Returns true if the combination is governed by the fixed serpent rule.
pub fn is_fixed_rule(profile: Profile, action: ActionKind) -> bool {
    profile == Profile::Serpent && action == ActionKind::Touch
}

/// One row of the outcome table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    /// The creature profile this row applies to.
    pub profile: Profile,
    /// The probe this row applies to.
    pub action: ActionKind,
    /// What happens.
    pub outcome: Outcome,
}

/// Decision table mapping (profile, action kind) to an outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<TableEntry>", into = "Vec<TableEntry>")]
pub struct OutcomeTable {
    entries: Vec<TableEntry>,
    index: HashMap<(Profile, ActionKind), usize>,
}

impl TryFrom<Vec<TableEntry>> for OutcomeTable {
    type Error = EngineError;

    fn try_from(entries: Vec<TableEntry>) -> EngineResult<Self> {
        Self::from_entries(entries)
    }
}

impl From<OutcomeTable> for Vec<TableEntry> {
    fn from(table: OutcomeTable) -> Self {
        table.entries
    }
}

impl OutcomeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows, rejecting duplicates.
    pub fn from_entries(entries: impl IntoIterator<Item = TableEntry>) -> EngineResult<Self> {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry.profile, entry.action, entry.outcome)?;
        }
        Ok(table)
    }

    /// Add a row. Each combination may be defined once, and the serpent
    /// touch rule cannot be overridden.
    ///
    /// Rows only add stress. Attacks and session-ending outcomes belong to
    /// the fixed serpent rule and are rejected here.
    pub fn insert(
        &mut self,
        profile: Profile,
        action: ActionKind,
        outcome: Outcome,
    ) -> EngineResult<()> {
        if is_fixed_rule(profile, action) {
            return Err(EngineError::Configuration(format!(
                "the outcome of {action} on a {profile} is fixed and cannot be redefined"
            )));
        }
        if outcome.reaction == Reaction::Attack || outcome.stress == StressEffect::EndSession {
            return Err(EngineError::Configuration(format!(
                "the outcome for {profile} under {action} must be a plain reaction with a stress amount"
            )));
        }
        if self.index.contains_key(&(profile, action)) {
            return Err(EngineError::Configuration(format!(
                "duplicate outcome for {profile} under {action}"
            )));
        }
        self.index.insert((profile, action), self.entries.len());
        self.entries.push(TableEntry {
            profile,
            action,
            outcome,
        });
        Ok(())
    }

    /// Look up a row without applying the fixed serpent rule.
    pub fn get(&self, profile: Profile, action: ActionKind) -> Option<&Outcome> {
        self.index
            .get(&(profile, action))
            .map(|&i| &self.entries[i].outcome)
    }

    /// Resolve a probe against a creature.
    pub fn resolve(&self, creature: &Creature, action: ActionKind) -> EngineResult<Outcome> {
        let profile = creature.profile();
        if is_fixed_rule(profile, action) {
            return Ok(serpent_attack());
        }
        self.get(profile, action)
            .cloned()
            .ok_or(EngineError::UnhandledCombination { profile, action })
    }

    /// Every combination the catalog can reach that has no row.
    pub fn missing(&self, catalog: &Catalog) -> Vec<(Profile, ActionKind)> {
        let kinds = catalog.action_kinds();
        catalog
            .profiles()
            .into_iter()
            .flat_map(|p| kinds.iter().map(move |&k| (p, k)))
            .filter(|&(p, k)| !is_fixed_rule(p, k) && self.get(p, k).is_none())
            .collect()
    }

    /// Fail on the first combination the catalog can reach that has no row.
    pub fn check_coverage(&self, catalog: &Catalog) -> EngineResult<()> {
        match self.missing(catalog).first() {
            Some(&(profile, action)) => Err(EngineError::UnhandledCombination { profile, action }),
            None => Ok(()),
        }
    }

    /// All rows in insertion order.
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in table, covering every profile and action kind.
    pub fn standard() -> Self {
        let mut rows = Vec::new();

        for &size in Size::all() {
            let shake = match size {
                Size::Small => Reaction::Small,
                Size::Big => Reaction::Large,
            };
            for &temperament in Temperament::all() {
                let profile = Profile::Burrower { size, temperament };

                let liquid_stress = match temperament {
                    Temperament::Docile => 10,
                    Temperament::Restless | Temperament::Aggressive => 20,
                };
                rows.push(row(
                    profile,
                    ActionKind::Liquid,
                    shake,
                    "Something shook itself off in there...",
                    liquid_stress,
                ));

                let (reaction, feedback, stress) = match temperament {
                    Temperament::Docile => {
                        (Reaction::Small, "Hmm, seems like a gentle animal.", 15)
                    }
                    Temperament::Restless => (Reaction::Small, "Hmm, it's a little agitated.", 20),
                    Temperament::Aggressive => (Reaction::Large, "I got bitten!!", 50),
                };
                rows.push(row(profile, ActionKind::Touch, reaction, feedback, stress));

                let feedback = match (size, temperament) {
                    (Size::Small, Temperament::Docile) => "The box is fairly light.",
                    (Size::Small, _) => "The box is light.",
                    (Size::Big, _) => "What a heavy box!",
                };
                let (reaction, stress) = match temperament {
                    Temperament::Docile => (Reaction::Small, 10),
                    Temperament::Restless => (Reaction::Large, 10),
                    Temperament::Aggressive => (Reaction::Large, 30),
                };
                rows.push(row(profile, ActionKind::Agitate, reaction, feedback, stress));
            }
        }

        rows.push(row(
            Profile::Serpent,
            ActionKind::Liquid,
            Reaction::None,
            "No reaction...",
            0,
        ));
        rows.push(row(
            Profile::Serpent,
            ActionKind::Agitate,
            Reaction::Large,
            "It doesn't feel heavy, but it didn't like that.",
            30,
        ));

        let mut table = Self::new();
        for r in rows {
            // Rows above are unique by construction.
            table.index.insert((r.profile, r.action), table.entries.len());
            table.entries.push(r);
        }
        table
    }
}

fn row(
    profile: Profile,
    action: ActionKind,
    reaction: Reaction,
    feedback: &str,
    stress: u32,
) -> TableEntry {
    TableEntry {
        profile,
        action,
        outcome: Outcome::new(reaction, feedback, stress),
    }
}
