//! The creature and action catalog.
//!
//! A [`Catalog`] is validated on construction and immutable afterwards, so
//! every consumer can rely on it holding at least one creature, at least one
//! action, and no duplicate names.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionKind};
use crate::creature::{Category, Creature, Profile, Size, Temperament};
use crate::error::{CatalogError, CatalogResult};

/// Plain on-disk shape of a catalog, validated into a [`Catalog`].
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    /// Creature definitions as written.
    pub creatures: Vec<Creature>,
    /// Action definitions as written.
    pub actions: Vec<Action>,
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> CatalogResult<Self> {
        Catalog::new(file.creatures, file.actions)
    }
}

/// Ordered, validated creature and action definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile")]
pub struct Catalog {
    creatures: Vec<Creature>,
    actions: Vec<Action>,

    #[serde(skip)]
    action_by_name_lower: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or ambiguous definitions.
    pub fn new(creatures: Vec<Creature>, actions: Vec<Action>) -> CatalogResult<Self> {
        if creatures.is_empty() {
            return Err(CatalogError::NoCreatures);
        }
        if actions.is_empty() {
            return Err(CatalogError::NoActions);
        }

        let mut seen = HashSet::new();
        for creature in &creatures {
            if creature.name.trim().is_empty() {
                return Err(CatalogError::EmptyName("creature"));
            }
            if !seen.insert(creature.name.as_str()) {
                return Err(CatalogError::DuplicateCreature(creature.name.clone()));
            }
        }

        let mut action_by_name_lower = HashMap::new();
        for (index, action) in actions.iter().enumerate() {
            if action.name.trim().is_empty() {
                return Err(CatalogError::EmptyName("action"));
            }
            if action_by_name_lower
                .insert(action.name.to_lowercase(), index)
                .is_some()
            {
                return Err(CatalogError::DuplicateAction(action.name.clone()));
            }
        }

        Ok(Self {
            creatures,
            actions,
            action_by_name_lower,
        })
    }

    /// The built-in catalog: one burrower per size/temperament pair, two
    /// serpents, and one action of each kind.
    pub fn standard() -> Self {
        use Size::{Big, Small};
        use Temperament::{Aggressive, Docile, Restless};

        let creatures = vec![
            Creature::burrower("Dachshund", Small, Docile),
            Creature::burrower("Pomeranian", Small, Restless),
            Creature::burrower("Pinscher", Small, Aggressive),
            Creature::burrower("Saint Bernard", Big, Docile),
            Creature::burrower("Golden Retriever", Big, Restless),
            Creature::burrower("Rottweiler", Big, Aggressive),
            Creature::serpent("Coral Snake", true),
            Creature::serpent("Boa", false),
        ];
        let actions = vec![
            Action::new("Water", ActionKind::Liquid, 1),
            Action::new("Hand", ActionKind::Touch, 1),
            Action::new("Shake", ActionKind::Agitate, 2),
        ];

        Self {
            action_by_name_lower: actions
                .iter()
                .enumerate()
                .map(|(i, a)| (a.name.to_lowercase(), i))
                .collect(),
            creatures,
            actions,
        }
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the catalog as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All creatures in catalog order.
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// All actions in catalog order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Get a creature by its position in the catalog.
    pub fn creature(&self, index: usize) -> Option<&Creature> {
        self.creatures.get(index)
    }

    /// Find an action by name (case-insensitive).
    pub fn action(&self, name: &str) -> Option<&Action> {
        self.action_by_name_lower
            .get(&name.trim().to_lowercase())
            .and_then(|&i| self.actions.get(i))
    }

    /// Catalog indices of every creature in `category`.
    pub fn indices_of(&self, category: Category) -> Vec<usize> {
        self.creatures
            .iter()
            .enumerate()
            .filter(|(_, c)| c.category() == category)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of creatures in `category`.
    pub fn count_of(&self, category: Category) -> usize {
        self.creatures
            .iter()
            .filter(|c| c.category() == category)
            .count()
    }

    /// Distinct profiles of the catalog's creatures, in first-seen order.
    pub fn profiles(&self) -> Vec<Profile> {
        let mut seen = HashSet::new();
        self.creatures
            .iter()
            .map(Creature::profile)
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// Distinct action kinds of the catalog's actions, in first-seen order.
    pub fn action_kinds(&self) -> Vec<ActionKind> {
        let mut seen = HashSet::new();
        self.actions
            .iter()
            .map(|a| a.kind)
            .filter(|k| seen.insert(*k))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_action() -> Vec<Action> {
        vec![Action::new("Water", ActionKind::Liquid, 1)]
    }

    #[test]
    fn standard_catalog_is_valid() {
        let cat = Catalog::standard();
        let rebuilt = Catalog::new(cat.creatures().to_vec(), cat.actions().to_vec()).unwrap();
        assert_eq!(rebuilt.creatures().len(), 8);
        assert_eq!(rebuilt.actions().len(), 3);
        assert_eq!(cat.count_of(Category::Burrower), 6);
        assert_eq!(cat.count_of(Category::Serpent), 2);
    }

    #[test]
    fn empty_creatures_rejected() {
        let err = Catalog::new(Vec::new(), one_action()).unwrap_err();
        assert!(matches!(err, CatalogError::NoCreatures));
    }

    #[test]
    fn empty_actions_rejected() {
        let err = Catalog::new(vec![Creature::serpent("Boa", false)], Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::NoActions));
    }

    #[test]
    fn duplicate_creature_rejected() {
        let err = Catalog::new(
            vec![Creature::serpent("Boa", false), Creature::serpent("Boa", true)],
            one_action(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCreature(name) if name == "Boa"));
    }

    #[test]
    fn duplicate_action_is_case_insensitive() {
        let err = Catalog::new(
            vec![Creature::serpent("Boa", false)],
            vec![
                Action::new("Water", ActionKind::Liquid, 1),
                Action::new("WATER", ActionKind::Touch, 1),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateAction(_)));
    }

    #[test]
    fn blank_names_rejected() {
        let err = Catalog::new(vec![Creature::serpent("  ", false)], one_action()).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName("creature")));
    }

    #[test]
    fn action_lookup_case_insensitive() {
        let cat = Catalog::standard();
        assert_eq!(cat.action("shake").unwrap().kind, ActionKind::Agitate);
        assert_eq!(cat.action(" HAND ").unwrap().kind, ActionKind::Touch);
        assert!(cat.action("kick").is_none());
    }

    #[test]
    fn indices_by_category() {
        let cat = Catalog::standard();
        let serpents = cat.indices_of(Category::Serpent);
        assert_eq!(serpents, vec![6, 7]);
        for i in serpents {
            assert_eq!(cat.creature(i).unwrap().category(), Category::Serpent);
        }
    }

    #[test]
    fn profiles_deduplicated() {
        let cat = Catalog::standard();
        // Two serpents share one profile.
        assert_eq!(cat.profiles().len(), 7);
        assert_eq!(cat.action_kinds().len(), 3);
    }

    #[test]
    fn json_round_trip_keeps_lookup() {
        let cat = Catalog::standard();
        let json = cat.to_json_pretty().unwrap();
        let back = Catalog::from_json(&json).unwrap();
        assert_eq!(back.creatures(), cat.creatures());
        assert!(back.action("water").is_some());
    }

    #[test]
    fn json_validation_applies() {
        let json = r#"{"creatures": [], "actions": [{"name": "Water", "kind": "liquid", "cost": 1}]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("no creatures"));
    }
}
