//! Everything a session plays against, loadable from one JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use mb_core::Catalog;
use mb_core::catalog::CatalogFile;

use crate::error::{EngineError, EngineResult};
use crate::flavor::FlavorText;
use crate::table::OutcomeTable;

/// Unvalidated shape of a game data file.
#[derive(Deserialize)]
struct GameDataFile {
    catalog: CatalogFile,
    table: OutcomeTable,
    #[serde(default)]
    flavor: FlavorText,
}

impl TryFrom<GameDataFile> for GameData {
    type Error = EngineError;

    fn try_from(file: GameDataFile) -> EngineResult<Self> {
        Self::new(Catalog::try_from(file.catalog)?, file.table, file.flavor)
    }
}

/// Catalog, outcome table, and messages for a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GameDataFile")]
pub struct GameData {
    /// Creatures and actions.
    pub catalog: Catalog,
    /// What each action does to each creature profile.
    pub table: OutcomeTable,
    /// End-of-session messages.
    #[serde(default)]
    pub flavor: FlavorText,
}

impl GameData {
    /// Bundle data and check that the table covers the catalog.
    pub fn new(catalog: Catalog, table: OutcomeTable, flavor: FlavorText) -> EngineResult<Self> {
        let data = Self {
            catalog,
            table,
            flavor,
        };
        data.validate()?;
        Ok(data)
    }

    /// The built-in game.
    pub fn standard() -> Self {
        Self {
            catalog: Catalog::standard(),
            table: OutcomeTable::standard(),
            flavor: FlavorText::default(),
        }
    }

    /// Parse and validate game data from JSON.
    ///
    /// Syntax errors come back as [`EngineError::Json`], an invalid catalog
    /// as [`EngineError::Catalog`].
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let file: GameDataFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    /// Read, parse, and validate a game data file.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every reachable creature/action combination has an outcome.
    pub fn validate(&self) -> EngineResult<()> {
        self.table.check_coverage(&self.catalog)
    }
}
