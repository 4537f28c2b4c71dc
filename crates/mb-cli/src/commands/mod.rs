pub mod catalog;
pub mod check;
pub mod init;
pub mod play;

use std::path::Path;

use mb_engine::GameData;

/// Load game data from a file, or fall back to the built-in game.
fn load_data(path: Option<&Path>) -> Result<GameData, String> {
    match path {
        Some(path) => GameData::load(path).map_err(|e| e.to_string()),
        None => Ok(GameData::standard()),
    }
}
