use std::fs;
use std::path::Path;

use mb_engine::GameData;

pub fn run(file: &Path) -> Result<(), String> {
    if file.exists() {
        return Err(format!("'{}' already exists", file.display()));
    }

    let json = GameData::standard()
        .to_json_pretty()
        .map_err(|e| e.to_string())?;
    fs::write(file, json).map_err(|e| format!("cannot write {}: {e}", file.display()))?;

    println!("Created game data in {}", file.display());
    println!();
    println!("Next steps:");
    println!("  # Edit creatures, actions and outcomes");
    println!("  mb check {}        # Validate your changes", file.display());
    println!("  mb play --data {}  # Play with them", file.display());

    Ok(())
}
