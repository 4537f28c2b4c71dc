use std::path::Path;

use mb_core::Category;

pub fn run(file: &Path) -> Result<(), String> {
    let data = super::load_data(Some(file))?;
    let catalog = &data.catalog;

    println!("  All checks passed for '{}'.", file.display());
    println!(
        "  {} creatures ({} burrowers, {} serpents), {} actions, {} outcomes",
        catalog.creatures().len(),
        catalog.count_of(Category::Burrower),
        catalog.count_of(Category::Serpent),
        catalog.actions().len(),
        data.table.len(),
    );

    Ok(())
}
