use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use mb_core::Category;

pub fn run(data: Option<&Path>) -> Result<(), String> {
    let data = super::load_data(data)?;
    let catalog = &data.catalog;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Action", "Kind", "Cost"]);
    for action in catalog.actions() {
        table.add_row(vec![
            action.name.clone(),
            action.kind.to_string(),
            action.cost.to_string(),
        ]);
    }
    println!("{table}");
    println!();

    let mut creatures = Table::new();
    creatures.set_content_arrangement(ContentArrangement::Dynamic);
    creatures.set_header(vec!["Category", "Creatures"]);
    for &category in Category::all() {
        creatures.add_row(vec![
            category.to_string(),
            catalog.count_of(category).to_string(),
        ]);
    }
    println!("{creatures}");
    println!();
    println!(
        "  {} actions, {} creatures",
        catalog.actions().len(),
        catalog.creatures().len()
    );

    Ok(())
}
