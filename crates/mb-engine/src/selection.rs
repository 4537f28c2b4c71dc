//! Picking the creature that goes in the box.
//!
//! A percentile roll first decides the category (serpent or burrower), then
//! a uniform draw picks one creature of that category.

use mb_core::{Catalog, Category};

use crate::error::{EngineError, EngineResult};
use crate::random::RandomSource;

/// Select a creature and return its catalog index.
///
/// The box holds a serpent when the roll is at most `serpent_probability`.
/// An empty pool for the rolled category is a configuration error.
pub fn select_creature(
    catalog: &Catalog,
    serpent_probability: f64,
    rng: &mut impl RandomSource,
) -> EngineResult<usize> {
    let roll = rng.percent();
    let category = if roll <= serpent_probability {
        Category::Serpent
    } else {
        Category::Burrower
    };

    let pool = catalog.indices_of(category);
    if pool.is_empty() {
        return Err(EngineError::Configuration(format!(
            "rolled {roll:.2} against {serpent_probability} but the catalog has no {category} creatures"
        )));
    }

    let draw = rng.index(pool.len());
    let index = *pool.get(draw).ok_or_else(|| {
        EngineError::Configuration(format!(
            "random source drew index {draw} from a pool of {}",
            pool.len()
        ))
    })?;
    tracing::debug!(roll, %category, index, "creature selected");
    Ok(index)
}
