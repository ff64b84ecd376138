//! Craftability matching: which elixirs can be fully brewed from a set
//! of available ingredients.

use std::collections::{HashMap, HashSet};

use crate::catalog::CatalogService;
use crate::error::Result;
use crate::models::{Elixir, IngredientKey};

/// Computes the set of elixirs fully craftable from `available`.
///
/// Candidates come from the per-ingredient reverse lookup instead of a
/// full catalog scan: only elixirs requiring at least one available
/// ingredient can possibly match. A lookup failure for any ingredient
/// aborts the whole query; silently skipping it would under-report
/// candidates.
pub fn find_craftable(
    catalog: &CatalogService,
    available: &HashSet<IngredientKey>,
) -> Result<HashSet<Elixir>> {
    let mut candidates: HashMap<String, Elixir> = HashMap::new();

    for ingredient in available {
        for elixir in catalog.find_elixirs_requiring(ingredient.as_str())? {
            candidates.entry(elixir.id.clone()).or_insert(elixir);
        }
    }

    log::debug!(
        "Craftability check: {} candidate elixirs from {} ingredients",
        candidates.len(),
        available.len()
    );

    Ok(candidates
        .into_values()
        .filter(|elixir| has_all_ingredients(elixir, available))
        .collect())
}

/// Full-subset containment by normalized ingredient name. An elixir
/// with no listed ingredients is placeholder data, never craftable.
fn has_all_ingredients(elixir: &Elixir, available: &HashSet<IngredientKey>) -> bool {
    if elixir.ingredients.is_empty() {
        return false;
    }

    // A recipe larger than the pantry cannot possibly be a subset.
    if elixir.ingredients.len() > available.len() {
        return false;
    }

    elixir
        .ingredients
        .iter()
        .all(|ingredient| available.contains(&ingredient.key()))
}
