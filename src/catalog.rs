//! Catalog queries backed by the read-through cache.

use crate::api::WizardWorldClient;
use crate::cache::CacheAside;
use crate::error::{Error, Result};
use crate::models::{Elixir, Ingredient};

const CACHE_KEY_ELIXIRS: &str = "elixirs:all";
const CACHE_KEY_INGREDIENTS: &str = "ingredients:all";
const CACHE_KEY_INGREDIENT_NAME_PREFIX: &str = "ingredient:name:";
const CACHE_KEY_ELIXIR_BY_INGREDIENT_PREFIX: &str = "elixir:ingredient:";

/// The four catalog queries, each a single cached read with a
/// deterministic key.
pub struct CatalogService {
    api: WizardWorldClient,
    cache: CacheAside,
}

impl CatalogService {
    pub fn new(api: WizardWorldClient, cache: CacheAside) -> Self {
        Self { api, cache }
    }

    /// All ingredients known to the catalog
    pub fn list_ingredients(&self) -> Result<Vec<Ingredient>> {
        self.cache
            .read(CACHE_KEY_INGREDIENTS, || self.api.all_ingredients())
    }

    /// All elixirs known to the catalog
    pub fn list_elixirs(&self) -> Result<Vec<Elixir>> {
        self.cache.read(CACHE_KEY_ELIXIRS, || self.api.all_elixirs())
    }

    /// First ingredient matching the name, or `None` when the catalog
    /// has no match. Cached under its own key, independent of the full
    /// ingredient listing.
    pub fn find_ingredient_by_name(&self, name: &str) -> Result<Option<Ingredient>> {
        let name = require_name(name)?;
        let key = format!("{}{}", CACHE_KEY_INGREDIENT_NAME_PREFIX, name);

        self.cache.read_optional(&key, || {
            Ok(self.api.ingredients_by_name(name)?.into_iter().next())
        })
    }

    /// Whether the catalog knows the ingredient at all. Delegates to
    /// `find_ingredient_by_name`, so it shares its caching and error
    /// behavior.
    pub fn ingredient_exists(&self, name: &str) -> Result<bool> {
        Ok(self.find_ingredient_by_name(name)?.is_some())
    }

    /// Every elixir whose recipe requires the ingredient. Possibly
    /// empty; cached per ingredient name.
    pub fn find_elixirs_requiring(&self, name: &str) -> Result<Vec<Elixir>> {
        let name = require_name(name)?;
        let key = format!("{}{}", CACHE_KEY_ELIXIR_BY_INGREDIENT_PREFIX, name);

        self.cache.read(&key, || self.api.elixirs_by_ingredient(name))
    }
}

/// Blank names are rejected before any cache or network I/O.
fn require_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(
            "ingredient name must not be blank".to_string(),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheAside;

    fn service() -> CatalogService {
        // Port 9 (discard) is never listening; these tests must fail
        // before any I/O happens.
        let api = WizardWorldClient::new("http://127.0.0.1:9").unwrap();
        CatalogService::new(api, CacheAside::disabled())
    }

    #[test]
    fn blank_name_is_rejected_before_any_io() {
        let catalog = service();

        assert!(matches!(
            catalog.find_ingredient_by_name("   "),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            catalog.find_elixirs_requiring(""),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            catalog.ingredient_exists("\t"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn names_are_trimmed_for_validation() {
        assert_eq!(require_name("  Moonstone  ").unwrap(), "Moonstone");
    }
}
