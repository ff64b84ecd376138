//! Wizard World Potion Crafter
//!
//! Fetches the ingredient and elixir catalogs from the Wizard World
//! API through a read-through TTL cache and answers which elixirs can
//! be fully crafted from a set of available ingredients.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod console;
pub mod crafting;
pub mod error;
pub mod models;

// Re-export commonly used items
pub use api::WizardWorldClient;
pub use cache::{CacheAside, CacheStore, MemoryStore};
pub use catalog::CatalogService;
pub use config::Config;
pub use crafting::find_craftable;
pub use error::{Error, Result};
pub use models::{Elixir, Ingredient, IngredientKey};
