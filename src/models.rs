use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Normalized ingredient identity: the lowercased, trimmed name.
///
/// Two ingredients that differ only in case are the same entity, so all
/// set membership and hashing goes through this key while the catalog
/// spelling stays available for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IngredientKey(String);

impl IngredientKey {
    pub fn new(name: &str) -> Self {
        IngredientKey(name.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A catalog ingredient as returned by the Wizard World API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
}

impl Ingredient {
    /// Identity key used for equality and set membership
    pub fn key(&self) -> IngredientKey {
        IngredientKey::new(&self.name)
    }
}

// Identity is the case-normalized name, not the id.
impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ingredient {}

impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A catalog elixir. Descriptive fields are nullable on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Elixir {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub effect: Option<String>,
    #[serde(default)]
    pub side_effects: Option<String>,
    #[serde(default)]
    pub characteristics: Option<String>,
    #[serde(default)]
    pub brew_time: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub manufacturer: Option<String>,
}

// Identity is the id field; two fetches of the same elixir compare equal
// even if descriptive fields drift.
impl PartialEq for Elixir {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Elixir {}

impl Hash for Elixir {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Elixir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dash = |field: &Option<String>| -> String {
            field.clone().unwrap_or_else(|| "-".to_string())
        };

        let ingredients = if self.ingredients.is_empty() {
            "None".to_string()
        } else {
            self.ingredients
                .iter()
                .map(|i| i.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Effect: {}", dash(&self.effect))?;
        writeln!(f, "Side effects: {}", dash(&self.side_effects))?;
        writeln!(f, "Characteristics: {}", dash(&self.characteristics))?;
        writeln!(f, "Brew time: {}", dash(&self.brew_time))?;
        writeln!(f, "Difficulty: {}", dash(&self.difficulty))?;
        writeln!(f, "Ingredients: [{}]", ingredients)?;
        writeln!(f, "Manufacturer: {}", dash(&self.manufacturer))?;
        write!(f, "-----------------------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ingredient(id: &str, name: &str) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn ingredient_equality_ignores_case() {
        let a = ingredient("1", "Unicorn Hair");
        let b = ingredient("2", "unicorn hair");

        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ingredient_key_trims_and_lowercases() {
        let key = IngredientKey::new("  Wolfsbane ");
        assert_eq!(key.as_str(), "wolfsbane");
        assert_eq!(key, IngredientKey::new("WOLFSBANE"));
    }

    #[test]
    fn elixir_equality_is_by_id_only() {
        let a = Elixir {
            id: "e1".to_string(),
            name: "Draught of Peace".to_string(),
            effect: Some("Calms anxiety".to_string()),
            side_effects: None,
            characteristics: None,
            brew_time: None,
            difficulty: Some("Advanced".to_string()),
            ingredients: vec![],
            manufacturer: None,
        };
        let mut b = a.clone();
        b.name = "Renamed".to_string();
        b.effect = None;

        assert_eq!(a, b);

        let mut c = a.clone();
        c.id = "e2".to_string();
        assert_ne!(a, c);
    }

    #[test]
    fn elixir_deserializes_camel_case_wire_format() {
        let json = r#"{
            "id": "e1",
            "name": "Sleeping Draught",
            "effect": "Induces sleep",
            "sideEffects": "Drowsiness",
            "characteristics": "Purple smoke",
            "brewTime": "2 hours",
            "difficulty": "Beginner",
            "ingredients": [{"id": "i1", "name": "Lavender"}],
            "manufacturer": "Slug & Jiggers"
        }"#;

        let elixir: Elixir = serde_json::from_str(json).unwrap();
        assert_eq!(elixir.id, "e1");
        assert_eq!(elixir.side_effects.as_deref(), Some("Drowsiness"));
        assert_eq!(elixir.brew_time.as_deref(), Some("2 hours"));
        assert_eq!(elixir.ingredients.len(), 1);
        assert_eq!(elixir.ingredients[0].name, "Lavender");
    }

    #[test]
    fn elixir_tolerates_missing_and_null_fields() {
        let json = r#"{"id": "e2", "name": "Mystery Brew", "effect": null}"#;

        let elixir: Elixir = serde_json::from_str(json).unwrap();
        assert_eq!(elixir.name, "Mystery Brew");
        assert!(elixir.effect.is_none());
        assert!(elixir.ingredients.is_empty());
    }

    #[test]
    fn elixir_display_uses_dash_placeholders() {
        let elixir = Elixir {
            id: "e3".to_string(),
            name: "Pepperup Potion".to_string(),
            effect: Some("Cures the common cold".to_string()),
            side_effects: None,
            characteristics: None,
            brew_time: None,
            difficulty: None,
            ingredients: vec![ingredient("i1", "Bicorn horn"), ingredient("i2", "Mandrake root")],
            manufacturer: None,
        };

        let rendered = elixir.to_string();
        assert!(rendered.contains("Name: Pepperup Potion"));
        assert!(rendered.contains("Side effects: -"));
        assert!(rendered.contains("Ingredients: [Bicorn horn, Mandrake root]"));
    }
}
