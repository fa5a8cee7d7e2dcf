//! Serde data file structs for nutrient definitions.
//!
//! These mirror the on-disk shape of a nutrient file. Every field is
//! optional at this level; required-field checks happen when the
//! definitions are compiled.

use nutrition_core::store::RawNutrient;
use serde::Deserialize;

/// A nutrient definition in a data file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NutrientData {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub enabled: Option<bool>,
    pub decay: Option<f64>,
    pub food: Option<FoodData>,
}

/// The foods that supply a nutrient.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodData {
    /// Ore dictionary tags, passed through untouched.
    pub oredict: Option<Vec<String>>,
    /// `namespace:name[:variant]` references. A `null` entry is kept.
    pub items: Option<Vec<Option<String>>>,
}

/// TOML wrapper: `[[nutrients]]` array of tables.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlNutrients {
    pub nutrients: Vec<NutrientData>,
}

impl From<NutrientData> for RawNutrient {
    fn from(data: NutrientData) -> Self {
        let food = data.food.unwrap_or_default();
        RawNutrient {
            name: data.name,
            icon: data.icon,
            color: data.color,
            enabled: data.enabled,
            decay: data.decay,
            food_ore_tags: food.oredict,
            food_items: food.items,
        }
    }
}
