use crate::id::NutrientId;
use crate::item::ItemRef;
use serde::Serialize;

/// A validated nutrient.
///
/// Serialize-only: a nutrient is only ever built by compiling raw
/// definitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nutrient {
    pub name: String,
    pub icon: ItemRef,
    /// ARGB, alpha always `0xFF`.
    pub color: u32,
    /// Decay percentage in `[-100, 100]`.
    pub decay: f64,
    pub food_ore_tags: Vec<String>,
    pub food_items: Vec<ItemRef>,
}

impl Nutrient {
    pub fn rgb(&self) -> u32 {
        self.color & 0x00FF_FFFF
    }

    pub fn contains_food(&self, item: &ItemRef) -> bool {
        self.food_items.contains(item)
    }
}

/// The compiled nutrient table. Immutable once built.
///
/// Order is the submission order of the raw definitions. Names are not
/// required to be unique; name lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NutrientTable {
    nutrients: Vec<Nutrient>,
}

impl NutrientTable {
    pub(crate) fn from_vec(nutrients: Vec<Nutrient>) -> Self {
        Self { nutrients }
    }

    pub fn list(&self) -> &[Nutrient] {
        &self.nutrients
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Nutrient> {
        self.nutrients.iter().find(|n| n.name == name)
    }

    pub fn id_of(&self, name: &str) -> Option<NutrientId> {
        self.nutrients
            .iter()
            .position(|n| n.name == name)
            .and_then(|i| u32::try_from(i).ok())
            .map(NutrientId)
    }

    pub fn get(&self, id: NutrientId) -> Option<&Nutrient> {
        self.nutrients.get(id.0 as usize)
    }

    /// Nutrients that list this exact item among their foods.
    pub fn nutrients_for_food<'a>(
        &'a self,
        item: &'a ItemRef,
    ) -> impl Iterator<Item = &'a Nutrient> {
        self.nutrients.iter().filter(move |n| n.contains_food(item))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Nutrient> {
        self.nutrients.iter()
    }

    pub fn len(&self) -> usize {
        self.nutrients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nutrients.is_empty()
    }
}

impl<'a> IntoIterator for &'a NutrientTable {
    type Item = &'a Nutrient;
    type IntoIter = std::slice::Iter<'a, Nutrient>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
