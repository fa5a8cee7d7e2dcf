//! Shared test helpers for unit and integration tests.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`.

use crate::catalog::{Catalog, CatalogBuilder, Edibility};
use crate::compiler::{CompileError, NutrientCompiler};
use crate::config::NutritionConfig;
use crate::diagnostics::CollectorSink;
use crate::item::ItemRef;
use crate::nutrient::NutrientTable;
use crate::store::{RawDefinitionStore, RawNutrient};

// ===========================================================================
// Item identifiers
// ===========================================================================

pub const APPLE: &str = "minecraft:apple";
pub const BREAD: &str = "minecraft:bread";
pub const BEEF: &str = "minecraft:cooked_beef";
pub const STICK: &str = "minecraft:stick";
pub const GOLDEN_APPLE: &str = "minecraft:golden_apple";
pub const GOLDEN_APPLE_1: &str = "minecraft:golden_apple:1";
pub const FISH: &str = "minecraft:cooked_fish";

// ===========================================================================
// Catalog
// ===========================================================================

/// A small vanilla-like catalog.
///
/// Apples, bread and beef are edible in any variant, golden apples only in
/// variants 0 and 1, cooked fish only in variants 0 to 3, and sticks never.
pub fn food_catalog() -> Catalog {
    let mut b = CatalogBuilder::new();
    b.register_food(APPLE).unwrap();
    b.register_food(BREAD).unwrap();
    b.register_food(BEEF).unwrap();
    b.register_item(STICK, Edibility::Inedible).unwrap();
    b.register_item(GOLDEN_APPLE, Edibility::Variants(vec![0, 1]))
        .unwrap();
    b.register_item(FISH, Edibility::Variants(vec![0, 1, 2, 3]))
        .unwrap();
    b.build()
}

/// Look up an item reference, panicking if the identifier is unknown.
pub fn item(catalog: &Catalog, identifier: &str, variant: u32) -> ItemRef {
    let id = catalog
        .item_id(identifier)
        .unwrap_or_else(|| panic!("unknown test item {identifier}"));
    ItemRef::new(id, variant)
}

// ===========================================================================
// Compile helpers
// ===========================================================================

/// Compile `defs` against [`food_catalog`], collecting diagnostics.
pub fn compile_defs(
    defs: Vec<RawNutrient>,
    config: &NutritionConfig,
) -> (Result<NutrientTable, CompileError>, CollectorSink) {
    let catalog = food_catalog();
    let sink = CollectorSink::new();
    let mut store = RawDefinitionStore::new();
    store.register_all(defs);
    let result = NutrientCompiler::new(config, &catalog, &catalog, &sink).compile(store);
    (result, sink)
}
