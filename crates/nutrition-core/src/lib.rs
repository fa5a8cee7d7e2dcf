//! Nutrition Core -- compiles raw nutrient definitions into a validated,
//! queryable nutrient table.
//!
//! # Lifecycle
//!
//! 1. **Load** -- A loader submits [`store::RawNutrient`] definitions to a
//!    [`context::NutritionContext`] (or a bare [`store::RawDefinitionStore`]).
//! 2. **Compile** -- Once the host's item catalog is fully populated, the
//!    definitions are compiled exactly once. Defaults are applied, decay
//!    rates and colours validated, and food references resolved.
//! 3. **Query** -- The resulting [`nutrient::NutrientTable`] is immutable and
//!    answers `list` and `find_by_name`.
//!
//! ```rust,ignore
//! let mut ctx = NutritionContext::new();
//! ctx.register(RawNutrient::new("fruit", "minecraft:apple", "00ff00"));
//! let table = ctx.compile(&config, &catalog, &catalog, &TracingSink)?;
//! let fruit = table.find_by_name("fruit");
//! ```
//!
//! # Key Types
//!
//! - [`catalog::ItemCatalog`] / [`catalog::FoodPredicate`] -- The host's item
//!   lookup and edibility check. [`catalog::Catalog`] implements both.
//! - [`compiler::NutrientCompiler`] -- The single-pass validation pipeline.
//! - [`diagnostics::DiagnosticsSink`] -- Receives `Fatal`/`Error`/`Warn`
//!   diagnostics raised while compiling.
//! - [`item_ref::parse_item_ref`] -- Parser for `namespace:name[:variant]`.

pub mod catalog;
pub mod color;
pub mod compiler;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod id;
pub mod item;
pub mod item_ref;
pub mod nutrient;
pub mod store;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
