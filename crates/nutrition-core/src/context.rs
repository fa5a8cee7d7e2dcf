//! Owner of the nutrient lifecycle: load, compile once, query.

use crate::catalog::{FoodPredicate, ItemCatalog};
use crate::compiler::{CompileError, NutrientCompiler};
use crate::config::NutritionConfig;
use crate::diagnostics::DiagnosticsSink;
use crate::nutrient::{Nutrient, NutrientTable};
use crate::store::{RawDefinitionStore, RawNutrient};

#[derive(Debug)]
enum Phase {
    Loading(RawDefinitionStore),
    Compiled(NutrientTable),
    Failed,
}

/// Holds the raw store until compile, and the compiled table after.
///
/// Registration is only possible while loading. Compile may run once; a
/// second attempt, after success or failure, returns
/// [`CompileError::AlreadyCompiled`].
#[derive(Debug)]
pub struct NutritionContext {
    phase: Phase,
}

impl Default for NutritionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl NutritionContext {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading(RawDefinitionStore::new()),
        }
    }

    /// Start from an already populated store.
    pub fn with_store(store: RawDefinitionStore) -> Self {
        Self {
            phase: Phase::Loading(store),
        }
    }

    /// Queue a definition. Returns false once compile has run.
    pub fn register(&mut self, definition: RawNutrient) -> bool {
        match self.store_mut() {
            Some(store) => {
                store.register(definition);
                true
            }
            None => false,
        }
    }

    /// Queue several definitions. Returns false once compile has run.
    pub fn register_all<I>(&mut self, definitions: I) -> bool
    where
        I: IntoIterator<Item = RawNutrient>,
    {
        match self.store_mut() {
            Some(store) => {
                store.register_all(definitions);
                true
            }
            None => false,
        }
    }

    /// The raw store, while it still accepts definitions.
    pub fn store_mut(&mut self) -> Option<&mut RawDefinitionStore> {
        match &mut self.phase {
            Phase::Loading(store) => Some(store),
            _ => None,
        }
    }

    pub fn compile(
        &mut self,
        config: &NutritionConfig,
        catalog: &dyn ItemCatalog,
        food: &dyn FoodPredicate,
        sink: &dyn DiagnosticsSink,
    ) -> Result<&NutrientTable, CompileError> {
        let store = match std::mem::replace(&mut self.phase, Phase::Failed) {
            Phase::Loading(store) => store,
            other => {
                self.phase = other;
                return Err(CompileError::AlreadyCompiled);
            }
        };

        let table = NutrientCompiler::new(config, catalog, food, sink).compile(store)?;
        self.phase = Phase::Compiled(table);
        self.nutrients().ok_or(CompileError::AlreadyCompiled)
    }

    pub fn is_compiled(&self) -> bool {
        matches!(self.phase, Phase::Compiled(_))
    }

    /// The compiled table, if compile succeeded.
    pub fn nutrients(&self) -> Option<&NutrientTable> {
        match &self.phase {
            Phase::Compiled(table) => Some(table),
            _ => None,
        }
    }

    /// All compiled nutrients, empty before a successful compile.
    pub fn list(&self) -> &[Nutrient] {
        self.nutrients().map(NutrientTable::list).unwrap_or(&[])
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Nutrient> {
        self.nutrients()?.find_by_name(name)
    }
}
