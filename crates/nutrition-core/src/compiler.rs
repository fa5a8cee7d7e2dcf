//! Compiles raw definitions into the nutrient table.
//!
//! Problems are handled at three levels:
//!
//! - **Fatal** -- missing name/icon/colour, a malformed colour, or a null
//!   food entry. A `Fatal` diagnostic is emitted and the whole compile
//!   returns an error; nothing compiled so far is kept.
//! - **Per definition** -- a decay override outside `[-100, 100]`. An
//!   `Error` diagnostic is emitted and that definition is dropped.
//! - **Per item** -- an unparseable variant, an unknown item, or an item
//!   that is not a valid food. The item is dropped (with a `Warn`, except
//!   unknown items when `log_missing_food` is off) and the definition
//!   compiles with what remains.
//!
//! Disabled definitions are skipped without a diagnostic.

use crate::catalog::{FoodPredicate, ItemCatalog};
use crate::color::{ColorError, parse_color};
use crate::config::{NutritionConfig, decay_in_range};
use crate::diagnostics::{Diagnostic, DiagnosticsSink};
use crate::item::ItemRef;
use crate::item_ref::{ItemRefError, parse_item_ref};
use crate::nutrient::{Nutrient, NutrientTable};
use crate::store::{RawDefinitionStore, RawNutrient};

const MISSING_REQUIRED: &str =
    "Missing or invalid definition. A name, icon, and color are required.";

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("definition #{index} is missing its {field}")]
    MissingRequiredField { index: usize, field: &'static str },
    #[error("invalid color {value:?} in '{name}': {source}")]
    InvalidColor {
        name: String,
        value: String,
        source: ColorError,
    },
    #[error("null food item in '{nutrient}'")]
    NullFoodItem { nutrient: String },
    #[error("nutrient definitions have already been compiled")]
    AlreadyCompiled,
}

/// Outcome of compiling a single definition that did not abort.
enum Compiled {
    Nutrient(Nutrient),
    Disabled,
    Dropped,
}

/// Single-pass compiler over a [`RawDefinitionStore`].
pub struct NutrientCompiler<'a> {
    config: &'a NutritionConfig,
    catalog: &'a dyn ItemCatalog,
    food: &'a dyn FoodPredicate,
    sink: &'a dyn DiagnosticsSink,
}

impl<'a> NutrientCompiler<'a> {
    pub fn new(
        config: &'a NutritionConfig,
        catalog: &'a dyn ItemCatalog,
        food: &'a dyn FoodPredicate,
        sink: &'a dyn DiagnosticsSink,
    ) -> Self {
        Self {
            config,
            catalog,
            food,
            sink,
        }
    }

    /// Compile every definition in submission order.
    pub fn compile(&self, store: RawDefinitionStore) -> Result<NutrientTable, CompileError> {
        let definitions = store.into_definitions();
        let total = definitions.len();
        let mut nutrients = Vec::with_capacity(total);
        let mut disabled = 0usize;

        for (index, raw) in definitions.into_iter().enumerate() {
            match self.compile_one(index, raw)? {
                Compiled::Nutrient(nutrient) => nutrients.push(nutrient),
                Compiled::Disabled => disabled += 1,
                Compiled::Dropped => {}
            }
        }

        tracing::debug!(
            total,
            compiled = nutrients.len(),
            disabled,
            dropped = total - nutrients.len() - disabled,
            "compiled nutrient definitions"
        );
        Ok(NutrientTable::from_vec(nutrients))
    }

    fn compile_one(&self, index: usize, raw: RawNutrient) -> Result<Compiled, CompileError> {
        if !raw.is_enabled() {
            return Ok(Compiled::Disabled);
        }

        let name = self.required(index, raw.name, "name")?;
        let icon = self.required(index, raw.icon, "icon")?;
        let color_hex = self.required(index, raw.color, "color")?;

        let icon = self
            .catalog
            .resolve(&icon)
            .map(ItemRef::base)
            .unwrap_or(ItemRef::EMPTY);

        let color = parse_color(&color_hex).map_err(|source| {
            self.sink.emit(Diagnostic::fatal(MISSING_REQUIRED));
            CompileError::InvalidColor {
                name: name.clone(),
                value: color_hex.clone(),
                source,
            }
        })?;

        let decay = match raw.decay {
            None => self.config.default_decay,
            Some(rate) if decay_in_range(rate) => rate,
            Some(_) => {
                self.sink.emit(Diagnostic::error(format!(
                    "Decay rate must be between -100 and 100 ({name})."
                )));
                return Ok(Compiled::Dropped);
            }
        };

        let food_ore_tags = raw.food_ore_tags.unwrap_or_default();

        let mut food_items = Vec::new();
        for reference in raw.food_items.unwrap_or_default() {
            let reference = match reference {
                Some(r) if !r.is_empty() => r,
                _ => {
                    self.sink.emit(Diagnostic::fatal(format!(
                        "There is a null item in the '{name}' definition. Check for a trailing separator."
                    )));
                    return Err(CompileError::NullFoodItem { nutrient: name });
                }
            };
            if let Some(item) = self.compile_food(&name, &reference) {
                food_items.push(item);
            }
        }

        Ok(Compiled::Nutrient(Nutrient {
            name,
            icon,
            color,
            decay,
            food_ore_tags,
            food_items,
        }))
    }

    /// Resolve one food reference, or report why it was dropped.
    fn compile_food(&self, nutrient: &str, reference: &str) -> Option<ItemRef> {
        let parsed = match parse_item_ref(reference) {
            Ok(parsed) => parsed,
            Err(err @ ItemRefError::InvalidVariant { .. }) => {
                self.sink.emit(Diagnostic::warn(err.to_string()));
                return None;
            }
            Err(ItemRefError::Empty) => return None,
        };

        let Some(item) = self.catalog.resolve(parsed.base) else {
            if self.config.log_missing_food {
                self.sink.emit(Diagnostic::warn(format!(
                    "Nutrient provided food doesn't exist: {reference} ({nutrient})"
                )));
            }
            return None;
        };

        let candidate = ItemRef::new(item, parsed.variant_or_default());
        if !self.food.is_valid_food(&candidate) {
            self.sink.emit(Diagnostic::warn(format!(
                "{} is not a valid food ({reference})",
                parsed.base
            )));
            return None;
        }
        Some(candidate)
    }

    fn required(
        &self,
        index: usize,
        value: Option<String>,
        field: &'static str,
    ) -> Result<String, CompileError> {
        match value {
            Some(v) if !v.is_empty() => Ok(v),
            _ => {
                self.sink.emit(Diagnostic::fatal(MISSING_REQUIRED));
                Err(CompileError::MissingRequiredField { index, field })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectorSink, Severity};
    use crate::test_utils::*;

    #[test]
    fn empty_store_compiles_to_empty_table() {
        let (result, sink) = compile_defs(vec![], &NutritionConfig::default());
        assert!(result.unwrap().is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn full_definition_compiles() {
        let def = RawNutrient::new("fruit", APPLE, "00ff00")
            .decay(2.0)
            .ore_tags(["listAllfruit", "cropApple"])
            .food_items([APPLE, GOLDEN_APPLE_1]);
        let (result, sink) = compile_defs(vec![def], &NutritionConfig::default());
        let table = result.unwrap();
        let catalog = food_catalog();

        let fruit = table.find_by_name("fruit").unwrap();
        assert_eq!(fruit.icon, item(&catalog, APPLE, 0));
        assert_eq!(fruit.color, 0xFF00FF00);
        assert_eq!(fruit.decay, 2.0);
        assert_eq!(fruit.food_ore_tags, ["listAllfruit", "cropApple"]);
        assert_eq!(
            fruit.food_items,
            [item(&catalog, APPLE, 0), item(&catalog, "minecraft:golden_apple", 1)]
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn disabled_definition_skipped_silently() {
        let defs = vec![
            RawNutrient::new("fruit", APPLE, "00ff00").enabled(false),
            RawNutrient::new("grain", BREAD, "ffaa00").enabled(true),
        ];
        let (result, sink) = compile_defs(defs, &NutritionConfig::default());
        let table = result.unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.list()[0].name, "grain");
        assert!(sink.is_empty());
    }

    #[test]
    fn disabled_definition_skips_validation() {
        let (result, sink) = compile_defs(vec![RawNutrient::default().enabled(false)], &NutritionConfig::default());
        assert!(result.unwrap().is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn missing_required_fields_are_fatal() {
        let cases = [
            (RawNutrient { name: None, ..RawNutrient::new("x", APPLE, "000000") }, "name"),
            (RawNutrient { icon: None, ..RawNutrient::new("x", APPLE, "000000") }, "icon"),
            (RawNutrient { color: None, ..RawNutrient::new("x", APPLE, "000000") }, "color"),
            (RawNutrient::new("", APPLE, "000000"), "name"),
        ];
        for (def, expected) in cases {
            let defs = vec![RawNutrient::new("ok", APPLE, "000000"), def];
            let (result, sink) = compile_defs(defs, &NutritionConfig::default());
            match result {
                Err(CompileError::MissingRequiredField { index, field }) => {
                    assert_eq!(index, 1);
                    assert_eq!(field, expected);
                }
                other => panic!("expected MissingRequiredField, got: {other:?}"),
            }
            let fatals = sink.with_severity(Severity::Fatal);
            assert_eq!(fatals.len(), 1);
            assert_eq!(fatals[0].message, MISSING_REQUIRED);
        }
    }

    #[test]
    fn malformed_color_is_fatal() {
        let (result, sink) = compile_defs(
            vec![RawNutrient::new("fruit", APPLE, "zz00ff")],
            &NutritionConfig::default(),
        );
        match result {
            Err(CompileError::InvalidColor { name, value, source }) => {
                assert_eq!(name, "fruit");
                assert_eq!(value, "zz00ff");
                assert_eq!(source, ColorError::Digit('z'));
            }
            other => panic!("expected InvalidColor, got: {other:?}"),
        }
        assert_eq!(sink.count(Severity::Fatal), 1);
    }

    #[test]
    fn unresolved_icon_degrades_to_empty() {
        let (result, sink) = compile_defs(
            vec![RawNutrient::new("fruit", "minecraft:nothing", "00ff00")],
            &NutritionConfig::default(),
        );
        let table = result.unwrap();
        assert!(table.list()[0].icon.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn absent_decay_uses_config_default() {
        let config = NutritionConfig::default().with_default_decay(3.5);
        let (result, _) = compile_defs(vec![RawNutrient::new("fruit", APPLE, "00ff00")], &config);
        assert_eq!(result.unwrap().list()[0].decay, 3.5);
    }

    #[test]
    fn decay_bounds_are_inclusive() {
        let defs = vec![
            RawNutrient::new("low", APPLE, "000000").decay(-100.0),
            RawNutrient::new("high", APPLE, "000000").decay(100.0),
        ];
        let (result, sink) = compile_defs(defs, &NutritionConfig::default());
        assert_eq!(result.unwrap().len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn out_of_range_decay_drops_definition() {
        let defs = vec![
            RawNutrient::new("fruit", APPLE, "00ff00").decay(150.0),
            RawNutrient::new("grain", BREAD, "ffaa00"),
        ];
        let (result, sink) = compile_defs(defs, &NutritionConfig::default());
        let table = result.unwrap();
        assert!(table.find_by_name("fruit").is_none());
        assert!(table.find_by_name("grain").is_some());

        let errors = sink.with_severity(Severity::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Decay rate must be between -100 and 100 (fruit).");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn nan_decay_is_out_of_range() {
        let (result, sink) = compile_defs(
            vec![RawNutrient::new("fruit", APPLE, "00ff00").decay(f64::NAN)],
            &NutritionConfig::default(),
        );
        assert!(result.unwrap().is_empty());
        assert_eq!(sink.count(Severity::Error), 1);
    }

    #[test]
    fn dropped_definition_does_not_check_its_foods() {
        let mut def = RawNutrient::new("fruit", APPLE, "00ff00").decay(-101.0);
        def.food_items = Some(vec![None]);
        let (result, sink) = compile_defs(vec![def], &NutritionConfig::default());
        assert!(result.unwrap().is_empty());
        assert_eq!(sink.count(Severity::Fatal), 0);
    }

    #[test]
    fn null_food_item_is_fatal() {
        let mut def = RawNutrient::new("fruit", APPLE, "00ff00");
        def.food_items = Some(vec![Some(APPLE.to_string()), None]);
        let (result, sink) = compile_defs(vec![def], &NutritionConfig::default());
        assert!(matches!(
            result,
            Err(CompileError::NullFoodItem { ref nutrient }) if nutrient == "fruit"
        ));
        let fatals = sink.with_severity(Severity::Fatal);
        assert_eq!(fatals.len(), 1);
        assert_eq!(
            fatals[0].message,
            "There is a null item in the 'fruit' definition. Check for a trailing separator."
        );
    }

    #[test]
    fn empty_food_item_is_fatal() {
        let def = RawNutrient::new("fruit", APPLE, "00ff00").food_items([""]);
        let (result, _) = compile_defs(vec![def], &NutritionConfig::default());
        assert!(matches!(result, Err(CompileError::NullFoodItem { .. })));
    }

    #[test]
    fn invalid_variant_warns_and_skips_item() {
        let def = RawNutrient::new("fruit", APPLE, "00ff00").food_items(["minecraft:apple:x", APPLE]);
        let (result, sink) = compile_defs(vec![def], &NutritionConfig::default());
        let table = result.unwrap();
        assert_eq!(table.list()[0].food_items.len(), 1);

        let warnings = sink.with_severity(Severity::Warn);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, "minecraft:apple:x does not contain valid metadata");
    }

    #[test]
    fn missing_food_logged_only_when_configured() {
        let def = RawNutrient::new("fruit", APPLE, "00ff00").food_items(["othermod:durian"]);

        let (result, sink) = compile_defs(vec![def.clone()], &NutritionConfig::default());
        assert!(result.unwrap().list()[0].food_items.is_empty());
        assert!(sink.is_empty());

        let config = NutritionConfig::default().with_log_missing_food(true);
        let (result, sink) = compile_defs(vec![def], &config);
        assert!(result.unwrap().list()[0].food_items.is_empty());
        let warnings = sink.with_severity(Severity::Warn);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].message,
            "Nutrient provided food doesn't exist: othermod:durian (fruit)"
        );
    }

    #[test]
    fn inedible_item_warns_and_skips() {
        let def = RawNutrient::new("fruit", APPLE, "00ff00").food_items([STICK, "minecraft:golden_apple:5"]);
        let (result, sink) = compile_defs(vec![def], &NutritionConfig::default());
        assert!(result.unwrap().list()[0].food_items.is_empty());

        let messages: Vec<_> = sink
            .with_severity(Severity::Warn)
            .into_iter()
            .map(|d| d.message)
            .collect();
        assert_eq!(
            messages,
            [
                "minecraft:stick is not a valid food (minecraft:stick)",
                "minecraft:golden_apple is not a valid food (minecraft:golden_apple:5)",
            ]
        );
    }

    #[test]
    fn custom_food_predicate() {
        let catalog = food_catalog();
        let sink = CollectorSink::new();
        let config = NutritionConfig::default();
        let everything = |_: &ItemRef| true;
        let mut store = RawDefinitionStore::new();
        store.register(RawNutrient::new("odd", STICK, "123456").food_items([STICK]));

        let table = NutrientCompiler::new(&config, &catalog, &everything, &sink)
            .compile(store)
            .unwrap();
        assert_eq!(table.list()[0].food_items, [item(&catalog, STICK, 0)]);
        assert!(sink.is_empty());
    }

    #[test]
    fn output_preserves_submission_order() {
        let defs = vec![
            RawNutrient::new("c", APPLE, "000000"),
            RawNutrient::new("a", APPLE, "000000").enabled(false),
            RawNutrient::new("b", APPLE, "000000").decay(500.0),
            RawNutrient::new("a", APPLE, "000000"),
        ];
        let (result, _) = compile_defs(defs, &NutritionConfig::default());
        let names: Vec<_> = result
            .unwrap()
            .list()
            .iter()
            .map(|n| n.name.clone())
            .collect();
        assert_eq!(names, ["c", "a"]);
    }

    #[test]
    fn error_display_messages() {
        let e = CompileError::MissingRequiredField { index: 3, field: "icon" };
        assert_eq!(e.to_string(), "definition #3 is missing its icon");

        let e = CompileError::InvalidColor {
            name: "fruit".to_string(),
            value: "fff".to_string(),
            source: ColorError::Length(3),
        };
        let msg = e.to_string();
        assert!(msg.contains("fruit"));
        assert!(msg.contains("\"fff\""));

        assert!(CompileError::AlreadyCompiled.to_string().contains("already been compiled"));
    }
}
