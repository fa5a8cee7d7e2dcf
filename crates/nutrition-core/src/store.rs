//! Raw, unvalidated nutrient definitions as submitted by a loader.

/// An externally authored nutrient definition.
///
/// Required fields are still optional here: a definition missing its name,
/// icon or colour is accepted into the store and rejected at compile time.
/// Entries in `food_items` are optional so a hole left by a stray separator
/// in the source file survives until the compiler can report it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawNutrient {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub enabled: Option<bool>,
    pub decay: Option<f64>,
    pub food_ore_tags: Option<Vec<String>>,
    pub food_items: Option<Vec<Option<String>>>,
}

impl RawNutrient {
    /// A definition with every required field set.
    pub fn new(name: &str, icon: &str, color: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            icon: Some(icon.to_string()),
            color: Some(color.to_string()),
            ..Self::default()
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn decay(mut self, rate: f64) -> Self {
        self.decay = Some(rate);
        self
    }

    pub fn ore_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.food_ore_tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn food_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.food_items = Some(items.into_iter().map(|s| Some(s.into())).collect());
        self
    }

    /// False only when the definition explicitly opts out.
    pub fn is_enabled(&self) -> bool {
        self.enabled != Some(false)
    }
}

/// Append-only accumulator of raw definitions, consumed once by compile.
#[derive(Debug, Clone, Default)]
pub struct RawDefinitionStore {
    definitions: Vec<RawNutrient>,
}

impl RawDefinitionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, definition: RawNutrient) {
        self.definitions.push(definition);
    }

    pub fn register_all<I>(&mut self, definitions: I)
    where
        I: IntoIterator<Item = RawNutrient>,
    {
        self.definitions.extend(definitions);
    }

    pub fn definitions(&self) -> &[RawNutrient] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn into_definitions(self) -> Vec<RawNutrient> {
        self.definitions
    }
}

impl Extend<RawNutrient> for RawDefinitionStore {
    fn extend<T: IntoIterator<Item = RawNutrient>>(&mut self, iter: T) {
        self.register_all(iter);
    }
}
