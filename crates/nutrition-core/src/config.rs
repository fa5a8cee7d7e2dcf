use serde::{Deserialize, Serialize};

/// Bounds for any decay rate, inclusive, as a percentage.
pub const DECAY_MIN: f64 = -100.0;
pub const DECAY_MAX: f64 = 100.0;

/// Returns true if `rate` is an acceptable decay percentage.
pub fn decay_in_range(rate: f64) -> bool {
    (DECAY_MIN..=DECAY_MAX).contains(&rate)
}

/// Global settings consulted while compiling nutrients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionConfig {
    /// Decay rate for nutrients that do not override it.
    pub default_decay: f64,
    /// Warn about food items that are not in the catalog.
    pub log_missing_food: bool,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            default_decay: 1.0,
            log_missing_food: false,
        }
    }
}

impl NutritionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !decay_in_range(self.default_decay) {
            return Err(ConfigError::DefaultDecayOutOfRange(self.default_decay));
        }
        Ok(())
    }

    pub fn with_default_decay(mut self, rate: f64) -> Self {
        self.default_decay = rate;
        self
    }

    pub fn with_log_missing_food(mut self, enabled: bool) -> Self {
        self.log_missing_food = enabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("default decay must be between -100 and 100, got {0}")]
    DefaultDecayOutOfRange(f64),
}
