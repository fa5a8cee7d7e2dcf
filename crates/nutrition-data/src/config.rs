//! Loads [`NutritionConfig`] from a TOML file.
//!
//! ```toml
//! default_decay = 1.0
//! log_missing_food = true
//! ```
//!
//! Both keys are optional and fall back to [`NutritionConfig::default`].

use nutrition_core::config::NutritionConfig;
use std::path::Path;

use crate::loader::DataLoadError;

/// Parse and validate a config from TOML source. `file` is used for errors.
pub fn parse_config(content: &str, file: &Path) -> Result<NutritionConfig, DataLoadError> {
    let config: NutritionConfig = toml::from_str(content).map_err(|e| DataLoadError::Parse {
        file: file.to_path_buf(),
        detail: e.to_string(),
    })?;
    config
        .validate()
        .map_err(|source| DataLoadError::InvalidConfig {
            file: file.to_path_buf(),
            source,
        })?;
    Ok(config)
}

/// Read, parse and validate a config file.
pub fn load_config(path: &Path) -> Result<NutritionConfig, DataLoadError> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content, path)?;
    tracing::debug!(
        file = %path.display(),
        default_decay = config.default_decay,
        log_missing_food = config.log_missing_food,
        "loaded nutrition config"
    );
    Ok(config)
}
