//! Reads nutrient data files and registers them into a definition store.
//!
//! Provides format detection (RON/JSON/TOML), directory discovery, and
//! deserialization of one or many definitions per file.

use nutrition_core::config::ConfigError;
use nutrition_core::store::{RawDefinitionStore, RawNutrient};
use std::path::{Path, PathBuf};

use crate::schema::{NutrientData, TomlNutrients};

/// Top-level TOML key holding an array of nutrient tables.
pub const TOML_KEY: &str = "nutrients";

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur during data loading.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// A configuration file parsed but holds invalid values.
    #[error("invalid config in {file}: {source}")]
    InvalidConfig { file: PathBuf, source: ConfigError },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// List every supported data file directly inside `dir`, sorted by file
/// name so the submission order does not depend on the filesystem.
pub fn discover_nutrient_files(dir: &Path) -> Result<Vec<PathBuf>, DataLoadError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        match detect_format(&path) {
            Ok(_) => files.push(path),
            Err(_) => tracing::debug!(file = %path.display(), "skipping non-data file"),
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

// ===========================================================================
// Deserialization
// ===========================================================================

/// Parse the contents of a nutrient file.
///
/// JSON and RON accept a single definition or a list. TOML accepts a
/// `[[nutrients]]` array, or a single definition at the top level.
pub fn parse_nutrients(
    content: &str,
    format: Format,
    file: &Path,
) -> Result<Vec<NutrientData>, DataLoadError> {
    let parse_error = |detail: String| DataLoadError::Parse {
        file: file.to_path_buf(),
        detail,
    };

    match format {
        // A top-level array is a list; anything else is read as one
        // definition so serde_json reports where it went wrong.
        Format::Json if content.trim_start().starts_with('[') => {
            serde_json::from_str::<Vec<NutrientData>>(content)
                .map_err(|e| parse_error(e.to_string()))
        }
        Format::Json => serde_json::from_str::<NutrientData>(content)
            .map(|def| vec![def])
            .map_err(|e| parse_error(e.to_string())),
        Format::Ron => match ron::from_str::<Vec<NutrientData>>(content) {
            Ok(defs) => Ok(defs),
            Err(_) => ron::from_str::<NutrientData>(content)
                .map(|def| vec![def])
                .map_err(|e| parse_error(e.to_string())),
        },
        Format::Toml => {
            let table: toml::Table =
                toml::from_str(content).map_err(|e: toml::de::Error| parse_error(e.to_string()))?;
            let value = toml::Value::Table(table);
            if value.get(TOML_KEY).is_some() {
                value
                    .try_into::<TomlNutrients>()
                    .map(|wrapper| wrapper.nutrients)
                    .map_err(|e| parse_error(e.to_string()))
            } else {
                value
                    .try_into::<NutrientData>()
                    .map(|def| vec![def])
                    .map_err(|e| parse_error(e.to_string()))
            }
        }
    }
}

/// Read one nutrient file (format detected from extension).
pub fn load_nutrient_file(path: &Path) -> Result<Vec<RawNutrient>, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    let defs = parse_nutrients(&content, format, path)?;
    tracing::debug!(file = %path.display(), count = defs.len(), "read nutrient file");
    Ok(defs.into_iter().map(RawNutrient::from).collect())
}

/// Register every nutrient file in `dir` into `store`, in file-name order.
/// Returns the number of definitions registered.
pub fn load_nutrient_dir(
    dir: &Path,
    store: &mut RawDefinitionStore,
) -> Result<usize, DataLoadError> {
    let mut registered = 0;
    for file in discover_nutrient_files(dir)? {
        let defs = load_nutrient_file(&file)?;
        registered += defs.len();
        store.register_all(defs);
    }
    tracing::debug!(dir = %dir.display(), registered, "loaded nutrient directory");
    Ok(registered)
}

// ===========================================================================
// Tests
// ===========================================================================
