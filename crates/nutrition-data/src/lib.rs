pub mod config;
pub mod loader;
pub mod schema;

pub use config::load_config;
pub use loader::{DataLoadError, load_nutrient_dir, load_nutrient_file};
