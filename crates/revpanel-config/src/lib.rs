//! Preset catalog management for the revpanel reverb control surface.
//!
//! The catalog is the immutable list of categories and presets the preset
//! browser works over. This crate owns its data model, TOML file format,
//! validation, the bundled factory catalog, and where catalog files live.
//!
//! # Features
//!
//! - **Catalog**: Load and save categories and presets from TOML files
//! - **Validation**: Unique ids, known categories, reserved `favorites` id
//! - **Paths**: Platform-specific user and system catalog locations
//! - **Factory Catalog**: Built-in presets that are always available
//!
//! # Example
//!
//! ```rust,no_run
//! use revpanel_config::{Catalog, factory_catalog, find_catalog};
//!
//! // User catalog if present, factory catalog otherwise
//! let catalog = find_catalog(None)
//!     .and_then(|path| Catalog::load(path).ok())
//!     .unwrap_or_else(factory_catalog);
//!
//! for preset in catalog.search("hall") {
//!     println!("{} ({})", preset.name, preset.category);
//! }
//! ```

mod catalog;
mod error;

/// Platform-specific paths for catalog files.
pub mod paths;

/// Catalog validation.
pub mod validation;

/// Factory catalog bundled with the library.
pub mod factory_catalog;

pub use catalog::{Catalog, Category, FAVORITES_CATEGORY_ID, FAVORITES_CATEGORY_NAME, Preset};
pub use error::ConfigError;
pub use factory_catalog::{
    FACTORY_CATALOG_TOML, factory_catalog, factory_preset_ids, is_factory_preset,
};
pub use paths::{
    CATALOG_FILE_NAME, ensure_user_config_dir, find_catalog, system_catalog_path,
    user_catalog_path, user_config_dir,
};
pub use validation::{ValidationError, ValidationResult, validate_catalog};
