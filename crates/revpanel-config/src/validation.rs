//! Catalog validation.
//!
//! A catalog is valid when every id is non-empty and unique within its list,
//! no category claims the reserved `favorites` id, and every preset points at
//! a category that exists.
//!
//! # Example
//!
//! ```rust
//! use revpanel_config::{Catalog, Category, Preset, ValidationError, validate_catalog};
//!
//! let catalog = Catalog::new()
//!     .with_category(Category::new("halls", "Halls"))
//!     .with_preset(Preset::new("cathedral", "Cathedral", "plates"));
//!
//! let err = validate_catalog(&catalog).unwrap_err();
//! assert_eq!(
//!     err,
//!     ValidationError::UnknownCategory {
//!         preset: "cathedral".to_string(),
//!         category: "plates".to_string(),
//!     }
//! );
//! ```

use std::collections::HashSet;
use thiserror::Error;

use crate::catalog::{Catalog, FAVORITES_CATEGORY_ID};

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two categories share an id.
    #[error("duplicate category id '{0}'")]
    DuplicateCategory(String),

    /// Two presets share an id.
    #[error("duplicate preset id '{0}'")]
    DuplicatePreset(String),

    /// A preset references a category that does not exist.
    #[error("preset '{preset}' references unknown category '{category}'")]
    UnknownCategory {
        /// Id of the offending preset.
        preset: String,
        /// Category id it references.
        category: String,
    },

    /// A category uses an id reserved for the browser.
    #[error("category id '{0}' is reserved")]
    ReservedCategory(String),

    /// A required field is empty.
    #[error("{kind} #{index} has an empty '{field}'")]
    EmptyField {
        /// `category` or `preset`.
        kind: &'static str,
        /// Zero-based position in its list.
        index: usize,
        /// Field name.
        field: &'static str,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

impl ValidationError {
    /// Flatten into a list of individual errors.
    pub fn into_vec(self) -> Vec<ValidationError> {
        match self {
            ValidationError::Multiple(errors) => errors,
            other => vec![other],
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check a catalog, collecting every problem.
///
/// Returns the single error directly, or [`ValidationError::Multiple`] when
/// there is more than one.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult<()> {
    let mut errors = Vec::new();

    let mut category_ids = HashSet::new();
    for (index, category) in catalog.categories.iter().enumerate() {
        if category.id.trim().is_empty() {
            errors.push(ValidationError::EmptyField {
                kind: "category",
                index,
                field: "id",
            });
            continue;
        }
        if category.name.trim().is_empty() {
            errors.push(ValidationError::EmptyField {
                kind: "category",
                index,
                field: "name",
            });
        }
        if category.id == FAVORITES_CATEGORY_ID {
            errors.push(ValidationError::ReservedCategory(category.id.clone()));
        }
        if !category_ids.insert(category.id.as_str()) {
            errors.push(ValidationError::DuplicateCategory(category.id.clone()));
        }
    }

    let mut preset_ids = HashSet::new();
    for (index, preset) in catalog.presets.iter().enumerate() {
        for (field, value) in [
            ("id", &preset.id),
            ("name", &preset.name),
            ("category", &preset.category),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::EmptyField {
                    kind: "preset",
                    index,
                    field,
                });
            }
        }
        if !preset.id.is_empty() && !preset_ids.insert(preset.id.as_str()) {
            errors.push(ValidationError::DuplicatePreset(preset.id.clone()));
        }
        if !preset.category.is_empty() && !category_ids.contains(preset.category.as_str()) {
            errors.push(ValidationError::UnknownCategory {
                preset: preset.id.clone(),
                category: preset.category.clone(),
            });
        }
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Preset};

    fn base() -> Catalog {
        Catalog::new()
            .with_category(Category::new("halls", "Halls"))
            .with_category(Category::new("rooms", "Rooms"))
            .with_preset(Preset::new("cathedral", "Cathedral", "halls"))
            .with_preset(Preset::new("studio", "Studio", "rooms"))
    }

    #[test]
    fn valid_catalog_passes() {
        assert_eq!(validate_catalog(&base()), Ok(()));
        assert_eq!(validate_catalog(&Catalog::new()), Ok(()));
    }

    #[test]
    fn duplicate_category_rejected() {
        let catalog = base().with_category(Category::new("halls", "More Halls"));
        assert_eq!(
            validate_catalog(&catalog),
            Err(ValidationError::DuplicateCategory("halls".into()))
        );
    }

    #[test]
    fn duplicate_preset_rejected() {
        let catalog = base().with_preset(Preset::new("studio", "Studio 2", "rooms"));
        assert_eq!(
            validate_catalog(&catalog),
            Err(ValidationError::DuplicatePreset("studio".into()))
        );
    }

    #[test]
    fn reserved_category_rejected() {
        let catalog = base().with_category(Category::new("favorites", "Favs"));
        assert_eq!(
            validate_catalog(&catalog),
            Err(ValidationError::ReservedCategory("favorites".into()))
        );
    }

    #[test]
    fn empty_fields_rejected() {
        let catalog = Catalog::new()
            .with_category(Category::new("halls", ""))
            .with_preset(Preset::new("", "Nameless", "halls"));
        let errors = validate_catalog(&catalog).unwrap_err().into_vec();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyField {
                    kind: "category",
                    index: 0,
                    field: "name"
                },
                ValidationError::EmptyField {
                    kind: "preset",
                    index: 0,
                    field: "id"
                },
            ]
        );
    }

    #[test]
    fn multiple_errors_are_joined() {
        let catalog = base()
            .with_preset(Preset::new("studio", "Again", "rooms"))
            .with_preset(Preset::new("void", "Void", "nowhere"));
        let err = validate_catalog(&catalog).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("multiple validation errors: "), "got: {msg}");
        assert!(msg.contains("duplicate preset id 'studio'; "), "got: {msg}");
        assert!(msg.contains("unknown category 'nowhere'"), "got: {msg}");
        assert_eq!(err.into_vec().len(), 2);
    }

    #[test]
    fn empty_field_display() {
        let err = ValidationError::EmptyField {
            kind: "preset",
            index: 3,
            field: "category",
        };
        assert_eq!(err.to_string(), "preset #3 has an empty 'category'");
    }
}
