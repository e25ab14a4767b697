//! Preset catalog file format and queries.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::validation::{ValidationResult, validate_catalog};

/// Id of the browser's synthetic favorites category.
///
/// Reserved: no catalog category may use it.
pub const FAVORITES_CATEGORY_ID: &str = "favorites";

/// Display name of the favorites category.
pub const FAVORITES_CATEGORY_NAME: &str = "Favorites";

/// A preset category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique id.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Category {
    /// Create a category.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A reverb preset entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preset {
    /// Unique id, emitted to the host on selection.
    pub id: String,
    /// Display name, matched by search.
    pub name: String,
    /// Id of the owning category.
    pub category: String,
    /// Descriptive tags, in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// One-line description shown in the detail panel.
    #[serde(default)]
    pub description: String,
}

impl Preset {
    /// Create a preset with no tags or description.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            tags: Vec::new(),
            description: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Append several tags.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Case-insensitive substring match on the name.
    ///
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Ordered lists of categories and presets.
///
/// # TOML Format
///
/// ```toml
/// [[categories]]
/// id = "halls"
/// name = "Halls"
///
/// [[presets]]
/// id = "cathedral"
/// name = "Cathedral"
/// category = "halls"
/// tags = ["long", "dark"]
/// description = "Stone nave with a slow, dark tail"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Catalog {
    /// Categories in display order.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Presets in display order.
    #[serde(default)]
    pub presets: Vec<Preset>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Append a preset.
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.presets.push(preset);
        self
    }

    /// Load and validate a catalog from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Parse and validate a catalog from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let catalog: Catalog = toml::from_str(toml_str)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Save the catalog to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the catalog to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Run [`validate_catalog`] on this catalog.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_catalog(self)
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// True when the catalog has no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Find a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Find a preset by id.
    pub fn preset(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Find a preset by id, or fail with [`ConfigError::PresetNotFound`].
    pub fn require_preset(&self, id: &str) -> Result<&Preset, ConfigError> {
        self.preset(id)
            .ok_or_else(|| ConfigError::PresetNotFound(id.to_string()))
    }

    /// True when a preset with this id exists.
    pub fn contains_preset(&self, id: &str) -> bool {
        self.preset(id).is_some()
    }

    /// Presets in a category, in catalog order.
    pub fn presets_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Preset> + 'a {
        self.presets.iter().filter(move |p| p.category == category)
    }

    /// Presets whose name contains `query`, ignoring case, in catalog order.
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Preset> + 'a {
        let needle = query.to_lowercase();
        self.presets
            .iter()
            .filter(move |p| p.name.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[categories]]
id = "halls"
name = "Halls"

[[categories]]
id = "plates"
name = "Plates"

[[presets]]
id = "cathedral"
name = "Cathedral"
category = "halls"
tags = ["long", "dark"]
description = "Stone nave"

[[presets]]
id = "gold-plate"
name = "Gold Plate"
category = "plates"
"#;

    #[test]
    fn parses_toml() {
        let catalog = Catalog::from_toml(SAMPLE).unwrap();
        assert_eq!(catalog.categories.len(), 2);
        assert_eq!(catalog.len(), 2);
        let cathedral = catalog.preset("cathedral").unwrap();
        assert_eq!(cathedral.tags, ["long", "dark"]);
        assert_eq!(cathedral.description, "Stone nave");
    }

    #[test]
    fn optional_fields_default() {
        let catalog = Catalog::from_toml(SAMPLE).unwrap();
        let plate = catalog.preset("gold-plate").unwrap();
        assert!(plate.tags.is_empty());
        assert!(plate.description.is_empty());
    }

    #[test]
    fn empty_document_is_empty_catalog() {
        let catalog = Catalog::from_toml("").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.categories.is_empty());
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = Catalog::from_toml("[[presets]\nid = ").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn invalid_catalog_is_validation_error() {
        let toml = r#"
[[presets]]
id = "orphan"
name = "Orphan"
category = "missing"
"#;
        let err = Catalog::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn toml_roundtrip_preserves_order() {
        let catalog = Catalog::from_toml(SAMPLE).unwrap();
        let text = catalog.to_toml().unwrap();
        assert_eq!(Catalog::from_toml(&text).unwrap(), catalog);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = Catalog::from_toml(SAMPLE).unwrap();
        let ids: Vec<_> = catalog.search("PLATE").map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["gold-plate"]);
        assert_eq!(catalog.search("").count(), 2);
        assert_eq!(catalog.search("zzz").count(), 0);
    }

    #[test]
    fn presets_in_category() {
        let catalog = Catalog::from_toml(SAMPLE).unwrap();
        let ids: Vec<_> = catalog.presets_in("halls").map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["cathedral"]);
        assert_eq!(catalog.presets_in("rooms").count(), 0);
    }

    #[test]
    fn require_preset_reports_missing_id() {
        let catalog = Catalog::from_toml(SAMPLE).unwrap();
        assert!(catalog.require_preset("cathedral").is_ok());
        let err = catalog.require_preset("nope").unwrap_err();
        assert_eq!(err.to_string(), "preset not found: nope");
    }

    #[test]
    fn preset_builder_and_matches() {
        let preset = Preset::new("a", "Dark Hall", "halls")
            .with_tag("dark")
            .with_tags(["long", "wide"])
            .with_description("desc");
        assert_eq!(preset.tags, ["dark", "long", "wide"]);
        assert!(preset.matches("hall"));
        assert!(preset.matches("DARK"));
        assert!(!preset.matches("room"));
    }
}
