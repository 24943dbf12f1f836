//! Annotation config loading
//!
//! The config is a TOML file with one `[filter]` table and a list of
//! `[[tags]]`. Attribute names follow the annotation markup, so `minlength`
//! and `casesensetive` are accepted alongside the snake_case spellings.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FilterError, Result};
use crate::registry::{ChoiceMode, LabelSet, TagKind, TagRegistry};

pub const DEFAULT_PLACEHOLDER: &str = "Quick Filters";
pub const DEFAULT_MIN_LENGTH: usize = 3;

const ENV_MIN_LENGTH: &str = "QUICKFILTER_MIN_LENGTH";
const ENV_HOTKEY: &str = "QUICKFILTER_HOTKEY";

/// Validated filter settings. Immutable for the lifetime of a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub case_sensitive: bool,
    pub cleanup_on_select: bool,
    pub placeholder: String,
    pub min_length: usize,
    pub hotkey: Option<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            cleanup_on_select: true,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            min_length: DEFAULT_MIN_LENGTH,
            hotkey: None,
        }
    }
}

/// Raw `[filter]` attributes as written in the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterAttrs {
    pub name: String,
    #[serde(alias = "toname")]
    pub to_name: Option<String>,
    #[serde(alias = "casesensetive")]
    pub case_sensitive: bool,
    pub cleanup: bool,
    pub placeholder: String,
    #[serde(alias = "minlength")]
    pub min_length: String,
    pub hotkey: Option<String>,
}

impl Default for FilterAttrs {
    fn default() -> Self {
        Self {
            name: "filter".to_string(),
            to_name: None,
            case_sensitive: false,
            cleanup: true,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            min_length: DEFAULT_MIN_LENGTH.to_string(),
            hotkey: None,
        }
    }
}

impl FilterAttrs {
    pub fn to_config(&self) -> Result<FilterConfig> {
        Ok(FilterConfig {
            case_sensitive: self.case_sensitive,
            cleanup_on_select: self.cleanup,
            placeholder: self.placeholder.clone(),
            min_length: parse_min_length(&self.min_length)?,
            hotkey: self.hotkey.clone().filter(|key| !key.trim().is_empty()),
        })
    }
}

/// One `[[tags]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TagDecl {
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub choice: ChoiceMode,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnotationConfig {
    pub filter: Option<FilterAttrs>,
    #[serde(default)]
    pub tags: Vec<TagDecl>,
}

impl AnnotationConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| FilterError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&raw)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Override filter attributes from the environment (or any lookup).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(filter) = self.filter.as_mut() else {
            return;
        };
        if let Some(v) = lookup(ENV_MIN_LENGTH) {
            filter.min_length = v;
        }
        if let Some(v) = lookup(ENV_HOTKEY) {
            filter.hotkey = Some(v);
        }
    }

    pub fn build_registry(&self) -> Result<TagRegistry> {
        let mut registry = TagRegistry::new();
        for tag in &self.tags {
            let set = LabelSet::new(TagKind::new(&tag.kind), tag.values.iter().cloned())
                .with_choice(tag.choice);
            registry.insert(tag.name.clone(), Box::new(set))?;
        }
        Ok(registry)
    }
}

pub fn parse_min_length(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<usize>()
        .map_err(|_| FilterError::InvalidMinLength(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const SAMPLE: &str = r#"
[filter]
name = "filter"
toname = "ner"
hotkey = "shift+f"
minlength = "0"
placeholder = "Filter"

[[tags]]
name = "ner"
kind = "Labels"
values = ["Person", "Organization"]

[[tags]]
name = "text"
kind = "Text"
"#;

    #[test]
    fn test_parse_sample() {
        let config = AnnotationConfig::from_toml_str(SAMPLE).unwrap();
        let filter = config.filter.as_ref().unwrap();
        assert_eq!(filter.to_name.as_deref(), Some("ner"));

        let cfg = filter.to_config().unwrap();
        assert_eq!(cfg.min_length, 0);
        assert_eq!(cfg.placeholder, "Filter");
        assert_eq!(cfg.hotkey.as_deref(), Some("shift+f"));
        assert!(!cfg.case_sensitive);
        assert!(cfg.cleanup_on_select);
        assert_eq!(config.tags.len(), 2);
    }

    #[test]
    fn test_defaults() {
        let config = AnnotationConfig::from_toml_str("[filter]\ntoname = \"ner\"\n").unwrap();
        let cfg = config.filter.unwrap().to_config().unwrap();
        assert_eq!(cfg, FilterConfig::default());
    }

    #[test]
    fn test_invalid_min_length() {
        assert!(matches!(
            parse_min_length("three"),
            Err(FilterError::InvalidMinLength(raw)) if raw == "three"
        ));
        assert!(parse_min_length("-1").is_err());
        assert_eq!(parse_min_length(" 5 ").unwrap(), 5);
        assert_eq!(parse_min_length("").unwrap(), 0);
    }

    #[test]
    fn test_bad_toml() {
        let err = AnnotationConfig::from_toml_str("[filter\n").unwrap_err();
        assert!(matches!(err, FilterError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AnnotationConfig::load(Path::new("/nonexistent/quickfilter.toml")).unwrap_err();
        assert!(matches!(err, FilterError::ConfigRead { .. }));
    }

    #[test]
    fn test_overrides() {
        let mut config = AnnotationConfig::from_toml_str(SAMPLE).unwrap();
        let env: HashMap<&str, &str> = [(ENV_MIN_LENGTH, "4"), (ENV_HOTKEY, "ctrl+k")].into();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        let cfg = config.filter.unwrap().to_config().unwrap();
        assert_eq!(cfg.min_length, 4);
        assert_eq!(cfg.hotkey.as_deref(), Some("ctrl+k"));
    }

    #[test]
    fn test_build_registry() {
        let config = AnnotationConfig::from_toml_str(SAMPLE).unwrap();
        let registry = config.build_registry().unwrap();

        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["ner", "text"]);
        let ner = registry.get("ner").unwrap();
        assert!(ner.kind().supports_filter());
        assert_eq!(ner.candidates().len(), 2);
        assert!(!registry.get("text").unwrap().kind().supports_filter());
    }
}
