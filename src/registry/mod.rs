mod label_set;

use std::collections::HashMap;
use std::fmt;

use crate::error::{FilterError, Result};

pub use label_set::{Candidate, ChoiceMode, LabelSet};

/// Declared kind of a tag, e.g. `labels`, `rectanglelabels`, `choices`, `text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagKind(String);

impl TagKind {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Only label and choice sets get a filter box.
    pub fn supports_filter(&self) -> bool {
        self.0.contains("labels") || self.0.contains("choices")
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tagged component whose children can be filtered and selected.
pub trait CandidateSource {
    fn kind(&self) -> &TagKind;
    fn candidates(&self) -> &[Candidate];
    fn candidates_mut(&mut self) -> &mut [Candidate];

    /// Select the first visible candidate in iteration order.
    /// Returns its index, or `None` when nothing is visible.
    fn select_first_visible(&mut self) -> Option<usize>;
}

/// Name-keyed lookup of every tag in the annotation config.
/// Filters refer to their target by name only.
#[derive(Default)]
pub struct TagRegistry {
    tags: HashMap<String, Box<dyn CandidateSource>>,
    order: Vec<String>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, tag: Box<dyn CandidateSource>) -> Result<()> {
        let name = name.into();
        if self.tags.contains_key(&name) {
            return Err(FilterError::DuplicateTag(name));
        }
        self.order.push(name.clone());
        self.tags.insert(name, tag);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn CandidateSource> {
        self.tags.get(name).map(|tag| tag.as_ref())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn CandidateSource + 'static)> {
        self.tags.get_mut(name).map(|tag| tag.as_mut())
    }

    /// Tag names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_filter() {
        assert!(TagKind::new("Labels").supports_filter());
        assert!(TagKind::new("rectanglelabels").supports_filter());
        assert!(TagKind::new("choices").supports_filter());
        assert!(!TagKind::new("text").supports_filter());
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = TagRegistry::new();
        let set = LabelSet::new(TagKind::new("labels"), ["Person", "Location"]);
        registry.insert("ner", Box::new(set)).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("ner").unwrap().candidates().len(), 2);
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["ner"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = TagRegistry::new();
        let kind = TagKind::new("labels");
        registry
            .insert("ner", Box::new(LabelSet::new(kind.clone(), ["A"])))
            .unwrap();
        let err = registry
            .insert("ner", Box::new(LabelSet::new(kind, ["B"])))
            .unwrap_err();
        assert!(matches!(err, FilterError::DuplicateTag(name) if name == "ner"));
    }
}
