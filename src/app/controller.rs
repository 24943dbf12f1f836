use tracing::{debug, info};

use crate::config::{FilterAttrs, FilterConfig};
use crate::error::{FilterError, Result};
use crate::registry::TagRegistry;
use crate::util::apply_filter;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FilterState {
    Idle,
    Filtering,
}

/// Owns the query of one filter and drives visibility of its target's labels.
///
/// The target is held by name and looked up in the registry on every call, so
/// a missing or empty target turns every operation into a no-op.
#[derive(Debug)]
pub struct FilterController {
    name: String,
    to_name: String,
    config: FilterConfig,
    query: String,
    input_attached: bool,
    input_focused: bool,
}

impl FilterController {
    pub fn new(name: impl Into<String>, to_name: impl Into<String>, config: FilterConfig) -> Self {
        Self {
            name: name.into(),
            to_name: to_name.into(),
            config,
            query: String::new(),
            input_attached: false,
            input_focused: false,
        }
    }

    /// Validate `attrs` and check that the target is a labels/choices tag.
    pub fn bind(attrs: &FilterAttrs, registry: &TagRegistry) -> Result<Self> {
        let config = attrs.to_config()?;
        let to_name = attrs.to_name.clone().unwrap_or_default();
        let target = registry
            .get(&to_name)
            .ok_or_else(|| FilterError::UnknownTarget(to_name.clone()))?;
        if !target.kind().supports_filter() {
            return Err(FilterError::UnsupportedTarget {
                name: to_name,
                kind: target.kind().clone(),
            });
        }
        Ok(Self::new(attrs.name.clone(), to_name, config))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn to_name(&self) -> &str {
        &self.to_name
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> FilterState {
        if self.query.is_empty() {
            FilterState::Idle
        } else {
            FilterState::Filtering
        }
    }

    pub fn is_focused(&self) -> bool {
        self.input_focused
    }

    pub fn on_query_change(&mut self, registry: &mut TagRegistry, text: impl Into<String>) {
        self.query = text.into();
        self.apply_filter(registry);
    }

    /// Recompute visibility of every candidate from the current query.
    /// Returns the number of visible candidates.
    pub fn apply_filter(&self, registry: &mut TagRegistry) -> usize {
        let Some(target) = registry.get_mut(&self.to_name) else {
            return 0;
        };
        let visible = apply_filter(target.candidates_mut(), &self.query, &self.config);
        debug!(filter = %self.name, query = %self.query, visible, "applied filter");
        visible
    }

    pub fn on_hotkey_triggered(&mut self) {
        if self.input_attached {
            self.input_focused = true;
        }
    }

    /// Select the first visible candidate of the target. With cleanup enabled
    /// a successful selection also clears the query.
    pub fn on_submit(&mut self, registry: &mut TagRegistry) -> Option<usize> {
        let target = registry.get_mut(&self.to_name)?;
        let index = target.select_first_visible()?;
        info!(
            filter = %self.name,
            label = %target.candidates()[index].label,
            "selected first visible"
        );

        if self.config.cleanup_on_select {
            self.query.clear();
            self.apply_filter(registry);
        }
        Some(index)
    }

    pub fn attach_input(&mut self) {
        self.input_attached = true;
    }

    pub fn detach_input(&mut self) {
        self.input_attached = false;
        self.input_focused = false;
    }

    pub fn blur(&mut self) {
        self.input_focused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{LabelSet, TagKind};

    fn registry(labels: &[&str]) -> TagRegistry {
        let mut registry = TagRegistry::new();
        let set = LabelSet::new(TagKind::new("labels"), labels.iter().copied());
        registry.insert("ner", Box::new(set)).unwrap();
        registry
            .insert("text", Box::new(LabelSet::new(TagKind::new("text"), Vec::<String>::new())))
            .unwrap();
        registry
    }

    fn controller(min_length: usize) -> FilterController {
        let config = FilterConfig {
            min_length,
            ..FilterConfig::default()
        };
        FilterController::new("filter", "ner", config)
    }

    fn visible(registry: &TagRegistry) -> Vec<&str> {
        registry
            .get("ner")
            .unwrap()
            .candidates()
            .iter()
            .filter(|ch| ch.visible)
            .map(|ch| ch.label.as_str())
            .collect()
    }

    fn attrs(to_name: &str) -> FilterAttrs {
        FilterAttrs {
            to_name: Some(to_name.to_string()),
            ..FilterAttrs::default()
        }
    }

    #[test]
    fn test_end_to_end_min_length() {
        let mut reg = registry(&["Person", "Organization", "Location"]);
        let mut filter = controller(3);

        filter.on_query_change(&mut reg, "or");
        assert_eq!(visible(&reg), vec!["Person", "Organization", "Location"]);

        filter.on_query_change(&mut reg, "org");
        assert_eq!(visible(&reg), vec!["Organization"]);
        assert_eq!(filter.state(), FilterState::Filtering);
    }

    #[test]
    fn test_short_query_restores_hidden() {
        let mut reg = registry(&["Person", "Organization"]);
        let mut filter = controller(3);

        filter.on_query_change(&mut reg, "org");
        assert_eq!(visible(&reg), vec!["Organization"]);
        filter.on_query_change(&mut reg, "or");
        assert_eq!(visible(&reg), vec!["Person", "Organization"]);
    }

    #[test]
    fn test_same_query_twice() {
        let mut reg = registry(&["Person", "Organization", "Location"]);
        let mut filter = controller(0);

        filter.on_query_change(&mut reg, "on");
        let once: Vec<String> = visible(&reg).into_iter().map(String::from).collect();
        filter.on_query_change(&mut reg, "on");
        assert_eq!(visible(&reg), once);
    }

    #[test]
    fn test_submit_then_cleanup() {
        let mut reg = registry(&["Person", "Organization"]);
        let mut filter = controller(0);

        filter.on_query_change(&mut reg, "per");
        assert_eq!(visible(&reg), vec!["Person"]);

        assert_eq!(filter.on_submit(&mut reg), Some(0));
        let ner = reg.get("ner").unwrap();
        assert!(ner.candidates()[0].selected);
        assert!(!ner.candidates()[1].selected);
        assert_eq!(filter.query(), "");
        assert_eq!(filter.state(), FilterState::Idle);
        assert_eq!(visible(&reg), vec!["Person", "Organization"]);
    }

    #[test]
    fn test_submit_without_cleanup_keeps_query() {
        let mut reg = registry(&["Person", "Organization"]);
        let config = FilterConfig {
            min_length: 0,
            cleanup_on_select: false,
            ..FilterConfig::default()
        };
        let mut filter = FilterController::new("filter", "ner", config);

        filter.on_query_change(&mut reg, "org");
        assert_eq!(filter.on_submit(&mut reg), Some(1));
        assert_eq!(filter.query(), "org");
        assert_eq!(visible(&reg), vec!["Organization"]);
    }

    #[test]
    fn test_submit_with_nothing_visible() {
        let mut reg = registry(&["Person", "Organization"]);
        let mut filter = controller(0);

        filter.on_query_change(&mut reg, "xyz");
        assert_eq!(filter.on_submit(&mut reg), None);
        assert_eq!(filter.query(), "xyz");
        assert!(visible(&reg).is_empty());
    }

    #[test]
    fn test_empty_target_is_safe() {
        let mut reg = registry(&[]);
        let mut filter = controller(0);

        filter.on_query_change(&mut reg, "org");
        assert_eq!(filter.apply_filter(&mut reg), 0);
        assert_eq!(filter.on_submit(&mut reg), None);
        filter.on_hotkey_triggered();
    }

    #[test]
    fn test_unknown_target_is_noop() {
        let mut reg = registry(&["Person"]);
        let mut filter = FilterController::new("filter", "missing", FilterConfig::default());

        filter.on_query_change(&mut reg, "xyz");
        assert_eq!(filter.on_submit(&mut reg), None);
        assert_eq!(visible(&reg), vec!["Person"]);
    }

    #[test]
    fn test_hotkey_needs_attached_input() {
        let mut filter = controller(0);
        filter.on_hotkey_triggered();
        assert!(!filter.is_focused());

        filter.attach_input();
        filter.on_hotkey_triggered();
        assert!(filter.is_focused());

        filter.detach_input();
        assert!(!filter.is_focused());
    }

    #[test]
    fn test_hotkey_leaves_query_alone() {
        let mut reg = registry(&["Person", "Organization"]);
        let mut filter = controller(0);
        filter.attach_input();
        filter.on_query_change(&mut reg, "org");

        filter.on_hotkey_triggered();
        assert_eq!(filter.query(), "org");
        assert_eq!(visible(&reg), vec!["Organization"]);
    }

    #[test]
    fn test_bind() {
        let reg = registry(&["Person"]);
        let filter = FilterController::bind(&attrs("ner"), &reg).unwrap();
        assert_eq!(filter.to_name(), "ner");
        assert_eq!(filter.name(), "filter");
        assert_eq!(filter.config().min_length, 3);

        let err = FilterController::bind(&attrs("missing"), &reg).unwrap_err();
        assert!(matches!(err, FilterError::UnknownTarget(_)));
        assert!(err.is_binding_error());

        let err = FilterController::bind(&attrs("text"), &reg).unwrap_err();
        assert!(matches!(err, FilterError::UnsupportedTarget { .. }));
    }

    #[test]
    fn test_bind_rejects_bad_min_length() {
        let reg = registry(&["Person"]);
        let bad = FilterAttrs {
            min_length: "abc".to_string(),
            ..attrs("ner")
        };
        let err = FilterController::bind(&bad, &reg).unwrap_err();
        assert!(matches!(err, FilterError::InvalidMinLength(_)));
        assert!(!err.is_binding_error());
    }
}
