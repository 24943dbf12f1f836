use std::time::{Duration, Instant};

use tracing::warn;

use crate::app::controller::FilterController;
use crate::app::hotkey::Hotkey;
use crate::config::AnnotationConfig;
use crate::error::Result;
use crate::registry::{Candidate, TagRegistry};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Filter,
}

pub struct AppState {
    pub registry: TagRegistry,
    pub filter: Option<FilterController>,
    pub hotkey: Option<Hotkey>,
    pub message: Option<String>,
    pub message_until: Option<Instant>,
}

impl AppState {
    pub fn new(registry: TagRegistry, filter: Option<FilterController>) -> Self {
        Self {
            registry,
            filter,
            hotkey: None,
            message: None,
            message_until: None,
        }
    }

    /// Build the registry and bind the filter. A filter that fails to bind is
    /// dropped with a warning; the labels stay usable without it.
    pub fn from_config(config: &AnnotationConfig) -> Result<Self> {
        let registry = config.build_registry()?;
        let mut state = Self::new(registry, None);

        let Some(attrs) = config.filter.as_ref() else {
            return Ok(state);
        };

        match FilterController::bind(attrs, &state.registry) {
            Ok(filter) => {
                if let Some(raw) = filter.config().hotkey.as_deref() {
                    match Hotkey::parse(raw) {
                        Ok(hotkey) => state.hotkey = Some(hotkey),
                        Err(err) => {
                            warn!(filter = %filter.name(), "{err}");
                            state.set_message(err.to_string());
                        }
                    }
                }
                filter.apply_filter(&mut state.registry);
                state.filter = Some(filter);
            }
            Err(err) => {
                warn!(filter = %attrs.name, "filter disabled: {err}");
                state.set_message(format!("Filter disabled: {err}"));
            }
        }

        Ok(state)
    }

    pub fn input_mode(&self) -> InputMode {
        match &self.filter {
            Some(filter) if filter.is_focused() => InputMode::Filter,
            _ => InputMode::Normal,
        }
    }

    /// Name of the tag whose labels are shown: the filter target, else the
    /// first tag that carries labels.
    pub fn active_tag(&self) -> Option<&str> {
        if let Some(filter) = &self.filter {
            return Some(filter.to_name());
        }
        self.registry.names().find(|name| {
            self.registry
                .get(name)
                .is_some_and(|tag| tag.kind().supports_filter())
        })
    }

    pub fn active_candidates(&self) -> &[Candidate] {
        self.active_tag()
            .and_then(|name| self.registry.get(name))
            .map(|tag| tag.candidates())
            .unwrap_or(&[])
    }

    pub(crate) fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.message_until = Some(Instant::now() + Duration::from_secs(3));
    }

    pub(crate) fn clear_expired_message(&mut self) -> bool {
        if let Some(deadline) = self.message_until {
            if Instant::now() >= deadline {
                self.message = None;
                self.message_until = None;
                return true;
            }
        }
        false
    }
}
