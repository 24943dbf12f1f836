//! quickfilter - live label filter for annotation configs
//!
//! Narrows a long list of labels or choices while the user types. A query
//! keeps the labels it matches visible and hides the rest; Enter selects the
//! first visible label and, by default, clears the query again.
//!
//! # Example
//!
//! ```
//! use quickfilter::{FilterConfig, FilterController, LabelSet, TagKind, TagRegistry};
//!
//! let mut registry = TagRegistry::new();
//! let labels = LabelSet::new(TagKind::new("labels"), ["Person", "Organization", "Location"]);
//! registry.insert("ner", Box::new(labels)).unwrap();
//!
//! let mut filter = FilterController::new("filter", "ner", FilterConfig::default());
//! filter.on_query_change(&mut registry, "org");
//!
//! let visible: Vec<_> = registry.get("ner").unwrap().candidates().iter()
//!     .filter(|ch| ch.visible)
//!     .map(|ch| ch.label.as_str())
//!     .collect();
//! assert_eq!(visible, ["Organization"]);
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod registry;
pub mod ui;
pub mod util;

pub use app::{AppState, FilterController, FilterState, Hotkey, InputMode};
pub use config::{AnnotationConfig, FilterAttrs, FilterConfig};
pub use error::{FilterError, Result};
pub use registry::{Candidate, CandidateSource, ChoiceMode, LabelSet, TagKind, TagRegistry};
pub use util::{apply_filter, matches, Filterable};
