use serde::Deserialize;

use crate::util::Filterable;

use super::{CandidateSource, TagKind};

/// One label or choice. `visible` is written by filter passes only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub label: String,
    pub visible: bool,
    pub selected: bool,
}

impl Candidate {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            visible: true,
            selected: false,
        }
    }
}

impl Filterable for Candidate {
    fn filter_label(&self) -> &str {
        &self.label
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceMode {
    #[default]
    Single,
    Multiple,
}

/// An ordered set of labels or choices, as declared in the config.
#[derive(Clone, Debug)]
pub struct LabelSet {
    kind: TagKind,
    choice: ChoiceMode,
    children: Vec<Candidate>,
}

impl LabelSet {
    pub fn new<I, S>(kind: TagKind, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            choice: ChoiceMode::Single,
            children: labels.into_iter().map(Candidate::new).collect(),
        }
    }

    pub fn with_choice(mut self, choice: ChoiceMode) -> Self {
        self.choice = choice;
        self
    }

    pub fn selected_labels(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter(|ch| ch.selected)
            .map(|ch| ch.label.as_str())
            .collect()
    }
}

impl CandidateSource for LabelSet {
    fn kind(&self) -> &TagKind {
        &self.kind
    }

    fn candidates(&self) -> &[Candidate] {
        &self.children
    }

    fn candidates_mut(&mut self) -> &mut [Candidate] {
        &mut self.children
    }

    fn select_first_visible(&mut self) -> Option<usize> {
        let index = self.children.iter().position(|ch| ch.visible)?;
        if self.choice == ChoiceMode::Single {
            for ch in &mut self.children {
                ch.selected = false;
            }
        }
        self.children[index].selected = true;
        Some(index)
    }
}
