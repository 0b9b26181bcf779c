//! Document State and its pure transition function.
//!
//! `PrdState` is the sole unit passed into rendering: field data, section
//! toggles, and the format/phrasing settings. All mutation goes through
//! [`reduce`], which takes a state and an action and returns the next state
//! without performing any I/O. Persistence is the API layer's concern.

use crate::model::{Format, ListField, PhrasingMode, PrdData, ScalarField, SectionKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full snapshot needed to produce one rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrdState {
    pub data: PrdData,
    pub format: Format,
    pub phrasing: PhrasingMode,
    pub enabled_sections: BTreeMap<SectionKey, bool>,
}

impl Default for PrdState {
    fn default() -> Self {
        Self {
            data: PrdData::default(),
            format: Format::Markdown,
            phrasing: PhrasingMode::Verbatim,
            enabled_sections: SectionKey::ALL.iter().map(|key| (*key, true)).collect(),
        }
    }
}

impl PrdState {
    /// Whether a section should be emitted at render time.
    pub fn enabled(&self, key: SectionKey) -> bool {
        self.enabled_sections.get(&key).copied().unwrap_or(true)
    }

    /// Fill in any section toggles absent from a persisted payload.
    ///
    /// Old payloads may predate newer sections; the merge is a per-key union
    /// over the defaults, never a replacement. Field data gets the same
    /// treatment from serde's container-level default during deserialization.
    pub fn hydrate(mut self) -> Self {
        for key in SectionKey::ALL {
            self.enabled_sections.entry(*key).or_insert(true);
        }
        self
    }
}

/// One editor mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrdAction {
    SetField { field: ScalarField, value: String },
    SetListItem { field: ListField, index: usize, value: String },
    SetList { field: ListField, value: Vec<String> },
    AddListItem { field: ListField },
    RemoveListItem { field: ListField, index: usize },
    ToggleSection { key: SectionKey },
    SetSection { key: SectionKey, enabled: bool },
    SetFormat { format: Format },
    SetPhrasing { phrasing: PhrasingMode },
}

/// Pure state transition: `(state, action) -> state'`.
///
/// Out-of-range list indexes are a no-op rather than an error; the editor
/// surface treats stale indexes as harmless.
pub fn reduce(mut state: PrdState, action: PrdAction) -> PrdState {
    match action {
        PrdAction::SetField { field, value } => {
            *state.data.scalar_mut(field) = value;
        }
        PrdAction::SetListItem { field, index, value } => {
            let items = state.data.list_mut(field);
            if let Some(slot) = items.get_mut(index) {
                *slot = value;
            }
        }
        PrdAction::SetList { field, value } => {
            *state.data.list_mut(field) = value;
        }
        PrdAction::AddListItem { field } => {
            state.data.list_mut(field).push(String::new());
        }
        PrdAction::RemoveListItem { field, index } => {
            let items = state.data.list_mut(field);
            if index < items.len() {
                items.remove(index);
            }
        }
        PrdAction::ToggleSection { key } => {
            let entry = state.enabled_sections.entry(key).or_insert(true);
            *entry = !*entry;
        }
        PrdAction::SetSection { key, enabled } => {
            state.enabled_sections.insert(key, enabled);
        }
        PrdAction::SetFormat { format } => {
            state.format = format;
        }
        PrdAction::SetPhrasing { phrasing } => {
            state.phrasing = phrasing;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_enables_every_section() {
        let state = PrdState::default();
        assert_eq!(state.enabled_sections.len(), SectionKey::ALL.len());
        for key in SectionKey::ALL {
            assert!(state.enabled(*key));
        }
        assert_eq!(state.format, Format::Markdown);
        assert_eq!(state.phrasing, PhrasingMode::Verbatim);
    }

    #[test]
    fn set_field_replaces_value() {
        let state = reduce(
            PrdState::default(),
            PrdAction::SetField {
                field: ScalarField::ProjectName,
                value: "Mercury".to_string(),
            },
        );
        assert_eq!(state.data.project_name, "Mercury");
    }

    #[test]
    fn set_list_item_ignores_out_of_range_index() {
        let state = reduce(
            PrdState::default(),
            PrdAction::SetListItem {
                field: ListField::KeyFeatures,
                index: 10,
                value: "nope".to_string(),
            },
        );
        assert_eq!(state.data.key_features, vec!["", ""]);
    }

    #[test]
    fn add_and_remove_list_items() {
        let state = reduce(
            PrdState::default(),
            PrdAction::AddListItem {
                field: ListField::KeyFeatures,
            },
        );
        assert_eq!(state.data.key_features.len(), 3);

        let state = reduce(
            state,
            PrdAction::RemoveListItem {
                field: ListField::KeyFeatures,
                index: 0,
            },
        );
        assert_eq!(state.data.key_features.len(), 2);
    }

    #[test]
    fn toggle_section_flips_the_flag() {
        let state = reduce(
            PrdState::default(),
            PrdAction::ToggleSection {
                key: SectionKey::Context,
            },
        );
        assert!(!state.enabled(SectionKey::Context));
        let state = reduce(
            state,
            PrdAction::ToggleSection {
                key: SectionKey::Context,
            },
        );
        assert!(state.enabled(SectionKey::Context));
    }

    #[test]
    fn settings_are_independent() {
        let state = reduce(
            PrdState::default(),
            PrdAction::SetFormat {
                format: Format::Gdocs,
            },
        );
        let state = reduce(
            state,
            PrdAction::SetPhrasing {
                phrasing: PhrasingMode::Assisted,
            },
        );
        assert_eq!(state.format, Format::Gdocs);
        assert_eq!(state.phrasing, PhrasingMode::Assisted);
        assert_eq!(state.data, PrdData::default());
    }

    #[test]
    fn hydrate_fills_missing_sections() {
        let json = r#"{"data":{"projectName":"Mercury"},"format":"gdocs","enabledSections":{"role":false}}"#;
        let state: PrdState = serde_json::from_str(json).unwrap();
        let state = state.hydrate();

        assert_eq!(state.data.project_name, "Mercury");
        assert_eq!(state.format, Format::Gdocs);
        // absent key kept its default
        assert_eq!(state.phrasing, PhrasingMode::Verbatim);
        assert!(!state.enabled(SectionKey::Role));
        assert!(state.enabled(SectionKey::Constraints));
        assert_eq!(state.enabled_sections.len(), SectionKey::ALL.len());
    }

    #[test]
    fn persistence_roundtrip_is_exact() {
        let mut state = PrdState::default();
        state = reduce(
            state,
            PrdAction::SetField {
                field: ScalarField::ProjectName,
                value: "Mercury".to_string(),
            },
        );
        state = reduce(
            state,
            PrdAction::SetList {
                field: ListField::OutOfScope,
                value: vec!["auth".to_string(), "billing".to_string()],
            },
        );
        state = reduce(
            state,
            PrdAction::SetSection {
                key: SectionKey::Vision,
                enabled: false,
            },
        );

        let json = serde_json::to_string(&state).unwrap();
        let restored: PrdState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.hydrate(), state);
    }

    #[test]
    fn empty_payload_hydrates_to_defaults() {
        let state: PrdState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.hydrate(), PrdState::default());
    }
}
