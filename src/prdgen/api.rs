//! # API Facade
//!
//! Single entry point for all prdgen operations, regardless of the UI in
//! front of it. The facade owns the in-memory Document State, routes every
//! mutation through the pure reducer in [`crate::state`], and persists the
//! new state after each change. The rendering core itself never touches
//! storage.
//!
//! Generic over [`StateStore`] so tests can run against `InMemoryStore`
//! without a filesystem.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Format, ListField, PhrasingMode, ScalarField, SectionKey};
use crate::state::{reduce, PrdAction, PrdState};
use crate::store::StateStore;
use std::path::PathBuf;
use std::str::FromStr;

/// Get/set actions for the `config` command (format and phrasing keys).
#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub struct PrdApi<S: StateStore> {
    store: S,
    state: PrdState,
}

impl<S: StateStore> PrdApi<S> {
    /// Load (or default) the persisted state and wrap it.
    pub fn new(store: S) -> Result<Self> {
        let state = store.load()?;
        Ok(Self { store, state })
    }

    pub fn state(&self) -> &PrdState {
        &self.state
    }

    /// Apply one action through the reducer and persist the result.
    fn apply(&mut self, action: PrdAction) -> Result<()> {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        self.store.save(&self.state)
    }

    pub fn set_field(&mut self, field: ScalarField, value: String) -> Result<CmdResult> {
        self.apply(PrdAction::SetField { field, value })?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!("{} updated", field.key())));
        Ok(result)
    }

    pub fn set_list_item(
        &mut self,
        field: ListField,
        index: usize,
        value: String,
    ) -> Result<CmdResult> {
        let len = self.state.data.list(field).len();
        let mut result = CmdResult::default();
        if index >= len {
            result.add_message(CmdMessage::warning(format!(
                "{} has {} entries; index {} ignored",
                field.key(),
                len,
                index
            )));
            return Ok(result);
        }
        self.apply(PrdAction::SetListItem { field, index, value })?;
        result.add_message(CmdMessage::success(format!(
            "{}[{}] updated",
            field.key(),
            index
        )));
        Ok(result)
    }

    pub fn add_list_item(&mut self, field: ListField, value: Option<String>) -> Result<CmdResult> {
        self.apply(PrdAction::AddListItem { field })?;
        if let Some(value) = value {
            let index = self.state.data.list(field).len() - 1;
            self.apply(PrdAction::SetListItem { field, index, value })?;
        }
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "{} now has {} entries",
            field.key(),
            self.state.data.list(field).len()
        )));
        Ok(result)
    }

    pub fn remove_list_item(&mut self, field: ListField, index: usize) -> Result<CmdResult> {
        let len = self.state.data.list(field).len();
        let mut result = CmdResult::default();
        if index >= len {
            result.add_message(CmdMessage::warning(format!(
                "{} has {} entries; index {} ignored",
                field.key(),
                len,
                index
            )));
            return Ok(result);
        }
        self.apply(PrdAction::RemoveListItem { field, index })?;
        result.add_message(CmdMessage::success(format!(
            "{}[{}] removed",
            field.key(),
            index
        )));
        Ok(result)
    }

    pub fn set_section(&mut self, key: SectionKey, enabled: bool) -> Result<CmdResult> {
        self.apply(PrdAction::SetSection { key, enabled })?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "{} {}",
            key.key(),
            if enabled { "enabled" } else { "disabled" }
        )));
        Ok(result)
    }

    pub fn toggle_section(&mut self, key: SectionKey) -> Result<CmdResult> {
        self.apply(PrdAction::ToggleSection { key })?;
        let enabled = self.state.enabled(key);
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "{} {}",
            key.key(),
            if enabled { "enabled" } else { "disabled" }
        )));
        Ok(result)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        match action {
            ConfigAction::ShowAll => {
                result = result.with_settings(self.state.format, self.state.phrasing);
            }
            ConfigAction::ShowKey(key) => match key.as_str() {
                "format" => result.add_message(CmdMessage::info(self.state.format.key())),
                "phrasing" => result.add_message(CmdMessage::info(self.state.phrasing.key())),
                other => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", other)))
                }
            },
            ConfigAction::Set(key, value) => match key.as_str() {
                "format" => {
                    let format = Format::from_str(&value)?;
                    self.apply(PrdAction::SetFormat { format })?;
                    result.add_message(CmdMessage::success(format!("format set to {}", format)));
                }
                "phrasing" => {
                    let phrasing = PhrasingMode::from_str(&value)?;
                    self.apply(PrdAction::SetPhrasing { phrasing })?;
                    result
                        .add_message(CmdMessage::success(format!("phrasing set to {}", phrasing)));
                }
                other => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", other)))
                }
            },
        }
        Ok(result)
    }

    pub fn render(&self, format: Option<Format>) -> Result<CmdResult> {
        commands::render::run(&self.state, format)
    }

    pub fn export(&self, format: Option<Format>, path: Option<PathBuf>) -> Result<CmdResult> {
        commands::export::run(&self.state, format, path)
    }

    pub fn fields(&self) -> Result<CmdResult> {
        commands::fields::run(&self.state)
    }

    pub fn status(&self) -> Result<CmdResult> {
        commands::status::run(&self.state)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        self.state = PrdState::default();
        self.store.save(&self.state)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success("Document reset to defaults"));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> PrdApi<InMemoryStore> {
        PrdApi::new(InMemoryStore::new()).unwrap()
    }

    #[test]
    fn mutations_persist_after_every_change() {
        let mut api = api();
        api.set_field(ScalarField::ProjectName, "Mercury".into())
            .unwrap();
        api.toggle_section(SectionKey::Vision).unwrap();
        assert_eq!(api.store.save_count, 2);
        assert_eq!(api.store.load().unwrap(), *api.state());
    }

    #[test]
    fn render_reflects_applied_mutations() {
        let mut api = api();
        api.set_field(ScalarField::ProjectName, "Mercury".into())
            .unwrap();
        let result = api.render(Some(Format::Markdown)).unwrap();
        assert!(result
            .document
            .unwrap()
            .starts_with("# Mercury – Frontend Implementation Planning PRD"));
    }

    #[test]
    fn out_of_range_list_index_warns_without_saving() {
        let mut api = api();
        let result = api
            .set_list_item(ListField::KeyFeatures, 9, "nope".into())
            .unwrap();
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
        assert_eq!(api.store.save_count, 0);
    }

    #[test]
    fn add_list_item_with_value_fills_the_new_slot() {
        let mut api = api();
        api.add_list_item(ListField::OutOfScope, Some("billing".into()))
            .unwrap();
        assert_eq!(api.state().data.out_of_scope.last().unwrap(), "billing");
    }

    #[test]
    fn config_set_and_show() {
        let mut api = api();
        api.config(ConfigAction::Set("format".into(), "gdocs".into()))
            .unwrap();
        api.config(ConfigAction::Set("phrasing".into(), "assisted".into()))
            .unwrap();
        assert_eq!(api.state().format, Format::Gdocs);
        assert_eq!(api.state().phrasing, PhrasingMode::Assisted);

        let result = api.config(ConfigAction::ShowAll).unwrap();
        assert_eq!(
            result.settings.unwrap(),
            (Format::Gdocs, PhrasingMode::Assisted)
        );
    }

    #[test]
    fn invalid_format_value_is_an_error() {
        let mut api = api();
        assert!(api
            .config(ConfigAction::Set("format".into(), "rtf".into()))
            .is_err());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut api = api();
        api.set_field(ScalarField::ProjectName, "Mercury".into())
            .unwrap();
        api.reset().unwrap();
        assert_eq!(*api.state(), PrdState::default());
    }
}
