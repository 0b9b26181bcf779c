use crate::commands::{CmdMessage, CmdResult, SectionStatus};
use crate::error::Result;
use crate::model::{ListField, ScalarField, SectionKey};
use crate::state::PrdState;

/// Summary of settings, section toggles, and how much is filled in.
pub fn run(state: &PrdState) -> Result<CmdResult> {
    let sections = SectionKey::ALL
        .iter()
        .map(|key| SectionStatus {
            key: key.key(),
            label: key.label(),
            enabled: state.enabled(*key),
        })
        .collect();

    let filled_scalars = ScalarField::ALL
        .iter()
        .filter(|field| !state.data.scalar(**field).trim().is_empty())
        .count();
    let filled_lists = ListField::ALL
        .iter()
        .filter(|field| {
            state
                .data
                .list(**field)
                .iter()
                .any(|item| !item.trim().is_empty())
        })
        .count();

    let mut result = CmdResult::default()
        .with_sections(sections)
        .with_settings(state.format, state.phrasing);
    result.add_message(CmdMessage::info(format!(
        "{}/{} fields and {}/{} lists filled in",
        filled_scalars,
        ScalarField::ALL.len(),
        filled_lists,
        ListField::ALL.len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Format;

    #[test]
    fn reports_all_sections() {
        let result = run(&PrdState::default()).unwrap();
        assert_eq!(result.sections.len(), SectionKey::ALL.len());
        assert!(result.sections.iter().all(|s| s.enabled));
    }

    #[test]
    fn reports_settings_and_fill_counts() {
        let mut state = PrdState::default();
        state.format = Format::Text;
        state.data.project_name = "Mercury".to_string();
        state.data.key_features[0] = "fast capture".to_string();

        let result = run(&state).unwrap();
        assert_eq!(result.settings.unwrap().0, Format::Text);
        assert!(result.messages[0].content.starts_with("1/"));
        assert!(result.messages[0].content.contains("1/6 lists"));
    }
}
