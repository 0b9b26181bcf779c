use crate::commands::{CmdResult, FieldEntry};
use crate::error::Result;
use crate::model::{ListField, ScalarField};
use crate::state::PrdState;

/// List every field with its current raw value, scalars first.
pub fn run(state: &PrdState) -> Result<CmdResult> {
    let mut entries = Vec::with_capacity(ScalarField::ALL.len() + ListField::ALL.len());

    for field in ScalarField::ALL {
        entries.push(FieldEntry::Scalar {
            key: field.key(),
            value: state.data.scalar(*field).to_string(),
        });
    }
    for field in ListField::ALL {
        entries.push(FieldEntry::List {
            key: field.key(),
            items: state.data.list(*field).to_vec(),
        });
    }

    Ok(CmdResult::default().with_fields(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_field_once() {
        let result = run(&PrdState::default()).unwrap();
        assert_eq!(
            result.fields.len(),
            ScalarField::ALL.len() + ListField::ALL.len()
        );
    }

    #[test]
    fn reflects_current_values() {
        let mut state = PrdState::default();
        state.data.project_name = "Mercury".to_string();
        let result = run(&state).unwrap();
        assert!(result.fields.iter().any(|entry| matches!(
            entry,
            FieldEntry::Scalar { key: "projectName", value } if value == "Mercury"
        )));
    }
}
