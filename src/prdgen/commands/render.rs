use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Format;
use crate::render::render_for_format;
use crate::state::PrdState;

/// Render the document, defaulting to the format stored in the state.
pub fn run(state: &PrdState, format: Option<Format>) -> Result<CmdResult> {
    let format = format.unwrap_or(state.format);
    Ok(CmdResult::default().with_document(render_for_format(state, format)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render_gdocs, render_markdown};

    #[test]
    fn defaults_to_state_format() {
        let mut state = PrdState::default();
        state.format = Format::Gdocs;
        let result = run(&state, None).unwrap();
        assert_eq!(result.document.unwrap(), render_gdocs(&state));
    }

    #[test]
    fn explicit_format_overrides_state() {
        let mut state = PrdState::default();
        state.format = Format::Gdocs;
        let result = run(&state, Some(Format::Markdown)).unwrap();
        assert_eq!(result.document.unwrap(), render_markdown(&state));
    }
}
