use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PrdError, Result};
use crate::model::Format;
use crate::render::{file_extension, mime_type, render_for_format};
use crate::state::PrdState;
use chrono::Utc;
use std::fs;
use std::path::PathBuf;

/// Render the document and write it to a file.
///
/// Without an explicit path the file lands in the current directory as
/// `prd-YYYY-MM-DD.{ext}`, extension chosen per format.
pub fn run(state: &PrdState, format: Option<Format>, path: Option<PathBuf>) -> Result<CmdResult> {
    let format = format.unwrap_or(state.format);
    let path = path.unwrap_or_else(|| default_path(format));

    let document = render_for_format(state, format);
    fs::write(&path, &document).map_err(PrdError::Io)?;

    let mut result = CmdResult::default().with_export_path(path.clone());
    result.add_message(CmdMessage::success(format!(
        "Exported {} ({}) to {}",
        format.key(),
        mime_type(format),
        path.display()
    )));
    Ok(result)
}

fn default_path(format: Format) -> PathBuf {
    PathBuf::from(format!(
        "prd-{}.{}",
        Utc::now().format("%Y-%m-%d"),
        file_extension(format)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScalarField;
    use crate::state::{reduce, PrdAction};

    #[test]
    fn writes_rendered_document_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");
        let state = reduce(
            PrdState::default(),
            PrdAction::SetField {
                field: ScalarField::ProjectName,
                value: "Mercury".to_string(),
            },
        );

        let result = run(&state, Some(Format::Markdown), Some(path.clone())).unwrap();
        assert_eq!(result.export_path.unwrap(), path);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Mercury – Frontend Implementation Planning PRD"));
    }

    #[test]
    fn default_filename_carries_format_extension() {
        assert!(default_path(Format::Gdocs).to_string_lossy().ends_with(".html"));
        assert!(default_path(Format::Text).to_string_lossy().ends_with(".txt"));
        assert!(default_path(Format::Notion).to_string_lossy().ends_with(".md"));
    }
}
