//! Rendering pipeline: Document State in, document string out.
//!
//! Markdown and Google-Docs HTML are independent walkers over the fixed
//! section order. Notion output is an explicit alias of Markdown (the two
//! must never drift apart), and plain text is a derived view of the Markdown
//! output rather than a renderer of its own.
//!
//! Rendering is pure and total: no I/O, no missing-field condition, and the
//! same state renders byte-identically every time.

use crate::model::{Format, PrdData};
use crate::state::PrdState;

pub mod gdocs;
pub mod markdown;
pub mod text;

pub use gdocs::render_gdocs;
pub use markdown::{render_markdown, render_notion};
pub use text::render_plain_text;

/// Route a render to the selected format's renderer.
pub fn render_for_format(state: &PrdState, format: Format) -> String {
    match format {
        Format::Markdown => render_markdown(state),
        Format::Notion => render_notion(state),
        Format::Gdocs => render_gdocs(state),
        Format::Text => render_plain_text(state),
    }
}

/// MIME type for clipboard and export payloads of a format.
pub fn mime_type(format: Format) -> &'static str {
    match format {
        Format::Gdocs => "text/html",
        Format::Text => "text/plain",
        _ => "text/markdown",
    }
}

/// File extension (without dot) for exported documents.
pub fn file_extension(format: Format) -> &'static str {
    match format {
        Format::Gdocs => "html",
        Format::Text => "txt",
        _ => "md",
    }
}

/// Derived fallback for the instruction-discipline field: the raw discipline
/// value when the field itself is blank.
pub(crate) fn instruction_discipline_fallback(data: &PrdData) -> String {
    let own = data.instruction_discipline.trim();
    if own.is_empty() {
        data.discipline.trim().to_string()
    } else {
        own.to_string()
    }
}

/// Derived fallback for the synergy-tooling field: the raw framework/stack
/// value when the field itself is blank.
pub(crate) fn synergy_tooling_fallback(data: &PrdData) -> String {
    let own = data.synergy_tooling.trim();
    if own.is_empty() {
        data.framework_stack.trim().to_string()
    } else {
        own.to_string()
    }
}
