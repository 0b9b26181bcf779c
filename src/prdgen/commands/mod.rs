//! Command layer: business logic with no I/O assumptions.
//!
//! Commands operate on a `PrdState` snapshot and return structured
//! [`CmdResult`] values; the CLI layer decides how to print them. The only
//! exception is `export`, which writes the rendered document to disk.

use crate::model::{Format, PhrasingMode};
use std::path::PathBuf;

pub mod export;
pub mod fields;
pub mod render;
pub mod status;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One field of the document, for listings.
#[derive(Debug, Clone)]
pub enum FieldEntry {
    Scalar { key: &'static str, value: String },
    List { key: &'static str, items: Vec<String> },
}

/// Enablement of one section, for listings.
#[derive(Debug, Clone)]
pub struct SectionStatus {
    pub key: &'static str,
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub document: Option<String>,
    pub fields: Vec<FieldEntry>,
    pub sections: Vec<SectionStatus>,
    pub settings: Option<(Format, PhrasingMode)>,
    pub export_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_document(mut self, document: String) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldEntry>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_sections(mut self, sections: Vec<SectionStatus>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_settings(mut self, format: Format, phrasing: PhrasingMode) -> Self {
        self.settings = Some((format, phrasing));
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }
}
