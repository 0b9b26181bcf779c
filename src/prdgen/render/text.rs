//! Plain-text output, derived from the Markdown renderer.
//!
//! Deliberately not an independent renderer: deriving the text view from the
//! Markdown string keeps the two from silently diverging. Five global
//! substitutions run over the whole document, in order: heading lines are
//! upper-cased with their markers stripped, bold markup is stripped, bullets
//! become dash-bullets, blockquote markers are stripped, and the horizontal
//! rule becomes a fixed-width dashed line.

use super::markdown::render_markdown;
use crate::state::PrdState;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,3}\s?(.*)$").unwrap());
static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\*\s").unwrap());
static QUOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^>\s?").unwrap());

const RULE: &str = "--------------------------------";

pub fn render_plain_text(state: &PrdState) -> String {
    let markdown = render_markdown(state);
    let out = HEADING_RE.replace_all(&markdown, |caps: &Captures| caps[1].to_uppercase());
    let out = BOLD_RE.replace_all(&out, "$1");
    let out = BULLET_RE.replace_all(&out, "- ");
    let out = QUOTE_RE.replace_all(&out, "");
    out.replace("---", RULE)
}
