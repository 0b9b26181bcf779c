//! Phrasing normalizer: turns raw field text into display text.
//!
//! Two modes: `verbatim` returns the trimmed text unchanged, `assisted`
//! capitalizes the first character and, for sentence fields, makes sure the
//! text ends in a terminator. Empty values resolve to the literal "TBD"
//! marker (scalars) or are dropped (list items).

use crate::model::{PhrasingMode, PrdData, ScalarField};

/// Placeholder emitted for any empty field at render time.
pub const TBD: &str = "TBD";

/// Prose-style fields that receive trailing punctuation under assisted mode.
const SENTENCE_FIELDS: &[ScalarField] = &[
    ScalarField::Hierarchy,
    ScalarField::Contrast,
    ScalarField::Balance,
    ScalarField::Movement,
    ScalarField::ComponentArchitecture,
    ScalarField::PressStates,
    ScalarField::TransitionAnimations,
    ScalarField::BestPractices,
    ScalarField::ModernFrameworkUsage,
    ScalarField::ReusableComponents,
    ScalarField::PerformanceOptimization,
    ScalarField::Accessibility,
];

/// Uppercase the first character only. Idempotent, safe on empty input, and
/// never touches the rest of the string.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Append a period unless the text already ends in a sentence terminator.
fn ensure_period(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}

/// Format a scalar value per phrasing mode. Empty input becomes "TBD".
pub fn format_string(field: ScalarField, value: &str, mode: PhrasingMode) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return TBD.to_string();
    }
    match mode {
        PhrasingMode::Verbatim => trimmed.to_string(),
        PhrasingMode::Assisted => {
            if SENTENCE_FIELDS.contains(&field) {
                ensure_period(&capitalize(trimmed))
            } else {
                capitalize(trimmed)
            }
        }
    }
}

/// Format a list entry. Empty entries collapse to the empty string so
/// callers can drop them; there is no "TBD" substitution at the item level.
pub fn format_list_item(value: &str, mode: PhrasingMode) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match mode {
        PhrasingMode::Assisted => capitalize(trimmed),
        PhrasingMode::Verbatim => trimmed.to_string(),
    }
}

/// Resolve a field to display text, using `fallback` when the field's own
/// value is blank. The fallback is formatted as if it were this field's
/// value; an empty fallback counts as absent.
pub fn resolve(
    data: &PrdData,
    field: ScalarField,
    mode: PhrasingMode,
    fallback: Option<&str>,
) -> String {
    let raw = data.scalar(field);
    if raw.trim().is_empty() {
        if let Some(fallback) = fallback.filter(|f| !f.is_empty()) {
            return format_string(field, fallback, mode);
        }
    }
    format_string(field, raw, mode)
}

/// Formatted non-empty items, or a single "TBD" item when nothing is filled
/// in. Used where missing input must be visibly flagged.
pub fn list_or_tbd(items: &[String], mode: PhrasingMode) -> Vec<String> {
    let formatted = list_or_empty(items, mode);
    if formatted.is_empty() {
        vec![TBD.to_string()]
    } else {
        formatted
    }
}

/// Formatted non-empty items, or nothing. Used where an empty list is
/// displayable as "nothing" (e.g. an optional closing note).
pub fn list_or_empty(items: &[String], mode: PhrasingMode) -> Vec<String> {
    items
        .iter()
        .map(|item| format_list_item(item, mode))
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_is_idempotent_and_empty_safe() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ship fast"), "Ship fast");
        assert_eq!(capitalize("Ship fast"), "Ship fast");
        assert_eq!(capitalize("SHIP FAST"), "SHIP FAST");
    }

    #[test]
    fn verbatim_trims_only() {
        assert_eq!(
            format_string(ScalarField::CoreValue, "  ship fast  ", PhrasingMode::Verbatim),
            "ship fast"
        );
    }

    #[test]
    fn assisted_capitalizes() {
        assert_eq!(
            format_string(ScalarField::CoreValue, "  ship fast  ", PhrasingMode::Assisted),
            "Ship fast"
        );
    }

    #[test]
    fn assisted_adds_period_to_sentence_fields() {
        assert_eq!(
            format_string(ScalarField::Hierarchy, "reduce friction", PhrasingMode::Assisted),
            "Reduce friction."
        );
        // non-sentence fields get no punctuation
        assert_eq!(
            format_string(ScalarField::CoreValue, "reduce friction", PhrasingMode::Assisted),
            "Reduce friction"
        );
    }

    #[test]
    fn assisted_never_double_punctuates() {
        assert_eq!(
            format_string(
                ScalarField::BestPractices,
                "Already punctuated!",
                PhrasingMode::Assisted
            ),
            "Already punctuated!"
        );
        assert_eq!(
            format_string(ScalarField::Accessibility, "done?", PhrasingMode::Assisted),
            "Done?"
        );
    }

    #[test]
    fn empty_value_resolves_to_tbd_in_both_modes() {
        assert_eq!(
            format_string(ScalarField::ProjectName, "   ", PhrasingMode::Verbatim),
            TBD
        );
        assert_eq!(
            format_string(ScalarField::Hierarchy, "", PhrasingMode::Assisted),
            TBD
        );
    }

    #[test]
    fn resolve_prefers_own_value_over_fallback() {
        let mut data = PrdData::default();
        data.instruction_discipline = "frontend craft".to_string();
        assert_eq!(
            resolve(
                &data,
                ScalarField::InstructionDiscipline,
                PhrasingMode::Verbatim,
                Some("UI engineering")
            ),
            "frontend craft"
        );
    }

    #[test]
    fn resolve_formats_fallback_when_own_value_blank() {
        let data = PrdData::default();
        assert_eq!(
            resolve(
                &data,
                ScalarField::InstructionDiscipline,
                PhrasingMode::Assisted,
                Some("uI engineering")
            ),
            "UI engineering"
        );
    }

    #[test]
    fn empty_fallback_counts_as_absent() {
        let data = PrdData::default();
        assert_eq!(
            resolve(&data, ScalarField::SynergyTooling, PhrasingMode::Verbatim, Some("")),
            TBD
        );
        assert_eq!(
            resolve(&data, ScalarField::SynergyTooling, PhrasingMode::Verbatim, None),
            TBD
        );
    }

    #[test]
    fn list_helpers_drop_empty_items() {
        let items = vec!["  a  ".to_string(), "".to_string(), "b".to_string()];
        assert_eq!(list_or_tbd(&items, PhrasingMode::Verbatim), vec!["a", "b"]);
        assert_eq!(
            list_or_tbd(&items, PhrasingMode::Assisted),
            vec!["A", "B"]
        );
    }

    #[test]
    fn all_empty_list_behavior_differs_per_helper() {
        let items = vec!["".to_string(), "  ".to_string()];
        assert_eq!(list_or_tbd(&items, PhrasingMode::Verbatim), vec![TBD]);
        assert!(list_or_empty(&items, PhrasingMode::Verbatim).is_empty());
    }
}
