//! Formatting helpers for class lists and display values.

/// Join class names with single spaces, skipping empty entries.
pub fn join_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    classes
        .into_iter()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a progress value the way it appears in a readout (`42`, `42.5`).
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}", v),
        _ => String::new(),
    }
}

/// Render the visible text of a label for use as a `title` attribute.
///
/// Collapses runs of whitespace so multi-line labels produce a single-line
/// tooltip.
pub fn inner_text(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join(" ")
}
