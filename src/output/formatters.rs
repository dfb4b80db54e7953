//! Formatting utilities for terminal output

/// Join a path with arrows: `cat → dog → cow`
#[must_use]
pub fn format_path<S: AsRef<str>>(path: &[S]) -> String {
    if path.is_empty() {
        return "(none)".to_string();
    }
    path.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { value / max } else { 0.0 };
    // Cast is safe: values are clamped to [0, width]
    let filled = ((ratio * width as f64).max(0.0) as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a percentage (0-100) as a bar
#[must_use]
pub fn percentage_bar(percentage: f64, width: usize) -> String {
    create_progress_bar(percentage, 100.0, width)
}

/// Format an optional similarity, `n/a` when absent
#[must_use]
pub fn format_similarity(similarity: Option<f64>) -> String {
    similarity.map_or_else(|| "n/a".to_string(), |s| format!("{s:.3}"))
}
