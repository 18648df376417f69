pub mod detail;
pub mod list;
pub mod lookup;

/// Truncate and normalize a string for one table cell
/// - Replaces newlines with spaces and collapses runs of whitespace
/// - Respects UTF-8 character boundaries
pub(crate) fn truncate_for_display(s: &str, max_chars: usize) -> String {
    let normalized = s
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if normalized.chars().count() <= max_chars {
        normalized
    } else {
        let truncated: String = normalized.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
