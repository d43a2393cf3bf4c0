//! Text matching and display utilities.

/// Normalize a search term for comparison: trimmed and lowercased.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Check whether `haystack` contains `needle_lower` ignoring case.
///
/// `needle_lower` must already be lowercased (see [`normalize`]).
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Check whether any entry of a list contains `needle_lower` ignoring case.
pub fn any_contains_ignore_case(entries: &[String], needle_lower: &str) -> bool {
    entries
        .iter()
        .any(|entry| contains_ignore_case(entry, needle_lower))
}

/// Shorten a title for table output, counting characters rather than bytes.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() > max_chars {
        let keep = max_chars.saturating_sub(3);
        format!("{}...", title.chars().take(keep).collect::<String>())
    } else {
        title.to_string()
    }
}
