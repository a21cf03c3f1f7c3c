// Small presentation helpers shared by the components.

pub fn stars(count: usize) -> String {
    "⭐".repeat(count)
}

/// First `max` characters, with "..." appended when something was cut.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
