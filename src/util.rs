/// Truncate a string for display, appending an ellipsis when cut.
/// Operates on characters, so CJK text is never split mid-codepoint.
pub fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max <= 1 {
        return s.chars().take(max).collect();
    }
    let kept: String = s.chars().take(max - 1).collect();
    format!("{}…", kept)
}
