//! UI helper functions

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthChar;

/// Create a centered rect taking a percentage of the available rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Wrap text to fit a display width, measured in terminal columns.
/// CJK characters occupy two columns, so splitting happens per character
/// rather than per word; space-separated Latin text still breaks cleanly
/// because a break is allowed anywhere.
pub fn wrap_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0usize;
        for c in raw_line.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > width && !current.is_empty() {
                lines.push(current);
                current = String::new();
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
        lines.push(current);
    }

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Display width of a string in terminal columns.
pub fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_line_untouched() {
        assert_eq!(wrap_width("hello", 10), vec!["hello"]);
    }

    #[test]
    fn test_wrap_respects_column_width() {
        let lines = wrap_width("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_counts_cjk_as_two_columns() {
        // Four CJK chars at width 4 leaves two chars per line.
        let lines = wrap_width("光阳摩托", 4);
        assert_eq!(lines, vec!["光阳", "摩托"]);
    }

    #[test]
    fn test_wrap_preserves_explicit_newlines() {
        let lines = wrap_width("a\nb", 10);
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_wrap_empty_input() {
        assert_eq!(wrap_width("", 10), vec![""]);
    }

    #[test]
    fn test_display_width_mixed() {
        assert_eq!(display_width("ab光"), 4);
    }
}
