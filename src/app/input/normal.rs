use crate::ui::{App, InputMode};
use crate::view::View;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle key events in normal (navigation) mode
pub(super) fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Bottom-bar navigation: clears focus unconditionally. Letter
        // aliases mirror the digits for the three top-level screens.
        KeyCode::Char('1') | KeyCode::Char('l') => app.navigate(View::List),
        KeyCode::Char('2') | KeyCode::Char('c') => app.navigate(View::Compare),
        KeyCode::Char('3') | KeyCode::Char('a') => app.navigate(View::Advisory),

        KeyCode::Esc => match app.view.view() {
            View::List => {}
            _ => app.navigate(View::List),
        },

        KeyCode::Char('/') if app.view.view() == View::List => {
            app.input_mode = InputMode::Search;
        }
        KeyCode::Tab if app.view.view() == View::List => app.cycle_category(),

        KeyCode::Down | KeyCode::Char('j') if app.view.view() == View::List => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') if app.view.view() == View::List => app.select_prev(),
        KeyCode::Enter if app.view.view() == View::List => app.open_selected_detail(),

        KeyCode::Char(' ') => app.toggle_compare_current(),

        // Comparison screen edits its set in place.
        KeyCode::Char('x') if app.view.view() == View::Compare => app.compare.pop(),
        KeyCode::Char('C') if app.view.view() == View::Compare => app.compare.clear(),

        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        App::new(Catalog::embedded().unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_normal_mode(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn test_detail_roundtrip_clears_focus() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view.view(), View::Detail);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view.view(), View::List);
        assert!(app.view.focus().is_none());
    }

    #[test]
    fn test_navigation_from_detail_clears_focus() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.view.view(), View::Compare);
        assert!(app.view.focus().is_none());
    }

    #[test]
    fn test_space_toggles_compare_on_highlighted_row() {
        let mut app = app();
        let id = app.filtered()[0].id.clone();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.compare.contains(&id));
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.compare.contains(&id));
    }

    #[test]
    fn test_compare_screen_edits() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.compare.len(), 1);
        press(&mut app, KeyCode::Char('C'));
        assert!(app.compare.is_empty());
    }

    #[test]
    fn test_letter_aliases_match_digit_navigation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.view.view(), View::Compare);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.view.view(), View::List);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.view.view(), View::Advisory);
    }

    #[test]
    fn test_lowercase_c_leaves_compare_set_alone() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.view.view(), View::Compare);
        assert_eq!(app.compare.len(), 1);
        press(&mut app, KeyCode::Char('C'));
        assert!(app.compare.is_empty());
    }

    #[test]
    fn test_advisory_entry_switches_to_chat_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.view.view(), View::Advisory);
        assert_eq!(app.input_mode, InputMode::Chat);
    }
}
