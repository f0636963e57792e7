//! View state machine
//!
//! Tracks which screen is active and which record (if any) is focused.
//! Invariant: the focus slot is occupied exactly when the detail view is
//! active. Every transition below maintains it.

use crate::compare::CompareSet;

/// The closed set of screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Detail,
    Compare,
    Advisory,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    view: View,
    focus: Option<String>,
}

impl ViewState {
    pub fn view(&self) -> View {
        self.view
    }

    /// The record shown in the detail view, or `None` anywhere else.
    pub fn focus(&self) -> Option<&str> {
        self.focus.as_deref()
    }

    /// Select a record: any view → detail, carrying the record as focus.
    pub fn open_detail(&mut self, id: impl Into<String>) {
        self.focus = Some(id.into());
        self.view = View::Detail;
    }

    /// Navigate to a screen via the bottom bar. Focus is cleared
    /// unconditionally, regardless of origin. Detail is only reachable with
    /// a focused record through `open_detail`, so a detail target falls back
    /// to the list.
    pub fn navigate(&mut self, target: View) {
        self.focus = None;
        self.view = match target {
            View::Detail => View::List,
            other => other,
        };
    }

    /// Back action from the detail view.
    pub fn back(&mut self) {
        self.navigate(View::List);
    }

    /// The floating comparison badge is a derived fact, not stored state:
    /// visible whenever something is selected and we are not already
    /// comparing.
    pub fn compare_badge_visible(&self, compare: &CompareSet) -> bool {
        !compare.is_empty() && self.view != View::Compare
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invariant_holds(state: &ViewState) -> bool {
        state.focus().is_some() == (state.view() == View::Detail)
    }

    #[test]
    fn test_initial_state_is_list_without_focus() {
        let state = ViewState::default();
        assert_eq!(state.view(), View::List);
        assert!(state.focus().is_none());
    }

    #[test]
    fn test_open_detail_sets_focus() {
        let mut state = ViewState::default();
        state.open_detail("s350");
        assert_eq!(state.view(), View::Detail);
        assert_eq!(state.focus(), Some("s350"));
        assert!(invariant_holds(&state));
    }

    #[test]
    fn test_back_clears_focus() {
        let mut state = ViewState::default();
        state.open_detail("s350");
        state.back();
        assert_eq!(state.view(), View::List);
        assert!(state.focus().is_none());
    }

    #[test]
    fn test_reselect_replaces_focus() {
        let mut state = ViewState::default();
        state.open_detail("s350");
        state.back();
        state.open_detail("ak550");
        assert_eq!(state.focus(), Some("ak550"));
    }

    #[test]
    fn test_navigation_clears_focus_from_any_view() {
        for target in [View::List, View::Compare, View::Advisory] {
            let mut state = ViewState::default();
            state.open_detail("s350");
            state.navigate(target);
            assert_eq!(state.view(), target);
            assert!(state.focus().is_none());
        }
    }

    #[test]
    fn test_navigate_to_detail_falls_back_to_list() {
        let mut state = ViewState::default();
        state.navigate(View::Detail);
        assert_eq!(state.view(), View::List);
        assert!(invariant_holds(&state));
    }

    #[test]
    fn test_invariant_over_transition_sequences() {
        let mut state = ViewState::default();
        let steps: [&dyn Fn(&mut ViewState); 8] = [
            &|s| s.open_detail("a"),
            &|s| s.navigate(View::Advisory),
            &|s| s.navigate(View::Compare),
            &|s| s.open_detail("b"),
            &|s| s.back(),
            &|s| s.open_detail("c"),
            &|s| s.navigate(View::List),
            &|s| s.navigate(View::Advisory),
        ];
        for step in steps {
            step(&mut state);
            assert!(invariant_holds(&state));
        }
    }

    #[test]
    fn test_compare_badge_derivation() {
        let mut state = ViewState::default();
        let mut compare = CompareSet::new();
        assert!(!state.compare_badge_visible(&compare));

        compare.toggle("a");
        assert!(state.compare_badge_visible(&compare));

        state.navigate(View::Compare);
        assert!(!state.compare_badge_visible(&compare));

        state.navigate(View::Advisory);
        assert!(state.compare_badge_visible(&compare));
    }
}
