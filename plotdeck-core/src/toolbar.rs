//! Element toolbar contracts.
//!
//! The rule for which built-in fullscreen action a toolbar offers, the
//! labels of those actions, and the DOM marker strings external test
//! tooling selects on. The UI crate renders these; nothing here touches
//! the DOM.

/// Which built-in fullscreen action a toolbar offers.
///
/// Derived from the element's `expanded` flag: an element is either in
/// fullscreen or not, and the toolbar offers at most the one transition
/// out of the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenToggle {
    /// Enter fullscreen ("Fullscreen").
    Expand,
    /// Leave fullscreen ("Close fullscreen").
    Collapse,
}

/// Label of the built-in enter-fullscreen action.
pub const FULLSCREEN_LABEL: &str = "Fullscreen";

/// Label of the built-in exit-fullscreen action.
pub const EXIT_FULLSCREEN_LABEL: &str = "Close fullscreen";

// DOM markers consumed by external automated tests. The exact strings are
// load-bearing; see `marker_strings_are_stable` below.
pub const TOOLBAR_TEST_ID: &str = "pdElementToolbar";
pub const TOOLBAR_BUTTON_TEST_ID: &str = "pdElementToolbarButton";
pub const TOOLBAR_BUTTON_ICON_TEST_ID: &str = "pdElementToolbarButtonIcon";

/// Decide which built-in fullscreen action a toolbar renders, if any.
///
/// - `can_expand` / `can_collapse`: whether a handler for that transition
///   resolved (explicit prop or ambient scope).
/// - `expanded`: whether the element currently fills the viewport.
/// - `fullscreen_disabled`: host opt-out; suppresses both actions.
///
/// Branches are mutually exclusive: the result is never `Expand` while
/// expanded, never `Collapse` while collapsed, and never both.
pub fn resolve_fullscreen_toggle(
    can_expand: bool,
    can_collapse: bool,
    expanded: bool,
    fullscreen_disabled: bool,
) -> Option<FullscreenToggle> {
    if fullscreen_disabled {
        return None;
    }
    if can_expand && !expanded {
        return Some(FullscreenToggle::Expand);
    }
    if can_collapse && expanded {
        return Some(FullscreenToggle::Collapse);
    }
    None
}
