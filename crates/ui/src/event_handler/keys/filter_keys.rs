use super::KeyHandling;
use crate::navigator::Navigator;

use crossterm::event::{KeyCode, KeyEvent};
use tripane_core::Parent;

/// Typing filters the active pane, jumping back to its root scope first
pub(super) fn handle_filter_keys(event: &KeyEvent, navigator: &mut Navigator) -> KeyHandling {
    let KeyCode::Char(c) = event.code else {
        return KeyHandling::Pass;
    };
    if !c.is_alphanumeric() {
        return KeyHandling::Pass;
    }

    let pane = navigator.active();
    if !navigator.state().pane(pane).parent.is_root() {
        navigator.set_parent(pane, Parent::Root);
    }
    for lower in c.to_lowercase() {
        navigator.append_filter_char(pane, lower);
    }
    KeyHandling::Handled(None)
}
