use super::{KeyAction, KeyHandling};
use crate::navigator::Navigator;

use crossterm::event::{KeyCode, KeyEvent};
use tripane_core::{PaneIndex, Parent};

pub(super) fn handle_nav_keys(event: &KeyEvent, navigator: &mut Navigator) -> KeyHandling {
    match event.code {
        KeyCode::Tab => cycle_focus(navigator, 1),
        KeyCode::BackTab => cycle_focus(navigator, -1),
        KeyCode::Up => move_selection(navigator, -1),
        KeyCode::Down => move_selection(navigator, 1),
        KeyCode::Right => drill_in(navigator),
        KeyCode::Left => drill_out(navigator),
        _ => KeyHandling::Pass,
    }
}

fn cycle_focus(navigator: &mut Navigator, step: isize) -> KeyHandling {
    let count = navigator.visible_pane_count() as isize;
    let next = (navigator.active().as_usize() as isize + step).rem_euclid(count);
    if let Some(pane) = PaneIndex::from_usize(next as usize) {
        navigator.set_active(pane);
    }
    KeyHandling::Handled(None)
}

/// Step through the filtered list, wrapping at both ends
fn move_selection(navigator: &mut Navigator, step: isize) -> KeyHandling {
    let pane = navigator.active();
    let selected = navigator.state().pane(pane).selected.clone();
    let ids: Vec<String> = navigator.filtered(pane).into_iter().map(|c| c.id.clone()).collect();
    if ids.is_empty() {
        return KeyHandling::Handled(None);
    }

    let len = ids.len() as isize;
    let next = match ids.iter().position(|id| Some(id) == selected.as_ref()) {
        Some(index) => (index as isize + step).rem_euclid(len),
        None if step > 0 => 0,
        None => len - 1,
    };
    navigator.select(pane, Some(ids[next as usize].clone()));
    KeyHandling::Handled(None)
}

fn drill_in(navigator: &mut Navigator) -> KeyHandling {
    let pane = navigator.active();
    let target = navigator.selected_candidate(pane).filter(|c| c.has_children).map(|c| c.id.clone());
    if let Some(id) = target {
        navigator.drill_in(pane, id);
    }
    KeyHandling::Handled(None)
}

/// Go back to the scope containing the current parent
///
/// Scopes reached by drilling are restored directly. Otherwise the catalog
/// has to be asked, which the runtime does asynchronously.
fn drill_out(navigator: &mut Navigator) -> KeyHandling {
    let pane = navigator.active();
    let Parent::Id(child) = navigator.state().pane(pane).parent.clone() else {
        return KeyHandling::Handled(None);
    };

    if navigator.drill_out(pane) {
        KeyHandling::Handled(None)
    } else {
        KeyHandling::Handled(Some(KeyAction::ResolveParent { pane, child }))
    }
}
