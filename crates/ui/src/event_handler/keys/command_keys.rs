use super::{KeyAction, KeyHandling};
use crate::navigator::Navigator;

use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_command_keys(event: &KeyEvent, navigator: &mut Navigator) -> KeyHandling {
    match event.code {
        KeyCode::Enter => match navigator.execute_request() {
            Some(request) => KeyHandling::Handled(Some(KeyAction::Execute(request))),
            None => {
                tracing::debug!(state = ?navigator.state(), "enter ignored, selection incomplete");
                KeyHandling::Handled(None)
            }
        },
        KeyCode::Esc => KeyHandling::Handled(Some(KeyAction::Dismiss)),
        KeyCode::Backspace => {
            navigator.clear_filter(navigator.active());
            KeyHandling::Handled(None)
        }
        _ => KeyHandling::Pass,
    }
}
