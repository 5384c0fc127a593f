mod key_action;
mod keys;

pub use key_action::KeyAction;
pub use keys::{KeyHandling, KeyRouter};

use crate::navigator::Navigator;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Event handler for the navigator TUI
pub struct EventHandler;

impl EventHandler {
    /// Read a single event from the terminal
    ///
    /// Returns `Some(event)` if an event is available, `None` on timeout or error.
    pub fn read() -> Option<Event> {
        match crossterm::event::poll(std::time::Duration::from_millis(50)) {
            Ok(true) => match crossterm::event::read() {
                Ok(event) => Some(event),
                Err(e) => {
                    tracing::warn!(error = %e, "terminal read failed");
                    None
                }
            },
            Ok(false) => None,
            Err(e) => {
                tracing::warn!(error = %e, "event poll failed");
                None
            }
        }
    }

    /// Route a key press through the navigator
    ///
    /// Keys the router does not consume fall through to application-level
    /// bindings: Ctrl+C quits and Ctrl+R refreshes.
    pub fn handle_key_event(event: KeyEvent, navigator: &mut Navigator) -> Option<KeyAction> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        match KeyRouter::route(&event, navigator) {
            KeyHandling::Handled(action) => action,
            KeyHandling::Pass => match event.code {
                KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Some(KeyAction::Exit),
                KeyCode::Char('r') if event.modifiers.contains(KeyModifiers::CONTROL) => Some(KeyAction::Refresh),
                _ => None,
            },
        }
    }

    pub fn handle_event(event: &Event, navigator: &mut Navigator) -> Option<KeyAction> {
        match event {
            Event::Key(key_event) => Self::handle_key_event(*key_event, navigator),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_ctrl_c_exits() {
        let mut navigator = Navigator::new(Duration::ZERO);
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(EventHandler::handle_key_event(event, &mut navigator), Some(KeyAction::Exit));
        assert_eq!(navigator.state().pane(tripane_core::PaneIndex::Direct).filter_text, "");
    }

    #[test]
    fn test_ctrl_r_refreshes() {
        let mut navigator = Navigator::new(Duration::ZERO);
        let event = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(EventHandler::handle_key_event(event, &mut navigator), Some(KeyAction::Refresh));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut navigator = Navigator::new(Duration::ZERO);
        let mut event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(EventHandler::handle_key_event(event, &mut navigator), None);
        assert_eq!(navigator.state().pane(tripane_core::PaneIndex::Direct).filter_text, "");
    }

    #[test]
    fn test_esc_dismisses() {
        let mut navigator = Navigator::new(Duration::ZERO);
        let event = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(EventHandler::handle_event(&event, &mut navigator), Some(KeyAction::Dismiss));
    }

    #[test]
    fn test_non_key_events_ignored() {
        let mut navigator = Navigator::new(Duration::ZERO);
        assert_eq!(EventHandler::handle_event(&Event::FocusGained, &mut navigator), None);
        assert_eq!(EventHandler::handle_event(&Event::Resize(80, 24), &mut navigator), None);
    }
}
