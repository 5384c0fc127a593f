mod command_keys;
mod filter_keys;
mod nav_keys;

use super::KeyAction;
use crate::navigator::Navigator;

use crossterm::event::{KeyEvent, KeyModifiers};

/// Outcome of offering a key to the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyHandling {
    /// The key was consumed, optionally requesting a side effect
    Handled(Option<KeyAction>),
    /// The key is not bound here
    Pass,
}

/// Maps key presses to navigator mutations
///
/// Keys held with Ctrl, Alt, Super or Meta are never consumed.
pub struct KeyRouter;

impl KeyRouter {
    pub fn route(event: &KeyEvent, navigator: &mut Navigator) -> KeyHandling {
        let chorded = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META;
        if event.modifiers.intersects(chorded) {
            return KeyHandling::Pass;
        }

        for handler in [
            nav_keys::handle_nav_keys,
            command_keys::handle_command_keys,
            filter_keys::handle_filter_keys,
        ] {
            match handler(event, navigator) {
                KeyHandling::Handled(action) => return KeyHandling::Handled(action),
                KeyHandling::Pass => {}
            }
        }

        KeyHandling::Pass
    }
}
