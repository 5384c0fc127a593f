pub mod app;
pub mod cascade;
pub mod components;
pub mod event_handler;
pub mod filter;
pub mod layout;
pub mod navigator;
pub mod query_cache;
pub mod state;
pub mod theme;
pub mod window;

pub use app::{App, CatalogEvent};
pub use cascade::CascadeController;
pub use event_handler::{EventHandler, KeyAction, KeyHandling, KeyRouter};
pub use filter::filter_candidates;
pub use layout::PaneLayout;
pub use navigator::{Navigator, PaneStatus};
pub use query_cache::{Completion, FetchTicket, QueryCache};
pub use state::{NavigatorState, Pane, PaneStack, StatusMessage};
pub use theme::Theme;
pub use window::{TerminalWindow, WindowHandle};
