//! Host window capability.
//!
//! The navigator never owns its window. It asks the host to resize it when
//! the number of visible panes changes and to hide it when the user is done.

use crate::layout::PaneLayout;

pub trait WindowHandle: Send {
    fn resize(&mut self, layout: PaneLayout);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;
}

/// Window backed by the terminal the TUI draws into
///
/// The terminal cannot change its own size, so a resize only records the
/// column count; hiding ends the event loop.
#[derive(Debug, Clone)]
pub struct TerminalWindow {
    layout: PaneLayout,
    visible: bool,
}

impl Default for TerminalWindow {
    fn default() -> Self {
        Self { layout: PaneLayout::new(2), visible: true }
    }
}

impl TerminalWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(&self) -> PaneLayout {
        self.layout
    }
}

impl WindowHandle for TerminalWindow {
    fn resize(&mut self, layout: PaneLayout) {
        tracing::debug!(columns = layout.columns, "window resize");
        self.layout = layout;
    }

    fn hide(&mut self) {
        tracing::debug!("window hidden");
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
