//! Navigator runtime: owns the state, runs catalog calls, drives the window.
//!
//! Catalog calls run on spawned tasks and report back over an unbounded
//! channel as [`CatalogEvent`]s. Only [`App`] mutates the navigator, one event
//! at a time, so no state is shared across tasks.

mod dispatch;
mod event_loop;
mod rendering;

pub use event_loop::run;

use crate::event_handler::{EventHandler, KeyAction};
use crate::layout::PaneLayout;
use crate::navigator::Navigator;
use crate::query_cache::FetchTicket;
use crate::state::StatusMessage;
use crate::window::WindowHandle;

use crossterm::event::Event;
use std::sync::Arc;
use tokio::sync::mpsc;
use tripane_catalog::Catalog;
use tripane_core::{AfterExecute, Candidate, CandidateId, ExecuteRequest, PaneIndex, Parent};

/// Completed catalog call, delivered back to the runtime
#[derive(Debug)]
pub enum CatalogEvent {
    Fetched { ticket: FetchTicket, result: Result<Vec<Candidate>, String> },
    ParentResolved { pane: PaneIndex, child: CandidateId, result: Result<Parent, String> },
    Executed { request: ExecuteRequest, result: Result<(), String> },
}

pub struct App {
    navigator: Navigator,
    catalog: Arc<dyn Catalog>,
    window: Box<dyn WindowHandle>,
    after_execute: AfterExecute,
    status: Option<StatusMessage>,
    layout: PaneLayout,
    events_tx: mpsc::UnboundedSender<CatalogEvent>,
    events_rx: mpsc::UnboundedReceiver<CatalogEvent>,
    pub should_exit: bool,
}

impl App {
    pub fn new(
        navigator: Navigator, catalog: Arc<dyn Catalog>, window: Box<dyn WindowHandle>, after_execute: AfterExecute,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let layout = PaneLayout::new(navigator.visible_pane_count());
        Self {
            navigator,
            catalog,
            window,
            after_execute,
            status: None,
            layout,
            events_tx,
            events_rx,
            should_exit: false,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// False once the user quit or the window was hidden
    pub fn is_running(&self) -> bool {
        !self.should_exit && self.window.is_visible()
    }

    /// Dispatch the fetches queued while the navigator was built
    pub fn start(&mut self) {
        self.after_mutation();
    }

    /// Wait for the next completed catalog call
    pub async fn next_catalog_event(&mut self) -> Option<CatalogEvent> {
        self.events_rx.recv().await
    }

    pub fn handle_event(&mut self, event: Event) {
        if let Some(action) = EventHandler::handle_event(&event, &mut self.navigator) {
            self.perform(action);
        }
        self.after_mutation();
    }

    fn perform(&mut self, action: KeyAction) {
        match action {
            KeyAction::Execute(request) => {
                tracing::info!(direct = %request.direct, action = %request.action, indirect = ?request.indirect, "execute");
                dispatch::spawn_execute(self.catalog.clone(), request, self.events_tx.clone());
            }
            KeyAction::ResolveParent { pane, child } => {
                dispatch::spawn_parent_lookup(self.catalog.clone(), pane, child, self.events_tx.clone());
            }
            KeyAction::Refresh => self.navigator.refresh(),
            KeyAction::Dismiss => self.window.hide(),
            KeyAction::Exit => self.should_exit = true,
        }
    }

    pub fn handle_catalog_event(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::Fetched { ticket, result } => {
                self.navigator.apply_fetch(&ticket, result);
            }
            CatalogEvent::ParentResolved { pane, child, result } => match result {
                Ok(parent) => {
                    if self.navigator.state().pane(pane).parent == Parent::Id(child.clone()) {
                        self.navigator.set_parent(pane, parent);
                    } else {
                        tracing::debug!(pane = %pane, child = %child, "parent lookup outdated");
                    }
                }
                Err(message) => {
                    tracing::warn!(pane = %pane, child = %child, error = %message, "parent lookup failed");
                    self.status = Some(StatusMessage::Failed { message });
                }
            },
            CatalogEvent::Executed { request, result } => match result {
                Ok(()) => {
                    self.status = Some(StatusMessage::Executed { action: request.action });
                    if self.after_execute == AfterExecute::Reset {
                        self.navigator.reset();
                    }
                    self.window.hide();
                }
                Err(message) => {
                    tracing::warn!(action = %request.action, error = %message, "execute failed");
                    self.status = Some(StatusMessage::Failed { message });
                }
            },
        }
        self.after_mutation();
    }

    fn after_mutation(&mut self) {
        for ticket in self.navigator.take_fetches() {
            dispatch::spawn_fetch(self.catalog.clone(), ticket, self.events_tx.clone());
        }

        let layout = PaneLayout::new(self.navigator.visible_pane_count());
        if layout != self.layout {
            self.window.resize(layout);
            self.layout = layout;
        }
    }
}
