//! The three-pane navigator: pane state, list cache and reconciliation.
//!
//! Every mutation goes through [`Navigator`], which runs the cascade to a
//! fixed point afterwards and queues the fetches the new state needs. The
//! runtime drains those with [`Navigator::take_fetches`] and reports results
//! back through [`Navigator::apply_fetch`].

use crate::cascade::{self, CascadeController};
use crate::filter::filter_candidates;
use crate::query_cache::{Completion, FetchTicket, QueryCache};
use crate::state::{NavigatorState, PaneStack};

use std::time::Duration;
use tripane_core::{CacheConfig, Candidate, CandidateId, ExecuteRequest, PaneIndex, Parent, QueryKey};

/// Loading and error flags of a pane's current list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaneStatus<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
}

#[derive(Debug)]
pub struct Navigator {
    stack: PaneStack,
    cache: QueryCache,
    cascade: CascadeController,
    pending: Vec<FetchTicket>,
}

impl Navigator {
    pub fn new(stale_after: Duration) -> Self {
        let mut navigator = Self {
            stack: PaneStack::new(),
            cache: QueryCache::new(stale_after),
            cascade: CascadeController::new(),
            pending: Vec::new(),
        };
        navigator.settle();
        navigator
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.stale_after())
    }

    pub fn state(&self) -> &NavigatorState {
        self.stack.state()
    }

    pub fn active(&self) -> PaneIndex {
        self.state().active
    }

    /// Fetches queued since the last call
    pub fn take_fetches(&mut self) -> Vec<FetchTicket> {
        std::mem::take(&mut self.pending)
    }

    /// Record a fetch result; the state only reacts when its key is still current
    pub fn apply_fetch(&mut self, ticket: &FetchTicket, result: Result<Vec<Candidate>, String>) -> Completion {
        let completion = self.cache.complete(ticket, result);
        match completion {
            Completion::Current => self.settle(),
            Completion::Stale => tracing::debug!(key = %ticket.key, pane = %ticket.pane, "discarding stale fetch"),
            Completion::Ignored => tracing::debug!(key = %ticket.key, seq = ticket.seq, "ignoring unknown fetch"),
        }
        completion
    }

    /// Queue a refetch of every visible pane's list
    pub fn refresh(&mut self) {
        for pane in PaneIndex::VALUES {
            if let Some(ticket) = self.cache.refresh(pane) {
                self.pending.push(ticket);
            }
        }
    }

    fn settle(&mut self) {
        self.cascade.run(&mut self.stack, &self.cache);
        for pane in PaneIndex::VALUES {
            let key = cascade::pane_key(self.stack.state(), &self.cache, pane);
            if let Some(ticket) = self.cache.observe(pane, key.as_ref()) {
                tracing::debug!(pane = %pane, key = %ticket.key, "fetch queued");
                self.pending.push(ticket);
            }
        }
    }

    /// Key `pane` currently lists, `None` when it has nothing to show
    pub fn query_key(&self, pane: PaneIndex) -> Option<QueryKey> {
        cascade::pane_key(self.state(), &self.cache, pane)
    }

    /// Unfiltered list of `pane`, if loaded
    pub fn list(&self, pane: PaneIndex) -> Option<&[Candidate]> {
        let key = self.query_key(pane)?;
        self.cache.get(pane, &key).data
    }

    /// Filtered list of `pane` in display order
    pub fn filtered(&self, pane: PaneIndex) -> Vec<&Candidate> {
        match self.list(pane) {
            Some(list) => filter_candidates(list, &self.state().pane(pane).filter_text),
            None => Vec::new(),
        }
    }

    pub fn selected_candidate(&self, pane: PaneIndex) -> Option<&Candidate> {
        let selected = self.state().pane(pane).selected.as_ref()?;
        self.list(pane)?.iter().find(|c| &c.id == selected)
    }

    pub fn pane_status(&self, pane: PaneIndex) -> PaneStatus<'_> {
        match self.query_key(pane) {
            Some(key) => {
                let view = self.cache.get(pane, &key);
                PaneStatus { loading: view.is_fetching, error: view.error }
            }
            None => PaneStatus::default(),
        }
    }

    pub fn indirect_visible(&self) -> bool {
        cascade::indirect_visible(self.state(), &self.cache)
    }

    /// 3 while the selected action needs an indirect, else 2
    pub fn visible_pane_count(&self) -> usize {
        if self.indirect_visible() { 3 } else { 2 }
    }

    /// The triple Enter would execute, if it is complete
    pub fn execute_request(&self) -> Option<ExecuteRequest> {
        let state = self.state();
        let direct = state.pane(PaneIndex::Direct).selected.clone()?;
        let action = state.pane(PaneIndex::Action).selected.clone()?;
        let indirect = if self.indirect_visible() {
            Some(state.pane(PaneIndex::Indirect).selected.clone()?)
        } else {
            None
        };
        Some(ExecuteRequest { direct, action, indirect })
    }

    pub fn set_active(&mut self, pane: PaneIndex) {
        self.stack.set_active(pane);
        self.settle();
    }

    pub fn select(&mut self, pane: PaneIndex, id: Option<CandidateId>) {
        self.stack.set_selected(pane, id);
        self.settle();
    }

    pub fn set_parent(&mut self, pane: PaneIndex, parent: Parent) {
        self.stack.set_parent(pane, parent);
        self.settle();
    }

    pub fn drill_in(&mut self, pane: PaneIndex, id: CandidateId) {
        self.stack.drill_in(pane, id);
        self.settle();
    }

    /// Returns false when the pane has no recorded trail to go back along
    pub fn drill_out(&mut self, pane: PaneIndex) -> bool {
        let moved = self.stack.drill_out(pane).is_some();
        if moved {
            self.settle();
        }
        moved
    }

    pub fn append_filter_char(&mut self, pane: PaneIndex, c: char) {
        self.stack.append_filter_char(pane, c);
        self.settle();
    }

    pub fn clear_filter(&mut self, pane: PaneIndex) {
        self.stack.clear_filter_text(pane);
        self.settle();
    }

    /// Back to the initial root state; cached lists are kept
    pub fn reset(&mut self) {
        self.stack.reset();
        self.cascade.reset();
        self.cache.forget_current();
        self.settle();
    }
}
