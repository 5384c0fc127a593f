use tripane_core::{CandidateId, PaneIndex, Parent};

/// Navigation state of one pane
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pane {
    /// Scope of the pane's list
    pub parent: Parent,
    /// Selected candidate, if any
    pub selected: Option<CandidateId>,
    /// Fuzzy filter typed into the pane
    pub filter_text: String,
}

/// Snapshot of all three panes and which one has focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorState {
    panes: [Pane; 3],
    pub active: PaneIndex,
}

impl Default for NavigatorState {
    fn default() -> Self {
        Self { panes: Default::default(), active: PaneIndex::Direct }
    }
}

impl NavigatorState {
    pub fn pane(&self, pane: PaneIndex) -> &Pane {
        &self.panes[pane.as_usize()]
    }

    pub fn active_pane(&self) -> &Pane {
        self.pane(self.active)
    }
}

/// Owner of the navigator state; the only place panes are mutated
///
/// Alongside each pane it remembers the parents it drilled through, so
/// drilling out can restore the previous scope without asking the catalog.
#[derive(Debug, Clone, Default)]
pub struct PaneStack {
    state: NavigatorState,
    trails: [Vec<Parent>; 3],
}

impl PaneStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn pane(&self, pane: PaneIndex) -> &Pane {
        self.state.pane(pane)
    }

    fn pane_mut(&mut self, pane: PaneIndex) -> &mut Pane {
        &mut self.state.panes[pane.as_usize()]
    }

    /// Replace a pane's scope. Returning to root forgets the drill trail.
    pub fn set_parent(&mut self, pane: PaneIndex, parent: Parent) {
        if parent.is_root() {
            self.trails[pane.as_usize()].clear();
        }
        self.pane_mut(pane).parent = parent;
    }

    pub fn set_selected(&mut self, pane: PaneIndex, selected: Option<CandidateId>) {
        self.pane_mut(pane).selected = selected;
    }

    pub fn set_filter_text(&mut self, pane: PaneIndex, text: impl Into<String>) {
        self.pane_mut(pane).filter_text = text.into();
    }

    pub fn append_filter_char(&mut self, pane: PaneIndex, c: char) {
        self.pane_mut(pane).filter_text.push(c);
    }

    pub fn clear_filter_text(&mut self, pane: PaneIndex) {
        self.pane_mut(pane).filter_text.clear();
    }

    pub fn set_active(&mut self, pane: PaneIndex) {
        self.state.active = pane;
    }

    /// Scope a pane to the children of `id`, remembering where it came from
    pub fn drill_in(&mut self, pane: PaneIndex, id: CandidateId) {
        let previous = std::mem::replace(&mut self.pane_mut(pane).parent, Parent::Id(id));
        self.trails[pane.as_usize()].push(previous);
    }

    /// Restore the scope a pane drilled in from
    ///
    /// Returns `None` when the pane has no recorded trail; the caller then has
    /// to resolve the parent some other way.
    pub fn drill_out(&mut self, pane: PaneIndex) -> Option<&Parent> {
        let previous = self.trails[pane.as_usize()].pop()?;
        self.pane_mut(pane).parent = previous;
        Some(&self.pane(pane).parent)
    }

    /// Back to the initial state: every pane at root, nothing selected
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
