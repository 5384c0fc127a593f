//! Reconciliation of dependent pane state.
//!
//! After every mutation of the [`PaneStack`] the controller runs its pass
//! until nothing changes:
//!
//! 1. a pane whose parent changed loses its filter text
//! 2. a changed DIRECT selection clears ACTION's filter; a changed ACTION
//!    selection clears INDIRECT's filter and scope
//! 3. each pane whose key or filtered list changed (or whose selection fell
//!    out of it) selects the first filtered candidate
//! 4. INDIRECT is hidden unless the selected action needs an indirect, and
//!    focus leaves it when it disappears
//!
//! Every rule is idempotent, so a pass over a settled state applies nothing.

use crate::filter::filtered_ids;
use crate::query_cache::QueryCache;
use crate::state::{NavigatorState, PaneStack, query_key};

use tripane_core::{CandidateId, PaneIndex, Parent, QueryKey};

const MAX_PASSES: usize = 16;

/// Whether the selected action needs an indirect
pub fn indirect_visible(state: &NavigatorState, cache: &QueryCache) -> bool {
    let Some(selected) = &state.pane(PaneIndex::Action).selected else {
        return false;
    };
    let Some(key) = query_key(state, PaneIndex::Action) else {
        return false;
    };

    cache
        .get(PaneIndex::Action, &key)
        .data
        .is_some_and(|actions| actions.iter().any(|a| &a.id == selected && a.needs_indirect()))
}

/// Key a pane fetches under, or `None` when the pane has nothing to show
pub fn pane_key(state: &NavigatorState, cache: &QueryCache, pane: PaneIndex) -> Option<QueryKey> {
    if pane == PaneIndex::Indirect && !indirect_visible(state, cache) {
        return None;
    }
    query_key(state, pane)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Watched {
    direct_parent: Parent,
    indirect_parent: Parent,
    direct_selected: Option<CandidateId>,
    action_selected: Option<CandidateId>,
}

impl Watched {
    fn capture(state: &NavigatorState) -> Self {
        Self {
            direct_parent: state.pane(PaneIndex::Direct).parent.clone(),
            indirect_parent: state.pane(PaneIndex::Indirect).parent.clone(),
            direct_selected: state.pane(PaneIndex::Direct).selected.clone(),
            action_selected: state.pane(PaneIndex::Action).selected.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CascadeController {
    last_seen: Option<Watched>,
    last_filtered: [Option<(QueryKey, Vec<CandidateId>)>; 3],
}

impl CascadeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything observed so far
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Run the pass until it applies no mutation; returns the total applied
    pub fn run(&mut self, stack: &mut PaneStack, cache: &QueryCache) -> usize {
        let mut total = 0;
        for _ in 0..MAX_PASSES {
            let applied = self.pass(stack, cache);
            if applied == 0 {
                return total;
            }
            total += applied;
        }

        tracing::warn!(mutations = total, state = ?stack.state(), "cascade did not settle");
        total
    }

    fn pass(&mut self, stack: &mut PaneStack, cache: &QueryCache) -> usize {
        let mut applied = self.apply_resets(stack);
        for pane in PaneIndex::VALUES {
            applied += self.auto_select(pane, stack, cache);
        }
        applied + Self::apply_visibility(stack, cache)
    }

    fn apply_resets(&mut self, stack: &mut PaneStack) -> usize {
        let now = Watched::capture(stack.state());
        let Some(prev) = self.last_seen.replace(now.clone()) else {
            return 0;
        };

        let mut applied = 0;
        if prev.direct_parent != now.direct_parent {
            applied += clear_filter(stack, PaneIndex::Direct);
        }
        if prev.indirect_parent != now.indirect_parent {
            applied += clear_filter(stack, PaneIndex::Indirect);
        }
        if prev.direct_selected != now.direct_selected {
            applied += clear_filter(stack, PaneIndex::Action);
        }
        if prev.action_selected != now.action_selected {
            applied += clear_filter(stack, PaneIndex::Indirect);
            if !stack.pane(PaneIndex::Indirect).parent.is_root() {
                stack.set_parent(PaneIndex::Indirect, Parent::Root);
                applied += 1;
            }
        }
        applied
    }

    fn auto_select(&mut self, pane: PaneIndex, stack: &mut PaneStack, cache: &QueryCache) -> usize {
        let state = stack.state();
        let slot = pane.as_usize();
        let current = state.pane(pane).selected.clone();
        let loaded = pane_key(state, cache, pane).and_then(|key| cache.get(pane, &key).data.map(|list| (key, list)));

        let target = match loaded {
            None => {
                self.last_filtered[slot] = None;
                None
            }
            Some((key, list)) => {
                let ids = filtered_ids(list, &state.pane(pane).filter_text);
                let list_changed = match &self.last_filtered[slot] {
                    Some((last_key, last_ids)) => *last_key != key || *last_ids != ids,
                    None => true,
                };
                let target = match &current {
                    _ if ids.is_empty() => current.clone().filter(|id| list.iter().any(|c| &c.id == id)),
                    Some(id) if !list_changed && ids.contains(id) => current.clone(),
                    _ => ids.first().cloned(),
                };
                self.last_filtered[slot] = Some((key, ids));
                target
            }
        };

        if target == current {
            return 0;
        }
        tracing::trace!(pane = %pane, from = ?current, to = ?target, "auto-select");
        stack.set_selected(pane, target);
        1
    }

    fn apply_visibility(stack: &mut PaneStack, cache: &QueryCache) -> usize {
        if stack.state().active == PaneIndex::Indirect && !indirect_visible(stack.state(), cache) {
            stack.set_active(PaneIndex::Action);
            return 1;
        }
        0
    }
}

fn clear_filter(stack: &mut PaneStack, pane: PaneIndex) -> usize {
    if stack.pane(pane).filter_text.is_empty() {
        return 0;
    }
    stack.clear_filter_text(pane);
    1
}
