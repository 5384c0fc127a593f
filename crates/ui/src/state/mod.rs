mod pane_stack;

pub use pane_stack::{NavigatorState, Pane, PaneStack};

use tripane_core::{PaneIndex, QueryKey};

/// Outcome line shown in the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// An action ran successfully
    Executed { action: String },
    /// An action or lookup failed
    Failed { message: String },
}

impl StatusMessage {
    pub fn text(&self) -> String {
        match self {
            StatusMessage::Executed { action } => format!("ran {}", action),
            StatusMessage::Failed { message } => format!("failed: {}", message),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Failed { .. })
    }
}

/// Query key a pane's list is fetched under, derived from upstream state
///
/// DIRECT lists its parent's children. ACTION lists the actions of DIRECT's
/// selection. INDIRECT lists the root indirects of the chosen action until it
/// is drilled, then the children of its parent.
pub fn query_key(state: &NavigatorState, pane: PaneIndex) -> Option<QueryKey> {
    let direct = state.pane(PaneIndex::Direct);
    match pane {
        PaneIndex::Direct => Some(QueryKey::Children(direct.parent.clone())),
        PaneIndex::Action => direct.selected.clone().map(QueryKey::Actions),
        PaneIndex::Indirect => {
            let item = direct.selected.clone()?;
            let action = state.pane(PaneIndex::Action).selected.clone()?;
            let indirect = state.pane(PaneIndex::Indirect);
            if indirect.parent.is_root() {
                Some(QueryKey::Indirects { item, action })
            } else {
                Some(QueryKey::Children(indirect.parent.clone()))
            }
        }
    }
}
