use tripane_core::{CandidateId, ExecuteRequest, PaneIndex};

/// Side effects requested by a key press, carried out by the runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Run the selected triple
    Execute(ExecuteRequest),
    /// Ask the catalog which scope contains `child`, then move `pane` there
    ResolveParent { pane: PaneIndex, child: CandidateId },
    /// Refetch every list currently shown
    Refresh,
    /// Hide the navigator
    Dismiss,
    /// Leave the application
    Exit,
}
