use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a candidate, unique only within the list it was fetched in
pub type CandidateId = String;

/// A selectable entry in any pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    #[serde(default)]
    pub detail: String,
    /// Whether drilling into this candidate yields a child list
    #[serde(default)]
    pub has_children: bool,
    /// Number of indirect kinds an action requires (0 for items and plain actions)
    #[serde(default)]
    pub indirect_type_count: u32,
    #[serde(default)]
    pub icon_ref: String,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            detail: String::new(),
            has_children: false,
            indirect_type_count: 0,
            icon_ref: String::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn with_children(mut self) -> Self {
        self.has_children = true;
        self
    }

    pub fn with_indirect_types(mut self, count: u32) -> Self {
        self.indirect_type_count = count;
        self
    }

    pub fn with_icon(mut self, icon_ref: impl Into<String>) -> Self {
        self.icon_ref = icon_ref.into();
        self
    }

    /// Whether choosing this action requires an indirect
    pub fn needs_indirect(&self) -> bool {
        self.indirect_type_count > 0
    }
}

/// Parent scope of a pane's list
///
/// `Root` is the synthetic catalog root. It never aliases a real candidate id,
/// so a catalog is free to hand out any id string it likes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Parent {
    #[default]
    Root,
    Id(CandidateId),
}

impl Parent {
    pub fn is_root(&self) -> bool {
        matches!(self, Parent::Root)
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Parent::Root => None,
            Parent::Id(id) => Some(id),
        }
    }
}

impl From<Option<CandidateId>> for Parent {
    fn from(id: Option<CandidateId>) -> Self {
        match id {
            Some(id) => Parent::Id(id),
            None => Parent::Root,
        }
    }
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parent::Root => write!(f, "<root>"),
            Parent::Id(id) => write!(f, "{}", id),
        }
    }
}

/// One of the three cascading panes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaneIndex {
    Direct = 0,
    Action = 1,
    Indirect = 2,
}

impl PaneIndex {
    pub const VALUES: [PaneIndex; 3] = [PaneIndex::Direct, PaneIndex::Action, PaneIndex::Indirect];

    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// Pane at `index`, if it is one of the three
    pub fn from_usize(index: usize) -> Option<Self> {
        Self::VALUES.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaneIndex::Direct => "direct",
            PaneIndex::Action => "action",
            PaneIndex::Indirect => "indirect",
        }
    }

    /// Human-facing pane title
    pub fn title(&self) -> &'static str {
        match self {
            PaneIndex::Direct => "Items",
            PaneIndex::Action => "Actions",
            PaneIndex::Indirect => "Targets",
        }
    }
}

impl fmt::Display for PaneIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cache key of a pane's list, derived from upstream navigation state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// Children of a parent (DIRECT, and INDIRECT once drilled)
    Children(Parent),
    /// Actions applicable to an item
    Actions(CandidateId),
    /// Root indirects of an action applied to an item
    Indirects { item: CandidateId, action: CandidateId },
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Children(parent) => write!(f, "children({})", parent),
            QueryKey::Actions(item) => write!(f, "actions({})", item),
            QueryKey::Indirects { item, action } => write!(f, "indirects({}, {})", item, action),
        }
    }
}

/// Fully specified triple handed to the execution collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub direct: CandidateId,
    pub action: CandidateId,
    pub indirect: Option<CandidateId>,
}

/// Which kind of candidate an icon is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Item,
    Action,
}
