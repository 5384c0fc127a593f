pub mod mock;
pub mod static_catalog;

pub use mock::MockCatalog;
pub use static_catalog::{ActionDef, ItemDef, StaticCatalog};

pub use tripane_core::{Candidate, CatalogError, Error, ExecuteRequest, IconKind, Parent, Result};

/// The item/action query interface the navigator consumes
///
/// List calls are idempotent reads; `execute` is the only mutating call.
/// Implementations must return lists in a deterministic order for a given
/// argument, since auto-selection picks the first element.
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// Children of `parent` (DIRECT pane, and INDIRECT pane once drilled)
    async fn list_children(&self, parent: &Parent) -> Result<Vec<Candidate>>;

    /// Actions applicable to an item
    async fn list_actions(&self, item: &str) -> Result<Vec<Candidate>>;

    /// Root indirects offered by `action` when applied to `item`
    async fn list_indirects(&self, item: &str, action: &str) -> Result<Vec<Candidate>>;

    /// Parent scope of a candidate
    async fn parent_of(&self, id: &str) -> Result<Parent>;

    /// Run an action
    async fn execute(&self, request: &ExecuteRequest) -> Result<()>;

    /// Icon location for rendering
    fn icon_url(&self, id: &str, kind: IconKind) -> String;
}
