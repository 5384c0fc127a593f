use crate::Catalog;

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use tripane_core::{Candidate, CatalogError, ExecuteRequest, IconKind, Parent, QueryKey, Result};

/// In-memory catalog for deterministic tests
///
/// Lists are registered per query key; unregistered keys answer with an empty
/// list. Individual keys and `execute` can be switched to fail, and every
/// execute request is recorded.
#[derive(Debug, Default)]
pub struct MockCatalog {
    lists: Mutex<HashMap<QueryKey, Vec<Candidate>>>,
    parents: Mutex<HashMap<String, Parent>>,
    failing: Mutex<HashSet<QueryKey>>,
    execute_failure: Mutex<Option<String>>,
    executed: Mutex<Vec<ExecuteRequest>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the list returned for `key`
    pub fn with_list(self, key: QueryKey, list: Vec<Candidate>) -> Self {
        if let Ok(mut lists) = self.lists.lock() {
            lists.insert(key, list);
        }
        self
    }

    /// Register the parent returned by `parent_of(id)`
    pub fn with_parent(self, id: impl Into<String>, parent: Parent) -> Self {
        if let Ok(mut parents) = self.parents.lock() {
            parents.insert(id.into(), parent);
        }
        self
    }

    /// Make every call for `key` fail
    pub fn fail_key(&self, key: QueryKey) {
        if let Ok(mut failing) = self.failing.lock() {
            failing.insert(key);
        }
    }

    /// Make `execute` fail with `message` (or succeed again with `None`)
    pub fn fail_execute(&self, message: Option<&str>) {
        if let Ok(mut failure) = self.execute_failure.lock() {
            *failure = message.map(str::to_string);
        }
    }

    /// Requests passed to `execute` so far
    pub fn executed(&self) -> Vec<ExecuteRequest> {
        self.executed.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn lookup(&self, key: QueryKey) -> Result<Vec<Candidate>> {
        if self.failing.lock().map(|f| f.contains(&key)).unwrap_or(false) {
            return Err(CatalogError::source(format!("mock failure for {}", key)).into());
        }
        Ok(self
            .lists
            .lock()
            .ok()
            .and_then(|lists| lists.get(&key).cloned())
            .unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl Catalog for MockCatalog {
    async fn list_children(&self, parent: &Parent) -> Result<Vec<Candidate>> {
        self.lookup(QueryKey::Children(parent.clone()))
    }

    async fn list_actions(&self, item: &str) -> Result<Vec<Candidate>> {
        self.lookup(QueryKey::Actions(item.to_string()))
    }

    async fn list_indirects(&self, item: &str, action: &str) -> Result<Vec<Candidate>> {
        self.lookup(QueryKey::Indirects { item: item.to_string(), action: action.to_string() })
    }

    async fn parent_of(&self, id: &str) -> Result<Parent> {
        self.parents
            .lock()
            .ok()
            .and_then(|parents| parents.get(id).cloned())
            .ok_or_else(|| CatalogError::not_found(id).into())
    }

    async fn execute(&self, request: &ExecuteRequest) -> Result<()> {
        if let Ok(mut executed) = self.executed.lock() {
            executed.push(request.clone());
        }
        let failure = self.execute_failure.lock().ok().and_then(|f| f.clone());
        match failure {
            Some(message) => Err(CatalogError::execution(&request.action, message).into()),
            None => Ok(()),
        }
    }

    fn icon_url(&self, id: &str, kind: IconKind) -> String {
        match kind {
            IconKind::Item => format!("mock://item/{}", id),
            IconKind::Action => format!("mock://action/{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_registered_list() {
        let catalog = MockCatalog::new().with_list(
            QueryKey::Actions("a".to_string()),
            vec![Candidate::new("open", "Open")],
        );

        let actions = catalog.list_actions("a").await.unwrap();
        assert_eq!(actions.len(), 1);
        assert!(catalog.list_actions("b").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_failing_key() {
        let catalog = MockCatalog::new();
        catalog.fail_key(QueryKey::Children(Parent::Root));

        let err = catalog.list_children(&Parent::Root).await.unwrap_err();
        assert!(err.to_string().contains("mock failure"));
    }

    #[tokio::test]
    async fn test_mock_execute_records_and_fails() {
        let catalog = MockCatalog::new();
        let request = ExecuteRequest { direct: "a".into(), action: "open".into(), indirect: None };

        catalog.execute(&request).await.unwrap();
        catalog.fail_execute(Some("denied"));
        assert!(catalog.execute(&request).await.is_err());

        assert_eq!(catalog.executed().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_parent_of() {
        let catalog = MockCatalog::new().with_parent("docs", Parent::Id("home".to_string()));
        assert_eq!(catalog.parent_of("docs").await.unwrap(), Parent::Id("home".to_string()));
        assert!(catalog.parent_of("home").await.is_err());
    }

    #[test]
    fn test_mock_icon_url() {
        assert_eq!(MockCatalog::new().icon_url("x", IconKind::Action), "mock://action/x");
    }
}
