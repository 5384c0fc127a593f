//! Keyed cache of candidate lists, one namespace per pane.
//!
//! Each pane declares the key it currently shows with [`QueryCache::observe`].
//! A changed key whose entry is missing or stale yields a [`FetchTicket`]; the
//! caller runs the fetch and hands the outcome back with
//! [`QueryCache::complete`]. Results are always cached under the key they were
//! fetched for, so a completion that lost the race to a newer key fills the
//! cache without disturbing what the pane shows.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tripane_core::{Candidate, PaneIndex, QueryKey};

/// Handle for one outstanding fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub pane: PaneIndex,
    pub key: QueryKey,
    pub seq: u64,
}

/// How a completed fetch relates to what its pane currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The key is still the pane's current key
    Current,
    /// The pane moved on; the result was cached only
    Stale,
    /// The ticket was superseded or unknown; nothing was recorded
    Ignored,
}

/// Read-only view of one key's entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryView<'a> {
    pub data: Option<&'a [Candidate]>,
    pub is_fetching: bool,
    pub error: Option<&'a str>,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    data: Vec<Candidate>,
    error: Option<String>,
    fetched_at: Instant,
}

#[derive(Debug, Default)]
struct Namespace {
    entries: HashMap<QueryKey, CacheEntry>,
    in_flight: HashMap<QueryKey, u64>,
    current: Option<QueryKey>,
}

#[derive(Debug)]
pub struct QueryCache {
    spaces: [Namespace; 3],
    stale_after: Duration,
    next_seq: u64,
}

impl QueryCache {
    /// Create a cache whose entries are refetched once older than `stale_after`
    ///
    /// A zero duration refetches on every key change while still serving the
    /// cached list in the meantime.
    pub fn new(stale_after: Duration) -> Self {
        Self { spaces: Default::default(), stale_after, next_seq: 0 }
    }

    fn space(&self, pane: PaneIndex) -> &Namespace {
        &self.spaces[pane.as_usize()]
    }

    /// Entry for `key` in `pane`'s namespace
    pub fn get(&self, pane: PaneIndex, key: &QueryKey) -> QueryView<'_> {
        let space = self.space(pane);
        let entry = space.entries.get(key);
        QueryView {
            data: entry.map(|e| e.data.as_slice()),
            is_fetching: space.in_flight.contains_key(key),
            error: entry.and_then(|e| e.error.as_deref()),
        }
    }

    /// Data for the key `pane` currently shows
    pub fn current_data(&self, pane: PaneIndex) -> Option<&[Candidate]> {
        let key = self.current(pane)?;
        self.get(pane, key).data
    }

    pub fn current(&self, pane: PaneIndex) -> Option<&QueryKey> {
        self.space(pane).current.as_ref()
    }

    /// Declare the key `pane` shows now
    ///
    /// Returns a ticket when the key changed and its entry has to be
    /// (re)fetched. A key that already has a fetch in flight is not fetched
    /// twice.
    pub fn observe(&mut self, pane: PaneIndex, key: Option<&QueryKey>) -> Option<FetchTicket> {
        let stale_after = self.stale_after;
        let space = &mut self.spaces[pane.as_usize()];
        if space.current.as_ref() == key {
            return None;
        }

        space.current = key.cloned();
        let key = key?;

        if space.in_flight.contains_key(key) {
            return None;
        }
        if let Some(entry) = space.entries.get(key)
            && entry.fetched_at.elapsed() < stale_after
        {
            return None;
        }

        self.next_seq += 1;
        let seq = self.next_seq;
        self.spaces[pane.as_usize()].in_flight.insert(key.clone(), seq);
        Some(FetchTicket { pane, key: key.clone(), seq })
    }

    /// Force a fetch of the key `pane` currently shows
    pub fn refresh(&mut self, pane: PaneIndex) -> Option<FetchTicket> {
        let key = self.current(pane)?.clone();
        if self.space(pane).in_flight.contains_key(&key) {
            return None;
        }

        self.next_seq += 1;
        let seq = self.next_seq;
        self.spaces[pane.as_usize()].in_flight.insert(key.clone(), seq);
        Some(FetchTicket { pane, key, seq })
    }

    /// Record the outcome of a fetch
    ///
    /// A failure is cached as an empty list carrying the error message.
    pub fn complete(&mut self, ticket: &FetchTicket, result: Result<Vec<Candidate>, String>) -> Completion {
        let space = &mut self.spaces[ticket.pane.as_usize()];
        if space.in_flight.get(&ticket.key) != Some(&ticket.seq) {
            return Completion::Ignored;
        }
        space.in_flight.remove(&ticket.key);

        let entry = match result {
            Ok(data) => CacheEntry { data, error: None, fetched_at: Instant::now() },
            Err(message) => CacheEntry { data: Vec::new(), error: Some(message), fetched_at: Instant::now() },
        };
        space.entries.insert(ticket.key.clone(), entry);

        if space.current.as_ref() == Some(&ticket.key) { Completion::Current } else { Completion::Stale }
    }

    /// Forget which keys panes show so the next observation refetches stale entries
    pub fn forget_current(&mut self) {
        for space in &mut self.spaces {
            space.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripane_core::Parent;

    fn root() -> QueryKey {
        QueryKey::Children(Parent::Root)
    }

    fn folder() -> QueryKey {
        QueryKey::Children(Parent::Id("folder-1".to_string()))
    }

    fn list(ids: &[&str]) -> Vec<Candidate> {
        ids.iter().map(|id| Candidate::new(*id, *id)).collect()
    }

    #[test]
    fn test_observe_new_key_issues_ticket() {
        let mut cache = QueryCache::new(Duration::ZERO);
        let ticket = cache.observe(PaneIndex::Direct, Some(&root())).unwrap();
        assert_eq!(ticket.key, root());
        assert!(cache.get(PaneIndex::Direct, &root()).is_fetching);
        assert!(cache.get(PaneIndex::Direct, &root()).data.is_none());
    }

    #[test]
    fn test_observe_same_key_is_noop() {
        let mut cache = QueryCache::new(Duration::ZERO);
        assert!(cache.observe(PaneIndex::Direct, Some(&root())).is_some());
        assert!(cache.observe(PaneIndex::Direct, Some(&root())).is_none());
    }

    #[test]
    fn test_observe_none_clears_current() {
        let mut cache = QueryCache::new(Duration::ZERO);
        cache.observe(PaneIndex::Action, Some(&QueryKey::Actions("a".to_string())));
        assert!(cache.observe(PaneIndex::Action, None).is_none());
        assert!(cache.current(PaneIndex::Action).is_none());
    }

    #[test]
    fn test_complete_current() {
        let mut cache = QueryCache::new(Duration::ZERO);
        let ticket = cache.observe(PaneIndex::Direct, Some(&root())).unwrap();

        assert_eq!(cache.complete(&ticket, Ok(list(&["a", "b"]))), Completion::Current);
        let view = cache.get(PaneIndex::Direct, &root());
        assert_eq!(view.data.map(<[Candidate]>::len), Some(2));
        assert!(!view.is_fetching);
        assert_eq!(cache.current_data(PaneIndex::Direct).map(<[Candidate]>::len), Some(2));
    }

    #[test]
    fn test_complete_after_key_change_is_stale() {
        let mut cache = QueryCache::new(Duration::ZERO);
        let first = cache.observe(PaneIndex::Direct, Some(&root())).unwrap();
        let second = cache.observe(PaneIndex::Direct, Some(&folder())).unwrap();

        assert_eq!(cache.complete(&first, Ok(list(&["a"]))), Completion::Stale);
        assert!(cache.current_data(PaneIndex::Direct).is_none());
        assert_eq!(cache.get(PaneIndex::Direct, &root()).data.map(<[Candidate]>::len), Some(1));

        assert_eq!(cache.complete(&second, Ok(list(&["x", "y"]))), Completion::Current);
    }

    #[test]
    fn test_in_flight_key_not_refetched() {
        let mut cache = QueryCache::new(Duration::ZERO);
        let first = cache.observe(PaneIndex::Direct, Some(&root())).unwrap();
        cache.observe(PaneIndex::Direct, Some(&folder()));
        assert!(cache.observe(PaneIndex::Direct, Some(&root())).is_none());

        assert_eq!(cache.complete(&first, Ok(list(&["a"]))), Completion::Current);
    }

    #[test]
    fn test_fresh_entry_served_from_cache() {
        let mut cache = QueryCache::new(Duration::from_secs(60));
        let ticket = cache.observe(PaneIndex::Direct, Some(&root())).unwrap();
        cache.complete(&ticket, Ok(list(&["a"])));

        cache.observe(PaneIndex::Direct, Some(&folder()));
        assert!(cache.observe(PaneIndex::Direct, Some(&root())).is_none());
        assert_eq!(cache.current_data(PaneIndex::Direct).map(<[Candidate]>::len), Some(1));
    }

    #[test]
    fn test_stale_entry_served_while_refetching() {
        let mut cache = QueryCache::new(Duration::ZERO);
        let ticket = cache.observe(PaneIndex::Direct, Some(&root())).unwrap();
        cache.complete(&ticket, Ok(list(&["a"])));

        cache.observe(PaneIndex::Direct, Some(&folder()));
        assert!(cache.observe(PaneIndex::Direct, Some(&root())).is_some());
        let view = cache.get(PaneIndex::Direct, &root());
        assert!(view.is_fetching);
        assert_eq!(view.data.map(<[Candidate]>::len), Some(1));
    }

    #[test]
    fn test_error_is_empty_list_with_message() {
        let mut cache = QueryCache::new(Duration::ZERO);
        let ticket = cache.observe(PaneIndex::Direct, Some(&root())).unwrap();
        cache.complete(&ticket, Err("catalog offline".to_string()));

        let view = cache.get(PaneIndex::Direct, &root());
        assert_eq!(view.data.map(<[Candidate]>::len), Some(0));
        assert_eq!(view.error, Some("catalog offline"));
    }

    #[test]
    fn test_namespaces_are_separate() {
        let mut cache = QueryCache::new(Duration::from_secs(60));
        let key = QueryKey::Children(Parent::Id("home".to_string()));
        let ticket = cache.observe(PaneIndex::Direct, Some(&key)).unwrap();
        cache.complete(&ticket, Ok(list(&["a"])));

        assert!(cache.observe(PaneIndex::Indirect, Some(&key)).is_some());
    }

    #[test]
    fn test_unknown_ticket_ignored() {
        let mut cache = QueryCache::new(Duration::ZERO);
        let ticket = FetchTicket { pane: PaneIndex::Direct, key: root(), seq: 42 };
        assert_eq!(cache.complete(&ticket, Ok(list(&["a"]))), Completion::Ignored);
        assert!(cache.get(PaneIndex::Direct, &root()).data.is_none());
    }

    #[test]
    fn test_refresh_current_key() {
        let mut cache = QueryCache::new(Duration::from_secs(60));
        let ticket = cache.observe(PaneIndex::Direct, Some(&root())).unwrap();
        assert!(cache.refresh(PaneIndex::Direct).is_none());
        cache.complete(&ticket, Ok(list(&["a"])));

        let refreshed = cache.refresh(PaneIndex::Direct).unwrap();
        assert_ne!(refreshed.seq, ticket.seq);
    }

    #[test]
    fn test_forget_current_refetches_stale() {
        let mut cache = QueryCache::new(Duration::ZERO);
        let ticket = cache.observe(PaneIndex::Direct, Some(&root())).unwrap();
        cache.complete(&ticket, Ok(list(&["a"])));

        cache.forget_current();
        assert!(cache.observe(PaneIndex::Direct, Some(&root())).is_some());
    }
}
