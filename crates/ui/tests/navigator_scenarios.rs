use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tripane_core::{Candidate, PaneIndex, Parent, QueryKey};
use tripane_ui::{Completion, FetchTicket, KeyHandling, KeyRouter, Navigator};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn take(navigator: &mut Navigator, key: &QueryKey) -> FetchTicket {
    navigator.take_fetches().into_iter().find(|t| &t.key == key).unwrap()
}

fn root_items() -> Vec<Candidate> {
    vec![
        Candidate::new("report", "Quarterly Report").with_detail("pdf"),
        Candidate::new("folder-1", "Projects").with_children(),
        Candidate::new("settings", "Settings").with_detail("system preferences"),
        Candidate::new("shell", "Shell"),
    ]
}

fn report_actions() -> Vec<Candidate> {
    vec![
        Candidate::new("open", "Open"),
        Candidate::new("move-to-trash", "Move to Trash"),
        Candidate::new("move-to", "Move To").with_indirect_types(1),
    ]
}

fn started() -> Navigator {
    let mut navigator = Navigator::new(Duration::from_secs(60));
    let root = QueryKey::Children(Parent::Root);
    let ticket = take(&mut navigator, &root);
    navigator.apply_fetch(&ticket, Ok(root_items()));

    let actions = QueryKey::Actions("report".to_string());
    let ticket = take(&mut navigator, &actions);
    navigator.apply_fetch(&ticket, Ok(report_actions()));
    navigator
}

fn selected(navigator: &Navigator, pane: PaneIndex) -> Option<String> {
    navigator.state().pane(pane).selected.clone()
}

#[test]
fn test_typing_at_root_filters_in_place() {
    let mut navigator = started();
    KeyRouter::route(&key(KeyCode::Char('s')), &mut navigator);

    let direct = navigator.state().pane(PaneIndex::Direct);
    assert_eq!(direct.filter_text, "s");
    assert!(direct.parent.is_root());

    let first_match = navigator.filtered(PaneIndex::Direct)[0].id.clone();
    assert_eq!(selected(&navigator, PaneIndex::Direct), Some(first_match));
}

#[test]
fn test_arrow_right_drills_into_folder() {
    let mut navigator = started();
    KeyRouter::route(&key(KeyCode::Down), &mut navigator);
    assert_eq!(selected(&navigator, PaneIndex::Direct).as_deref(), Some("folder-1"));
    navigator.take_fetches();

    KeyRouter::route(&key(KeyCode::Right), &mut navigator);

    let direct = navigator.state().pane(PaneIndex::Direct);
    assert_eq!(direct.parent, Parent::Id("folder-1".to_string()));
    assert_eq!(direct.filter_text, "");
    let keys: Vec<QueryKey> = navigator.take_fetches().into_iter().map(|t| t.key).collect();
    assert_eq!(keys, vec![QueryKey::Children(Parent::Id("folder-1".to_string()))]);
}

#[test]
fn test_action_change_recomputes_indirect() {
    let mut navigator = started();
    navigator.set_active(PaneIndex::Action);
    KeyRouter::route(&key(KeyCode::Down), &mut navigator);
    KeyRouter::route(&key(KeyCode::Down), &mut navigator);
    assert_eq!(selected(&navigator, PaneIndex::Action).as_deref(), Some("move-to"));

    let indirects = QueryKey::Indirects { item: "report".to_string(), action: "move-to".to_string() };
    let ticket = take(&mut navigator, &indirects);
    navigator.apply_fetch(
        &ticket,
        Ok(vec![Candidate::new("home", "Home").with_children(), Candidate::new("desktop", "Desktop")]),
    );
    assert!(navigator.indirect_visible());
    assert_eq!(selected(&navigator, PaneIndex::Indirect).as_deref(), Some("home"));

    navigator.set_active(PaneIndex::Indirect);
    KeyRouter::route(&key(KeyCode::Char('d')), &mut navigator);
    assert_eq!(navigator.state().pane(PaneIndex::Indirect).filter_text, "d");
    assert_eq!(selected(&navigator, PaneIndex::Indirect).as_deref(), Some("desktop"));

    navigator.select(PaneIndex::Action, Some("move-to-trash".to_string()));
    assert_eq!(navigator.state().pane(PaneIndex::Indirect).filter_text, "");
    assert!(!navigator.indirect_visible());
    assert_eq!(selected(&navigator, PaneIndex::Indirect), None);
    assert_eq!(navigator.active(), PaneIndex::Action);
}

#[test]
fn test_stale_fetch_does_not_touch_state() {
    let mut navigator = Navigator::new(Duration::ZERO);
    let first = take(&mut navigator, &QueryKey::Children(Parent::Root));

    navigator.drill_in(PaneIndex::Direct, "folder-1".to_string());
    let before = navigator.state().clone();

    assert_eq!(navigator.apply_fetch(&first, Ok(root_items())), Completion::Stale);
    assert_eq!(navigator.state(), &before);
    assert!(navigator.filtered(PaneIndex::Direct).is_empty());
}

#[test]
fn test_selection_always_in_filtered_list() {
    let mut navigator = started();
    for code in [KeyCode::Char('s'), KeyCode::Char('e'), KeyCode::Down, KeyCode::Backspace, KeyCode::Up] {
        KeyRouter::route(&key(code), &mut navigator);
        let filtered = navigator.filtered(PaneIndex::Direct);
        if !filtered.is_empty() {
            let selection = selected(&navigator, PaneIndex::Direct).unwrap();
            assert!(filtered.iter().any(|c| c.id == selection), "{selection} not in filtered list");
        }
    }
}

#[test]
fn test_hidden_indirect_returns_focus_to_action() {
    let mut navigator = started();
    navigator.select(PaneIndex::Action, Some("move-to".to_string()));
    navigator.set_active(PaneIndex::Indirect);
    assert_eq!(navigator.active(), PaneIndex::Indirect);

    navigator.set_active(PaneIndex::Action);
    KeyRouter::route(&key(KeyCode::Up), &mut navigator);
    navigator.set_active(PaneIndex::Indirect);
    assert_eq!(selected(&navigator, PaneIndex::Action).as_deref(), Some("move-to-trash"));
    assert_eq!(navigator.active(), PaneIndex::Action);
}

#[test]
fn test_enter_requires_complete_triple() {
    let mut navigator = started();
    navigator.select(PaneIndex::Action, Some("move-to".to_string()));
    assert_eq!(KeyRouter::route(&key(KeyCode::Enter), &mut navigator), KeyHandling::Handled(None));
}

#[test]
fn test_root_marker_distinct_from_catalog_ids() {
    let mut navigator = Navigator::new(Duration::from_secs(60));
    let ticket = take(&mut navigator, &QueryKey::Children(Parent::Root));
    navigator.apply_fetch(&ticket, Ok(vec![Candidate::new("root", "A folder named root").with_children()]));

    KeyRouter::route(&key(KeyCode::Right), &mut navigator);
    assert_eq!(navigator.state().pane(PaneIndex::Direct).parent, Parent::Id("root".to_string()));

    KeyRouter::route(&key(KeyCode::Left), &mut navigator);
    assert!(navigator.state().pane(PaneIndex::Direct).parent.is_root());
}

#[test]
fn test_returning_to_item_with_cached_actions_selects_first() {
    let shared = || vec![Candidate::new("open", "Open"), Candidate::new("move-to-trash", "Move to Trash")];
    let mut navigator = Navigator::new(Duration::ZERO);
    let root = QueryKey::Children(Parent::Root);
    let ticket = take(&mut navigator, &root);
    navigator.apply_fetch(&ticket, Ok(root_items()));
    let ticket = take(&mut navigator, &QueryKey::Actions("report".to_string()));
    navigator.apply_fetch(&ticket, Ok(shared()));

    navigator.select(PaneIndex::Direct, Some("shell".to_string()));
    let ticket = take(&mut navigator, &QueryKey::Actions("shell".to_string()));
    navigator.apply_fetch(&ticket, Ok(shared()));

    navigator.select(PaneIndex::Direct, Some("report".to_string()));
    navigator.select(PaneIndex::Action, Some("move-to-trash".to_string()));
    assert_eq!(selected(&navigator, PaneIndex::Action).as_deref(), Some("move-to-trash"));

    navigator.select(PaneIndex::Direct, Some("shell".to_string()));
    assert!(navigator.list(PaneIndex::Action).is_some());
    assert_eq!(selected(&navigator, PaneIndex::Action).as_deref(), Some("open"));
}
