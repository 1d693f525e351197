use super::*;

fn entry(page: &str) -> HistoryEntry {
    HistoryEntry { page: page.to_owned() }
}

#[test]
fn fresh_history_has_one_stateless_entry() {
    let history = MemoryHistory::with_fragment("#about");
    assert_eq!(history.len(), 1);
    assert_eq!(history.fragment(), "#about");
    assert_eq!(history.current_state(), None);
}

#[test]
fn push_appends_and_moves_cursor() {
    let mut history = MemoryHistory::default();
    history.push(&entry("about")).unwrap();
    history.push(&entry("contact")).unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history.cursor(), 2);
    assert_eq!(history.fragment(), "#contact");
}

#[test]
fn back_and_forward_walk_entries() {
    let mut history = MemoryHistory::default();
    history.push(&entry("about")).unwrap();
    history.push(&entry("contact")).unwrap();

    assert!(history.back());
    assert_eq!(history.current_state(), Some(&entry("about")));
    assert!(history.forward());
    assert_eq!(history.current_state(), Some(&entry("contact")));
    assert!(!history.forward());
}

#[test]
fn back_stops_at_oldest_entry() {
    let mut history = MemoryHistory::default();
    assert!(!history.back());
    assert_eq!(history.cursor(), 0);
}

#[test]
fn push_after_back_discards_forward_entries() {
    let mut history = MemoryHistory::default();
    history.push(&entry("about")).unwrap();
    history.push(&entry("contact")).unwrap();
    history.back();
    history.back();
    history.push(&entry("resume")).unwrap();
    assert_eq!(history.len(), 2);
    assert!(!history.forward());
    assert_eq!(history.fragment(), "#resume");
}

#[test]
fn replace_overwrites_current_entry_in_place() {
    let mut history = MemoryHistory::with_fragment("");
    history.replace(&entry("home")).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history.fragment(), "#home");
    assert_eq!(history.current_state(), Some(&entry("home")));
}

#[test]
fn browser_history_without_a_browser_is_inert() {
    let mut history = BrowserHistory;
    assert_eq!(history.fragment(), "");
    assert!(history.push(&entry("about")).is_ok());
    assert!(history.replace(&entry("about")).is_ok());
}
