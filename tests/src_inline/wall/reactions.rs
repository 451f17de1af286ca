use super::*;

#[test]
fn test_starts_from_catalog() {
    let store = ReactionStore::from_catalog();
    assert!(store.is_praying("prayer-1"));
    assert!(store.is_bookmarked("prayer-1"));
    assert!(!store.is_praying("prayer-8"));
    assert!(!store.is_praying("prayer-2"));
}

#[test]
fn test_toggle_praying_returns_previous_state() {
    let mut store = ReactionStore::from_catalog();
    assert!(store.toggle_praying("prayer-1"));
    assert!(!store.is_praying("prayer-1"));
    assert!(store.is_bookmarked("prayer-1"));
    assert!(!store.toggle_praying("prayer-1"));
    assert!(store.is_praying("prayer-1"));
}

#[test]
fn test_toggle_unknown_prayer_creates_reaction() {
    let mut store = ReactionStore::default();
    assert!(!store.toggle_praying("prayer-2"));
    let r = store.get("prayer-2").unwrap();
    assert!(r.is_praying);
    assert!(!r.is_bookmarked);
}

#[test]
fn test_toggle_bookmark_keeps_praying() {
    let mut store = ReactionStore::from_catalog();
    store.toggle_bookmark("prayer-3");
    assert!(store.is_bookmarked("prayer-3"));
    assert!(store.is_praying("prayer-3"));
    store.toggle_bookmark("prayer-3");
    assert!(!store.is_bookmarked("prayer-3"));
}

#[test]
fn test_id_lists() {
    let store = ReactionStore::from_catalog();
    let mut bookmarked = store.bookmarked_ids();
    bookmarked.sort();
    assert_eq!(bookmarked, vec!["prayer-1", "prayer-12", "prayer-5"]);
    assert_eq!(store.praying_ids().len(), 5);
}

#[test]
fn test_store_does_not_touch_catalog() {
    let mut store = ReactionStore::from_catalog();
    store.toggle_praying("prayer-1");
    assert!(ReactionStore::from_catalog().is_praying("prayer-1"));
}
