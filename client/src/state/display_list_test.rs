use super::*;

fn item(id: u64) -> DisplayItem {
    DisplayItem { id, title: format!("Movie {id}"), image_url: String::new(), rating: 5.0 }
}

#[test]
fn new_list_is_empty() {
    let list = DisplayList::new();
    assert!(list.is_empty());
    assert!(list.last_item().is_none());
}

#[test]
fn placeholders_are_not_posters() {
    let mut list = DisplayList::new();
    list.push_placeholders(20);
    assert_eq!(list.len(), 20);
    assert_eq!(list.placeholder_count(), 20);
    assert_eq!(list.poster_count(), 0);
    assert!(list.last_item().is_none());
}

#[test]
fn remove_tail_takes_placeholders_back_off() {
    let mut list = DisplayList::new();
    list.append(vec![item(1), item(2)]);
    list.push_placeholders(20);

    assert_eq!(list.remove_tail(20), 20);

    assert_eq!(list.placeholder_count(), 0);
    assert_eq!(list.posters().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn remove_tail_is_bounded_by_length() {
    let mut list = DisplayList::new();
    list.push_placeholders(3);
    assert_eq!(list.remove_tail(20), 3);
    assert!(list.is_empty());
}

#[test]
fn last_item_returns_tail_poster() {
    let mut list = DisplayList::new();
    list.append(vec![item(1), item(2), item(3)]);
    let (key, last) = list.last_item().expect("tail poster");
    assert_eq!(last.id, 3);
    assert_eq!(list.slots().last().map(|s| s.key), Some(key));
}

#[test]
fn keys_stay_unique_when_ids_repeat() {
    let mut list = DisplayList::new();
    list.append(vec![item(1)]);
    list.push_placeholders(2);
    list.remove_tail(2);
    list.append(vec![item(1)]);

    let keys: Vec<SlotKey> = list.slots().iter().map(|s| s.key).collect();
    assert_eq!(keys.len(), 2);
    assert_ne!(keys[0], keys[1]);
}

#[test]
fn clear_never_reuses_keys() {
    let mut list = DisplayList::new();
    list.append(vec![item(1)]);
    let (before, _) = list.last_item().expect("poster");
    list.clear();
    list.append(vec![item(1)]);
    let (after, _) = list.last_item().expect("poster");
    assert_ne!(before, after);
}
