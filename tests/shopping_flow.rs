use shopping_list::{handle_event, initialize, project, Config, Event, ItemId, ListStore};
use std::collections::HashSet;

fn seed_store() -> ListStore {
    initialize(&Config::default())
}

fn id_of(store: &ListStore, name: &str) -> ItemId {
    store
        .items()
        .iter()
        .find(|item| item.name == name)
        .map(|item| item.id)
        .unwrap()
}

fn visible_names(store: &ListStore) -> Vec<String> {
    project(store).into_iter().map(|row| row.name).collect()
}

fn assert_invariants(store: &ListStore) {
    let ids: HashSet<_> = store.items().iter().map(|item| item.id).collect();
    assert_eq!(ids.len(), store.len(), "item ids must be pairwise distinct");

    if let Some(editing) = store.editing_id() {
        assert!(ids.contains(&editing), "editing id must reference a live item");
    }

    let editing_rows = project(store).iter().filter(|row| row.is_editing).count();
    assert!(editing_rows <= 1);
}

#[test]
fn projection_is_idempotent() {
    let mut store = seed_store();
    store.set_search_term(Some("r".to_string()));
    store.set_editing(Some(id_of(&store, "bread")));

    assert_eq!(project(&store), project(&store));
}

#[test]
fn blank_adds_leave_items_unchanged() {
    let mut store = seed_store();

    store.add_item("");
    store.add_item("   ");

    assert_eq!(store.len(), 4);
}

#[test]
fn deleting_edited_item_clears_editing() {
    let mut store = seed_store();
    let milk = id_of(&store, "milk");
    store.set_editing(Some(milk));

    store.delete_item(milk);

    assert_eq!(store.editing_id(), None);
    assert_invariants(&store);
}

#[test]
fn search_and_hide_checked_compose() {
    let mut store = seed_store();

    store.set_search_term(Some("a".to_string()));
    assert_eq!(visible_names(&store), vec!["apples", "oranges", "bread"]);

    store.set_hide_checked(true);
    assert_eq!(visible_names(&store), vec!["apples", "oranges", "bread"]);

    store.set_search_term(None);
    assert_eq!(visible_names(&store), vec!["apples", "oranges", "bread"]);
}

#[test]
fn added_item_toggles_and_lands_last() {
    let mut store = seed_store();

    let eggs = store.add_item("eggs").unwrap();
    store.toggle_checked(eggs);

    let rows = project(&store);
    let last = rows.last().unwrap();
    assert_eq!(last.name, "eggs");
    assert!(last.checked);
}

#[test]
fn rename_flow_through_edit_mode() {
    let mut store = seed_store();
    let oranges = id_of(&store, "oranges");

    store.set_editing(Some(oranges));
    for row in project(&store) {
        assert_eq!(row.is_editing, row.id == oranges);
    }

    store.rename_item(oranges, "Eggs");
    assert_eq!(store.editing_id(), None);

    let rows = project(&store);
    let renamed = rows.iter().find(|row| row.id == oranges).unwrap();
    assert_eq!(renamed.name, "Eggs");
    assert!(!renamed.is_editing);
    assert_eq!(rows.iter().position(|row| row.id == oranges), Some(1));
}

#[test]
fn invariants_hold_across_event_sequence() {
    let mut store = seed_store();
    let apples = id_of(&store, "apples");
    let milk = id_of(&store, "milk");

    let events = vec![
        Event::AddItemSubmitted { name: "eggs".into() },
        Event::ItemNameClicked(milk),
        Event::ItemNameClicked(apples),
        Event::DeleteClicked(apples),
        Event::EditSubmitted { id: apples, name: "ghost".into() },
        Event::ToggleClicked(apples),
        Event::AddItemSubmitted { name: "apples".into() },
        Event::SearchSubmitted { term: "E".into() },
        Event::HideCheckedChanged(true),
        Event::ItemNameClicked(milk),
        Event::DeleteClicked(milk),
        Event::ClearSearchClicked,
        Event::AddItemSubmitted { name: " ".into() },
    ];

    for event in &events {
        handle_event(&mut store, event);
        assert_invariants(&store);
    }

    assert_eq!(visible_names(&store), vec!["oranges", "bread", "eggs", "apples"]);
    assert_ne!(id_of(&store, "apples"), apples);
    assert_eq!(store.editing_id(), None);
}

#[test]
fn stale_row_ids_are_noops() {
    let mut store = seed_store();
    let bread = id_of(&store, "bread");
    store.delete_item(bread);
    let before = store.items().to_vec();

    assert!(!store.toggle_checked(bread));
    assert!(!store.delete_item(bread));
    assert!(!store.rename_item(bread, "toast"));
    assert!(!store.set_editing(Some(bread)));

    assert_eq!(store.items(), &before[..]);
    assert_eq!(store.editing_id(), None);
}

#[test]
fn row_ids_round_trip_through_markup_attribute() {
    let store = seed_store();
    let html = shopping_list::render(&store);

    for row in project(&store) {
        let attr = format!("data-item-id=\"{}\"", row.id);
        assert!(html.contains(&attr));
        assert_eq!(row.id.to_string().parse::<ItemId>().unwrap(), row.id);
    }
}
