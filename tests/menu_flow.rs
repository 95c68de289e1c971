//! End-to-end flow: admin mutations committed through the store, observed by
//! a subscribed read client, and consumed by a plate.

use menu_core::{
    is_admin_logged_in, set_admin_logged_in, AdminService, Catalog, CategorySelection, ChangeBus,
    ItemUpdate, MemoryStore, MenuClient, MenuFilter, MenuItem, Plate,
};
use std::cell::RefCell;
use std::rc::Rc;

fn base_catalog() -> Catalog {
    Catalog::new(vec![
        MenuItem::new("", "Korean Fried Chicken", "Wing", 300.0),
        MenuItem::new("", "Korean Fried Chicken", "Drum", 330.0),
        MenuItem::new("", "Korean Rice Bowls", "Rice", 500.0),
    ])
}

struct Harness {
    store: Rc<MemoryStore>,
    bus: Rc<ChangeBus>,
    menu: MenuClient,
    admin: AdminService,
}

fn harness() -> Harness {
    let catalog = Rc::new(base_catalog());
    let store = Rc::new(MemoryStore::new());
    let bus = Rc::new(ChangeBus::new());
    let menu = MenuClient::new(Rc::clone(&catalog), store.clone());
    let admin = AdminService::new(Rc::clone(&catalog), store.clone(), Rc::clone(&bus));
    Harness {
        store,
        bus,
        menu,
        admin,
    }
}

#[test]
fn admin_edit_flows_to_subscribed_views() {
    let h = harness();

    // A view subscribes and re-derives the merged menu on every change.
    let observed = Rc::new(RefCell::new(Vec::new()));
    let catalog = Rc::new(base_catalog());
    let view = Rc::new(MenuClient::new(catalog, h.store.clone()));
    {
        let observed = Rc::clone(&observed);
        let view = Rc::clone(&view);
        h.bus.subscribe(move || {
            *observed.borrow_mut() = view.merged_menu();
        });
    }

    h.admin
        .edit_item(
            "base-0",
            "Korean Fried Chicken",
            &ItemUpdate {
                calories: Some(350.0),
                ..Default::default()
            },
        )
        .unwrap();

    let seen = observed.borrow();
    let wings: Vec<_> = seen.iter().filter(|item| item.name == "Wing").collect();
    assert_eq!(wings.len(), 1);
    assert_eq!(wings[0].calories, 350.0);
    assert!(!wings[0].is_base);
}

#[test]
fn add_delete_and_reorder_produce_consistent_reads() {
    let h = harness();

    let bingsu = h
        .admin
        .add_item(
            &CategorySelection::new_category("Desserts"),
            "Bingsu",
            380.0,
            None,
        )
        .unwrap();
    assert_eq!(h.menu.merged_menu().len(), 4);

    // Delete a base item; the tombstone hides it from every filtered view.
    let wing = h.menu.merged_menu()[0].clone();
    assert_eq!(wing.name, "Wing");
    h.admin.delete_item(&wing).unwrap();
    let merged = h.menu.merged_menu();
    assert!(merged.iter().all(|item| item.name != "Wing"));
    assert!(h
        .menu
        .filtered(&MenuFilter::by_category("Korean Fried Chicken"))
        .iter()
        .all(|item| item.name != "Wing"));

    // Deleting the overlay-only item just drops it.
    h.admin.delete_item(&bingsu).unwrap();
    assert_eq!(h.menu.merged_menu().len(), 2);

    // Pin an explicit order on the two remaining items; reorder is keyed by
    // id, so it shadows pristine base items wherever they sit.
    h.admin
        .reorder("Korean Fried Chicken", &["base-2", "base-1"])
        .unwrap();
    let ids: Vec<String> = h
        .menu
        .merged_menu()
        .iter()
        .map(|item| item.id.clone())
        .collect();
    assert_eq!(ids, ["base-2", "base-1"]);
}

#[test]
fn search_spans_categories_and_feeds_the_plate() {
    let h = harness();

    let hits = h.menu.filtered(&MenuFilter::by_search("rI"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Rice");

    let mut plate = Plate::new(1000.0);
    let merged = h.menu.merged_menu();
    let wing = merged.iter().find(|item| item.name == "Wing").unwrap();
    let rice = merged.iter().find(|item| item.name == "Rice").unwrap();

    plate.add_item(wing);
    plate.add_item(wing);
    plate.add_item(rice);

    assert_eq!(plate.total(), 1100.0);
    assert!(plate.is_over_goal());
    assert_eq!(plate.overage(), 100.0);
}

#[test]
fn login_gate_round_trips_through_the_store() {
    let h = harness();
    assert!(!is_admin_logged_in(h.store.as_ref()));
    set_admin_logged_in(h.store.as_ref(), true).unwrap();
    assert!(is_admin_logged_in(h.store.as_ref()));
    set_admin_logged_in(h.store.as_ref(), false).unwrap();
    assert!(!is_admin_logged_in(h.store.as_ref()));
}
