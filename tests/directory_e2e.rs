//! End-to-end checks through the library API: load a small collection,
//! verify the derived area grouping and stats, then drive the router the
//! way a fragment-change event stream would.

use nomz::app::App;
use nomz::router::Route;
use serde_json::json;

fn three_record_dataset() -> serde_json::Value {
    json!([
        {"name": "Finsbury Park Deli", "cuisine": "Deli",
         "address": "12 Stroud Green Rd", "postal_code": "N4 1AA", "rating": 4.0},
        {"name": "Notting Hill Bistro", "cuisine": "French",
         "address": "8 Portobello Rd", "postal_code": "W11 2BB", "rating": 5.0},
        {"name": "Nowhere Diner", "cuisine": "American",
         "address": "1 Edge Of The Map", "postal_code": "ZZ9 9ZZ", "rating": 3.0}
    ])
}

#[test]
fn partitions_three_records_across_areas() {
    let app = App::boot(three_record_dataset()).unwrap();
    let store = app.store();

    assert_eq!(store.area("north-london").unwrap().member_count, 1);
    assert_eq!(store.area("west-london").unwrap().member_count, 1);
    assert_eq!(store.area("greater-london").unwrap().member_count, 1);

    let stats = store.stats();
    assert_eq!(stats.total, 3);
    assert!((stats.average_rating - 4.0).abs() < 1e-9);
}

#[test]
fn fragment_stream_drives_every_view_kind() {
    let mut app = App::boot(three_record_dataset()).unwrap();

    let view = app.navigate("#/");
    assert_eq!(view.route, Route::Home);
    assert!(view.html.contains("Finsbury Park Deli"));

    let view = app.navigate("#/area/west-london");
    assert_eq!(view.route, Route::Area("west-london".to_string()));
    assert!(view.html.contains("Notting Hill Bistro"));
    assert!(!view.html.contains("Finsbury Park Deli"));

    let view = app.navigate("#/restaurant/1");
    assert_eq!(view.route, Route::RestaurantDetail(1));
    assert!(view.html.contains("Finsbury Park Deli"));

    let view = app.navigate("#/search/diner");
    assert_eq!(view.route, Route::Search("diner".to_string()));
    assert!(view.html.contains("Nowhere Diner"));

    let view = app.navigate("#/restaurant/abc");
    assert_eq!(view.route, Route::NotFound);
    assert!(view.html.contains("Page not found"));

    // NotFound is recoverable: the next event resolves normally
    let view = app.navigate("#/");
    assert_eq!(view.route, Route::Home);
}

#[test]
fn repeated_dispatch_is_byte_identical() {
    let mut app = App::boot(three_record_dataset()).unwrap();

    let first = app.navigate("#/area/north-london").html.clone();
    let second = app.navigate("#/area/north-london").html.clone();
    assert_eq!(first, second);
}

#[test]
fn listing_ids_match_loaded_ids_minus_dropped() {
    let mut dataset = three_record_dataset();
    dataset
        .as_array_mut()
        .unwrap()
        .push(json!({"name": "Invalid, no address", "postal_code": "N1"}));

    let app = App::boot(dataset).unwrap();
    assert_eq!(app.load_report().loaded, 3);
    assert_eq!(app.load_report().dropped, 1);

    let listed: Vec<u32> = app.store().all().iter().map(|r| r.id).collect();
    let looked_up: Vec<u32> = listed
        .iter()
        .map(|&id| app.store().get_by_id(id).unwrap().id)
        .collect();
    assert_eq!(listed, looked_up);
    assert_eq!(listed.len(), 3);
}
