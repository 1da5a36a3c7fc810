// src/tests/router_tests/grid_tests.rs

use crate::app::App;
use crate::config::Config;
use crate::domain::expansion::ExpansionPolicy;
use crate::router::handle;
use crate::tests::utils::{
    body_string, get, listings_payload, per_page, raw_listing, test_app, FixtureSource,
};
use serde_json::{json, Value};

fn grid_body(app: &App, uri: &str) -> String {
    let mut resp = handle(get(uri), app).unwrap();
    assert_eq!(resp.status(), 200);
    body_string(&mut resp)
}

fn card_count(body: &str) -> usize {
    body.matches(r#"class="homelengo-box""#).count()
}

fn long_descriptions() -> Value {
    let long = "Spacious family home ".repeat(10);
    json!({ "data": { "list": [raw_listing(1, &long), raw_listing(2, &long)] } })
}

fn per_card_app(payload: Value) -> App {
    let config = Config {
        grid_items_per_page: per_page(6),
        expansion_policy: ExpansionPolicy::PerCard,
        ..Config::default()
    };
    App::new(config, FixtureSource::ok(payload))
}

#[test]
fn grid_fetches_twenty_and_shows_first_page() {
    let source = FixtureSource::ok(listings_payload(8));
    let calls = source.calls.clone();
    let app = test_app(source);

    let body = grid_body(&app, "/sidebar-grid");

    assert_eq!(card_count(&body), 6);
    assert!(body.contains(r#"alt="Listing number 6""#));
    assert!(!body.contains(r#"alt="Listing number 7""#));
    assert!(body.contains("disabled>Prev</button>"));
    assert!(body.contains(r#"href="/sidebar-grid?page=2">2</a>"#));
    assert_eq!(calls.lock().unwrap()[0].as_map().get("1"), Some(&json!(20)));
}

#[test]
fn page_query_selects_the_slice() {
    let app = test_app(FixtureSource::ok(listings_payload(8)));

    let body = grid_body(&app, "/sidebar-grid?page=2");

    assert_eq!(card_count(&body), 2);
    assert!(body.contains(r#"alt="Listing number 7""#));
    assert!(body.contains(r#"alt="Listing number 8""#));
    assert!(body.contains("disabled>Next</button>"));
}

#[test]
fn out_of_range_or_garbage_pages_stay_on_page_one() {
    let app = test_app(FixtureSource::ok(listings_payload(8)));

    for uri in [
        "/sidebar-grid?page=0",
        "/sidebar-grid?page=9",
        "/sidebar-grid?page=-1",
        "/sidebar-grid?page=abc",
    ] {
        let body = grid_body(&app, uri);
        assert_eq!(card_count(&body), 6, "{uri}");
        assert!(body.contains(r#"alt="Listing number 1""#), "{uri}");
    }
}

#[test]
fn properties_path_is_an_alias() {
    let app = test_app(FixtureSource::ok(listings_payload(2)));

    let body = grid_body(&app, "/properties");

    assert_eq!(card_count(&body), 2);
}

#[test]
fn empty_grid_has_no_pagination() {
    let app = test_app(FixtureSource::failing(500));

    let body = grid_body(&app, "/sidebar-grid?page=2");

    assert!(body.contains("No properties available"));
    assert!(!body.contains("pagination-container"));
}

#[test]
fn long_descriptions_start_collapsed() {
    let app = test_app(FixtureSource::ok(long_descriptions()));

    let body = grid_body(&app, "/sidebar-grid");

    assert_eq!(body.matches("Read More").count(), 2);
    assert_eq!(body.matches("Read Less").count(), 0);
    assert!(body.contains(r##"href="/sidebar-grid?page=1&amp;expanded=1#listing-1""##));
}

#[test]
fn single_policy_expands_one_card_at_a_time() {
    let app = test_app(FixtureSource::ok(long_descriptions()));

    let body = grid_body(&app, "/sidebar-grid?expanded=1");

    assert_eq!(body.matches("Read Less").count(), 1);
    assert_eq!(body.matches("Read More").count(), 1);
    // Collapsing card 1 clears the state, opening card 2 replaces it.
    assert!(body.contains(r##"href="/sidebar-grid?page=1#listing-1""##));
    assert!(body.contains(r##"href="/sidebar-grid?page=1&amp;expanded=2#listing-2""##));
}

#[test]
fn per_card_policy_expands_cards_independently() {
    let app = per_card_app(long_descriptions());

    let body = grid_body(&app, "/sidebar-grid?expanded=1");
    assert!(body.contains(r##"href="/sidebar-grid?page=1&amp;expanded=1%2C2#listing-2""##));

    let body = grid_body(&app, "/sidebar-grid?expanded=1%2C2");
    assert_eq!(body.matches("Read Less").count(), 2);
    assert_eq!(body.matches("Read More").count(), 0);
}

#[test]
fn page_links_keep_expansion_state() {
    let app = test_app(FixtureSource::ok(listings_payload(8)));

    let body = grid_body(&app, "/sidebar-grid?expanded=3");

    assert!(body.contains(r#"href="/sidebar-grid?page=2&amp;expanded=3">Next</a>"#));
}

#[test]
fn listing_without_id_shows_full_description() {
    let long = "Quiet cottage near the lake ".repeat(8);
    let app = test_app(FixtureSource::ok(json!({
        "data": { "list": [{ "description": long }] }
    })));

    let body = grid_body(&app, "/sidebar-grid");

    assert!(body.contains(&format!(r#"<div class="description">{long}</div>"#)));
    assert_eq!(body.matches("Read More").count(), 0);
    assert!(!body.contains("expanded="));
}

#[test]
fn toggle_link_targets_the_card_anchor() {
    let long = "Loft with city views ".repeat(10);
    let app = test_app(FixtureSource::ok(json!({
        "data": { "list": [raw_listing(5, &long)] }
    })));
    let body = grid_body(&app, "/sidebar-grid");
    assert!(body.contains(r#"id="listing-5""#));

    let body = grid_body(&app, "/sidebar-grid?expanded=5");
    assert_eq!(body.matches("Read Less").count(), 1);
    assert!(body.contains(r##"href="/sidebar-grid?page=1#listing-5""##));
}
