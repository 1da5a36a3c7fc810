// src/tests/router_tests/home_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, listings_payload, test_app, FixtureSource};
use serde_json::json;

#[test]
fn home_renders_fetched_listings() {
    let source = FixtureSource::ok(listings_payload(3));
    let calls = source.calls.clone();
    let app = test_app(source);

    let mut resp = handle(get("/"), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(&mut resp);
    assert_eq!(body.matches(r#"class="homelengo-box""#).count(), 3);
    assert!(body.contains("Listing number 2"));
    assert!(body.contains("Best Property Value"));
    assert!(body.contains(r#"href="/sidebar-grid""#));
    assert!(body.contains("View All Properties"));
    assert!(!body.contains("Read More"));
    assert!(!body.contains("pagination-container"));

    // The home grid asks the API for 15 listings.
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].as_map().get("1"), Some(&json!(15)));
}

#[test]
fn home_with_no_results_shows_empty_state() {
    let app = test_app(FixtureSource::ok(json!({ "data": { "list": [] } })));

    let mut resp = handle(get("/"), &app).unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains("No properties available"));
    assert!(!body.contains("homelengo-box"));
}

#[test]
fn failed_fetch_renders_empty_state() {
    let app = test_app(FixtureSource::failing(502));

    let mut resp = handle(get("/"), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("No properties available"));
}

#[test]
fn layout_includes_register_modal() {
    let app = test_app(FixtureSource::ok(listings_payload(1)));

    let mut resp = handle(get("/"), &app).unwrap();

    let body = body_string(&mut resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains(r#"id="modalRegister""#));
    assert!(body.contains(r##"href="#modalRegister""##));
}
