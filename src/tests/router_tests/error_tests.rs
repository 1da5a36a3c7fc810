use crate::errors::ServerError;
use crate::responses::error_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, listings_payload, request, test_app, FixtureSource};

#[test]
fn unknown_path_is_not_found() {
    let app = test_app(FixtureSource::ok(listings_payload(1)));

    let err = handle(get("/nope"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let mut resp = error_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(&mut resp).contains("Error 404"));
}

#[test]
fn register_page_renders() {
    let app = test_app(FixtureSource::ok(listings_payload(1)));

    let mut resp = handle(get("/register"), &app).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Create an account"));
    assert!(body.contains(r#"id="modalRegister""#));
}

#[test]
fn register_submission_is_rejected() {
    let app = test_app(FixtureSource::ok(listings_payload(1)));

    let err = handle(request(http::Method::POST, "/register"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let mut resp = error_response(err);
    assert_eq!(resp.status(), 400);
    assert!(body_string(&mut resp).contains("Registration is not open yet"));
}

#[test]
fn wrong_method_on_grid_is_not_found() {
    let app = test_app(FixtureSource::ok(listings_payload(1)));

    let err = handle(request(http::Method::DELETE, "/sidebar-grid"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
