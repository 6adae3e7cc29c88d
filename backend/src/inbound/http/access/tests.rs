//! Handler tests for login, logout and navigation.

use super::*;
use crate::domain::ports::MockOwnerAuthenticator;
use crate::domain::{ErrorCode, Page};
use crate::inbound::http::test_utils::{
    OWNER_NAME, api_app, login, memory_backend, memory_state, owner_cookie, visitor_cookie,
};
use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;

#[actix_web::test]
async fn owner_login_issues_owner_session() {
    let (store, clock) = memory_backend();
    let app = test::init_service(api_app(memory_state(store, clock))).await;
    let cookie = owner_cookie(&app).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/session")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let session: Option<Session> = test::read_body_json(res).await;
    assert_eq!(session, Some(Session::new(OWNER_NAME, true)));
}

#[rstest]
#[case(json!({ "name": "Owner", "password": "wrong" }), StatusCode::UNAUTHORIZED)]
#[case(json!({ "name": "Someone", "password": "correct horse" }), StatusCode::UNAUTHORIZED)]
#[case(json!({ "name": "  ", "password": "x" }), StatusCode::BAD_REQUEST)]
#[case(json!({ "name": "Owner", "password": "" }), StatusCode::BAD_REQUEST)]
#[case(json!({ "name": "Owner" }), StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn owner_login_rejections(#[case] body: serde_json::Value, #[case] expected: StatusCode) {
    let (store, clock) = memory_backend();
    let app = test::init_service(api_app(memory_state(store, clock))).await;
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login/owner")
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), expected);
    assert!(
        res.response()
            .cookies()
            .all(|cookie| cookie.name() != "session"),
        "no session issued on rejection"
    );
}

#[actix_web::test]
async fn owner_login_delegates_to_the_authenticator() {
    let (store, clock) = memory_backend();
    let mut state = memory_state(store, clock);
    let mut authenticator = MockOwnerAuthenticator::new();
    authenticator
        .expect_authenticate()
        .times(1)
        .returning(|credentials| {
            assert_eq!(credentials.name(), "Boss");
            Ok(())
        });
    state.owner_auth = Arc::new(authenticator);
    let app = test::init_service(api_app(state)).await;

    let cookie = login(
        &app,
        "/api/v1/login/owner",
        json!({ "name": " Boss ", "password": "anything" }),
    )
    .await;
    assert_eq!(cookie.name(), "session");
}

#[actix_web::test]
async fn visitor_login_records_the_visit() {
    let (store, clock) = memory_backend();
    let state = memory_state(store, clock);
    let visitors = state.visitors.clone();
    let app = test::init_service(api_app(state)).await;

    let cookie = visitor_cookie(&app).await;
    let logged = visitors.list_visitors().await.expect("list");
    let names: Vec<&str> = logged.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["Ada"]);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/session")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let session: Option<Session> = test::read_body_json(res).await;
    assert_eq!(session, Some(Session::new("Ada", false)));
}

#[actix_web::test]
async fn visitor_login_validates_fields() {
    let (store, clock) = memory_backend();
    let app = test::init_service(api_app(memory_state(store, clock))).await;
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login/visitor")
            .set_json(json!({ "name": "Ada", "relation": " " }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Error = test::read_body_json(res).await;
    assert_eq!(body.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        body.details(),
        Some(&json!({ "field": "relation", "code": "empty_relation" }))
    );
}

#[actix_web::test]
async fn logout_then_session_is_null() {
    let (store, clock) = memory_backend();
    let app = test::init_service(api_app(memory_state(store, clock))).await;
    let cookie = visitor_cookie(&app).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let mut request = test::TestRequest::get().uri("/api/v1/session");
    if let Some(cleared) = res.response().cookies().find(|c| c.name() == "session") {
        request = request.cookie(cleared.into_owned());
    }
    let res = test::call_service(&app, request.to_request()).await;
    let session: Option<Session> = test::read_body_json(res).await;
    assert_eq!(session, None);
}

#[rstest]
#[case("/about", Navigation::Redirect { to: Page::Landing })]
#[case("/landing", Navigation::Render { page: Page::Landing })]
#[actix_web::test]
async fn anonymous_navigation(#[case] path: &str, #[case] expected: Navigation) {
    let (store, clock) = memory_backend();
    let app = test::init_service(api_app(memory_state(store, clock))).await;
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/navigation?path={path}"))
            .to_request(),
    )
    .await;
    let resolved: Navigation = test::read_body_json(res).await;
    assert_eq!(resolved, expected);
}

#[actix_web::test]
async fn signed_in_navigation_renders_pages() {
    let (store, clock) = memory_backend();
    let app = test::init_service(api_app(memory_state(store, clock))).await;
    let cookie = visitor_cookie(&app).await;
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/navigation?path=/landing")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let resolved: Navigation = test::read_body_json(res).await;
    assert_eq!(resolved, Navigation::Redirect { to: Page::Home });
}

#[actix_web::test]
async fn navigation_requires_a_path() {
    let (store, clock) = memory_backend();
    let app = test::init_service(api_app(memory_state(store, clock))).await;
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/navigation")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
