//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use crate::domain::ports::SecretOwnerAuthenticator;
use crate::domain::{
    AboutService, ContactService, OwnerSecret, ProjectService, SetupStatusService,
    VisitorLogService,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;
use crate::test_support::MutableClock;

pub const OWNER_NAME: &str = "Owner";
pub const OWNER_PASSWORD: &str = "correct horse";

/// Session middleware with a fresh key and the `Secure` flag off.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// The `session` cookie set by a response.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned()
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 20, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// HTTP state wired to services over `store`, with a configured owner.
pub fn memory_state(store: Arc<InMemoryStore>, clock: Arc<MutableClock>) -> HttpState {
    let secret = OwnerSecret::from_password(OWNER_NAME, OWNER_PASSWORD).expect("owner secret");
    let offset = FixedOffset::east_opt(19_800).expect("valid offset");
    HttpState {
        owner_auth: Arc::new(SecretOwnerAuthenticator::new(Some(secret))),
        visitors: Arc::new(VisitorLogService::new(store.clone(), clock, offset)),
        about: Arc::new(AboutService::new(store.clone())),
        projects: Arc::new(ProjectService::new(store.clone())),
        contact: Arc::new(ContactService::new(store.clone())),
        setup: Arc::new(SetupStatusService::new(store)),
    }
}

/// App with session middleware, `state` and the full `/api/v1` scope.
pub fn api_app(
    state: HttpState,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    actix_web::App::new()
        .app_data(actix_web::web::Data::new(state))
        .service(
            actix_web::web::scope("/api/v1")
                .wrap(test_session_middleware())
                .configure(super::configure),
        )
}

/// Fresh in-memory store and clock pinned to [`fixed_now`].
pub fn memory_backend() -> (Arc<InMemoryStore>, Arc<MutableClock>) {
    let clock = Arc::new(MutableClock::new(fixed_now()));
    (Arc::new(InMemoryStore::new(clock.clone())), clock)
}

/// Post `body` to a login endpoint and return the issued session cookie.
pub async fn login<S, B>(app: &S, uri: &str, body: serde_json::Value) -> Cookie<'static>
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse<B>,
            Error = actix_web::Error,
        >,
{
    let req = actix_web::test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    let res = actix_web::test::call_service(app, req).await;
    assert!(res.status().is_success(), "login failed: {}", res.status());
    session_cookie(&res)
}

pub async fn owner_cookie<S, B>(app: &S) -> Cookie<'static>
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse<B>,
            Error = actix_web::Error,
        >,
{
    login(
        app,
        "/api/v1/login/owner",
        serde_json::json!({ "name": OWNER_NAME, "password": OWNER_PASSWORD }),
    )
    .await
}

pub async fn visitor_cookie<S, B>(app: &S) -> Cookie<'static>
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse<B>,
            Error = actix_web::Error,
        >,
{
    login(
        app,
        "/api/v1/login/visitor",
        serde_json::json!({ "name": "Ada", "relation": "Recruiter" }),
    )
    .await
}
