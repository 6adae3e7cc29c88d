//! End-to-end journeys through the HTTP adapter over the in-memory store.
//!
//! Each test builds the full `/api/v1` scope with real services, a private
//! cookie session and a pinned clock, then drives it the way the site does.

use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::config::CookieContentSecurity;
use actix_session::storage::CookieSessionStore;
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::{FixedOffset, TimeZone, Utc};
use folio::Trace;
use folio::domain::ports::SecretOwnerAuthenticator;
use folio::domain::{
    AboutProfile, AboutService, Collection, ContactService, Message, OwnerSecret, Project,
    ProjectService, Session, SetupStatusService, VisitorLogService, VisitorStats,
};
use folio::inbound::http::configure;
use folio::inbound::http::state::HttpState;
use folio::outbound::memory::InMemoryStore;
use folio::test_support::MutableClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const OWNER: &str = "Priya";
const PASSWORD: &str = "hunter2 but longer";

struct Backend {
    store: Arc<InMemoryStore>,
    clock: Arc<MutableClock>,
}

#[fixture]
fn backend() -> Backend {
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .single()
        .expect("timestamp");
    let clock = Arc::new(MutableClock::new(start));
    Backend {
        store: Arc::new(InMemoryStore::new(clock.clone())),
        clock,
    }
}

fn http_state(backend: &Backend) -> HttpState {
    let secret = OwnerSecret::from_password(OWNER, PASSWORD).expect("owner secret");
    let offset = FixedOffset::east_opt(19_800).expect("offset");
    HttpState {
        owner_auth: Arc::new(SecretOwnerAuthenticator::new(Some(secret))),
        visitors: Arc::new(VisitorLogService::new(
            backend.store.clone(),
            backend.clock.clone(),
            offset,
        )),
        about: Arc::new(AboutService::new(backend.store.clone())),
        projects: Arc::new(ProjectService::new(backend.store.clone())),
        contact: Arc::new(ContactService::new(backend.store.clone())),
        setup: Arc::new(SetupStatusService::new(backend.store.clone())),
    }
}

async fn app(
    backend: &Backend,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .cookie_content_security(CookieContentSecurity::Private)
        .build();
    test::init_service(
        App::new()
            .app_data(web::Data::new(http_state(backend)))
            .wrap(Trace)
            .service(web::scope("/api/v1").wrap(session).configure(configure)),
    )
    .await
}

async fn send<S, B>(app: &S, req: test::TestRequest) -> (StatusCode, Value, Option<Cookie<'static>>)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(app, req.to_request()).await;
    let status = res.status();
    assert!(res.headers().contains_key("trace-id"));
    let cookie = res
        .response()
        .cookies()
        .find(|c| c.name() == "session")
        .map(Cookie::into_owned);
    let bytes = test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body, cookie)
}

async fn login_owner<S, B>(app: &S) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, body, cookie) = send(
        app,
        test::TestRequest::post()
            .uri("/api/v1/login/owner")
            .set_json(json!({ "name": OWNER, "password": PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "name": OWNER, "isOwner": true }));
    cookie.expect("owner session cookie")
}

async fn login_visitor<S, B>(app: &S, name: &str, relation: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, _, cookie) = send(
        app,
        test::TestRequest::post()
            .uri("/api/v1/login/visitor")
            .set_json(json!({ "name": name, "relation": relation })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    cookie.expect("visitor session cookie")
}

#[rstest]
#[actix_web::test]
async fn owner_curates_and_visitor_browses(backend: Backend) {
    let app = app(&backend).await;
    let owner = login_owner(&app).await;

    let (status, about, _) = send(
        &app,
        test::TestRequest::put()
            .uri("/api/v1/about")
            .cookie(owner.clone())
            .set_json(json!({
                "description": "Data scientist who ships.",
                "tools": ["Python", " SQL ", "Python", ""],
                "videoUrl": "https://video.example/intro"
            })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let about: AboutProfile = serde_json::from_value(about).expect("about profile");
    assert_eq!(about.tools.as_slice(), ["Python", "SQL"]);

    for (title, category) in [
        ("Sales dashboard", "Data Analysis"),
        ("Churn model", "Machine Learning"),
        ("This site", "Full Stack"),
    ] {
        let (status, _, _) = send(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/projects")
                .cookie(owner.clone())
                .set_json(json!({ "title": title, "category": category, "tools": ["Rust"] })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let visitor = login_visitor(&app, "Ada", "Recruiter").await;
    let (_, session, _) = send(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/session")
            .cookie(visitor.clone()),
    )
    .await;
    let session: Session = serde_json::from_value(session).expect("session");
    assert!(!session.is_owner());

    let (_, read_back, _) = send(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/about")
            .cookie(visitor.clone()),
    )
    .await;
    assert_eq!(read_back["description"], "Data scientist who ships.");

    let (status, projects, _) = send(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/projects?category=Machine%20Learning")
            .cookie(visitor.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let projects: Vec<Project> = serde_json::from_value(projects).expect("projects");
    let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Churn model"]);

    let (status, _, _) = send(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/projects")
            .cookie(visitor.clone())
            .set_json(json!({ "title": "Sneaky" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _, _) = send(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/messages")
            .cookie(visitor)
            .set_json(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Let's talk about the churn model."
            })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, inbox, _) = send(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/messages")
            .cookie(owner),
    )
    .await;
    let inbox: Vec<Message> = serde_json::from_value(inbox).expect("messages");
    assert_eq!(inbox.len(), 1);
    assert!(inbox.iter().all(|m| m.email == "ada@example.com"));
}

#[rstest]
#[actix_web::test]
async fn stats_chart_covers_the_last_seven_visit_days(backend: Backend) {
    let app = app(&backend).await;
    // Nine consecutive days with one visit each, two on the last day.
    for day in 0..9 {
        login_visitor(&app, &format!("Visitor {day}"), "Friend").await;
        if day < 8 {
            backend.clock.advance_seconds(24 * 60 * 60);
        }
    }
    let last = login_visitor(&app, "Late", "Colleague").await;

    let (status, stats, _) = send(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/visitors/stats")
            .cookie(last),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stats: VisitorStats = serde_json::from_value(stats).expect("stats");
    assert_eq!(stats.total, 10);
    let days: Vec<(String, usize)> = stats
        .daily
        .iter()
        .map(|d| (d.date.to_string(), d.visits))
        .collect();
    assert_eq!(
        days,
        [
            ("2024-01-03".to_owned(), 1),
            ("2024-01-04".to_owned(), 1),
            ("2024-01-05".to_owned(), 1),
            ("2024-01-06".to_owned(), 1),
            ("2024-01-07".to_owned(), 1),
            ("2024-01-08".to_owned(), 1),
            ("2024-01-09".to_owned(), 2),
        ]
    );
    let recent: Vec<&str> = stats.recent.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(
        recent,
        ["Late", "Visitor 8", "Visitor 7", "Visitor 6", "Visitor 5"]
    );
}

#[rstest]
#[actix_web::test]
async fn unprovisioned_store_degrades_reads_and_reports_setup(backend: Backend) {
    backend
        .store
        .drop_collection(Collection::About)
        .expect("drop about");
    backend
        .store
        .drop_collection(Collection::Visitors)
        .expect("drop visitors");
    let app = app(&backend).await;

    let (_, setup, _) = send(
        &app,
        test::TestRequest::get().uri("/api/v1/setup/status"),
    )
    .await;
    assert_eq!(
        setup,
        json!({ "ready": false, "missing": ["visitors", "about"] })
    );

    // Visitor login needs the visitor log, so only the owner can get in.
    let (status, err, cookie) = send(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login/visitor")
            .set_json(json!({ "name": "Ada", "relation": "Recruiter" })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(err["details"], json!({ "collection": "visitors" }));
    assert!(cookie.is_none_or(|c| c.value().is_empty()));

    let owner = login_owner(&app).await;
    let (status, about, _) = send(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/about")
            .cookie(owner.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(about, Value::Null);

    let (status, visitors, _) = send(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/visitors")
            .cookie(owner),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(visitors, json!([]));
}

#[rstest]
#[actix_web::test]
async fn logout_ends_the_session(backend: Backend) {
    let app = app(&backend).await;
    let visitor = login_visitor(&app, "Ada", "Recruiter").await;

    let (status, _, cleared) = send(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/logout")
            .cookie(visitor),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let mut after = test::TestRequest::get().uri("/api/v1/session");
    if let Some(cookie) = cleared.filter(|c| !c.value().is_empty()) {
        after = after.cookie(cookie);
    }
    let (status, session, _) = send(&app, after).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session, Value::Null);

    let (_, nav, _) = send(
        &app,
        test::TestRequest::get().uri("/api/v1/navigation?path=/projects/"),
    )
    .await;
    assert_eq!(nav, json!({ "action": "redirect", "to": "landing" }));
}
