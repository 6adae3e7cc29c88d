//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/api/v1` handler and the health probes along
//! with the session cookie security scheme. The document backs Swagger UI in
//! debug builds and is exported by `cargo run --bin openapi-dump`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    AboutFields, AboutProfile, Collection, DailyVisits, Error, ErrorCode, Message, Navigation,
    Page, Project, ProjectCategory, ProjectFields, Session, Visitor, VisitorStats,
};
use crate::inbound::http::access::{OwnerLoginRequest, VisitorLoginRequest};
use crate::inbound::http::messages::MessageRequest;
use crate::inbound::http::setup::SetupStatusResponse;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login/owner or /api/v1/login/visitor.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Folio backend API",
        description = "Portfolio content, visitor log and contact messages behind a session cookie."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::access::owner_login,
        crate::inbound::http::access::visitor_login,
        crate::inbound::http::access::logout,
        crate::inbound::http::access::current_session,
        crate::inbound::http::access::navigation,
        crate::inbound::http::visitors::list_visitors,
        crate::inbound::http::visitors::visitor_stats,
        crate::inbound::http::about::get_about,
        crate::inbound::http::about::update_about,
        crate::inbound::http::projects::list_projects,
        crate::inbound::http::projects::add_project,
        crate::inbound::http::projects::update_project,
        crate::inbound::http::projects::delete_project,
        crate::inbound::http::messages::add_message,
        crate::inbound::http::messages::list_messages,
        crate::inbound::http::setup::setup_status,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Session,
        Page,
        Navigation,
        OwnerLoginRequest,
        VisitorLoginRequest,
        Visitor,
        VisitorStats,
        DailyVisits,
        AboutProfile,
        AboutFields,
        Project,
        ProjectFields,
        ProjectCategory,
        Message,
        MessageRequest,
        Collection,
        SetupStatusResponse,
    )),
    tags(
        (name = "session", description = "Login, logout and page navigation"),
        (name = "visitors", description = "Visitor log and statistics"),
        (name = "about", description = "The owner's about profile"),
        (name = "projects", description = "Project catalogue"),
        (name = "messages", description = "Contact messages"),
        (name = "setup", description = "Store provisioning status"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("Error", &["code", "message", "traceId", "details"])]
    #[case("Project", &["id", "title", "tools", "category", "sourceCodeLink"])]
    #[case("Session", &["name", "isOwner"])]
    #[case("Message", &["name", "email", "message", "timestamp"])]
    fn schemas_use_wire_field_names(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas
            .get(name)
            .unwrap_or_else(|| panic!("{name} schema"));
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[rstest]
    #[case("/api/v1/login/owner")]
    #[case("/api/v1/visitors/stats")]
    #[case("/api/v1/projects/{id}")]
    #[case("/api/v1/setup/status")]
    #[case("/health/ready")]
    fn documents_endpoint(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[test]
    fn declares_session_cookie_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}
