//! Contact-form handlers.
//!
//! ```text
//! POST /api/v1/messages {"name":"Ada","email":"ada@example.com","message":"Hi"}
//! GET  /api/v1/messages
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Error, Message, NewMessage};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Loved the churn model write-up.")]
    pub message: String,
}

/// Leave a message for the owner. Any session may write.
#[utoipa::path(
    post,
    path = "/api/v1/messages",
    request_body = MessageRequest,
    responses(
        (status = 201, description = "Stored message", body = Message),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["messages"],
    operation_id = "addMessage"
)]
#[post("/messages")]
pub async fn add_message(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<MessageRequest>,
) -> ApiResult<HttpResponse> {
    session.require_session()?;
    let MessageRequest {
        name,
        email,
        message,
    } = payload.into_inner();
    let draft = NewMessage::try_from_parts(&name, &email, &message)
        .map_err(|err| Error::invalid_field(&err))?;
    let stored = state.contact.add_message(&draft).await?;
    Ok(HttpResponse::Created().json(stored))
}

#[utoipa::path(
    get,
    path = "/api/v1/messages",
    responses(
        (status = 200, description = "Messages, newest first", body = [Message]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Owner only", body = Error)
    ),
    tags = ["messages"],
    operation_id = "listMessages"
)]
#[get("/messages")]
pub async fn list_messages(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Message>>> {
    session.require_owner()?;
    Ok(web::Json(state.contact.list_messages().await?))
}
