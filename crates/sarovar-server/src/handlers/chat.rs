use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::session::{session_cookie, session_id};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    pub message: Option<String>,
}

pub async fn chat(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<ChatBody>,
) -> HttpResponse {
    let session = session_id(&req, &state.session_cookie);
    let message = body.message.as_deref().unwrap_or_default();

    let outcome = state.chat.handle(session.as_deref(), message).await;

    let mut response = HttpResponse::Ok();
    if outcome.new_session {
        if let Some(id) = &outcome.session_id {
            response.cookie(session_cookie(&state.session_cookie, id));
        }
    }
    response.json(outcome.reply)
}
