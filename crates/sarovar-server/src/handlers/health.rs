use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::state::AppState;

pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "llm_enabled": state.llm_enabled,
        "db_connected": state.db_connected(),
    }))
}
