use actix_web::{web, HttpRequest, HttpResponse};
use sarovar_store::Rating;
use serde_json::{json, Value};
use tracing::error;

use crate::error::ApiError;
use crate::handlers::with_store;
use crate::session::session_id;
use crate::state::AppState;

/// Accept only JSON integers in 1..=5
fn parse_rating(value: Option<&Value>) -> Option<u8> {
    value
        .and_then(Value::as_i64)
        .filter(|r| (1..=5).contains(r))
        .map(|r| r as u8)
}

/// Storage failures are logged; the customer is thanked either way
pub async fn rate(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let session_id =
        session_id(&req, &state.session_cookie).ok_or_else(|| ApiError::bad_request("No session"))?;

    let rating = parse_rating(body.get("rating")).ok_or_else(|| ApiError::bad_request("Invalid rating"))?;
    let feedback = body
        .get("feedback")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let record = Rating {
        session_id,
        rating,
        feedback,
    };
    if let Err(e) = with_store(&state.store, move |store| store.insert_rating(&record)).await {
        error!("Rating error: {}", e);
    }

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Thank you for your feedback!",
    })))
}
