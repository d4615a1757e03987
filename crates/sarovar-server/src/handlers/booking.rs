use actix_web::{web, HttpRequest, HttpResponse};
use sarovar_store::types::DEFAULT_PARTY_SIZE;
use sarovar_store::NewBooking;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::error;
use uuid::Uuid;

use crate::error::ApiError;
use crate::handlers::with_store;
use crate::session::session_id;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct BookingBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    /// Number or numeric string
    #[serde(default)]
    pub party_size: Option<Value>,
    #[serde(default)]
    pub special_requests: Option<String>,
}

impl BookingBody {
    fn into_booking(self) -> Result<NewBooking, ApiError> {
        let trimmed = |v: Option<String>| v.unwrap_or_default().trim().to_string();
        let name = trimmed(self.name);
        let date = trimmed(self.date);
        let time = trimmed(self.time);

        if name.is_empty() || date.is_empty() || time.is_empty() {
            return Err(ApiError::bad_request("Name, date, and time are required."));
        }

        let party_size = match self.party_size {
            None | Some(Value::Null) => DEFAULT_PARTY_SIZE,
            Some(Value::Number(n)) => n.as_i64().ok_or_else(invalid_party_size)?,
            Some(Value::String(s)) => s.trim().parse().map_err(|_| invalid_party_size())?,
            Some(_) => return Err(invalid_party_size()),
        };
        if party_size < 1 {
            return Err(invalid_party_size());
        }

        Ok(NewBooking::new(name, date, time)
            .with_party_size(party_size)
            .with_special_requests(trimmed(self.special_requests)))
    }
}

fn invalid_party_size() -> ApiError {
    ApiError::bad_request("Party size must be a whole number of guests.")
}

#[derive(Debug, Serialize)]
struct BookingCreated {
    status: &'static str,
    booking_id: String,
    message: String,
}

pub async fn create_booking(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<BookingBody>,
) -> Result<HttpResponse, ApiError> {
    let booking = body.into_inner().into_booking()?;
    let session = session_id(&req, &state.session_cookie)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let stored = with_store(&state.store, move |store| store.create_booking(&session, &booking))
        .await
        .map_err(|e| {
            error!("Booking failed: {}", e);
            ApiError::internal("Booking failed. Please try again.")
        })?;

    let message = format!(
        "Table booked for {}! Booking ID: {}. Party of {} on {} at {}.",
        stored.name, stored.id, stored.party_size, stored.date, stored.time
    );

    Ok(HttpResponse::Ok().json(BookingCreated {
        status: "success",
        booking_id: stored.id,
        message,
    }))
}

pub async fn get_booking(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    match with_store(&state.store, move |store| store.get_booking(&id)).await? {
        Some(booking) => Ok(HttpResponse::Ok().json(json!({
            "status": "found",
            "booking": booking,
        }))),
        None => Err(ApiError::NotFound),
    }
}
