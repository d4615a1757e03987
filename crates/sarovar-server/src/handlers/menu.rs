use actix_web::{web, HttpResponse};
use sarovar_store::{MenuFilter, FALLBACK_CATEGORIES};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use crate::handlers::with_store;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
    pub veg: Option<String>,
}

impl MenuQuery {
    /// Empty `category` means all; only `veg=true` turns the veg filter on
    fn filter(&self) -> MenuFilter {
        let mut filter = MenuFilter::new();
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            filter = filter.with_category(category);
        }
        if self.veg.as_deref() == Some("true") {
            filter = filter.veg_only();
        }
        filter
    }
}

/// Store failures still answer 200, with an `error` field
pub async fn list_menu(state: web::Data<AppState>, query: web::Query<MenuQuery>) -> HttpResponse {
    let filter = query.filter();

    match with_store(&state.store, move |store| store.list_menu(&filter)).await {
        Ok(items) => HttpResponse::Ok().json(json!({ "items": items })),
        Err(e) => {
            error!("Menu query failed: {}", e);
            HttpResponse::Ok().json(json!({ "items": [], "error": e.to_string() }))
        }
    }
}

pub async fn categories(state: web::Data<AppState>) -> HttpResponse {
    match with_store(&state.store, |store| store.categories()).await {
        Ok(categories) => HttpResponse::Ok().json(json!({ "categories": categories })),
        Err(e) => {
            warn!("Category query failed, serving fallback list: {}", e);
            HttpResponse::Ok().json(json!({ "categories": FALLBACK_CATEGORIES }))
        }
    }
}

pub async fn reset_menu(state: web::Data<AppState>) -> HttpResponse {
    match with_store(&state.store, |store| store.reset_menu()).await {
        Ok(_) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "Menu reset",
        })),
        Err(e) => {
            error!("Menu reset failed: {}", e);
            HttpResponse::Ok().json(json!({ "status": "error", "message": e.to_string() }))
        }
    }
}
