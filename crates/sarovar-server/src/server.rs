use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing::info;

use crate::error::ApiError;
use crate::handlers::{booking, chat, health, menu, rating};
use crate::state::AppState;

/// Malformed or missing JSON bodies answer 400 with the usual error payload
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into())
}

/// Route table
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/chat", web::post().to(chat::chat))
        .route("/menu", web::get().to(menu::list_menu))
        .route("/menu/categories", web::get().to(menu::categories))
        .route("/reset-menu", web::get().to(menu::reset_menu))
        .route("/book", web::post().to(booking::create_booking))
        .route("/booking/{id}", web::get().to(booking::get_booking))
        .route("/rate", web::post().to(rating::rate))
        .route("/test", web::get().to(health::health));
}

/// Permissive CORS when `enabled`, a pass-through otherwise
pub fn cors(enabled: bool) -> middleware::Condition<Cors> {
    middleware::Condition::new(enabled, Cors::permissive())
}

pub async fn run_server(
    state: AppState,
    host: &str,
    port: u16,
    cors_enabled: bool,
) -> std::io::Result<()> {
    let state = web::Data::new(state);

    info!("Listening on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors(cors_enabled))
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((host, port))?
    .run()
    .await
}
