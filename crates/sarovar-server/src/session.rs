//! Session id cookie

use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;

/// Session id from the request cookie, if present and non-empty
pub fn session_id(req: &HttpRequest, cookie_name: &str) -> Option<String> {
    req.cookie(cookie_name)
        .map(|c| c.value().trim().to_string())
        .filter(|id| !id.is_empty())
}

pub fn session_cookie(cookie_name: &str, session_id: &str) -> Cookie<'static> {
    Cookie::build(cookie_name.to_string(), session_id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}
