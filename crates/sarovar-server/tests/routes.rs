use std::sync::Arc;
use std::time::Duration;

use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use sarovar_chat::{
    ChatService, HistoryStore, LlmAssistant, RateLimitConfig, RateLimiter, ResponseTable,
};
use sarovar_server::{configure, cors, AppState};
use sarovar_store::Store;
use serde_json::{json, Value};

fn chat_service(limit: usize) -> ChatService {
    ChatService::new(
        Arc::new(RateLimiter::new(RateLimitConfig::new(limit, Duration::from_secs(60)))),
        Arc::new(HistoryStore::new(20)),
        LlmAssistant::disabled(),
        Arc::new(ResponseTable::new()),
    )
}

fn state_with_store() -> AppState {
    let store = Store::open_in_memory().unwrap();
    AppState::new(chat_service(20), Some(Arc::new(store)), false)
}

fn state_without_store() -> AppState {
    AppState::new(chat_service(20), None, false)
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn chat_sets_session_cookie_and_classifies() {
    let app = app!(state_without_store());

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({"message": "hello there"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "session_id")
        .map(|c| c.into_owned())
        .expect("session cookie");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["intent"], "greeting");
    assert_eq!(
        body["response"],
        "Welcome to Sarovar South Spice! How can I help you today?"
    );

    // an existing session is not re-issued
    let req = test::TestRequest::post()
        .uri("/chat")
        .cookie(cookie)
        .set_json(json!({"message": "book a table for 4"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.response().cookies().count(), 0);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["intent"], "book_table");
}

#[actix_web::test]
async fn chat_empty_message() {
    let app = app!(state_without_store());

    for payload in [json!({"message": "   "}), json!({})] {
        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.response().cookies().count(), 0);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"response": "Please type a message.", "intent": "fallback"}));
    }
}

#[actix_web::test]
async fn chat_rate_limit_per_session() {
    let app = app!(state_without_store());
    let cookie = Cookie::new("session_id", "busy-session");

    for _ in 0..20 {
        let req = test::TestRequest::post()
            .uri("/chat")
            .cookie(cookie.clone())
            .set_json(json!({"message": "what time do you open"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["intent"], "hours");
    }

    let req = test::TestRequest::post()
        .uri("/chat")
        .cookie(cookie)
        .set_json(json!({"message": "what time do you open"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({
            "response": "You're sending messages too fast. Please wait a moment.",
            "intent": "fallback"
        })
    );
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let app = app!(state_without_store());
    let req = test::TestRequest::post()
        .uri("/chat")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
}

#[actix_web::test]
async fn booking_roundtrip() {
    let app = app!(state_with_store());

    let req = test::TestRequest::post()
        .uri("/book")
        .set_json(json!({
            "name": "Meena",
            "date": "2026-12-24",
            "time": "19:00",
            "party_size": 4,
            "special_requests": "high chair"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["status"], "success");
    let id = body["booking_id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 8);
    assert!(id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    assert_eq!(
        body["message"],
        format!("Table booked for Meena! Booking ID: {}. Party of 4 on 2026-12-24 at 19:00.", id)
    );

    let req = test::TestRequest::get()
        .uri(&format!("/booking/{}", id.to_ascii_lowercase()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "found");
    assert_eq!(body["booking"]["id"], id.as_str());
    assert_eq!(body["booking"]["name"], "Meena");
    assert_eq!(body["booking"]["party_size"], 4);
    assert_eq!(body["booking"]["special_requests"], "high chair");
    assert_eq!(body["booking"]["status"], "confirmed");
}

#[actix_web::test]
async fn booking_validation_and_not_found() {
    let app = app!(state_with_store());

    let req = test::TestRequest::post()
        .uri("/book")
        .set_json(json!({"name": "Meena", "date": "", "time": "19:00"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"status": "error", "message": "Name, date, and time are required."})
    );

    let req = test::TestRequest::get().uri("/booking/NOPE1234").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": "not_found"}));
}

#[actix_web::test]
async fn booking_without_store_fails_cleanly() {
    let app = app!(state_without_store());
    let req = test::TestRequest::post()
        .uri("/book")
        .set_json(json!({"name": "Meena", "date": "2026-12-24", "time": "19:00"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"status": "error", "message": "Booking failed. Please try again."})
    );
}

#[actix_web::test]
async fn rating_validation() {
    let app = app!(state_with_store());
    let cookie = Cookie::new("session_id", "rater");

    for bad in [json!(0), json!(6), json!("good")] {
        let req = test::TestRequest::post()
            .uri("/rate")
            .cookie(cookie.clone())
            .set_json(json!({"rating": bad, "feedback": "x"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "rating {}", bad);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid rating");
    }

    let req = test::TestRequest::post()
        .uri("/rate")
        .cookie(cookie)
        .set_json(json!({"rating": 3, "feedback": ""}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({"status": "success", "message": "Thank you for your feedback!"})
    );
}

#[actix_web::test]
async fn rating_requires_session() {
    let app = app!(state_with_store());
    let req = test::TestRequest::post()
        .uri("/rate")
        .set_json(json!({"rating": 4}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No session");
}

#[actix_web::test]
async fn menu_filters_and_categories() {
    let app = app!(state_with_store());

    let req = test::TestRequest::get().uri("/menu").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 29);

    let req = test::TestRequest::get()
        .uri("/menu?category=Snacks&veg=true")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i["is_veg"] == true && i["category"] == "Snacks"));
    assert!(items[0]["price"].is_f64());

    let req = test::TestRequest::get().uri("/menu/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body["categories"],
        json!(["Beverages", "Breakfast", "Desserts", "Main Course", "Snacks"])
    );

    let req = test::TestRequest::get().uri("/reset-menu").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"status": "success", "message": "Menu reset"}));
}

#[actix_web::test]
async fn degraded_without_store() {
    let app = app!(state_without_store());

    let req = test::TestRequest::get().uri("/menu").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["items"], json!([]));
    assert!(body["error"].is_string());

    let req = test::TestRequest::get().uri("/menu/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body["categories"],
        json!(["Breakfast", "Main Course", "Snacks", "Beverages", "Desserts"])
    );

    let req = test::TestRequest::get().uri("/test").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({"status": "ok", "llm_enabled": false, "db_connected": false})
    );
}

#[actix_web::test]
async fn health_reports_store() {
    let app = app!(state_with_store());
    let req = test::TestRequest::get().uri("/test").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["db_connected"], true);
}

const ORIGIN: &str = "http://localhost:5173";

#[actix_web::test]
async fn cors_preflight_and_origin_headers() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_without_store()))
            .wrap(cors(true))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/chat")
        .insert_header((header::ORIGIN, ORIGIN))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        ORIGIN
    );

    let req = test::TestRequest::get()
        .uri("/test")
        .insert_header((header::ORIGIN, ORIGIN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        ORIGIN
    );
}

#[actix_web::test]
async fn cors_disabled_adds_no_headers() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_without_store()))
            .wrap(cors(false))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/test")
        .insert_header((header::ORIGIN, ORIGIN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());

    // OPTIONS on an unknown path is not answered
    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/nowhere")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
