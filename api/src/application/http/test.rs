use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::application::http::server::http_server::{router, state};
use crate::args::Args;

const GENERATE_PATH: &str = "/models/gemini-test:generateContent";

fn test_server(gemini_url: &str) -> TestServer {
    let args = Arc::new(Args::parse_from([
        "nutrimind-api",
        "--gemini-api-key",
        "test-key",
        "--gemini-model",
        "gemini-test",
        "--gemini-base-url",
        gemini_url,
    ]));
    let state = state(args).expect("state should build");
    let router = router(state).expect("router should build");
    TestServer::new(router).expect("test server should start")
}

fn session(id: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-session-id"),
        HeaderValue::from_static(id),
    )
}

fn text_reply(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": body.to_string() }] },
            "finishReason": "STOP"
        }]
    }))
}

fn tool_call_reply(calls: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": { "role": "model", "parts": calls },
            "finishReason": "STOP"
        }]
    }))
}

fn food(name: &str) -> Value {
    json!({
        "name": name,
        "nutritionalValues": "Protein 18g per serving",
        "healthBenefits": "Supports steady energy",
        "bestTimeToEat": "Lunch",
        "moodSupport": "Keeps the good mood going"
    })
}

async fn mount_mood_food_flow(gemini: &MockServer) {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(tool_call_reply(json!([
            { "functionCall": { "name": "analyzeMood", "args": { "text": "I feel happy today" } } },
            { "functionCall": { "name": "foodRecommendation", "args": { "mood": "happy" } } }
        ])))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(gemini)
        .await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(text_reply(json!({
            "mood": "happy",
            "foodRecommendations": [food("Paneer Tikka"), food("Thali"), food("Masala Chai")]
        })))
        .with_priority(2)
        .mount(gemini)
        .await;
}

#[tokio::test]
async fn test_mood_food_success_is_recorded_in_session_history() {
    let gemini = MockServer::start().await;
    mount_mood_food_flow(&gemini).await;
    let server = test_server(&gemini.uri());
    let (name, value) = session("alice");

    let response = server
        .post("/advisory/mood-food")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "journalEntry": "I feel happy today" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["data"]["mood"].as_str().unwrap().contains("happy"));
    let foods = body["data"]["foodRecommendations"].as_array().unwrap();
    assert_eq!(foods.len(), 3);
    assert_eq!(foods[0]["name"], "Paneer Tikka");

    let history = server
        .get("/journal/history")
        .add_header(name, value)
        .await;
    history.assert_status_ok();
    let history: Value = history.json();
    let entries = history["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["entry"], "I feel happy today");
    assert_eq!(entries[0]["moodCategory"], "positive");

    let (other_name, other_value) = session("bob");
    let other: Value = server
        .get("/journal/history")
        .add_header(other_name, other_value)
        .await
        .json();
    assert_eq!(other["data"], json!([]));
}

#[tokio::test]
async fn test_empty_journal_entry_is_rejected_without_model_call() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&gemini)
        .await;
    let server = test_server(&gemini.uri());

    let response = server
        .post("/advisory/mood-food")
        .json(&json!({ "journalEntry": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Journal entry cannot be empty." }));

    let history: Value = server.get("/journal/history").await.json();
    assert_eq!(history["data"], json!([]));
}

#[tokio::test]
async fn test_calorie_adjustment_success() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(text_reply(json!({
            "adjustedCalories": 1900,
            "adjustedProtein": 140,
            "adjustedCarbs": 180,
            "adjustedFat": 55,
            "reasoning": "Lower intake for low activity under stress."
        })))
        .expect(1)
        .mount(&gemini)
        .await;
    let server = test_server(&gemini.uri());

    let response = server
        .post("/advisory/calorie-adjustment")
        .json(&json!({
            "mood": "Stressed",
            "activityLevel": "Sedentary",
            "currentCalories": 2000,
            "currentProtein": 150,
            "currentCarbs": 200,
            "currentFat": 60
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["adjustedCalories"], 1900.0);
    assert!(!body["data"]["reasoning"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_negative_goal_is_rejected_without_model_call() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&gemini)
        .await;
    let server = test_server(&gemini.uri());

    let response = server
        .post("/advisory/calorie-adjustment")
        .json(&json!({
            "mood": "Happy",
            "activityLevel": "Active",
            "currentCalories": -1,
            "currentProtein": 150,
            "currentCarbs": 200,
            "currentFat": 60
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Calories must be zero or greater." }));
}

#[tokio::test]
async fn test_model_failure_maps_to_bad_gateway() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&gemini)
        .await;
    let server = test_server(&gemini.uri());

    let response = server
        .post("/advisory/calorie-adjustment")
        .json(&json!({
            "mood": "Sad",
            "activityLevel": "Light",
            "currentCalories": 2000,
            "currentProtein": 150,
            "currentCarbs": 200,
            "currentFat": 60
        }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    response.assert_json(&json!({ "error": "Failed to adjust calorie goals." }));
}

#[tokio::test]
async fn test_malformed_model_output_is_not_recorded() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(text_reply(json!({ "mood": "sad" })))
        .mount(&gemini)
        .await;
    let server = test_server(&gemini.uri());

    let response = server
        .post("/advisory/mood-food")
        .json(&json!({ "journalEntry": "Rough day at work" }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    response.assert_json(&json!({ "error": "Failed to analyze mood and recommend food." }));

    let history: Value = server.get("/journal/history").await.json();
    assert_eq!(history["data"], json!([]));
}

#[tokio::test]
async fn test_clear_history_empties_only_that_session() {
    let gemini = MockServer::start().await;
    mount_mood_food_flow(&gemini).await;
    let server = test_server(&gemini.uri());
    let (name, value) = session("carol");

    server
        .post("/advisory/mood-food")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "journalEntry": "I feel happy today" }))
        .await
        .assert_status_ok();

    let cleared = server
        .delete("/journal/history")
        .add_header(name.clone(), value.clone())
        .await;
    cleared.assert_status_ok();
    cleared.assert_json(&json!({ "removed": 1 }));

    let history: Value = server
        .get("/journal/history")
        .add_header(name, value)
        .await
        .json();
    assert_eq!(history["data"], json!([]));
}

#[tokio::test]
async fn test_headerless_callers_get_separate_sessions() {
    let gemini = MockServer::start().await;
    mount_mood_food_flow(&gemini).await;
    let server = test_server(&gemini.uri());

    let response = server
        .post("/advisory/mood-food")
        .json(&json!({ "journalEntry": "I feel happy today" }))
        .await;
    response.assert_status_ok();
    let minted = response
        .headers()
        .get("x-session-id")
        .expect("session id should be echoed")
        .clone();

    let other = server.get("/journal/history").await;
    let other_id = other
        .headers()
        .get("x-session-id")
        .expect("session id should be echoed")
        .clone();
    assert_ne!(minted, other_id);
    let other: Value = other.json();
    assert_eq!(other["data"], json!([]));

    server
        .delete("/journal/history")
        .await
        .assert_json(&json!({ "removed": 0 }));

    let own: Value = server
        .get("/journal/history")
        .add_header(HeaderName::from_static("x-session-id"), minted)
        .await
        .json();
    assert_eq!(own["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_calorie_goals_accept_numeric_strings() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(text_reply(json!({
            "adjustedCalories": 2100,
            "adjustedProtein": 150,
            "adjustedCarbs": 220,
            "adjustedFat": 60,
            "reasoning": "More fuel for an active day."
        })))
        .expect(1)
        .mount(&gemini)
        .await;
    let server = test_server(&gemini.uri());

    let response = server
        .post("/advisory/calorie-adjustment")
        .json(&json!({
            "mood": "Happy",
            "activityLevel": "Active",
            "currentCalories": "2000",
            "currentProtein": "150",
            "currentCarbs": 200,
            "currentFat": 60
        }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_missing_calorie_goal_is_rejected_with_envelope() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&gemini)
        .await;
    let server = test_server(&gemini.uri());

    let response = server
        .post("/advisory/calorie-adjustment")
        .json(&json!({
            "mood": "Happy",
            "activityLevel": "Active",
            "currentProtein": 150,
            "currentCarbs": 200,
            "currentFat": 60
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Calories must be zero or greater." }));
}

#[tokio::test]
async fn test_oversized_journal_entry_fails_validation() {
    let gemini = MockServer::start().await;
    let server = test_server(&gemini.uri());

    let response = server
        .post("/advisory/mood-analysis")
        .json(&json!({ "journalEntry": "a".repeat(5001) }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_UNPROCESSABLE_ENTITY");
}

#[tokio::test]
async fn test_defaults_and_liveness() {
    let gemini = MockServer::start().await;
    let server = test_server(&gemini.uri());

    let defaults = server.get("/nutrition/defaults").await;
    defaults.assert_status_ok();
    let defaults: Value = defaults.json();
    assert_eq!(defaults["moods"].as_array().unwrap().len(), 5);
    assert_eq!(defaults["goals"]["currentCalories"], 2000.0);

    server.get("/health/live").await.assert_status_ok();
}
