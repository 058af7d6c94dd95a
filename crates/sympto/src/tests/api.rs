use axum_test::TestServer;
use libsympto::prelude::*;
use serde_json::{Value, json};

use crate::{
  api,
  tests::{app_state, sample_dataset},
};

#[tokio::test]
async fn analyze_identifies_a_disease() {
  let app = api::router(app_state(sample_dataset(), Passthrough));
  let server = TestServer::new(app).unwrap();

  let response = server.post("/analyze").json(&json!({ "symptoms": ["fever", "cough", "fatigue"] })).await;

  assert_eq!(response.status_code(), 200);

  response.assert_json_contains(&json!({
      "disease": "Influenza",
      "description": "A viral infection of the airways.",
      "language": "en",
  }));
}

#[tokio::test]
async fn analyze_assembles_multi_word_symptoms() {
  let app = api::router(app_state(sample_dataset(), Passthrough));
  let server = TestServer::new(app).unwrap();

  let response = server.post("/analyze").json(&json!({ "symptoms": ["chest pain", "shortness of breath", "fatigue"] })).await;

  assert_eq!(response.status_code(), 200);

  response.assert_json_contains(&json!({ "disease": "Angina" }));
}

#[tokio::test]
async fn analyze_corrects_misspelled_symptoms() {
  let dataset = sample_dataset();
  let dictionary = DictionaryCorrector::embedded().unwrap().learn(dataset.vocabulary());

  let app = api::router(app_state(dataset, dictionary));
  let server = TestServer::new(app).unwrap();

  let response = server.post("/analyze").json(&json!({ "symptoms": ["fevver", "coughh", "fatigue"] })).await;

  assert_eq!(response.status_code(), 200);

  response.assert_json_contains(&json!({ "disease": "Influenza" }));
}

#[tokio::test]
async fn analyze_reports_no_match() {
  let app = api::router(app_state(sample_dataset(), Passthrough));
  let server = TestServer::new(app).unwrap();

  let response = server.post("/analyze").json(&json!({ "symptoms": ["sneezing"] })).await;

  assert_eq!(response.status_code(), 200);

  let body: Value = response.json();

  assert!(body.get("disease").is_none());
  assert!(body["description"].as_str().unwrap().starts_with("Sorry"));
  assert_eq!(body["language"], "en");
}

#[tokio::test]
async fn analyze_defaults_missing_fields() {
  let app = api::router(app_state(sample_dataset(), Passthrough));
  let server = TestServer::new(app).unwrap();

  let response = server.post("/analyze").json(&json!({})).await;

  assert_eq!(response.status_code(), 200);

  let body: Value = response.json();

  assert!(body.get("disease").is_none());
  assert_eq!(body["language"], "en");

  let response = server.post("/analyze").json(&json!({ "symptoms": ["fever", "cough", "fatigue"], "language": "" })).await;

  response.assert_json_contains(&json!({ "disease": "Influenza", "language": "en" }));
}

#[tokio::test]
async fn analyze_localizes_descriptions() {
  let app = api::router(app_state(sample_dataset(), Passthrough));
  let server = TestServer::new(app).unwrap();

  let response = server.post("/analyze").json(&json!({ "symptoms": ["fever", "cough", "fatigue"], "language": "es" })).await;

  response.assert_json_contains(&json!({
      "disease": "Influenza",
      "description": "Una infección vírica de las vías respiratorias.",
      "language": "es",
  }));

  let response = server.post("/analyze").json(&json!({ "symptoms": ["sneezing"], "language": "es" })).await;

  let body: Value = response.json();

  assert!(body.get("disease").is_none());
  assert!(body["description"].as_str().unwrap().starts_with("Lo siento"));
}

#[tokio::test]
async fn analyze_reports_missing_descriptions() {
  let app = api::router(app_state(sample_dataset(), Passthrough));
  let server = TestServer::new(app).unwrap();

  let response = server.post("/analyze").json(&json!({ "symptoms": ["chest pain", "shortness of breath", "fatigue"], "language": "es" })).await;

  response.assert_json_contains(&json!({
      "disease": "Angina",
      "description": "Descripción no encontrada.",
      "language": "es",
  }));
}

#[tokio::test]
async fn analyze_rejects_oversized_payloads() {
  let app = api::router(app_state(sample_dataset(), Passthrough));
  let server = TestServer::new(app).unwrap();

  let symptoms = (0..65).map(|n| format!("symptom {n}")).collect::<Vec<_>>();
  let response = server.post("/analyze").json(&json!({ "symptoms": symptoms })).await;

  assert_eq!(response.status_code(), 422);

  response.assert_text_contains("too many symptoms were provided");
}

#[tokio::test]
async fn analyze_rejects_malformed_payloads() {
  let app = api::router(app_state(sample_dataset(), Passthrough));
  let server = TestServer::new(app).unwrap();

  let response = server.post("/analyze").bytes("{".into()).content_type("application/json").await;

  assert_eq!(response.status_code(), 400);

  response.assert_text_contains("invalid payload format");

  let response = server.post("/analyze").json(&json!({ "symptoms": "fever" })).await;

  assert_eq!(response.status_code(), 400);

  response.assert_text_contains("payload does not match expected format");

  let response = server.post("/analyze").await;

  assert_eq!(response.status_code(), 415);

  response.assert_text_contains("invalid media type");
}

#[tokio::test]
async fn get_disease_returns_description() {
  let app = api::router(app_state(sample_dataset(), Passthrough));
  let server = TestServer::new(app).unwrap();

  let response = server.get("/diseases/influenza").await;

  assert_eq!(response.status_code(), 200);

  response.assert_json_contains(&json!({
      "disease": "Influenza",
      "description": "A viral infection of the airways.",
      "language": "en",
  }));

  let response = server.get("/diseases/influenza").add_query_param("language", "es").await;

  response.assert_json_contains(&json!({
      "disease": "Influenza",
      "description": "Una infección vírica de las vías respiratorias.",
      "language": "es",
  }));
}

#[tokio::test]
async fn get_disease_falls_back_on_missing_descriptions() {
  let app = api::router(app_state(sample_dataset(), Passthrough));
  let server = TestServer::new(app).unwrap();

  let response = server.get("/diseases/angina").add_query_param("language", "fr").await;

  assert_eq!(response.status_code(), 200);

  response.assert_json_contains(&json!({
      "disease": "Angina",
      "description": "Description introuvable.",
      "language": "fr",
  }));
}

#[tokio::test]
async fn get_disease_rejects_unknown_diseases() {
  let app = api::router(app_state(sample_dataset(), Passthrough));
  let server = TestServer::new(app).unwrap();

  let response = server.get("/diseases/gout").await;

  assert_eq!(response.status_code(), 404);

  response.assert_json_contains(&json!({ "message": "missing resource" }));
}
