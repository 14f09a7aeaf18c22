//! HTTP API tests
//!
//! Drives the router in-process with `oneshot`.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // for oneshot

use agri_advisory::error::AppResult;
use agri_advisory::external::{CropImage, ImageClassifier};
use agri_advisory::{create_app, AppState, Config};
use shared::{CropCondition, Diagnosis, Severity};

fn app() -> Router {
    create_app(AppState::new(Config::default()))
}

async fn json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&body).expect("Failed to parse JSON")
}

async fn post_json(app: Router, uri: &str, body: Value) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let response = get(app(), "/api/v1/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "development");
}

// ============================================================================
// Irrigation Advice
// ============================================================================

#[tokio::test]
async fn test_irrigation_advice_medium() {
    let response = post_json(
        app(),
        "/api/v1/irrigation-advice",
        json!({"soilMoisturePercent": 45, "cropType": "Wheat", "weatherForecast": "sunny"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["urgency"], "medium");
    assert_eq!(body["recommendedWaterAmountMm"], 15.0);
    assert_eq!(body["optimalMoistureRange"], json!([40, 70]));
    assert_eq!(body["moistureStatus"], "low");
    assert_eq!(body["nextCheckHours"], 6);
}

#[tokio::test]
async fn test_irrigation_advice_accepts_form_fields() {
    let response = post_json(
        app(),
        "/api/v1/irrigation-advice",
        json!({"soil_moisture": "20", "crop_type": "tomatoes", "weather_forecast": "storm"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["urgency"], "high");
    assert_eq!(body["recommendedWaterAmountMm"], 25.0);
    assert_eq!(
        body["advice"],
        "immediate irrigation for tomatoes, soil moisture critically low."
    );
}

#[tokio::test]
async fn test_irrigation_advice_missing_field() {
    let response = post_json(
        app(),
        "/api/v1/irrigation-advice",
        json!({"soilMoisturePercent": 45, "cropType": "Wheat"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_response(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "weather_forecast");
}

#[tokio::test]
async fn test_irrigation_advice_out_of_range() {
    let response = post_json(
        app(),
        "/api/v1/irrigation-advice",
        json!({"soilMoisturePercent": 140, "cropType": "Wheat", "weatherForecast": "sunny"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_response(response).await;
    assert_eq!(body["error"]["field"], "soil_moisture_percent");
}

#[tokio::test]
async fn test_irrigation_advice_unknown_forecast() {
    let response = post_json(
        app(),
        "/api/v1/irrigation-advice",
        json!({"soilMoisturePercent": 45, "cropType": "Wheat", "weatherForecast": "hail"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_irrigation_advice_wrong_field_type() {
    let response = post_json(
        app(),
        "/api/v1/irrigation-advice",
        json!({"soilMoisturePercent": true, "cropType": "Wheat", "weatherForecast": "sunny"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_response(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_irrigation_advice_malformed_json() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/irrigation-advice")
                .header("content-type", "application/json")
                .body(Body::from("{\"cropType\": "))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_response(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_irrigation_advice_requires_json_content_type() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/irrigation-advice")
                .body(Body::from(r#"{"cropType": "Wheat"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let body = json_response(response).await;
    assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
}

// ============================================================================
// Carbon Footprint
// ============================================================================

#[tokio::test]
async fn test_carbon_footprint_placeholder() {
    let response = post_json(
        app(),
        "/api/v1/carbon-footprint",
        json!({"farmId": "FARM007", "areaHa": 12.5, "dieselLiters": 1000, "electricityKwh": 5000}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["farmId"], "FARM007");
    assert_eq!(body["areaHa"], 12.5);
    assert_eq!(body["emissions"]["total_tCO2e"], 15.4);
    assert_eq!(body["emissions"]["tCO2e_per_ha"], 1.54);
    assert_eq!(body["emissions"]["emissions_breakdown"]["diesel_tCO2e"], 8.2);
    assert_eq!(
        body["emissions"]["top_contributors"],
        json!(["diesel_tCO2e", "electricity_tCO2e", "fertilizer_tCO2e"])
    );
    assert_eq!(body["sustainabilityScore"], 78);
    assert_eq!(body["sustainabilityRating"], "fair");
    assert_eq!(body["estimate"], "placeholder");
}

#[tokio::test]
async fn test_carbon_footprint_defaults() {
    let response = post_json(app(), "/api/v1/carbon-footprint", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["farmId"], "FARM001");
    assert_eq!(body["areaHa"], 10.0);
}

#[tokio::test]
async fn test_carbon_footprint_rejects_negative_usage() {
    let response = post_json(
        app(),
        "/api/v1/carbon-footprint",
        json!({"fertilizerKg": -5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_response(response).await;
    assert_eq!(body["error"]["field"], "fertilizer_kg");
}

#[tokio::test]
async fn test_carbon_footprint_rejects_negative_livestock_usage() {
    let response = post_json(
        app(),
        "/api/v1/carbon-footprint",
        json!({"enteric_fermentation": -5, "ricePaddies": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_response(response).await;
    assert_eq!(body["error"]["field"], "enteric_fermentation");
}

#[tokio::test]
async fn test_carbon_footprint_rejects_non_numeric_usage() {
    let response = post_json(
        app(),
        "/api/v1/carbon-footprint",
        json!({"soil_sequestration": "x"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_response(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// ============================================================================
// Crop Health
// ============================================================================

struct FixedClassifier(Diagnosis);

#[async_trait]
impl ImageClassifier for FixedClassifier {
    async fn predict(&self, _image: &CropImage) -> AppResult<Diagnosis> {
        Ok(self.0.clone())
    }
}

#[tokio::test]
async fn test_crop_health_without_classifier_is_unavailable() {
    let response = post_json(
        app(),
        "/api/v1/crop-health",
        json!({"filename": "leaf.jpg", "imageBase64": "/9j/4AAQSkZJRg=="}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = json_response(response).await;
    assert_eq!(body["error"]["code"], "CLASSIFIER_UNAVAILABLE");
}

#[tokio::test]
async fn test_crop_health_with_classifier() {
    let classifier = FixedClassifier(Diagnosis {
        condition: CropCondition::Rust,
        confidence_percent: 88,
        severity: Severity::High,
    });
    let state = AppState::new(Config::default()).with_classifier(Arc::new(classifier));

    let response = post_json(
        create_app(state),
        "/api/v1/crop-health",
        json!({"filename": "leaf.jpg", "imageBase64": "/9j/4AAQSkZJRg=="}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["filename"], "leaf.jpg");
    assert_eq!(body["prediction"], "rust");
    assert_eq!(body["predictionLabel"], "Rust");
    assert_eq!(body["severity"], "high");
    assert_eq!(body["followUpActions"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_crop_health_rejects_bad_base64() {
    let response = post_json(
        app(),
        "/api/v1/crop-health",
        json!({"imageBase64": "not base64!"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_response(response).await;
    assert_eq!(body["error"]["field"], "image_base64");
}

// ============================================================================
// Sensors & Weather
// ============================================================================

#[tokio::test]
async fn test_sensor_dashboard() {
    let response = get(app(), "/api/v1/sensors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["refreshIntervalSecs"], 30);
    assert_eq!(body["moistureStatus"], "low");
    assert_eq!(body["batteries"].as_array().unwrap().len(), 3);
    assert!(body["reading"]["recordedAt"].is_string());
}

#[tokio::test]
async fn test_weather_default_city() {
    let response = get(app(), "/api/v1/weather").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["city"], "Delhi");
    assert_eq!(body["temperatureCelsius"], 28.0);
    assert_eq!(body["conditions"], "partly cloudy");
}

#[tokio::test]
async fn test_weather_unknown_city() {
    let response = get(app(), "/api/v1/weather?city=Atlantis").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Dashboard Overview
// ============================================================================

#[tokio::test]
async fn test_dashboard_overview() {
    let response = get(app(), "/api/v1/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["totalFarms"], 3);
    assert_eq!(body["healthyFields"], 2);
    assert_eq!(body["alertsActive"], 1);
    assert_eq!(body["avgSustainabilityScore"], 78);
    assert_eq!(body["todayWeather"]["city"], "Delhi");
    assert_eq!(body["recentAlerts"][1]["type"], "disease");
    assert_eq!(body["carbonFootprint"]["thisMonth"], 15.4);
    assert_eq!(body["carbonFootprint"]["reductionPercent"], 15.4);
}

#[tokio::test]
async fn test_dashboard_overview_unknown_default_city() {
    let mut config = Config::default();
    config.weather.default_city = "Atlantis".to_string();
    let app = create_app(AppState::new(config));

    let response = get(app, "/api/v1/dashboard").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
