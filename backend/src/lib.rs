//! Smart Farm Advisory Platform - Backend
//!
//! HTTP service exposing the advisory engine to the farm dashboard, together
//! with the weather, sensor, farm record and crop image collaborators.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;

pub use config::Config;

use external::{
    FarmRecordStore, ImageClassifier, SensorFeed, StaticFarmRecords, StaticSensorFeed,
    StaticWeatherProvider, UnconfiguredClassifier, WeatherProvider,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub classifier: Arc<dyn ImageClassifier>,
    pub sensors: Arc<dyn SensorFeed>,
    pub weather: Arc<dyn WeatherProvider>,
    pub records: Arc<dyn FarmRecordStore>,
}

impl AppState {
    /// State wired with the bundled collaborators
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            classifier: Arc::new(UnconfiguredClassifier),
            sensors: Arc::new(StaticSensorFeed::default()),
            weather: Arc::new(StaticWeatherProvider::with_defaults()),
            records: Arc::new(StaticFarmRecords::default()),
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn ImageClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_sensor_feed(mut self, sensors: Arc<dyn SensorFeed>) -> Self {
        self.sensors = sensors;
        self
    }

    pub fn with_weather_provider(mut self, weather: Arc<dyn WeatherProvider>) -> Self {
        self.weather = weather;
        self
    }

    pub fn with_farm_records(mut self, records: Arc<dyn FarmRecordStore>) -> Self {
        self.records = records;
        self
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Smart Farm Advisory Platform API v1.0"
}
