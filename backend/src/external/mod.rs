//! External collaborators
//!
//! The advisory engine never depends on these. Each sits behind a trait so a
//! real service can replace the bundled implementation without touching the
//! handlers.

pub mod classifier;
pub mod records;
pub mod sensors;
pub mod weather;

pub use classifier::{CropImage, ImageClassifier, UnconfiguredClassifier};
pub use records::{FarmRecordStore, StaticFarmRecords};
pub use sensors::{SensorFeed, StaticSensorFeed};
pub use weather::{StaticWeatherProvider, WeatherProvider};
