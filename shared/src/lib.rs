//! Shared types, models, and the advisory engine for the Smart Farm Advisory Platform
//!
//! This crate contains everything shared between the backend, the dashboard
//! (via WASM), and other components of the system. It performs no I/O.

pub mod advisory;
pub mod models;
pub mod types;
pub mod validation;

pub use advisory::*;
pub use models::*;
pub use types::*;
pub use validation::*;
