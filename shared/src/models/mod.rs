//! Domain models for the Smart Farm Advisory Platform

mod crop_health;
mod emissions;
mod irrigation;
mod overview;
mod sensor;
mod weather;

pub use crop_health::*;
pub use emissions::*;
pub use irrigation::*;
pub use overview::*;
pub use sensor::*;
pub use weather::*;
