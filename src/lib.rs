//! vrp-fixtures core
//!
//! Generates synthetic job tables (addresses, pickup/delivery pairs, time
//! windows) used as inputs for routing experiments.

pub mod error;
pub mod traits;
pub mod time_window;
pub mod postal;
pub mod generator;
pub mod output;
pub mod onemap;
