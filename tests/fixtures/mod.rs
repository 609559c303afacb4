//! Test fixtures for vrp-fixtures.
//!
//! Provides:
//! - Stub address resolvers (always, never, selectively resolving)
//! - Sample postal-code pools built from real Singapore postal codes

pub mod resolvers;
pub mod singapore_postal_codes;

pub use resolvers::*;
pub use singapore_postal_codes::*;
