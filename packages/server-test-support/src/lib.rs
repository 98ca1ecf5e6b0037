//! Server test support utilities
//!
//! This crate provides utilities shared by unit and integration tests:
//! problem-details assertions, unified logging initialization, and unique
//! test data generation.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
