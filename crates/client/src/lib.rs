//! REST client for the chemistry data API.
//!
//! Provides typed response models, environment-driven configuration and
//! a thin [`reqwest`] wrapper mapping each GET endpoint to one method.

pub mod api;
pub mod config;
pub mod models;

pub use api::{ApiError, ChemistryApi};
pub use config::ClientConfig;
