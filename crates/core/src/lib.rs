//! Domain types shared by every labdesk crate.
//!
//! This crate has zero internal dependencies: the asset model, the
//! workspace record shapes consumed by the editor UI, and language
//! detection all live here so the store, catalogue and client crates can
//! depend on one vocabulary.

pub mod assets;
pub mod error;
pub mod language;
pub mod types;
pub mod workspace;
