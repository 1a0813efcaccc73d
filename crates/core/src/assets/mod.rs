//! Asset catalogue domain model.
//!
//! This module provides the asset record, its partial-update DTO, the
//! fixed category set, and aggregate statistics. It does NOT touch any
//! storage; the catalogue crate owns the index and its persistence and
//! calls into these pure functions.

pub mod category;
pub mod model;
pub mod stats;

pub use category::{category_by_id, AssetCategory, ASSET_CATEGORIES};
pub use model::{Asset, AssetPatch, AssetType};
pub use stats::AssetStats;
