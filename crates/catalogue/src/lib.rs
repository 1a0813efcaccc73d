//! Indexed, write-through asset catalogue.
//!
//! [`AssetCatalogue`] keeps every [`Asset`](labdesk_core::assets::Asset)
//! in an insertion-ordered in-memory index and mirrors the whole index to
//! an injected [`KvStore`](labdesk_store::KvStore) after each mutation.

pub mod catalogue;
pub mod error;

pub use catalogue::{AssetCatalogue, DEFAULT_CATALOGUE_KEY};
pub use error::CatalogueError;
