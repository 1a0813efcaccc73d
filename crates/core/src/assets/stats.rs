//! Aggregate catalogue statistics.

use std::collections::BTreeMap;

use serde::Serialize;

use super::model::{Asset, AssetType};

/// Totals computed by a full scan of the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetStats {
    pub total: usize,
    /// Every [`AssetType`] is present, zero when unused.
    pub by_type: BTreeMap<AssetType, usize>,
    pub protected: usize,
    /// Sum of known sizes in bytes, saturating at `u64::MAX`. Assets
    /// without a size contribute 0.
    pub total_size: u64,
}

impl Default for AssetStats {
    fn default() -> Self {
        Self {
            total: 0,
            by_type: AssetType::ALL.into_iter().map(|t| (t, 0)).collect(),
            protected: 0,
            total_size: 0,
        }
    }
}

impl AssetStats {
    /// Scan `assets` once and accumulate every total.
    pub fn from_assets<'a, I>(assets: I) -> Self
    where
        I: IntoIterator<Item = &'a Asset>,
    {
        assets.into_iter().fold(Self::default(), |mut stats, asset| {
            stats.total += 1;
            *stats.by_type.entry(asset.asset_type).or_insert(0) += 1;
            if asset.protected {
                stats.protected += 1;
            }
            stats.total_size = stats.total_size.saturating_add(asset.size.unwrap_or(0));
            stats
        })
    }

    /// Count for a single type.
    pub fn count_of(&self, asset_type: AssetType) -> usize {
        self.by_type.get(&asset_type).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scan_lists_every_type_at_zero() {
        let stats = AssetStats::from_assets(std::iter::empty());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.by_type.len(), AssetType::ALL.len());
        assert!(stats.by_type.values().all(|&n| n == 0));
    }

    #[test]
    fn scan_accumulates_counts_and_sizes() {
        let assets = vec![
            Asset::with_id("a", "a.png", AssetType::Image, "/a.png")
                .with_size(100)
                .protected(true),
            Asset::with_id("b", "b.png", AssetType::Image, "/b.png"),
            Asset::with_id("c", "c.pdf", AssetType::Document, "/c.pdf").with_size(50),
        ];
        let stats = AssetStats::from_assets(&assets);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count_of(AssetType::Image), 2);
        assert_eq!(stats.count_of(AssetType::Document), 1);
        assert_eq!(stats.count_of(AssetType::Font), 0);
        assert_eq!(stats.protected, 1);
        assert_eq!(stats.total_size, 150);
    }

    #[test]
    fn total_size_saturates_instead_of_overflowing() {
        let assets = vec![
            Asset::with_id("a", "a.glb", AssetType::Model, "/a.glb").with_size(u64::MAX),
            Asset::with_id("b", "b.glb", AssetType::Model, "/b.glb").with_size(1),
        ];
        let stats = AssetStats::from_assets(&assets);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.total_size, u64::MAX);
    }

    #[test]
    fn by_type_serializes_with_wire_names() {
        let stats = AssetStats::default();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["byType"]["image"], 0);
        assert_eq!(json["totalSize"], 0);
    }
}
