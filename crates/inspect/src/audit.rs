//! Consistency checks over a loaded catalogue.

use std::path::Path;

use labdesk_core::assets::{category_by_id, Asset, AssetType};
use labdesk_core::types::RecordId;
use serde::Serialize;

/// Assets that load fine but disagree with the fixed vocabularies.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Category set but not one of the fixed categories.
    pub unknown_category: Vec<RecordId>,
    /// Path extension maps to a different asset type.
    pub type_mismatch: Vec<TypeMismatch>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMismatch {
    pub id: RecordId,
    pub stored: AssetType,
    pub inferred: AssetType,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.unknown_category.is_empty() && self.type_mismatch.is_empty()
    }
}

/// Check every asset, in listing order. Uncategorised assets and paths
/// with no recognised extension are not reported.
pub fn audit(assets: &[Asset]) -> AuditReport {
    let mut report = AuditReport::default();
    for asset in assets {
        if let Some(category) = asset.category.as_deref() {
            if category_by_id(category).is_none() {
                report.unknown_category.push(asset.id.clone());
            }
        }

        let inferred = Path::new(&asset.path)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(AssetType::from_extension);
        if let Some(inferred) = inferred {
            if inferred != asset.asset_type {
                report.type_mismatch.push(TypeMismatch {
                    id: asset.id.clone(),
                    stored: asset.asset_type,
                    inferred,
                });
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistent_assets_are_clean() {
        let assets = vec![
            Asset::with_id("i1", "logo", AssetType::Image, "/assets/logo.PNG")
                .with_category("images"),
            Asset::with_id("n1", "notes", AssetType::Document, "/assets/README"),
        ];
        assert!(audit(&assets).is_clean());
    }

    #[test]
    fn unknown_category_is_reported() {
        let assets = vec![
            Asset::with_id("s1", "sheet", AssetType::Document, "/s.csv")
                .with_category("spreadsheets"),
            Asset::with_id("f1", "Inter", AssetType::Font, "/Inter.ttf").with_category("fonts"),
        ];
        let report = audit(&assets);
        assert_eq!(report.unknown_category, vec!["s1".to_string()]);
        assert!(report.type_mismatch.is_empty());
    }

    #[test]
    fn extension_disagreeing_with_type_is_reported() {
        let assets = vec![Asset::with_id("v1", "intro", AssetType::Image, "/v/intro.mp4")];
        let report = audit(&assets);
        assert_eq!(
            report.type_mismatch,
            vec![TypeMismatch {
                id: "v1".into(),
                stored: AssetType::Image,
                inferred: AssetType::Video,
            }]
        );
    }
}
