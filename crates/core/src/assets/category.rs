//! The fixed asset category set.

use serde::Serialize;

/// A static, descriptive asset category.
///
/// `count` is informational. The values in [`ASSET_CATEGORIES`] always
/// carry zero; the catalogue fills in live counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub count: usize,
}

/// Every category known to the workspace, in display order.
pub const ASSET_CATEGORIES: &[AssetCategory] = &[
    AssetCategory {
        id: "images",
        name: "Images",
        icon: "image",
        description: "Photos, illustrations, icons and diagrams",
        count: 0,
    },
    AssetCategory {
        id: "videos",
        name: "Videos",
        icon: "video",
        description: "Screen recordings, clips and animations",
        count: 0,
    },
    AssetCategory {
        id: "audio",
        name: "Audio",
        icon: "music",
        description: "Voice notes, music and sound effects",
        count: 0,
    },
    AssetCategory {
        id: "documents",
        name: "Documents",
        icon: "file-text",
        description: "Papers, reports, spreadsheets and notes",
        count: 0,
    },
    AssetCategory {
        id: "models",
        name: "3D Models",
        icon: "box",
        description: "Molecular structures and 3D meshes",
        count: 0,
    },
    AssetCategory {
        id: "fonts",
        name: "Fonts",
        icon: "type",
        description: "Typefaces used by the workspace",
        count: 0,
    },
];

/// Look up a category by its id.
pub fn category_by_id(id: &str) -> Option<&'static AssetCategory> {
    ASSET_CATEGORIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ids_are_unique() {
        let mut ids: Vec<_> = ASSET_CATEGORIES.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ASSET_CATEGORIES.len());
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(category_by_id("fonts").map(|c| c.name), Some("Fonts"));
        assert!(category_by_id("spreadsheets").is_none());
    }

    #[test]
    fn static_counts_are_zero() {
        assert!(ASSET_CATEGORIES.iter().all(|c| c.count == 0));
    }
}
