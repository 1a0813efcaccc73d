//! Asset records and partial updates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::{RecordId, Timestamp};

// ---------------------------------------------------------------------------
// AssetType
// ---------------------------------------------------------------------------

/// Kind of media or document an asset holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Image,
    Video,
    Audio,
    Document,
    Model,
    Font,
}

impl AssetType {
    /// Every asset type, in declaration order.
    pub const ALL: [AssetType; 6] = [
        AssetType::Image,
        AssetType::Video,
        AssetType::Audio,
        AssetType::Document,
        AssetType::Model,
        AssetType::Font,
    ];

    /// Wire name, as stored in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Model => "model",
            Self::Font => "font",
        }
    }

    /// Infer the asset type from a file extension (without the dot).
    ///
    /// Matching is case-insensitive. Returns `None` for extensions that do
    /// not map to a catalogued media kind.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        let kind = match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp" | "ico" | "tiff" => {
                Self::Image
            }
            "mp4" | "webm" | "mov" | "mkv" | "avi" => Self::Video,
            "mp3" | "wav" | "ogg" | "flac" | "m4a" | "aac" => Self::Audio,
            "pdf" | "doc" | "docx" | "txt" | "md" | "csv" | "xlsx" | "pptx" | "rtf" => {
                Self::Document
            }
            "glb" | "gltf" | "obj" | "fbx" | "stl" | "usdz" => Self::Model,
            "ttf" | "otf" | "woff" | "woff2" => Self::Font,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown asset type '{s}'. Must be one of: image, video, audio, document, model, font"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

/// A stored media or document item.
///
/// `id` is the catalogue key. Optional fields are omitted from the
/// serialized form when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    pub uploaded_at: Timestamp,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub protected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Asset {
    /// Create an unprotected, untagged asset with a fresh UUID id,
    /// uploaded now.
    pub fn new(name: impl Into<String>, asset_type: AssetType, path: impl Into<String>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), name, asset_type, path)
    }

    /// Same as [`Asset::new`] but with a caller-chosen id.
    pub fn with_id(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        asset_type: AssetType,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            asset_type,
            path: path.into(),
            size: None,
            uploaded_at: chrono::Utc::now(),
            tags: Vec::new(),
            metadata: None,
            category: None,
            description: None,
            protected: false,
            user_id: None,
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Map<String, serde_json::Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_owner(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn protected(mut self, protected: bool) -> Self {
        self.protected = protected;
        self
    }

    /// Case-insensitive substring match against name, any tag, or
    /// description.
    ///
    /// `needle` must already be lowercased; callers searching many records
    /// lowercase the query once.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }

    /// Overwrite every field present in `patch`. Nested values (metadata,
    /// tags) are replaced wholesale, not merged. `Some(None)` on an optional
    /// attribute clears it.
    pub fn apply(&mut self, patch: AssetPatch) {
        let AssetPatch {
            name,
            asset_type,
            path,
            size,
            uploaded_at,
            tags,
            metadata,
            category,
            description,
            protected,
            user_id,
        } = patch;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = asset_type {
            self.asset_type = v;
        }
        if let Some(v) = path {
            self.path = v;
        }
        if let Some(v) = size {
            self.size = v;
        }
        if let Some(v) = uploaded_at {
            self.uploaded_at = v;
        }
        if let Some(v) = tags {
            self.tags = v;
        }
        if let Some(v) = metadata {
            self.metadata = v;
        }
        if let Some(v) = category {
            self.category = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = protected {
            self.protected = v;
        }
        if let Some(v) = user_id {
            self.user_id = v;
        }
    }
}

// ---------------------------------------------------------------------------
// AssetPatch
// ---------------------------------------------------------------------------

/// DTO for a partial asset update.
///
/// There is no `id` field: the identifier is the catalogue key and cannot
/// be changed by an update.
///
/// Optional attributes are doubly wrapped. `None` leaves the field alone,
/// `Some(None)` clears it. On the wire an absent key means `None` and an
/// explicit `null` means `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<Option<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub metadata: Option<Option<serde_json::Map<String, serde_json::Value>>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<Option<String>>,
}

/// Maps a present key to `Some`, so `null` becomes `Some(None)`. Absent
/// keys never reach here and take the `default` of `None`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl AssetPatch {
    /// True when the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn logo() -> Asset {
        Asset::with_id("a1", "logo.png", AssetType::Image, "/assets/logo.png")
            .with_tags(["Brand", "header"])
            .with_description("Company Logo, dark variant")
    }

    // -- AssetType -----------------------------------------------------------

    #[test]
    fn asset_type_parses_wire_names() {
        for t in AssetType::ALL {
            assert_eq!(t.as_str().parse::<AssetType>().unwrap(), t);
        }
        assert!("sculpture".parse::<AssetType>().is_err());
        assert!("Image".parse::<AssetType>().is_err());
    }

    #[test]
    fn asset_type_from_extension() {
        assert_eq!(AssetType::from_extension("PNG"), Some(AssetType::Image));
        assert_eq!(AssetType::from_extension("mp4"), Some(AssetType::Video));
        assert_eq!(AssetType::from_extension("woff2"), Some(AssetType::Font));
        assert_eq!(AssetType::from_extension("glb"), Some(AssetType::Model));
        assert_eq!(AssetType::from_extension("rs"), None);
    }

    // -- Serialization -------------------------------------------------------

    #[test]
    fn asset_serializes_camel_case_and_omits_absent_fields() {
        let json = serde_json::to_value(logo()).unwrap();
        assert_eq!(json["type"], "image");
        assert!(json.get("uploadedAt").is_some());
        assert_eq!(json["protected"], false);
        assert!(json.get("size").is_none());
        assert!(json.get("category").is_none());
        assert!(json.get("userId").is_none());
    }

    #[test]
    fn asset_deserializes_with_defaults() {
        let json = serde_json::json!({
            "id": "f1",
            "name": "Inter.ttf",
            "type": "font",
            "path": "/fonts/Inter.ttf",
            "uploadedAt": "2026-01-01T00:00:00Z"
        });
        let asset: Asset = serde_json::from_value(json).unwrap();
        assert_eq!(asset.asset_type, AssetType::Font);
        assert!(asset.tags.is_empty());
        assert!(!asset.protected);
        assert_eq!(asset.size, None);
    }

    #[test]
    fn new_assets_get_distinct_ids() {
        let a = Asset::new("a", AssetType::Audio, "/a.mp3");
        let b = Asset::new("b", AssetType::Audio, "/b.mp3");
        assert_ne!(a.id, b.id);
    }

    // -- Search matching -----------------------------------------------------

    #[test]
    fn matches_name_tag_and_description() {
        let asset = logo();
        assert!(asset.matches_lowercase("logo"));
        assert!(asset.matches_lowercase("brand"));
        assert!(asset.matches_lowercase("dark variant"));
        assert!(!asset.matches_lowercase("video"));
    }

    #[test]
    fn missing_description_never_matches() {
        let asset = Asset::with_id("x", "clip", AssetType::Video, "/clip.mp4");
        assert!(!asset.matches_lowercase("intro"));
    }

    #[test]
    fn empty_needle_matches_bare_asset() {
        let asset = Asset::with_id("x", "clip", AssetType::Video, "/clip.mp4");
        assert!(asset.matches_lowercase(""));
    }

    // -- Patch ---------------------------------------------------------------

    #[test]
    fn apply_overwrites_only_present_fields() {
        let mut asset = logo();
        let before = asset.clone();
        asset.apply(AssetPatch {
            category: Some(Some("images".into())),
            ..Default::default()
        });
        assert_eq!(asset.category.as_deref(), Some("images"));
        assert_eq!(asset.name, before.name);
        assert_eq!(asset.tags, before.tags);
        assert_eq!(asset.description, before.description);
        assert_eq!(asset.uploaded_at, before.uploaded_at);
    }

    #[test]
    fn apply_replaces_metadata_wholesale() {
        let mut first = serde_json::Map::new();
        first.insert("width".into(), 64.into());
        first.insert("height".into(), 64.into());
        let mut asset = logo().with_metadata(first);

        let mut second = serde_json::Map::new();
        second.insert("width".into(), 128.into());
        asset.apply(AssetPatch {
            metadata: Some(Some(second.clone())),
            ..Default::default()
        });
        assert_eq!(asset.metadata, Some(second));
    }

    #[test]
    fn explicit_none_clears_optional_fields() {
        let mut asset = logo().with_category("images").with_size(512);
        asset.apply(AssetPatch {
            category: Some(None),
            description: Some(None),
            ..Default::default()
        });
        assert_eq!(asset.category, None);
        assert_eq!(asset.description, None);
        assert_eq!(asset.size, Some(512));
    }

    #[test]
    fn patch_json_distinguishes_null_from_absent() {
        let patch: AssetPatch = serde_json::from_value(serde_json::json!({
            "category": null,
            "description": "Dark variant"
        }))
        .unwrap();
        assert_eq!(patch.category, Some(None));
        assert_eq!(patch.description, Some(Some("Dark variant".into())));
        assert_eq!(patch.size, None);
        assert_eq!(patch.name, None);

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "category": null, "description": "Dark variant" })
        );
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(AssetPatch::default().is_empty());
        let patch = AssetPatch {
            protected: Some(true),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
