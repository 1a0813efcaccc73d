//! Record shapes consumed by the file-tree explorer and the editor tab bar.
//!
//! These are plain data: the UI owns selection, expansion and rendering.
//! The JSON form matches what the front end exchanges (camelCase, optional
//! fields omitted).

use serde::{Deserialize, Serialize};

use crate::language::detect_language;
use crate::types::RecordId;

// ---------------------------------------------------------------------------
// File tree
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Folder,
}

/// A node in the workspace file tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileItem {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
}

impl FileItem {
    pub fn file(id: impl Into<RecordId>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: FileKind::File,
            content: Some(content.into()),
            children: None,
            parent: None,
            is_open: None,
        }
    }

    /// A folder holding `children`. Each child's `parent` is set to this
    /// folder's id.
    pub fn folder(id: impl Into<RecordId>, name: impl Into<String>, children: Vec<FileItem>) -> Self {
        let id = id.into();
        let children = children
            .into_iter()
            .map(|mut child| {
                child.parent = Some(id.clone());
                child
            })
            .collect();
        Self {
            id,
            name: name.into(),
            kind: FileKind::Folder,
            content: None,
            children: Some(children),
            parent: None,
            is_open: Some(false),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == FileKind::Folder
    }

    /// Depth-first search for `id` in this node and its descendants.
    pub fn find(&self, id: &str) -> Option<&FileItem> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter()
            .flatten()
            .find_map(|child| child.find(id))
    }
}

// ---------------------------------------------------------------------------
// Editor tabs
// ---------------------------------------------------------------------------

/// 1-based cursor location inside an editor tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: u32,
    pub column: u32,
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

/// An open file in the editor tab bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorTab {
    pub id: RecordId,
    pub file_id: RecordId,
    pub file_name: String,
    pub content: String,
    pub is_dirty: bool,
    pub language: String,
    pub cursor_position: CursorPosition,
}

impl EditorTab {
    /// Open a clean tab for `file` with the cursor at the start.
    ///
    /// The tab id is derived from the file id so reopening a file maps
    /// onto the same tab.
    pub fn for_file(file: &FileItem) -> Self {
        Self {
            id: format!("tab-{}", file.id),
            file_id: file.id.clone(),
            file_name: file.name.clone(),
            content: file.content.clone().unwrap_or_default(),
            is_dirty: false,
            language: detect_language(&file.name).to_string(),
            cursor_position: CursorPosition::default(),
        }
    }
}
