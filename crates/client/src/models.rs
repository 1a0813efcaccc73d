//! Request and response types for the chemistry API.
//!
//! Responses are decoded tolerantly: unknown fields are ignored and
//! missing optional fields default, so additive server changes do not
//! break the client.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self.status.as_str(), "healthy" | "ok")
    }
}

/// Body of `GET /stats`.
///
/// Known fields are typed; anything else the server reports is kept in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlatformStats {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub rdkit_available: Option<bool>,
    #[serde(default)]
    pub orcid_configured: Option<bool>,
    #[serde(default)]
    pub zenodo_configured: Option<bool>,
    #[serde(default)]
    pub zenodo_mode: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Compounds
// ---------------------------------------------------------------------------

/// Chemical compound with identifiers and computed properties.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Compound {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    /// ChEMBL, PubChem, InChIKey, etc.
    #[serde(default)]
    pub identifiers: BTreeMap<String, String>,
    #[serde(default)]
    pub smiles: Option<String>,
    #[serde(default)]
    pub std_smiles: Option<String>,
    #[serde(default)]
    pub inchi: Option<String>,
    #[serde(default)]
    pub inchikey: Option<String>,
    #[serde(default)]
    pub formula: Option<String>,
    /// Molecular weight (g/mol).
    #[serde(default)]
    pub mw: Option<f64>,
    #[serde(default)]
    pub logp: Option<f64>,
    /// Topological polar surface area (Å²).
    #[serde(default)]
    pub tpsa: Option<f64>,
    #[serde(default)]
    pub hbd: Option<u32>,
    #[serde(default)]
    pub hba: Option<u32>,
    #[serde(default)]
    pub rot_bonds: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Compound {
    /// Lipinski's rule of five. `None` when any input property is missing.
    pub fn lipinski_ro5_pass(&self) -> Option<bool> {
        let (mw, logp, hbd, hba) = (self.mw?, self.logp?, self.hbd?, self.hba?);
        Some(mw <= 500.0 && logp <= 5.0 && hbd <= 5 && hba <= 10)
    }
}

/// Query parameters for `GET /compounds/search`. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompoundQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

// ---------------------------------------------------------------------------
// Reactions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reaction {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub reaction_smiles: Option<String>,
    #[serde(default)]
    pub reaction_class: Option<String>,
    #[serde(default)]
    pub yield_percent: Option<f64>,
    #[serde(default)]
    pub conditions: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub reference: Option<String>,
}

/// Query parameters for `GET /reactions/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReactionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_yield: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

// ---------------------------------------------------------------------------
// Literature
// ---------------------------------------------------------------------------

/// Research publication or dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Publication {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub pmid: Option<String>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Query parameters for `GET /literature/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LiteratureQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
