//! Catalog item model and loading.
//!
//! The catalog is produced by an external tagging pipeline and consumed
//! here as an already-validated, read-only JSON array. Loading only checks
//! structural bounds (colour counts, non-emptiness).

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AttireResult, CatalogError};
use crate::text;
use crate::vocab::{Colour, Fit, Gender, Role, Sport, Vibe};

/// One tagged garment from the catalog pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    /// Reference to the garment image, printed verbatim in results.
    pub image: String,
    pub category: Role,
    #[serde(default)]
    pub subtype: String,
    /// 1–2 colours, most prominent first.
    pub colours: Vec<Colour>,
    /// At most 2 style tags.
    #[serde(default)]
    pub vibes: Vec<Vibe>,
    pub gender: Gender,
    /// Cut, meaningful only for top/bottom garments.
    #[serde(default)]
    pub fit: Option<Fit>,
    #[serde(default)]
    pub sport_meta: Option<SportMeta>,
    pub name: String,
    /// Lowercased, diacritic-stripped form of `name`. Filled from `name`
    /// at load time when the pipeline omitted it.
    #[serde(default)]
    pub name_normalized: String,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl CatalogItem {
    /// The fit used for scoring. Items without an explicit cut read as regular.
    pub fn effective_fit(&self) -> Fit {
        self.fit.unwrap_or(Fit::Regular)
    }

    /// The sport this item is typed with, `Sport::None` when untyped.
    pub fn sport(&self) -> Sport {
        self.sport_meta.as_ref().map(|m| m.sport).unwrap_or(Sport::None)
    }

    pub fn is_kit(&self) -> bool {
        self.sport_meta.as_ref().map(|m| m.is_kit).unwrap_or(false)
    }

    pub fn teams(&self) -> &[String] {
        self.sport_meta.as_ref().map(|m| m.teams.as_slice()).unwrap_or(&[])
    }
}

/// Sport identity attached by the tagging pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportMeta {
    pub sport: Sport,
    /// Normalized team-name strings.
    #[serde(default)]
    pub teams: Vec<String>,
    /// Whether the garment is part of an official team uniform.
    #[serde(default)]
    pub is_kit: bool,
}

/// Named entity extracted from the garment description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    #[serde(default = "default_entity_weight")]
    pub weight: f64,
    #[serde(rename = "type")]
    pub kind: EntityKind,
}

fn default_entity_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Brand,
    Team,
    Sponsor,
    Generic,
}

/// Load and bounds-check a catalog from a JSON array file.
pub fn load_catalog(path: &Path) -> AttireResult<Vec<CatalogItem>> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let items: Vec<CatalogItem> =
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse { source })?;
    let items = validate(items)?;

    info!(items = items.len(), path = %path.display(), "catalog loaded");
    Ok(items)
}

fn validate(mut items: Vec<CatalogItem>) -> Result<Vec<CatalogItem>, CatalogError> {
    if items.is_empty() {
        return Err(CatalogError::Empty);
    }

    for item in &mut items {
        if item.colours.is_empty() || item.colours.len() > 2 {
            return Err(CatalogError::ColourCount {
                id: item.id.clone(),
                count: item.colours.len(),
            });
        }
        if item.name_normalized.is_empty() {
            item.name_normalized = text::normalize(&item.name);
        }
    }
    Ok(items)
}
