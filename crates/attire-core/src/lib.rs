//! # attire-core
//!
//! Foundation crate for the Attire outfit recommendation engine.
//! Defines the closed vocabularies, catalog and intent types, errors,
//! config, and traits. Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod intent;
pub mod text;
pub mod traits;
pub mod vocab;

// Re-export the most commonly used types at the crate root.
pub use catalog::{CatalogItem, Entity, EntityKind, SportMeta};
pub use config::EngineConfig;
pub use errors::{AttireError, AttireResult};
pub use intent::{FitPreference, OutfitMode, PromptIntent, RequestedForm};
pub use vocab::{Colour, Fit, Gender, Role, Sport, TargetGender, Vibe};
