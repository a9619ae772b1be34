//! Minimal typed model of an EnergyPlus input data file.

pub mod document;
pub mod objects;
pub mod writer;

pub use document::{IdfDocument, SharedDocument};
pub use objects::{Building, FieldValue, IdfObject, SiteLocation, Terrain, Version};
