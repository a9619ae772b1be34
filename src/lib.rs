pub mod config;
pub mod converters;
pub mod core;
pub mod domain;
pub mod idf;
pub mod schema;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, ConvertConfig};
pub use converters::{BuildingConverter, ZoneConverter};
pub use crate::core::{engine::ConvertEngine, pipeline::ConversionPipeline};
pub use domain::model::{ConversionReport, ConversionState, ProjectInput, Record};
pub use domain::ports::Converter;
pub use idf::{IdfDocument, SharedDocument};
pub use utils::error::{ConvertError, Result};
