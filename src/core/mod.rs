pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{ConversionReport, ConversionState, ProjectInput, Record};
pub use crate::domain::ports::{ConfigProvider, Converter, Storage};
pub use crate::utils::error::Result;
