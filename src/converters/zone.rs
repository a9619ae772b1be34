use super::base::BaseConverter;
use crate::domain::model::{ConversionState, Record};
use crate::domain::ports::Converter;
use crate::idf::SharedDocument;
use crate::schema::ZONE_SCHEMA;
use crate::utils::error::Result;

/// Zone converter. Validation is wired up; mapping zones onto IDF objects is
/// not implemented yet, so `add_to_idf` appends nothing and `convert()`
/// leaves the counters untouched.
#[derive(Debug)]
pub struct ZoneConverter {
    base: BaseConverter,
}

impl ZoneConverter {
    pub const NAME: &'static str = "zone";

    pub fn new(idf: SharedDocument, data: Record) -> Self {
        Self {
            base: BaseConverter::new(Self::NAME, idf, data),
        }
    }

    pub fn base(&self) -> &BaseConverter {
        &self.base
    }

    /// 不拋錯，只回傳是否符合 zone schema
    pub fn validate(&self, data: &serde_json::Value) -> bool {
        let accepted = ZONE_SCHEMA.accepts(data);
        if !accepted {
            tracing::debug!("Zone data rejected by schema: {}", data);
        }
        accepted
    }

    pub fn add_to_idf(&self) -> Result<()> {
        let _guard = self.base.logger().enter();
        tracing::info!("🧩 Adding zone data to IDF...");
        Ok(())
    }
}

impl Converter for ZoneConverter {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn convert(&mut self) -> ConversionState {
        let span = self.base.logger().clone();
        let _guard = span.enter();
        tracing::info!("🔄 Converting zone data...");

        if let Err(e) = self.add_to_idf() {
            tracing::error!("❌ Zone data conversion failed: {}", e);
        }
        ConversionState::default()
    }

    fn state(&self) -> ConversionState {
        self.base.state()
    }
}
