use crate::converters::{BuildingConverter, ZoneConverter};
use crate::core::{ConversionReport, ConversionState, Converter, ProjectInput, Record};
use crate::idf::SharedDocument;
use std::rc::Rc;

/// Runs every converter of one project against a single shared document and
/// aggregates the per-call results.
pub struct ConversionPipeline {
    idf: SharedDocument,
}

impl ConversionPipeline {
    pub fn new(idf: SharedDocument) -> Self {
        Self { idf }
    }

    pub fn idf(&self) -> &SharedDocument {
        &self.idf
    }

    pub fn run(&self, project: &ProjectInput) -> ConversionReport {
        let mut report = ConversionReport::default();

        tracing::info!("📥 Converting building record");
        self.convert_building(&project.user_input, &mut report);

        tracing::info!("📥 Converting {} zone records", project.zones.len());
        for (index, zone) in project.zones.iter().enumerate() {
            self.convert_zone(index, zone, &mut report);
        }

        let total = report.total();
        tracing::info!(
            "📊 Conversion finished: {} succeeded, {} failed",
            total.success,
            total.failed
        );
        report
    }

    fn convert_building(&self, user_input: &Record, report: &mut ConversionReport) {
        match BuildingConverter::new(Rc::clone(&self.idf), user_input.clone()) {
            Ok(mut converter) => {
                let delta = converter.convert();
                report.record(converter.name(), delta);
            }
            Err(e) => {
                // 建構失敗：這筆記錄不轉換，但不中斷整個流程
                if e.is_validation() {
                    tracing::error!("❌ Building record rejected: {}", e);
                } else {
                    tracing::error!(error = ?e, "❌ Building converter could not be created");
                }
                report.record(BuildingConverter::NAME, ConversionState::one_failure());
            }
        }
    }

    fn convert_zone(&self, index: usize, zone: &serde_json::Value, report: &mut ConversionReport) {
        let data = Record::from_value(zone).unwrap_or_default();
        let mut converter = ZoneConverter::new(Rc::clone(&self.idf), data);

        if !converter.validate(zone) {
            tracing::warn!("⚠️ Zone record #{} failed validation, skipping", index);
            report.record(ZoneConverter::NAME, ConversionState::one_failure());
            return;
        }

        let delta = converter.convert();
        report.record(converter.name(), delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idf::objects::{CLASS_BUILDING, CLASS_SITE_LOCATION};
    use crate::idf::IdfDocument;
    use serde_json::json;

    fn project(value: serde_json::Value) -> ProjectInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_run_valid_project() {
        let idf = IdfDocument::shared("9.4");
        let pipeline = ConversionPipeline::new(Rc::clone(&idf));

        let report = pipeline.run(&project(json!({
            "user_input": {"project_name": "Tower A", "building_type": "Office", "city": "Shanghai"},
            "zones": [{"name": "Core"}, {"name": "Perimeter", "area": 80.0}]
        })));

        assert_eq!(report.get("building"), ConversionState::one_success());
        assert_eq!(report.get("zone"), ConversionState::default());
        assert!(!report.has_failures());
        assert_eq!(idf.borrow().count(CLASS_BUILDING), 1);
        assert_eq!(idf.borrow().count(CLASS_SITE_LOCATION), 1);
    }

    #[test]
    fn test_rejected_records_do_not_stop_the_run() {
        let idf = IdfDocument::shared("9.4");
        let pipeline = ConversionPipeline::new(Rc::clone(&idf));

        let report = pipeline.run(&project(json!({
            "user_input": {},
            "zones": [{"area": 10.0}, "not a zone", {"name": "Core"}]
        })));

        assert_eq!(report.get("building"), ConversionState::one_failure());
        assert_eq!(report.get("zone").failed, 2);
        assert_eq!(idf.borrow().len(), 1);
    }
}
