use crate::core::pipeline::ConversionPipeline;
use crate::core::{ConfigProvider, ConversionReport, ProjectInput, Storage};
use crate::idf::{writer, IdfDocument};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub output_path: String,
    pub object_count: usize,
    pub report: ConversionReport,
}

/// Load the project input, run the converters, save the IDF file.
pub struct ConvertEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ConvertEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn run(&self, input_path: &str) -> Result<RunSummary> {
        tracing::info!("Starting IDF conversion...");

        // Extract
        tracing::info!("Reading project input from {}", input_path);
        let raw = self.storage.read_file(input_path)?;
        let project: ProjectInput = serde_json::from_slice(&raw)?;
        tracing::debug!(
            "Project input has {} building fields and {} zones",
            project.user_input.data.len(),
            project.zones.len()
        );

        // Transform
        let idf = IdfDocument::shared(self.config.idf_version());
        let pipeline = ConversionPipeline::new(idf);
        let report = pipeline.run(&project);

        // Load
        let (text, object_count) = {
            let doc = pipeline.idf().borrow();
            (writer::to_idf_string(&doc), doc.len())
        };
        let output_file = self.config.output_file();
        self.storage.write_file(output_file, text.as_bytes())?;
        let output_path = self.storage.resolve(output_file);
        tracing::info!("💾 Wrote {} objects to {}", object_count, output_path);

        Ok(RunSummary {
            output_path,
            object_count,
            report,
        })
    }
}
