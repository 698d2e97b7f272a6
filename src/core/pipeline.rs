use crate::core::reader::parse_records;
use crate::core::writer::render_pretty;
use crate::core::{ConfigProvider, ConversionSummary, Pipeline, Record, Storage, TransformResult};
use crate::utils::error::Result;

/// Reads the configured CSV through `storage`, renders it as a JSON array
/// and writes it back through the same storage.
pub struct CsvJsonPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvJsonPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CsvJsonPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Record>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading CSV from: {}", input_path);

        let bytes = self.storage.read_file(input_path)?;
        tracing::debug!("Read {} bytes", bytes.len());

        parse_records(&bytes)
    }

    fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let json_output = render_pretty(&data)?;

        Ok(TransformResult {
            record_count: data.len(),
            json_output,
        })
    }

    fn load(&self, result: TransformResult) -> Result<ConversionSummary> {
        let output_path = self.config.output_path();

        tracing::debug!(
            "Writing {} bytes to storage at {}",
            result.json_output.len(),
            output_path
        );
        self.storage
            .write_file(output_path, result.json_output.as_bytes())?;

        Ok(ConversionSummary {
            output_path: output_path.to_string(),
            record_count: result.record_count,
            bytes_written: result.json_output.len(),
        })
    }
}
