use crate::adapters::storage::LocalStorage;
use crate::config::ConverterConfig;
use crate::core::pipeline::CsvJsonPipeline;
use crate::core::{ConversionSummary, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::Validate;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<ConversionSummary> {
        tracing::info!("Starting conversion");
        self.monitor.log_stats("Start");

        tracing::info!("Extracting records...");
        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", records.len());
        self.monitor.log_stats("Extract");

        let result = self.pipeline.transform(records)?;
        tracing::info!("Serialized {} records", result.record_count);
        self.monitor.log_stats("Transform");

        let summary = self.pipeline.load(result)?;
        tracing::info!(
            "Wrote {} bytes to {}",
            summary.bytes_written,
            summary.output_path
        );
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(summary)
    }
}

/// Converts the CSV at `input_path` into a JSON array at `output_path`,
/// both resolved against the working directory.
pub fn convert(input_path: &str, output_path: &str) -> Result<ConversionSummary> {
    run_conversion(ConverterConfig::new(input_path, output_path), false)
}

pub fn run_conversion(config: ConverterConfig, monitor_enabled: bool) -> Result<ConversionSummary> {
    config.validate()?;

    let pipeline = CsvJsonPipeline::new(LocalStorage::default(), config);
    EtlEngine::new_with_monitoring(pipeline, monitor_enabled).run()
}
