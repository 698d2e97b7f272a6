pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::{ConverterConfig, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
pub use core::{
    etl::{convert, run_conversion, EtlEngine},
    pipeline::CsvJsonPipeline,
};
pub use domain::model::{ConversionSummary, Record};
pub use utils::error::{ConvertError, ErrorKind, Result};
