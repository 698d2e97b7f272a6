#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};

/// CSV the converter reads, relative to the working directory.
pub const DEFAULT_INPUT_FILE: &str = "datospoint.csv";
/// JSON file the converter (over)writes, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "output.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub input_path: String,
    pub output_path: String,
}

impl ConverterConfig {
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE)
    }
}

impl ConfigProvider for ConverterConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for ConverterConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_distinct_paths(&self.input_path, &self.output_path)
    }
}
