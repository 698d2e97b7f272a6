use serde::Serialize;
use serde_json::{Map, Value};

/// One CSV data row. Keys keep the column order of the header.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.data.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub record_count: usize,
    pub json_output: String,
}

/// What a finished run reports back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub output_path: String,
    pub record_count: usize,
    pub bytes_written: usize,
}
