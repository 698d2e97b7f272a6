pub mod etl;
pub mod infer;
pub mod pipeline;
pub mod reader;
pub mod writer;

pub use crate::domain::model::{ConversionSummary, Record, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
