use crate::core::Record;
use crate::utils::error::{ConvertError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

/// Renders records as a JSON array of objects, four spaces per level.
pub fn render_pretty(records: &[Record]) -> Result<String> {
    let mut buf = Vec::with_capacity(128 * records.len().max(1));
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut ser)?;

    String::from_utf8(buf).map_err(|e| {
        ConvertError::SerializationError(<serde_json::Error as serde::ser::Error>::custom(e))
    })
}
