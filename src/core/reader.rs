use crate::core::infer::infer_value;
use crate::core::Record;
use crate::utils::error::{ConvertError, Result};
use csv::{ReaderBuilder, StringRecord};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parses CSV bytes (header first) into ordered records.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<Record>> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(ConvertError::EmptyInputError);
    }

    if let Some(line) = find_unterminated_quote(body) {
        return Err(ConvertError::MalformedCsvError {
            line,
            reason: "quoted field is never closed".to_string(),
        });
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body);

    let columns = normalize_headers(rdr.headers()?);
    tracing::debug!("CSV header: {:?}", columns);

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        if is_blank_line(&row, body) {
            continue;
        }

        if row.len() > columns.len() {
            return Err(ConvertError::MalformedCsvError {
                line: row.position().map(|p| p.line()).unwrap_or(0),
                reason: format!(
                    "expected at most {} fields, saw {}",
                    columns.len(),
                    row.len()
                ),
            });
        }

        let mut data = Map::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            let value = row.get(idx).map(infer_value).unwrap_or(Value::Null);
            data.insert(column.clone(), value);
        }
        records.push(Record { data });
    }

    Ok(records)
}

/// A whitespace-only source line. A quoted empty field (`""`) is a real
/// row and is kept.
fn is_blank_line(row: &StringRecord, body: &[u8]) -> bool {
    if row.len() != 1 || !row.get(0).is_some_and(|f| f.trim().is_empty()) {
        return false;
    }

    let start = row
        .position()
        .and_then(|p| usize::try_from(p.byte()).ok())
        .unwrap_or(0)
        .min(body.len());
    !body[start..]
        .split(|&b| b == b'\n')
        .next()
        .unwrap_or_default()
        .contains(&b'"')
}

/// Makes column names unique and non-empty: blank names become
/// `Unnamed: <idx>`, repeats get `.1`, `.2`, ... suffixes.
pub fn normalize_headers(raw: &StringRecord) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut columns = Vec::with_capacity(raw.len());

    for (idx, name) in raw.iter().enumerate() {
        let base = if name.trim().is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            name.to_string()
        };

        let mut count = counts.get(&base).copied().unwrap_or(0);
        let mut candidate = base.clone();
        while taken.contains(&candidate) {
            count += 1;
            candidate = format!("{}.{}", base, count);
        }

        counts.insert(base, count);
        taken.insert(candidate.clone());
        columns.push(candidate);
    }

    columns
}

/// Returns the 1-based line where a quoted field opens without a closing
/// quote. Quotes only open a field when they are its first byte.
fn find_unterminated_quote(bytes: &[u8]) -> Option<u64> {
    let mut line = 1u64;
    let mut opened_at = 0u64;
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut iter = bytes.iter().peekable();

    while let Some(&b) = iter.next() {
        if in_quotes {
            match b {
                b'"' if iter.peek() == Some(&&b'"') => {
                    iter.next();
                }
                b'"' => {
                    in_quotes = false;
                    at_field_start = false;
                }
                b'\n' => line += 1,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' if at_field_start => {
                in_quotes = true;
                opened_at = line;
            }
            b',' | b'\r' => at_field_start = true,
            b'\n' => {
                line += 1;
                at_field_start = true;
            }
            _ => at_field_start = false,
        }
    }

    in_quotes.then_some(opened_at)
}
