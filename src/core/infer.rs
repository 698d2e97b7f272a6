use serde_json::{Number, Value};

/// Turns one raw CSV cell into a JSON value.
///
/// Detection runs on the ASCII-trimmed text: empty becomes `null`, then
/// integers, then finite floats, then `true`/`false` in any case. Anything
/// else is kept as the original, untrimmed string.
pub fn infer_value(raw: &str) -> Value {
    let trimmed = raw.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() {
        return Value::Null;
    }

    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Number(i.into());
    }
    if let Ok(u) = trimmed.parse::<u64>() {
        return Value::Number(u.into());
    }

    // `nan` and `inf` parse as f64 but have no JSON form.
    if let Some(n) = trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(n);
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    Value::String(raw.to_string())
}
