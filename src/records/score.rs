use serde_json::Value;

/// Coerce a raw export score to an integer.
///
/// Integers pass through, floats truncate toward zero, strings are parsed
/// after trimming and booleans count as 1/0. Anything else, including null,
/// empty and unparseable values, becomes 0.
pub fn coerce_score(raw: &Value) -> i64 {
    match raw {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(text) => text.trim().parse::<i64>().unwrap_or(0),
        Value::Bool(flag) => i64::from(*flag),
        _ => 0,
    }
}

/// Render a raw score for a flat text cell; null becomes an empty cell
pub fn score_as_text(raw: &Value) -> String {
    match raw {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
