use crate::foundation::core::Rgba8Premul;
use crate::schema::model::PropMap;
use serde_json::Value;

/// Non-empty string prop.
pub(crate) fn prop_str<'a>(props: &'a PropMap, key: &str) -> Option<&'a str> {
    props.get(key)?.as_str().filter(|s| !s.is_empty())
}

/// Text-like prop: non-empty string, or a number rendered as text.
pub(crate) fn prop_text(props: &PropMap, key: &str) -> Option<String> {
    match props.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Finite numeric prop. Numeric strings are accepted because slot values are always strings.
pub(crate) fn prop_f64(props: &PropMap, key: &str) -> Option<f64> {
    let v = match props.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    v.is_finite().then_some(v)
}

/// Hex color prop.
pub(crate) fn prop_color(props: &PropMap, key: &str) -> Option<Rgba8Premul> {
    Rgba8Premul::from_hex(prop_str(props, key)?).ok()
}

/// Keyword prop matched case-insensitively against `table`.
pub(crate) fn prop_keyword<T: Copy>(props: &PropMap, key: &str, table: &[(&str, T)]) -> Option<T> {
    let s = prop_str(props, key)?.trim();
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|&(_, v)| v)
}

#[cfg(test)]
#[path = "../../tests/unit/props/read.rs"]
mod tests;
