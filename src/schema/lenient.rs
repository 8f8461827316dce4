//! Field readers for scene and component records.
//!
//! A bad value in one component must not invalidate the whole template, so these accept any
//! JSON and fall back to the field's empty value instead of failing.

use crate::schema::model::{PropMap, SceneComponent};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// String or `""`.
pub(crate) fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Integral paint order; fractional values truncate, anything else is 0.
pub(crate) fn z_index<'de, D: Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
    let Value::Number(n) = Value::deserialize(d)? else {
        return Ok(0);
    };
    let z = match n.as_i64() {
        Some(i) => i.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        None => n.as_f64().filter(|f| f.is_finite()).map_or(0, |f| f.trunc() as i32),
    };
    Ok(z)
}

/// JSON number or `None`.
pub(crate) fn seconds<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64(),
        _ => None,
    })
}

/// Prop -> slot id pairs; entries whose slot id is not a string are dropped.
pub(crate) fn bindings<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    let Value::Object(map) = Value::deserialize(d)? else {
        return Ok(BTreeMap::new());
    };
    Ok(map
        .into_iter()
        .filter_map(|(prop, slot)| match slot {
            Value::String(s) => Some((prop, s)),
            _ => None,
        })
        .collect())
}

/// Object props or an empty map.
pub(crate) fn props<'de, D: Deserializer<'de>>(d: D) -> Result<PropMap, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Object(map) => map.into_iter().collect(),
        _ => PropMap::new(),
    })
}

/// Component list; a non-list reads as empty.
pub(crate) fn components<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Vec<SceneComponent>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items.into_iter().map(component).collect(),
        _ => Vec::new(),
    })
}

/// One component declaration. Entries that are not objects become a component with an empty
/// id, which composition reports and skips like any unknown id.
pub(crate) fn component(value: Value) -> SceneComponent {
    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "component declaration is not an object");
        SceneComponent::new("", 0)
    })
}
