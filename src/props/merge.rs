use crate::schema::lenient;
use crate::schema::model::{PropMap, SceneComponent};
use crate::slots::resolver::SlotValues;
use std::collections::BTreeMap;

/// Overlay slot-resolved values onto a component's static props.
///
/// Precedence, highest first: non-empty slot value, static prop, component default (applied
/// later by the component's own prop reader). An empty or missing slot value leaves the static
/// prop untouched, which is how per-component placeholder behavior falls out.
pub fn merge_props(
    static_props: &PropMap,
    bindings: &BTreeMap<String, String>,
    values: &SlotValues,
) -> PropMap {
    let mut resolved = static_props.clone();
    for (prop, slot_id) in bindings {
        if let Some(v) = values.truthy(slot_id) {
            resolved.insert(prop.clone(), serde_json::Value::String(v.to_owned()));
        }
    }
    resolved
}

/// Nested component declarations carried in a `children` prop.
///
/// Entries are read like top-level declarations, so a malformed entry surfaces as an
/// unknown component instead of vanishing.
pub(crate) fn nested_components(props: &PropMap) -> Vec<SceneComponent> {
    let Some(serde_json::Value::Array(items)) = props.get("children") else {
        return Vec::new();
    };
    items.iter().cloned().map(lenient::component).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/props/merge.rs"]
mod tests;
