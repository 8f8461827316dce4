use crate::schema::model::{ContentSlot, SlotFill, SlotType};
use std::collections::HashMap;

/// Lookup from slot id to the authoritative fill value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotValues {
    values: HashMap<String, String>,
}

impl SlotValues {
    /// Build the lookup in one left-to-right pass; later fills for a slot id overwrite earlier
    /// ones. No type checking happens here.
    pub fn resolve(fills: &[SlotFill]) -> Self {
        let mut values = HashMap::with_capacity(fills.len());
        for fill in fills {
            values.insert(fill.slot_id.clone(), fill.value.clone());
        }
        Self { values }
    }

    /// Raw value for a slot, including empty strings.
    pub fn get(&self, slot_id: &str) -> Option<&str> {
        self.values.get(slot_id).map(String::as_str)
    }

    /// Value for a slot only when it is non-empty.
    pub fn truthy(&self, slot_id: &str) -> Option<&str> {
        self.get(slot_id).filter(|v| !v.is_empty())
    }

    /// Number of distinct slot ids.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when no fills were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Substitute declared placeholder text for text slots that have no usable value.
    ///
    /// Used for editor previews; exports compose without it.
    pub(crate) fn fill_placeholders(&mut self, slots: &[ContentSlot]) {
        for slot in slots {
            if slot.slot_type != SlotType::Text || self.truthy(&slot.id).is_some() {
                continue;
            }
            if let Some(placeholder) = slot.placeholder.as_deref().filter(|p| !p.is_empty()) {
                self.values.insert(slot.id.clone(), placeholder.to_owned());
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slots/resolver.rs"]
mod tests;
