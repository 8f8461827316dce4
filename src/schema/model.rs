use crate::foundation::error::{ReelError, ReelResult};
use crate::schema::lenient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Static component props as authored in template JSON.
pub type PropMap = BTreeMap<String, serde_json::Value>;

/// Declarative template: slots to fill and scenes to play in order.
///
/// `version` and `scenes` are optional at the serde level so that an incomplete template still
/// parses; [`crate::validate_template`] turns their absence into an invalid-template result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSchema {
    /// Schema version, must be `"1.0"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Placeholders users fill in.
    #[serde(default)]
    pub slots: Vec<ContentSlot>,
    /// Scenes in playback order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenes: Option<Vec<Scene>>,
    /// Opaque transition hints carried for host renderers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitions: Option<serde_json::Value>,
    /// Music suggested by the template author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_music: Option<DefaultMusic>,
    /// Free-form tags used by the music catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_tags: Option<Vec<String>>,
}

impl TemplateSchema {
    /// Parse a template from an already-decoded JSON record.
    ///
    /// Structural mismatches (for example `scenes` not being a list) are reported as
    /// [`ReelError::InvalidTemplate`].
    pub fn from_json_value(value: serde_json::Value) -> ReelResult<Self> {
        if value.is_null() {
            return Err(ReelError::invalid_template("template is absent"));
        }
        serde_json::from_value(value)
            .map_err(|e| ReelError::invalid_template(format!("malformed template JSON: {e}")))
    }

    /// Parse a template from a JSON string.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        let value: serde_json::Value = serde_json::from_str(s)
            .map_err(|e| ReelError::invalid_template(format!("parse template JSON: {e}")))?;
        Self::from_json_value(value)
    }

    /// Parse a template from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::invalid_template(format!("open template JSON '{}': {e}", path.display()))
        })?;
        let value: serde_json::Value = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| ReelError::invalid_template(format!("parse template JSON: {e}")))?;
        Self::from_json_value(value)
    }

    /// Declared slot by id (first declaration wins when ids are duplicated).
    pub fn slot(&self, id: &str) -> Option<&ContentSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Scenes, or an empty slice when the template has none.
    pub fn scenes(&self) -> &[Scene] {
        self.scenes.as_deref().unwrap_or(&[])
    }
}

/// Kind of content a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    /// Image URL.
    Image,
    /// Literal text.
    Text,
    /// Video URL.
    Video,
    /// Audio URL.
    Audio,
}

impl SlotType {
    /// `true` for slot types whose values are media URLs.
    pub fn is_media(self) -> bool {
        !matches!(self, Self::Text)
    }
}

/// A named placeholder declared once per template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSlot {
    /// Unique key within the template.
    pub id: String,
    /// Accepted content kind.
    #[serde(rename = "type")]
    pub slot_type: SlotType,
    /// Human-facing label.
    #[serde(default)]
    pub label: String,
    /// Whether a project must fill this slot before export.
    #[serde(default)]
    pub required: bool,
    /// Default text shown while the slot is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Optional content constraints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<SlotConstraints>,
}

/// Constraints a slot value should satisfy. Checked only by the linter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotConstraints {
    /// Maximum text length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Minimum image width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
    /// Minimum image height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<u32>,
    /// Accepted MIME types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<Vec<String>>,
}

/// A user-supplied binding of a value to a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotFill {
    /// Referenced slot id.
    pub slot_id: String,
    /// Copy of the slot's type, informational only.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub slot_type: Option<SlotType>,
    /// URL for media slots, literal text for text slots.
    #[serde(default)]
    pub value: String,
}

impl SlotFill {
    /// Build a fill without a type hint.
    pub fn new(slot_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            slot_id: slot_id.into(),
            slot_type: None,
            value: value.into(),
        }
    }

    /// Build a fill carrying its slot type.
    pub fn typed(slot_id: impl Into<String>, slot_type: SlotType, value: impl Into<String>) -> Self {
        Self {
            slot_id: slot_id.into(),
            slot_type: Some(slot_type),
            value: value.into(),
        }
    }
}

/// A time-bounded segment of the composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Scene id.
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    /// Length in seconds. Missing, non-numeric or non-positive values give a 0-frame scene.
    #[serde(
        default,
        deserialize_with = "lenient::seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_seconds: Option<f64>,
    /// Components placed in this scene.
    #[serde(default, deserialize_with = "lenient::components")]
    pub components: Vec<SceneComponent>,
}

/// An instance of a visual component placed within a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneComponent {
    /// Key into the component registry. Missing or non-string ids read as `""` and are
    /// skipped with a warning like any other unknown id.
    #[serde(default, deserialize_with = "lenient::string")]
    pub component_id: String,
    /// Paint order within the scene, ascending. Fractional values truncate.
    #[serde(default, deserialize_with = "lenient::z_index")]
    pub z_index: i32,
    /// Prop name -> slot id. Ordered so that merges are reproducible.
    #[serde(default, deserialize_with = "lenient::bindings")]
    pub slot_bindings: BTreeMap<String, String>,
    /// Static prop overrides.
    #[serde(default, deserialize_with = "lenient::props")]
    pub props: PropMap,
}

impl SceneComponent {
    /// Component with no bindings and no props.
    pub fn new(component_id: impl Into<String>, z_index: i32) -> Self {
        Self {
            component_id: component_id.into(),
            z_index,
            slot_bindings: BTreeMap::new(),
            props: PropMap::new(),
        }
    }

    /// Add a static prop.
    pub fn with_prop(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.props.insert(name.into(), value);
        self
    }

    /// Bind a prop to a slot.
    pub fn with_binding(mut self, prop: impl Into<String>, slot_id: impl Into<String>) -> Self {
        self.slot_bindings.insert(prop.into(), slot_id.into());
        self
    }
}

/// Template-suggested background music.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultMusic {
    /// Track URL.
    pub url: String,
    /// Track title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Track artist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}

/// Parse a list of fills from JSON; accepts a bare array or `{"fills": [...]}`.
pub fn fills_from_json_value(value: serde_json::Value) -> ReelResult<Vec<SlotFill>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        List(Vec<SlotFill>),
        Wrapped { fills: Vec<SlotFill> },
    }

    match serde_json::from_value(value) {
        Ok(Repr::List(fills)) | Ok(Repr::Wrapped { fills }) => Ok(fills),
        Err(e) => Err(ReelError::serde(format!("parse slot fills: {e}"))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/model.rs"]
mod tests;
