use crate::components::ComponentInstance;
use crate::components::paint::LayerPaint;
use crate::components::time::TimeCtx;
use crate::foundation::core::{Canvas, FrameIndex, FrameRange, Fps, Rgba8Premul};
use crate::foundation::error::{ReelError, ReelResult};
use crate::schema::model::PropMap;
use crate::timeline::scheduler::{ScheduledScene, scene_at};
use serde::Serialize;
use std::fmt;

/// Fully resolved composition: every scene placed on the timeline, every layer's props merged
/// and typed.
///
/// Serializes to the host-facing JSON contract; per-frame state comes from
/// [`RenderTree::evaluate_frame`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTree {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Sum of all scene windows.
    pub duration_frames: u64,
    /// Scenes in playback order, including 0-frame ones.
    pub scenes: Vec<SceneEntry>,
    /// Whole-composition music track.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioTrack>,
    /// Components that were skipped while composing.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ComposeWarning>,
    #[serde(skip)]
    pub(crate) schedule: Vec<ScheduledScene>,
}

/// One scene window and its layers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneEntry {
    /// Template scene id.
    pub scene_id: String,
    /// First frame of the window.
    pub start_frame: u64,
    /// Window length.
    pub duration_frames: u64,
    /// Fill painted under the layers; set only for scenes without components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgba8Premul>,
    /// Layers in paint order (ascending `zIndex`, declaration order on ties).
    pub layers: Vec<LayerEntry>,
}

impl SceneEntry {
    /// Absolute window on the timeline.
    pub fn range(&self) -> FrameRange {
        FrameRange::from_start_len(self.start_frame, self.duration_frames)
    }
}

/// A registered component with its merged props.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerEntry {
    /// Paint order key.
    pub z_index: i32,
    /// Registry id.
    pub component_id: String,
    /// Static props overlaid with slot values.
    pub resolved_props: PropMap,
    /// Nested layers (FadeTransition only), in paint order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayerEntry>,
    #[serde(skip)]
    pub(crate) instance: ComponentInstance,
}

impl LayerEntry {
    /// Typed component behind this layer.
    pub fn instance(&self) -> &ComponentInstance {
        &self.instance
    }
}

/// Music attached to the whole composition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioTrack {
    /// Track URL.
    pub url: String,
    /// Volume in `[0, 1]`.
    pub volume: f64,
    /// Always 0; music starts with the composition.
    pub start_frame: u64,
    /// Equal to the composition length.
    pub duration_frames: u64,
}

/// A component skipped during composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeWarning {
    /// Scene position in declaration order.
    pub scene_index: usize,
    /// Scene id.
    pub scene_id: String,
    /// Declaration indices from the scene's component list down to the skipped component.
    /// More than one entry means the component was nested in a FadeTransition.
    pub component_path: Vec<usize>,
    /// The id that failed to resolve.
    pub component_id: String,
}

impl fmt::Display for ComposeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scene {} (\"{}\"): unknown component id \"{}\" at component",
            self.scene_index, self.scene_id, self.component_id
        )?;
        for i in &self.component_path {
            write!(f, "[{i}]")?;
        }
        write!(f, ", skipped")
    }
}

/// Paint state of one layer at one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintedLayer {
    /// Paint order key.
    pub z_index: i32,
    /// Registry id.
    pub component_id: String,
    /// What to draw.
    pub paint: LayerPaint,
}

/// Everything a host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameLayers {
    /// Absolute frame.
    pub frame: FrameIndex,
    /// Active scene position.
    pub scene_index: usize,
    /// Active scene id.
    pub scene_id: String,
    /// Frame relative to the scene start.
    pub scene_frame: u64,
    /// Scene background, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgba8Premul>,
    /// Layers in paint order. Components that draw nothing on this frame are omitted.
    pub layers: Vec<PaintedLayer>,
}

impl RenderTree {
    /// Timeline range `[0, durationFrames)`.
    pub fn range(&self) -> FrameRange {
        FrameRange::from_start_len(0, self.duration_frames)
    }

    /// Scene active at `frame`. 0-frame scenes are never active.
    pub fn scene_at(&self, frame: FrameIndex) -> Option<&SceneEntry> {
        scene_at(&self.schedule, frame).and_then(|i| self.scenes.get(self.schedule[i].scene_index))
    }

    /// Evaluate every layer of the scene active at `frame`.
    ///
    /// Pure: the same tree and frame always produce the same result.
    pub fn evaluate_frame(&self, frame: FrameIndex) -> ReelResult<FrameLayers> {
        let Some(slot) = scene_at(&self.schedule, frame) else {
            return Err(ReelError::evaluation(format!(
                "frame {} is out of bounds (durationFrames={})",
                frame.0, self.duration_frames
            )));
        };
        let scheduled = self.schedule[slot];
        let scene = self.scenes.get(scheduled.scene_index).ok_or_else(|| {
            ReelError::evaluation(format!("scene {} missing from tree", scheduled.scene_index))
        })?;

        let t = TimeCtx {
            scene_frame: frame.0 - scheduled.range.start.0,
            scene_duration: scheduled.range.len_frames(),
            comp_frame: frame.0,
            comp_duration: self.duration_frames,
        };

        let layers = scene
            .layers
            .iter()
            .filter_map(|layer| {
                layer.instance.evaluate(t).map(|paint| PaintedLayer {
                    z_index: layer.z_index,
                    component_id: layer.component_id.clone(),
                    paint,
                })
            })
            .collect();

        Ok(FrameLayers {
            frame,
            scene_index: scheduled.scene_index,
            scene_id: scene.scene_id.clone(),
            scene_frame: t.scene_frame,
            background: scene.background,
            layers,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/tree.rs"]
mod tests;
