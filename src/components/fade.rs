use crate::components::paint::LayerPaint;
use crate::components::time::TimeCtx;
use crate::components::{ComponentInstance, VisualComponent};
use crate::foundation::math::lerp_clamped;
use crate::props::read::prop_f64;
use crate::schema::model::PropMap;

/// Fade length used when `durationInFrames` is absent or malformed.
pub const DEFAULT_FADE_FRAMES: f64 = 30.0;

/// Fades its children out over the last `durationInFrames` of the scene it is declared in.
#[derive(Debug, Clone, PartialEq)]
pub struct FadeTransition {
    /// Fade length in frames.
    pub duration_in_frames: f64,
    /// Wrapped components, in paint order.
    pub children: Vec<ComponentInstance>,
}

impl FadeTransition {
    /// Attach resolved children.
    pub fn with_children(mut self, children: Vec<ComponentInstance>) -> Self {
        self.children = children;
        self
    }

    /// Group opacity: 1 until `scene_duration - durationInFrames`, then linearly to 0.
    pub fn opacity_at(&self, t: TimeCtx) -> f64 {
        let end = t.scene_duration_f64();
        let start = end - self.duration_in_frames;
        lerp_clamped(t.scene_frame_f64(), (start, end), (1.0, 0.0))
    }
}

impl VisualComponent for FadeTransition {
    fn from_props(props: &PropMap) -> Self {
        Self {
            duration_in_frames: prop_f64(props, "durationInFrames")
                .filter(|v| *v >= 0.0)
                .unwrap_or(DEFAULT_FADE_FRAMES),
            children: Vec::new(),
        }
    }

    fn evaluate(&self, t: TimeCtx) -> Option<LayerPaint> {
        Some(LayerPaint::Fade {
            opacity: self.opacity_at(t),
            children: self.children.iter().filter_map(|c| c.evaluate(t)).collect(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/fade.rs"]
mod tests;
