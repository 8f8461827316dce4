use crate::components::VisualComponent;
use crate::components::paint::{LayerPaint, ObjectFit};
use crate::components::time::TimeCtx;
use crate::foundation::math::lerp_clamped;
use crate::props::read::{prop_f64, prop_keyword, prop_str};
use crate::schema::model::PropMap;

const OBJECT_FITS: [(&str, ObjectFit); 3] = [
    ("cover", ObjectFit::Cover),
    ("contain", ObjectFit::Contain),
    ("fill", ObjectFit::Fill),
];

/// Full-canvas still image.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticImage {
    /// Media URL; `None` paints the placeholder.
    pub src: Option<String>,
    /// Fit mode, default cover.
    pub object_fit: ObjectFit,
    /// Opacity, default 1.
    pub opacity: f64,
}

impl VisualComponent for StaticImage {
    fn from_props(props: &PropMap) -> Self {
        Self {
            src: prop_str(props, "src").map(str::to_owned),
            object_fit: prop_keyword(props, "objectFit", &OBJECT_FITS).unwrap_or_default(),
            opacity: prop_f64(props, "opacity").unwrap_or(1.0).clamp(0.0, 1.0),
        }
    }

    fn evaluate(&self, _t: TimeCtx) -> Option<LayerPaint> {
        let Some(src) = &self.src else {
            return Some(LayerPaint::placeholder(self.opacity));
        };
        Some(LayerPaint::Image {
            src: src.clone(),
            object_fit: self.object_fit,
            opacity: self.opacity,
            scale: 1.0,
        })
    }
}

/// Zoom direction of a Ken Burns move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZoomDirection {
    /// 1.0 -> scale.
    #[default]
    In,
    /// scale -> 1.0.
    Out,
}

/// Image with a slow linear zoom across the whole composition.
#[derive(Debug, Clone, PartialEq)]
pub struct KenBurnsImage {
    /// Media URL; `None` paints the placeholder without zoom.
    pub src: Option<String>,
    /// Zoom direction, default in.
    pub direction: ZoomDirection,
    /// Zoom extreme, default 1.1.
    pub scale: f64,
}

impl KenBurnsImage {
    /// Scale at a given time. Interpolates over the composition, not the scene.
    pub fn scale_at(&self, t: TimeCtx) -> f64 {
        let range = match self.direction {
            ZoomDirection::In => (1.0, self.scale),
            ZoomDirection::Out => (self.scale, 1.0),
        };
        lerp_clamped(t.comp_frame_f64(), (0.0, t.comp_duration_f64()), range)
    }
}

impl VisualComponent for KenBurnsImage {
    fn from_props(props: &PropMap) -> Self {
        Self {
            src: prop_str(props, "src").map(str::to_owned),
            direction: prop_keyword(
                props,
                "direction",
                &[("in", ZoomDirection::In), ("out", ZoomDirection::Out)],
            )
            .unwrap_or_default(),
            scale: prop_f64(props, "scale").unwrap_or(1.1),
        }
    }

    fn evaluate(&self, t: TimeCtx) -> Option<LayerPaint> {
        let Some(src) = &self.src else {
            return Some(LayerPaint::placeholder(1.0));
        };
        Some(LayerPaint::Image {
            src: src.clone(),
            object_fit: ObjectFit::Cover,
            opacity: 1.0,
            scale: self.scale_at(t),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/imagery.rs"]
mod tests;
