use crate::components::VisualComponent;
use crate::components::paint::{LayerPaint, TextAlign, TextStyle};
use crate::components::time::TimeCtx;
use crate::foundation::core::Rgba8Premul;
use crate::foundation::math::lerp_clamped;
use crate::props::read::{prop_color, prop_f64, prop_keyword, prop_text};
use crate::schema::model::PropMap;

/// Length of the entrance animation in frames.
pub const ENTRANCE_FRAMES: f64 = 30.0;
/// Starting offset of the slide-up entrance in pixels.
pub const SLIDE_UP_PX: f64 = 50.0;
/// Caret blink half-period in frames.
pub const CARET_BLINK_FRAMES: u64 = 15;

const DEFAULT_FONT_SIZE: f64 = 48.0;
const DEFAULT_COLOR: Rgba8Premul = Rgba8Premul::opaque(0xff, 0xff, 0xff);

/// Entrance style of [`AnimatedText`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnimation {
    /// Opacity only.
    #[default]
    Fade,
    /// Opacity plus a 50px upward slide.
    SlideUp,
}

/// Text that fades (and optionally slides) in after a delay.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedText {
    /// Text; `None` paints nothing.
    pub text: Option<String>,
    /// Styling.
    pub style: TextStyle,
    /// Entrance style.
    pub animation: TextAnimation,
    /// Scene-local frame the entrance starts at.
    pub delay: f64,
}

impl AnimatedText {
    /// Entrance progress mapped to `(opacity, offset_y)`.
    pub fn entrance_at(&self, t: TimeCtx) -> (f64, f64) {
        let window = (self.delay, self.delay + ENTRANCE_FRAMES);
        let f = t.scene_frame_f64();
        let opacity = lerp_clamped(f, window, (0.0, 1.0));
        let offset_y = match self.animation {
            TextAnimation::Fade => 0.0,
            TextAnimation::SlideUp => lerp_clamped(f, window, (SLIDE_UP_PX, 0.0)),
        };
        (opacity, offset_y)
    }
}

impl VisualComponent for AnimatedText {
    fn from_props(props: &PropMap) -> Self {
        Self {
            text: prop_text(props, "text"),
            style: read_style(props, "bold"),
            animation: prop_keyword(
                props,
                "animationType",
                &[
                    ("fade", TextAnimation::Fade),
                    ("slide-up", TextAnimation::SlideUp),
                    ("slideUp", TextAnimation::SlideUp),
                ],
            )
            .unwrap_or_default(),
            delay: read_delay(props),
        }
    }

    fn evaluate(&self, t: TimeCtx) -> Option<LayerPaint> {
        let text = self.text.as_ref()?;
        let (opacity, offset_y) = self.entrance_at(t);
        Some(LayerPaint::Text {
            text: text.clone(),
            style: self.style.clone(),
            opacity,
            offset_y,
            caret: false,
        })
    }
}

/// Text revealed character by character at a constant rate.
///
/// Unlike [`KenBurnsImage`](crate::KenBurnsImage), which zooms across the whole composition,
/// the reveal rate uses the scene-local duration on purpose: the text must be complete before
/// its scene cuts, which a composition-wide rate cannot guarantee once there is more than one
/// scene.
#[derive(Debug, Clone, PartialEq)]
pub struct TypewriterText {
    /// Text; `None` paints nothing.
    pub text: Option<String>,
    /// Styling.
    pub style: TextStyle,
    /// Scene-local frame the reveal starts at.
    pub delay: f64,
}

impl TypewriterText {
    /// Number of characters visible at `t`.
    ///
    /// The reveal spans from `delay` to the end of the scene, so the rate is
    /// `chars / (scene_duration - delay)`. When no frames remain after the delay, the whole text
    /// appears at the delay.
    pub fn visible_chars(&self, t: TimeCtx) -> usize {
        let Some(text) = &self.text else {
            return 0;
        };
        let total = text.chars().count();
        let elapsed = t.scene_frame_f64() - self.delay;
        if elapsed < 0.0 {
            return 0;
        }
        let available = t.scene_duration_f64() - self.delay;
        if available <= 0.0 {
            return total;
        }
        let rate = total as f64 / available;
        let shown = (elapsed * rate).ceil();
        if shown >= total as f64 {
            total
        } else {
            shown as usize
        }
    }
}

impl VisualComponent for TypewriterText {
    fn from_props(props: &PropMap) -> Self {
        Self {
            text: prop_text(props, "text"),
            style: read_style(props, "normal"),
            delay: read_delay(props),
        }
    }

    fn evaluate(&self, t: TimeCtx) -> Option<LayerPaint> {
        let text = self.text.as_ref()?;
        let total = text.chars().count();
        let shown = self.visible_chars(t);
        let caret_on = (t.scene_frame / CARET_BLINK_FRAMES).is_multiple_of(2);
        Some(LayerPaint::Text {
            text: text.chars().take(shown).collect(),
            style: self.style.clone(),
            opacity: 1.0,
            offset_y: 0.0,
            caret: shown < total && caret_on,
        })
    }
}

fn read_style(props: &PropMap, default_weight: &str) -> TextStyle {
    let font_weight = match props.get("fontWeight") {
        Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => default_weight.to_owned(),
    };
    TextStyle {
        font_size: prop_f64(props, "fontSize")
            .filter(|v| *v > 0.0)
            .unwrap_or(DEFAULT_FONT_SIZE),
        color: prop_color(props, "color").unwrap_or(DEFAULT_COLOR),
        font_weight,
        text_align: prop_keyword(
            props,
            "textAlign",
            &[
                ("left", TextAlign::Left),
                ("center", TextAlign::Center),
                ("right", TextAlign::Right),
            ],
        )
        .unwrap_or_default(),
    }
}

fn read_delay(props: &PropMap) -> f64 {
    prop_f64(props, "delay").unwrap_or(0.0).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/components/text.rs"]
mod tests;
