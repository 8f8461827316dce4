use crate::components::grain::GrainTile;
use crate::foundation::core::Rgba8Premul;
use serde::Serialize;

/// Glyph hosts draw after partially revealed typewriter text.
pub const CARET_GLYPH: &str = "|";

/// Label drawn on the missing-image placeholder.
pub const NO_IMAGE_LABEL: &str = "No image provided";

/// How an image is fitted into the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectFit {
    /// Fill the canvas, cropping overflow.
    #[default]
    Cover,
    /// Fit entirely inside the canvas, letterboxing.
    Contain,
    /// Stretch to the canvas.
    Fill,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Left aligned.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Right aligned.
    Right,
}

/// Compositing mode for a layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Source-over.
    #[default]
    Normal,
    /// Multiply.
    Multiply,
}

/// Text styling shared by the text components.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// Fill color.
    pub color: Rgba8Premul,
    /// CSS-style weight keyword or number.
    pub font_weight: String,
    /// Alignment.
    pub text_align: TextAlign,
}

/// What a host renderer should paint for one layer at one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerPaint {
    /// A full-canvas image.
    Image {
        /// Media URL.
        src: String,
        /// Fit mode.
        #[serde(rename = "objectFit")]
        object_fit: ObjectFit,
        /// Layer opacity in `[0, 1]`.
        opacity: f64,
        /// Uniform scale about the canvas center.
        scale: f64,
    },
    /// Neutral fill with a label, used when an image slot is empty.
    Placeholder {
        /// Fill color.
        fill: Rgba8Premul,
        /// Label text.
        label: String,
        /// Label color.
        #[serde(rename = "labelColor")]
        label_color: Rgba8Premul,
        /// Layer opacity in `[0, 1]`.
        opacity: f64,
    },
    /// A text block centered on the canvas.
    Text {
        /// Visible text (without caret).
        text: String,
        /// Styling.
        style: TextStyle,
        /// Layer opacity in `[0, 1]`.
        opacity: f64,
        /// Vertical offset in pixels, positive moves down.
        #[serde(rename = "offsetY")]
        offset_y: f64,
        /// Whether [`CARET_GLYPH`] is drawn after the text on this frame.
        caret: bool,
    },
    /// Tiled procedural film grain.
    Grain {
        /// Tile to repeat over the canvas.
        tile: GrainTile,
        /// Layer opacity in `[0, 1]`.
        opacity: f64,
        /// Compositing mode.
        blend: BlendMode,
        /// Whether the layer receives pointer input in interactive hosts.
        interactive: bool,
    },
    /// Child layers drawn as a group with a shared opacity.
    Fade {
        /// Group opacity in `[0, 1]`.
        opacity: f64,
        /// Children in paint order.
        children: Vec<LayerPaint>,
    },
}

impl LayerPaint {
    /// Text as displayed, caret included.
    pub fn display_text(&self) -> Option<String> {
        match self {
            Self::Text { text, caret, .. } => {
                let mut s = text.clone();
                if *caret {
                    s.push_str(CARET_GLYPH);
                }
                Some(s)
            }
            _ => None,
        }
    }

    /// Layer opacity.
    pub fn opacity(&self) -> f64 {
        match self {
            Self::Image { opacity, .. }
            | Self::Placeholder { opacity, .. }
            | Self::Text { opacity, .. }
            | Self::Grain { opacity, .. }
            | Self::Fade { opacity, .. } => *opacity,
        }
    }

    pub(crate) fn placeholder(opacity: f64) -> Self {
        Self::Placeholder {
            fill: Rgba8Premul::opaque(0x33, 0x33, 0x33),
            label: NO_IMAGE_LABEL.to_owned(),
            label_color: Rgba8Premul::opaque(0x99, 0x99, 0x99),
            opacity,
        }
    }
}
