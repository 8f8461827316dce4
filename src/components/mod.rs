//! Stock visual components and the registry that maps template ids to them.
//!
//! Every component is a pure function of its props and a [`TimeCtx`]: evaluating the same frame
//! twice yields the same [`LayerPaint`]. Components never fail; malformed props fall back to
//! defaults and the worst case is a placeholder or no layer at all.

pub(crate) mod fade;
pub(crate) mod grain;
pub(crate) mod imagery;
pub(crate) mod paint;
pub(crate) mod text;
pub(crate) mod time;

use crate::schema::model::PropMap;
use fade::FadeTransition;
use grain::GrainOverlay;
use imagery::{KenBurnsImage, StaticImage};
use paint::LayerPaint;
use serde::Serialize;
use text::{AnimatedText, TypewriterText};
use time::TimeCtx;

/// Behavior shared by all stock components.
pub trait VisualComponent {
    /// Read typed props, applying documented defaults to anything absent or malformed.
    fn from_props(props: &PropMap) -> Self
    where
        Self: Sized;

    /// Paint for one frame, or `None` when the component draws nothing.
    fn evaluate(&self, t: TimeCtx) -> Option<LayerPaint>;
}

/// Closed set of component kinds a template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ComponentKind {
    /// [`StaticImage`].
    StaticImage,
    /// [`KenBurnsImage`].
    KenBurnsImage,
    /// [`AnimatedText`].
    AnimatedText,
    /// [`TypewriterText`].
    TypewriterText,
    /// [`GrainOverlay`].
    GrainOverlay,
    /// [`FadeTransition`].
    FadeTransition,
}

impl ComponentKind {
    /// Every registered kind.
    pub const ALL: [ComponentKind; 6] = [
        Self::StaticImage,
        Self::KenBurnsImage,
        Self::AnimatedText,
        Self::TypewriterText,
        Self::GrainOverlay,
        Self::FadeTransition,
    ];

    /// Template-facing identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::StaticImage => "StaticImage",
            Self::KenBurnsImage => "KenBurnsImage",
            Self::AnimatedText => "AnimatedText",
            Self::TypewriterText => "TypewriterText",
            Self::GrainOverlay => "GrainOverlay",
            Self::FadeTransition => "FadeTransition",
        }
    }

    /// Registry lookup. Ids are matched exactly; `None` means the component is skipped.
    pub fn lookup(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }

    /// `true` when the kind wraps nested components.
    pub fn accepts_children(self) -> bool {
        matches!(self, Self::FadeTransition)
    }

    /// Build a typed instance from resolved props. `children` is ignored by kinds that do not
    /// accept children.
    pub fn instantiate(self, props: &PropMap, children: Vec<ComponentInstance>) -> ComponentInstance {
        match self {
            Self::StaticImage => ComponentInstance::StaticImage(StaticImage::from_props(props)),
            Self::KenBurnsImage => {
                ComponentInstance::KenBurnsImage(KenBurnsImage::from_props(props))
            }
            Self::AnimatedText => ComponentInstance::AnimatedText(AnimatedText::from_props(props)),
            Self::TypewriterText => {
                ComponentInstance::TypewriterText(TypewriterText::from_props(props))
            }
            Self::GrainOverlay => ComponentInstance::GrainOverlay(GrainOverlay::from_props(props)),
            Self::FadeTransition => ComponentInstance::FadeTransition(
                FadeTransition::from_props(props).with_children(children),
            ),
        }
    }
}

/// A component with its props already read.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentInstance {
    /// Still image.
    StaticImage(StaticImage),
    /// Zooming image.
    KenBurnsImage(KenBurnsImage),
    /// Fading/sliding text.
    AnimatedText(AnimatedText),
    /// Character-reveal text.
    TypewriterText(TypewriterText),
    /// Film grain.
    GrainOverlay(GrainOverlay),
    /// Tail fade around nested components.
    FadeTransition(FadeTransition),
}

impl ComponentInstance {
    /// Kind of this instance.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::StaticImage(_) => ComponentKind::StaticImage,
            Self::KenBurnsImage(_) => ComponentKind::KenBurnsImage,
            Self::AnimatedText(_) => ComponentKind::AnimatedText,
            Self::TypewriterText(_) => ComponentKind::TypewriterText,
            Self::GrainOverlay(_) => ComponentKind::GrainOverlay,
            Self::FadeTransition(_) => ComponentKind::FadeTransition,
        }
    }

    /// Evaluate at one frame.
    pub fn evaluate(&self, t: TimeCtx) -> Option<LayerPaint> {
        match self {
            Self::StaticImage(c) => c.evaluate(t),
            Self::KenBurnsImage(c) => c.evaluate(t),
            Self::AnimatedText(c) => c.evaluate(t),
            Self::TypewriterText(c) => c.evaluate(t),
            Self::GrainOverlay(c) => c.evaluate(t),
            Self::FadeTransition(c) => c.evaluate(t),
        }
    }
}
