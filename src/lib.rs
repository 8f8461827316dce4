//! Reelforge turns a declarative video template plus user-supplied slot fills into a
//! frame-accurate composition description.
//!
//! The pipeline is pure and synchronous:
//!
//! - Parse a [`TemplateSchema`] and its [`SlotFill`]s
//! - [`compose`] them into a [`RenderTree`] (scene windows, z-ordered layers, merged props, music)
//! - Evaluate single frames with [`RenderTree::evaluate_frame`] or whole ranges with
//!   [`evaluate_range`]
//!
//! Drawing pixels, decoding media and mixing audio are left to the host renderer; every
//! [`LayerPaint`] carries exactly what it needs.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod components;
pub(crate) mod engine;
pub(crate) mod props;
pub(crate) mod schema;
pub(crate) mod slots;
pub(crate) mod timeline;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Rgba8Premul};
pub use crate::foundation::error::{ReelError, ReelResult};
pub use crate::foundation::math::{Fnv1a64, Rng64};

pub use crate::components::fade::{DEFAULT_FADE_FRAMES, FadeTransition};
pub use crate::components::grain::{GRAIN_CYCLE_FRAMES, GRAIN_TILE_PX, GrainOverlay, GrainTile};
pub use crate::components::imagery::{KenBurnsImage, StaticImage, ZoomDirection};
pub use crate::components::paint::{
    BlendMode, CARET_GLYPH, LayerPaint, NO_IMAGE_LABEL, ObjectFit, TextAlign, TextStyle,
};
pub use crate::components::text::{AnimatedText, TextAnimation, TypewriterText};
pub use crate::components::time::TimeCtx;
pub use crate::components::{ComponentInstance, ComponentKind, VisualComponent};
pub use crate::engine::compose::{compose, compose_json};
pub use crate::engine::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use crate::engine::opts::{ComposeOpts, DEFAULT_MUSIC_VOLUME};
pub use crate::engine::range::{EvalThreading, evaluate_range};
pub use crate::engine::tree::{
    AudioTrack, ComposeWarning, FrameLayers, LayerEntry, PaintedLayer, RenderTree, SceneEntry,
};
pub use crate::props::merge::merge_props;
pub use crate::schema::model::{
    ContentSlot, DefaultMusic, PropMap, Scene, SceneComponent, SlotConstraints, SlotFill,
    SlotType, TemplateSchema, fills_from_json_value,
};
pub use crate::schema::validate::{
    LintIssue, SchemaPathElem, lint_fills, lint_template, validate_template,
};
pub use crate::schema::version::TEMPLATE_VERSION_STR;
pub use crate::slots::resolver::SlotValues;
pub use crate::timeline::scheduler::{ScheduledScene, scene_at, schedule, total_frames};
