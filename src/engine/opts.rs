use crate::foundation::core::{Canvas, Fps, Rgba8Premul};
use crate::foundation::error::{ReelError, ReelResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Volume applied to the whole-composition music track.
pub const DEFAULT_MUSIC_VOLUME: f64 = 0.5;

/// Knobs for [`crate::compose`].
///
/// Loadable from JSON; every field is optional there and falls back to [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ComposeOpts {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output canvas, carried through to the render tree for hosts.
    pub canvas: Canvas,
    /// Music track volume in `[0, 1]`.
    pub music_volume: f64,
    /// Fill for scenes that declare no components.
    pub empty_scene_background: Rgba8Premul,
    /// Show slot placeholder text for unfilled text slots (editor previews).
    pub placeholder_previews: bool,
    /// Use the template's `defaultMusic` when no music URL is given.
    pub fallback_to_default_music: bool,
}

impl Default for ComposeOpts {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            canvas: Canvas::default(),
            music_volume: DEFAULT_MUSIC_VOLUME,
            empty_scene_background: Rgba8Premul::opaque(0, 0, 0),
            placeholder_previews: false,
            fallback_to_default_music: false,
        }
    }
}

impl ComposeOpts {
    /// Load options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open compose options '{}': {e}", path.display()))
        })?;
        let opts: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| ReelError::serde(format!("parse compose options: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject options no timeline can be built from.
    pub fn validate(&self) -> ReelResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(ReelError::validation(format!(
                "musicVolume must be within [0, 1] (got {})",
                self.music_volume
            )));
        }
        Ok(())
    }
}
