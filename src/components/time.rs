/// Explicit time inputs for one component evaluation.
///
/// Components see two scopes: the scene they are declared in and the whole composition. Which
/// scope drives which animation is part of each component's contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeCtx {
    /// Frame relative to the start of the containing scene.
    pub scene_frame: u64,
    /// Length of the containing scene in frames.
    pub scene_duration: u64,
    /// Absolute frame in the composition.
    pub comp_frame: u64,
    /// Length of the whole composition in frames.
    pub comp_duration: u64,
}

impl TimeCtx {
    /// Context where scene and composition coincide (single-scene compositions, previews).
    pub fn single_scope(frame: u64, duration: u64) -> Self {
        Self {
            scene_frame: frame,
            scene_duration: duration,
            comp_frame: frame,
            comp_duration: duration,
        }
    }

    pub(crate) fn scene_frame_f64(self) -> f64 {
        self.scene_frame as f64
    }

    pub(crate) fn scene_duration_f64(self) -> f64 {
        self.scene_duration as f64
    }

    pub(crate) fn comp_frame_f64(self) -> f64 {
        self.comp_frame as f64
    }

    pub(crate) fn comp_duration_f64(self) -> f64 {
        self.comp_duration as f64
    }
}
