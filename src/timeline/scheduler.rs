use crate::foundation::core::{FrameIndex, FrameRange, Fps};
use crate::schema::model::Scene;

/// One scene's absolute window on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledScene {
    /// Position of the scene in declaration order.
    pub scene_index: usize,
    /// Absolute window `[start, start + duration)`.
    pub range: FrameRange,
}

/// Lay scenes end to end.
///
/// Each scene lasts `ceil(durationSeconds * fps)` frames and starts where the previous one
/// ended, so windows never overlap or leave gaps. Rounding happens per scene; the total can
/// exceed the rounded sum of all durations and must stay that way for frame-count
/// compatibility. Missing or non-positive durations produce an empty window.
pub fn schedule(scenes: &[Scene], fps: Fps) -> Vec<ScheduledScene> {
    let mut cursor = 0u64;
    let mut out = Vec::with_capacity(scenes.len());
    for (scene_index, scene) in scenes.iter().enumerate() {
        let len = scene
            .duration_seconds
            .map_or(0, |secs| fps.secs_to_frames_ceil(secs));
        let range = FrameRange::from_start_len(cursor, len);
        cursor = range.end.0;
        out.push(ScheduledScene { scene_index, range });
    }
    tracing::debug!(scenes = out.len(), total_frames = cursor, "scheduled scenes");
    out
}

/// Total timeline length of a schedule.
pub fn total_frames(schedule: &[ScheduledScene]) -> u64 {
    schedule.last().map_or(0, |s| s.range.end.0)
}

/// Index of the scheduled scene active at `frame`, skipping empty windows.
pub fn scene_at(schedule: &[ScheduledScene], frame: FrameIndex) -> Option<usize> {
    let idx = schedule.partition_point(|s| s.range.end.0 <= frame.0);
    schedule
        .get(idx)
        .filter(|s| s.range.contains(frame))
        .map(|_| idx)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scheduler.rs"]
mod tests;
