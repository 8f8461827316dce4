use crate::engine::tree::{FrameLayers, RenderTree};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{ReelError, ReelResult};
use rayon::prelude::*;

/// How [`evaluate_range`] spreads frames over threads.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct EvalThreading {
    /// Evaluate chunks on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Frames handed to the pool at once. `0` is treated as `1`.
    pub chunk_size: usize,
    /// Pool size; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Default for EvalThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Evaluate every frame in `range`, in frame order.
///
/// Parallel and sequential evaluation return identical results; frame evaluation reads the
/// tree and nothing else.
#[tracing::instrument(skip(tree, threading), fields(start = range.start.0, end = range.end.0))]
pub fn evaluate_range(
    tree: &RenderTree,
    range: FrameRange,
    threading: &EvalThreading,
) -> ReelResult<Vec<FrameLayers>> {
    if range.is_empty() {
        return Err(ReelError::validation("evaluation range must be non-empty"));
    }
    if range.end.0 > tree.duration_frames {
        return Err(ReelError::validation(format!(
            "evaluation range [{}, {}) exceeds durationFrames={}",
            range.start.0, range.end.0, tree.duration_frames
        )));
    }

    if !threading.parallel {
        return (range.start.0..range.end.0)
            .map(|f| tree.evaluate_frame(FrameIndex(f)))
            .collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let mut frames = pool.install(|| {
            (chunk_start..chunk_end)
                .into_par_iter()
                .map(|f| tree.evaluate_frame(FrameIndex(f)))
                .collect::<ReelResult<Vec<_>>>()
        })?;
        out.append(&mut frames);
        chunk_start = chunk_end;
    }
    tracing::debug!(frames = out.len(), "evaluated range in parallel");
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "evaluation threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    chunk_size.max(1) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/engine/range.rs"]
mod tests;
