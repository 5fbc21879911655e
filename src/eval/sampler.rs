use rayon::prelude::*;

use crate::{
    eval::evaluator::{EvaluatedFrame, Evaluator},
    foundation::core::ScrollProgress,
    foundation::error::{ScrollPhaseError, ScrollPhaseResult},
    scene::model::Scene,
};

/// One `(progress, elapsed)` pair to evaluate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSample {
    /// Scroll progress.
    pub progress: ScrollProgress,
    /// Seconds since the animation started.
    pub elapsed_secs: f64,
}

/// Evenly spaced sweep over the whole progress range.
///
/// Sample `i` sits at progress `i / (steps - 1)` and time `elapsed_start + i * secs_per_step`.
pub fn sweep_samples(
    steps: usize,
    elapsed_start: f64,
    secs_per_step: f64,
) -> ScrollPhaseResult<Vec<FrameSample>> {
    if steps < 2 {
        return Err(ScrollPhaseError::evaluation(format!(
            "sweep needs at least 2 steps, got {steps}"
        )));
    }
    if !elapsed_start.is_finite() || !secs_per_step.is_finite() {
        return Err(ScrollPhaseError::evaluation(
            "sweep start time and step must be finite",
        ));
    }
    let last = (steps - 1) as f64;
    Ok((0..steps)
        .map(|i| FrameSample {
            progress: ScrollProgress::new(i as f64 / last),
            elapsed_secs: elapsed_start + i as f64 * secs_per_step,
        })
        .collect())
}

/// Threading for [`sample_frames`].
#[derive(Clone, Debug)]
pub struct SampleThreading {
    /// Evaluate chunks on a rayon pool.
    pub parallel: bool,
    /// Samples per parallel chunk; `0` is treated as `1`.
    pub chunk_size: usize,
    /// Worker thread override; must be `>= 1` when set.
    pub threads: Option<usize>,
}

impl Default for SampleThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Counters collected while sampling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SweepStats {
    /// Frames evaluated.
    pub frames_total: u64,
    /// Frames with at least one visible actor.
    pub frames_visible: u64,
    /// Chunks dispatched to the pool (0 when sequential).
    pub chunks: u64,
}

/// Evaluate `samples` against `scene`, in input order.
///
/// Parallel and sequential runs return identical frames.
#[tracing::instrument(skip(scene, samples), fields(scene_name = %scene.name, samples = samples.len()))]
pub fn sample_frames(
    scene: &Scene,
    samples: &[FrameSample],
    threading: &SampleThreading,
) -> ScrollPhaseResult<(Vec<EvaluatedFrame>, SweepStats)> {
    scene.validate()?;
    let animator = scene.animator()?;
    let mut stats = SweepStats::default();

    let frames: Vec<EvaluatedFrame> = if !threading.parallel {
        samples
            .iter()
            .map(|s| Evaluator::eval_with(scene, &animator, s.progress, s.elapsed_secs))
            .collect()
    } else {
        let pool = build_thread_pool(threading.threads)?;
        let chunk_size = normalized_chunk_size(threading.chunk_size);
        let mut out = Vec::with_capacity(samples.len());
        for chunk in samples.chunks(chunk_size) {
            let mut evaluated: Vec<EvaluatedFrame> = pool.install(|| {
                chunk
                    .par_iter()
                    .map(|s| Evaluator::eval_with(scene, &animator, s.progress, s.elapsed_secs))
                    .collect()
            });
            tracing::debug!(chunk_len = chunk.len(), "evaluated chunk");
            out.append(&mut evaluated);
            stats.chunks += 1;
        }
        out
    };

    stats.frames_total = frames.len() as u64;
    stats.frames_visible = frames.iter().filter(|f| f.visible_count() > 0).count() as u64;
    Ok((frames, stats))
}

fn build_thread_pool(threads: Option<usize>) -> ScrollPhaseResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(ScrollPhaseError::configuration(
            "sample threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ScrollPhaseError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> usize {
    chunk_size.max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/sampler.rs"]
mod tests;
