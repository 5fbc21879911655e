use crate::{
    animation::animator::{PhaseAnimator, sanitize_elapsed},
    animation::overlay::OverlayState,
    animation::phase::PhaseKind,
    foundation::core::{ScrollProgress, Transform},
    foundation::error::{ScrollPhaseError, ScrollPhaseResult},
    scene::model::Scene,
    scroll::signal::ScrollSource,
};

/// Every actor's transform for one `(progress, elapsed)` sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedFrame {
    /// Scroll progress the frame was evaluated at.
    pub progress: ScrollProgress,
    /// Page scroll offset behind `progress`, in pixels; `0` for scenes without a scroll range.
    pub scroll_px: f64,
    /// Seconds since the animation started; non-finite or negative input is stored as `0`.
    pub elapsed_secs: f64,
    /// Active orbit phase.
    pub phase: PhaseKind,
    /// Title overlay state.
    pub overlay: OverlayState,
    /// Actors in scene order.
    pub actors: Vec<EvaluatedActor>,
}

impl EvaluatedFrame {
    /// Number of actors that would contribute pixels.
    pub fn visible_count(&self) -> usize {
        self.actors
            .iter()
            .filter(|a| a.transform.is_visible())
            .count()
    }

    /// Look up an actor by name.
    pub fn actor(&self, name: &str) -> Option<&EvaluatedActor> {
        self.actors.iter().find(|a| a.name == name)
    }
}

/// One actor's evaluated state.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedActor {
    /// Actor name.
    pub name: String,
    /// Opaque model reference, passed through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Transform to apply this frame.
    pub transform: Transform,
}

/// Stateless evaluator from scene configuration to per-frame transforms.
pub struct Evaluator;

impl Evaluator {
    /// Validate `scene` and evaluate it at `progress` / `elapsed_secs`.
    #[tracing::instrument(skip(scene), fields(scene_name = %scene.name))]
    pub fn eval_frame(
        scene: &Scene,
        progress: ScrollProgress,
        elapsed_secs: f64,
    ) -> ScrollPhaseResult<EvaluatedFrame> {
        scene.validate()?;
        let animator = scene.animator()?;
        Ok(Self::eval_with(scene, &animator, progress, elapsed_secs))
    }

    /// Evaluate a scroll-bound scene at a raw scroll offset.
    ///
    /// Progress is clamped to the scene's range; scroll-driven motions see the offset itself.
    #[tracing::instrument(skip(scene), fields(scene_name = %scene.name))]
    pub fn eval_scroll(
        scene: &Scene,
        offset_px: f64,
        elapsed_secs: f64,
    ) -> ScrollPhaseResult<EvaluatedFrame> {
        let range = scene.scroll.ok_or_else(|| {
            ScrollPhaseError::evaluation(format!(
                "scene '{}' has no scroll range; supply progress directly",
                scene.name
            ))
        })?;
        scene.validate()?;
        let animator = scene.animator()?;
        let progress = range.progress(offset_px);
        let scroll_px = if offset_px.is_finite() {
            offset_px
        } else {
            range.offset_at(progress)
        };
        Ok(Self::eval_at(scene, &animator, progress, scroll_px, elapsed_secs))
    }

    /// [`Self::eval_scroll`] with the offset read from `source`.
    pub fn eval_source<S: ScrollSource>(
        scene: &Scene,
        source: &S,
        elapsed_secs: f64,
    ) -> ScrollPhaseResult<EvaluatedFrame> {
        Self::eval_scroll(scene, source.scroll_offset_px(), elapsed_secs)
    }

    /// Evaluate with an animator built once by the caller. Skips scene validation; the hot
    /// per-frame path. The scroll offset is recovered from the scene's range.
    pub fn eval_with(
        scene: &Scene,
        animator: &PhaseAnimator,
        progress: ScrollProgress,
        elapsed_secs: f64,
    ) -> EvaluatedFrame {
        let scroll_px = scene.scroll.map_or(0.0, |r| r.offset_at(progress));
        Self::eval_at(scene, animator, progress, scroll_px, elapsed_secs)
    }

    fn eval_at(
        scene: &Scene,
        animator: &PhaseAnimator,
        progress: ScrollProgress,
        scroll_px: f64,
        elapsed_secs: f64,
    ) -> EvaluatedFrame {
        let actors = scene
            .actors
            .iter()
            .map(|a| EvaluatedActor {
                name: a.name.clone(),
                model: a.model.clone(),
                transform: a.motion.transform(animator, progress, scroll_px, elapsed_secs),
            })
            .collect();
        EvaluatedFrame {
            progress,
            scroll_px,
            elapsed_secs: sanitize_elapsed(elapsed_secs),
            phase: animator.timeline().phase_at(progress),
            overlay: scene.title.state(progress),
            actors,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
