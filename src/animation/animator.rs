use crate::{
    animation::orbit::OrbitingObject,
    animation::phase::{PhaseFactors, PhaseTimeline},
    foundation::core::{
        ScrollProgress, Transform, Vec3, ensure_finite, ensure_non_negative, ensure_positive,
    },
    foundation::error::ScrollPhaseResult,
    foundation::math::wrap_angles,
};

/// Tuned constants of the orbit choreography.
///
/// Defaults reproduce the hero animation this engine was extracted from; none of them carry an
/// invariant beyond being finite (distances non-negative, exponents positive).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OrbitStyle {
    /// Vertical radius relative to horizontal radius (orbit ellipse).
    pub vertical_squash: f64,
    /// Amplitude of the depth oscillation at twice the orbit frequency.
    pub depth_wobble: f64,
    /// Extra radius added at full exit.
    pub exit_distance: f64,
    /// Depth receded at full exit.
    pub exit_depth: f64,
    /// Vertical drop at full exit.
    pub exit_drop: f64,
    /// Exponent of the exit fade: `1 - exit^fade_exponent`.
    pub fade_exponent: f64,
    /// Exponent shaping the exit drop.
    pub drop_exponent: f64,
    /// Extra spin multiplier at the very start of the entrance.
    pub entrance_spin: f64,
    /// Extra spin multiplier at full exit.
    pub exit_spin: f64,
    /// Per-axis spin rates relative to orbit speed.
    pub spin_axes: Vec3,
}

impl Default for OrbitStyle {
    fn default() -> Self {
        Self {
            vertical_squash: 0.5,
            depth_wobble: 2.0,
            exit_distance: 20.0,
            exit_depth: 20.0,
            exit_drop: 8.0,
            fade_exponent: 1.5,
            drop_exponent: 2.0,
            entrance_spin: 2.0,
            exit_spin: 3.0,
            spin_axes: Vec3::new(0.5, 0.7, 0.0),
        }
    }
}

impl OrbitStyle {
    /// Reject non-finite values, negative distances and non-positive exponents.
    pub fn validate(&self) -> ScrollPhaseResult<()> {
        ensure_finite(self.vertical_squash, "vertical_squash")?;
        ensure_finite(self.depth_wobble, "depth_wobble")?;
        ensure_non_negative(self.exit_distance, "exit_distance")?;
        ensure_non_negative(self.exit_depth, "exit_depth")?;
        ensure_non_negative(self.exit_drop, "exit_drop")?;
        ensure_positive(self.fade_exponent, "fade_exponent")?;
        ensure_positive(self.drop_exponent, "drop_exponent")?;
        ensure_non_negative(self.entrance_spin, "entrance_spin")?;
        ensure_non_negative(self.exit_spin, "exit_spin")?;
        self.spin_axes.ensure_finite("spin_axes")
    }
}

/// Turns `(object, progress, elapsed)` into a [`Transform`].
///
/// Holds only validated configuration. [`PhaseAnimator::compute_transform`] is a pure function
/// of its arguments and cannot fail.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhaseAnimator {
    timeline: PhaseTimeline,
    style: OrbitStyle,
}

impl PhaseAnimator {
    /// Validate both halves of the configuration.
    pub fn new(timeline: PhaseTimeline, style: OrbitStyle) -> ScrollPhaseResult<Self> {
        timeline.validate()?;
        style.validate()?;
        Ok(Self { timeline, style })
    }

    /// Phase boundaries in use.
    pub fn timeline(&self) -> &PhaseTimeline {
        &self.timeline
    }

    /// Tuning constants in use.
    pub fn style(&self) -> &OrbitStyle {
        &self.style
    }

    /// Phase fractions at `progress`.
    pub fn factors(&self, progress: ScrollProgress) -> PhaseFactors {
        self.timeline.factors(progress)
    }

    /// Spin multiplier: elevated during entrance ("blast") and exit ("smash"), `1` mid-orbit.
    pub fn rotation_multiplier(&self, f: &PhaseFactors) -> f64 {
        1.0 + (1.0 - f.entrance) * self.style.entrance_spin + f.exit * self.style.exit_spin
    }

    /// Remaining visibility after the exit fade.
    pub fn exit_fade(&self, f: &PhaseFactors) -> f64 {
        1.0 - f.exit.powf(self.style.fade_exponent)
    }

    /// Opacity envelope: 0 before the entrance, 1 through the orbit, 0 after the exit.
    pub fn opacity(&self, progress: ScrollProgress) -> f64 {
        let f = self.factors(progress);
        f.entrance.min(self.exit_fade(&f)).clamp(0.0, 1.0)
    }

    /// Transform of `object` for the current frame.
    ///
    /// Non-finite or negative `elapsed_secs` is read as `0`.
    pub fn compute_transform(
        &self,
        object: &OrbitingObject,
        progress: ScrollProgress,
        elapsed_secs: f64,
    ) -> Transform {
        let t = sanitize_elapsed(elapsed_secs);
        let s = &self.style;
        let f = self.factors(progress);

        let radius = object.radius() * f.radius_blend() + f.exit * s.exit_distance;
        let angle = object.angle_at(t);
        let position = Vec3::new(
            angle.cos() * radius,
            angle.sin() * radius * s.vertical_squash - f.exit.powf(s.drop_exponent) * s.exit_drop,
            object.depth_offset() + (angle * 2.0).sin() * s.depth_wobble - f.exit * s.exit_depth,
        );

        let fade = self.exit_fade(&f);
        let spin_rate = object.angular_speed() * self.rotation_multiplier(&f);
        Transform {
            position,
            rotation: wrap_angles(s.spin_axes.scaled(spin_rate), t),
            scale: object.base_scale() * f.entrance * fade,
            opacity: f.entrance.min(fade).clamp(0.0, 1.0),
        }
    }

    /// [`Self::compute_transform`] for each object, in order.
    pub fn compute_all(
        &self,
        objects: &[OrbitingObject],
        progress: ScrollProgress,
        elapsed_secs: f64,
    ) -> Vec<Transform> {
        objects
            .iter()
            .map(|o| self.compute_transform(o, progress, elapsed_secs))
            .collect()
    }
}

pub(crate) fn sanitize_elapsed(elapsed_secs: f64) -> f64 {
    if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
        elapsed_secs
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
