use crate::{
    animation::ease::Ease,
    foundation::core::{ScrollProgress, ensure_finite},
    foundation::error::{ScrollPhaseError, ScrollPhaseResult},
    foundation::math::unit_fraction,
};

/// Named phase of the scroll choreography.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// Objects blast outward from the center and fade in.
    Entrance,
    /// Objects circle the center at full size and opacity.
    Orbit,
    /// Objects are flung outward, drop, recede, and fade out.
    Exit,
}

impl PhaseKind {
    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Entrance => "entrance",
            Self::Orbit => "orbit",
            Self::Exit => "exit",
        }
    }
}

/// Named progress interval `[start, end]` with an easing curve.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseWindow {
    /// Which phase this window drives.
    pub kind: PhaseKind,
    /// Inclusive lower bound in `[0, 1]`.
    pub start: f64,
    /// Inclusive upper bound in `[0, 1]`, strictly greater than `start`.
    pub end: f64,
    /// Curve applied to the raw window fraction.
    pub ease: Ease,
}

impl PhaseWindow {
    /// Build a validated window.
    pub fn new(kind: PhaseKind, start: f64, end: f64, ease: Ease) -> ScrollPhaseResult<Self> {
        let w = Self {
            kind,
            start,
            end,
            ease,
        };
        w.validate()?;
        Ok(w)
    }

    /// Check `0 <= start < end <= 1`.
    pub fn validate(&self) -> ScrollPhaseResult<()> {
        ensure_finite(self.start, "phase window start")?;
        ensure_finite(self.end, "phase window end")?;
        if !(0.0 <= self.start && self.start < self.end && self.end <= 1.0) {
            return Err(ScrollPhaseError::configuration(format!(
                "{} window must satisfy 0 <= start < end <= 1, got [{}, {}]",
                self.kind.name(),
                self.start,
                self.end
            )));
        }
        Ok(())
    }

    /// Linear fraction of the window covered at `progress`, clamped to `[0, 1]`.
    pub fn raw_factor(&self, progress: ScrollProgress) -> f64 {
        unit_fraction(progress.get(), self.start, self.end)
    }

    /// [`Self::raw_factor`] passed through the window's ease.
    pub fn factor(&self, progress: ScrollProgress) -> f64 {
        self.ease.apply(self.raw_factor(progress))
    }

    /// True when `progress` lies inside the closed window.
    pub fn contains(&self, progress: ScrollProgress) -> bool {
        let p = progress.get();
        self.start <= p && p <= self.end
    }
}

/// Entrance / orbit / exit boundaries and easing.
///
/// The three windows tile `[0, 1]`: `[0, entrance_end]`, `[entrance_end, exit_start]`,
/// `[exit_start, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PhaseTimeline {
    /// End of the entrance phase.
    pub entrance_end: f64,
    /// Start of the exit phase.
    pub exit_start: f64,
    /// Curve shaping how the orbit radius is reached during entrance.
    pub entrance_ease: Ease,
    /// Curve applied to the orbit window fraction.
    pub orbit_ease: Ease,
    /// Curve applied to the exit fraction before it drives fling, drop and fade.
    pub exit_ease: Ease,
}

impl Default for PhaseTimeline {
    fn default() -> Self {
        Self {
            entrance_end: 0.15,
            exit_start: 0.6,
            entrance_ease: Ease::OutCubic,
            orbit_ease: Ease::Linear,
            exit_ease: Ease::Linear,
        }
    }
}

impl PhaseTimeline {
    /// Validated timeline with default easing.
    pub fn new(entrance_end: f64, exit_start: f64) -> ScrollPhaseResult<Self> {
        let t = Self {
            entrance_end,
            exit_start,
            ..Self::default()
        };
        t.validate()?;
        Ok(t)
    }

    /// Replace the entrance ease.
    pub fn with_entrance_ease(mut self, ease: Ease) -> Self {
        self.entrance_ease = ease;
        self
    }

    /// Replace the exit ease.
    pub fn with_exit_ease(mut self, ease: Ease) -> Self {
        self.exit_ease = ease;
        self
    }

    /// Check `0 < entrance_end < exit_start < 1`.
    pub fn validate(&self) -> ScrollPhaseResult<()> {
        ensure_finite(self.entrance_end, "entrance_end")?;
        ensure_finite(self.exit_start, "exit_start")?;
        if !(0.0 < self.entrance_end && self.entrance_end < self.exit_start && self.exit_start < 1.0)
        {
            return Err(ScrollPhaseError::configuration(format!(
                "phase boundaries must satisfy 0 < entrance_end < exit_start < 1, got entrance_end={} exit_start={}",
                self.entrance_end, self.exit_start
            )));
        }
        Ok(())
    }

    /// The three windows in order.
    pub fn windows(&self) -> [PhaseWindow; 3] {
        [
            PhaseWindow {
                kind: PhaseKind::Entrance,
                start: 0.0,
                end: self.entrance_end,
                ease: self.entrance_ease,
            },
            PhaseWindow {
                kind: PhaseKind::Orbit,
                start: self.entrance_end,
                end: self.exit_start,
                ease: self.orbit_ease,
            },
            PhaseWindow {
                kind: PhaseKind::Exit,
                start: self.exit_start,
                end: 1.0,
                ease: self.exit_ease,
            },
        ]
    }

    /// Phase active at `progress`. Boundaries belong to the orbit phase.
    pub fn phase_at(&self, progress: ScrollProgress) -> PhaseKind {
        let p = progress.get();
        if p < self.entrance_end {
            PhaseKind::Entrance
        } else if p > self.exit_start {
            PhaseKind::Exit
        } else {
            PhaseKind::Orbit
        }
    }

    /// All phase factors at `progress`.
    pub fn factors(&self, progress: ScrollProgress) -> PhaseFactors {
        let [entrance_w, orbit_w, exit_w] = self.windows();
        let entrance = entrance_w.raw_factor(progress);
        PhaseFactors {
            entrance,
            entrance_reach: entrance_w.ease.apply(entrance),
            orbit: orbit_w.factor(progress),
            exit: exit_w.factor(progress),
            phase: self.phase_at(progress),
        }
    }
}

/// Phase fractions for one progress value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PhaseFactors {
    /// Linear entrance fraction; drives scale and fade-in.
    pub entrance: f64,
    /// Eased entrance fraction; drives how far out the orbit radius has been reached.
    pub entrance_reach: f64,
    /// Orbit window fraction.
    pub orbit: f64,
    /// Eased exit fraction.
    pub exit: f64,
    /// Active phase.
    pub phase: PhaseKind,
}

impl PhaseFactors {
    /// Radius blend so entrance and orbit meet without a jump at `entrance_end`.
    pub fn radius_blend(&self) -> f64 {
        self.entrance_reach.max(self.orbit)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phase.rs"]
mod tests;
