use crate::{
    animation::animator::{PhaseAnimator, sanitize_elapsed},
    animation::ease::Ease,
    animation::orbit::OrbitingObject,
    foundation::core::{
        Axis, ScrollProgress, Transform, Vec3, ensure_finite, ensure_non_negative, ensure_positive,
    },
    foundation::error::{ScrollPhaseError, ScrollPhaseResult},
    foundation::math::{clamp01, lerp_vec3, saturate, wrap_angle, wrap_angles},
};

/// How one actor moves.
///
/// [`Motion::Orbit`] follows the scroll phases and [`Motion::ScrollSpin`] the raw scroll offset;
/// the others are clock-driven background motions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    /// Scroll-phased orbit around the center.
    Orbit(OrbitingObject),
    /// One-shot flight from a start to an end position.
    Flight(FlightPath),
    /// Gentle floating around an anchor.
    Drift(DriftAnchor),
    /// Endless fall with wrap-around.
    Fall(FallingObject),
    /// Scroll-proportional rotation.
    ScrollSpin(ScrollSpin),
}

impl Motion {
    /// Check the motion's parameters.
    pub fn validate(&self) -> ScrollPhaseResult<()> {
        match self {
            // Validated at construction.
            Self::Orbit(_) => Ok(()),
            Self::Flight(f) => f.validate(),
            Self::Drift(d) => d.validate(),
            Self::Fall(f) => f.validate(),
            Self::ScrollSpin(s) => s.validate(),
        }
    }

    /// Stable snake_case kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Orbit(_) => "orbit",
            Self::Flight(_) => "flight",
            Self::Drift(_) => "drift",
            Self::Fall(_) => "fall",
            Self::ScrollSpin(_) => "scroll_spin",
        }
    }

    /// Transform for the current frame. `scroll_px` is the page offset behind `progress`.
    pub fn transform(
        &self,
        animator: &PhaseAnimator,
        progress: ScrollProgress,
        scroll_px: f64,
        elapsed_secs: f64,
    ) -> Transform {
        match self {
            Self::Orbit(o) => animator.compute_transform(o, progress, elapsed_secs),
            Self::Flight(f) => f.transform(elapsed_secs),
            Self::Drift(d) => d.transform(elapsed_secs),
            Self::Fall(f) => f.transform(elapsed_secs),
            Self::ScrollSpin(s) => s.transform(scroll_px, elapsed_secs),
        }
    }
}

fn default_flight_rate() -> f64 {
    0.5
}

fn default_flight_spin() -> f64 {
    3.0
}

fn default_rest_spin() -> f64 {
    0.3
}

fn default_scale() -> f64 {
    1.0
}

/// Clock-driven entrance: the object flies in after `delay_secs` and then idles.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlightPath {
    /// Off-screen start position.
    pub from: Vec3,
    /// Resting position.
    pub to: Vec3,
    /// Seconds before the flight begins.
    #[serde(default)]
    pub delay_secs: f64,
    /// Flight fraction covered per second; the flight lasts `1 / rate` seconds.
    #[serde(default = "default_flight_rate")]
    pub rate: f64,
    /// Axis tumbled around while in flight.
    pub spin_axis: Axis,
    /// Tumble speed in flight, rad/s.
    #[serde(default = "default_flight_spin")]
    pub flight_spin: f64,
    /// Yaw speed once landed, rad/s.
    #[serde(default = "default_rest_spin")]
    pub rest_spin: f64,
    /// Uniform scale.
    #[serde(default = "default_scale")]
    pub base_scale: f64,
}

impl FlightPath {
    /// Check finiteness, `delay_secs >= 0`, `rate > 0`, `base_scale >= 0`.
    pub fn validate(&self) -> ScrollPhaseResult<()> {
        self.from.ensure_finite("flight from")?;
        self.to.ensure_finite("flight to")?;
        ensure_non_negative(self.delay_secs, "flight delay")?;
        ensure_positive(self.rate, "flight rate")?;
        ensure_finite(self.flight_spin, "flight spin")?;
        ensure_finite(self.rest_spin, "rest spin")?;
        ensure_non_negative(self.base_scale, "flight scale")
    }

    /// Fraction of the flight completed at `elapsed_secs`.
    pub fn flight_fraction(&self, elapsed_secs: f64) -> f64 {
        clamp01((sanitize_elapsed(elapsed_secs) - self.delay_secs) * self.rate)
    }

    /// Transform at `elapsed_secs`.
    pub fn transform(&self, elapsed_secs: f64) -> Transform {
        let t = sanitize_elapsed(elapsed_secs);
        let fly = self.flight_fraction(t);
        let duration = 1.0 / self.rate;
        let airborne = (t - self.delay_secs).clamp(0.0, duration);
        let landed = (t - self.delay_secs - duration).max(0.0);
        Transform {
            position: lerp_vec3(self.from, self.to, Ease::OutCubic.apply(fly)),
            rotation: self.spin_axis.unit().scaled(wrap_angle(self.flight_spin, airborne))
                + Axis::Y.unit().scaled(wrap_angle(self.rest_spin, landed)),
            scale: self.base_scale,
            opacity: (fly * 1.5).min(1.0),
        }
    }
}

/// Clock-driven wobble shared by the floating motions: continuous yaw plus a sinusoidal tilt
/// about X and roll about Z.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tumble {
    /// Continuous yaw speed, rad/s.
    pub spin_rate: f64,
    /// Tilt amplitude about X, rad.
    pub tilt: f64,
    /// Tilt angular frequency, rad/s.
    pub tilt_frequency: f64,
    /// Roll amplitude about Z, rad.
    pub roll: f64,
    /// Roll angular frequency, rad/s.
    pub roll_frequency: f64,
    /// Phase offset of tilt and roll, rad.
    pub phase: f64,
}

impl Tumble {
    /// Check finiteness.
    pub fn validate(&self) -> ScrollPhaseResult<()> {
        ensure_finite(self.spin_rate, "tumble spin rate")?;
        ensure_finite(self.tilt, "tumble tilt")?;
        ensure_finite(self.tilt_frequency, "tumble tilt frequency")?;
        ensure_finite(self.roll, "tumble roll")?;
        ensure_finite(self.roll_frequency, "tumble roll frequency")?;
        ensure_finite(self.phase, "tumble phase")
    }

    /// `(sin(tilt_frequency·t + phase)·tilt, spin_rate·t, cos(roll_frequency·t + phase)·roll)`.
    pub fn rotation(&self, elapsed_secs: f64) -> Vec3 {
        let t = sanitize_elapsed(elapsed_secs);
        Vec3::new(
            (wrap_angle(self.tilt_frequency, t) + self.phase).sin() * self.tilt,
            wrap_angle(self.spin_rate, t),
            (wrap_angle(self.roll_frequency, t) + self.phase).cos() * self.roll,
        )
    }
}

/// Floating bob and tumble around a fixed anchor.
///
/// Each axis bobs as `anchor + sin(frequency·t + phase)·amplitude`; a cosine bob is a sine with a
/// quarter-turn phase.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DriftAnchor {
    /// Rest position.
    pub anchor: Vec3,
    /// Per-axis bob amplitude.
    pub amplitude: Vec3,
    /// Per-axis bob angular frequency, rad/s.
    pub frequency: Vec3,
    /// Per-axis bob phase, rad.
    #[serde(default)]
    pub phase: Vec3,
    /// Rotation over time.
    #[serde(flatten)]
    pub tumble: Tumble,
    /// Uniform scale.
    #[serde(default = "default_scale")]
    pub base_scale: f64,
}

impl DriftAnchor {
    /// Check finiteness and `base_scale >= 0`.
    pub fn validate(&self) -> ScrollPhaseResult<()> {
        self.anchor.ensure_finite("drift anchor")?;
        self.amplitude.ensure_finite("drift amplitude")?;
        self.frequency.ensure_finite("drift frequency")?;
        self.phase.ensure_finite("drift phase")?;
        self.tumble.validate()?;
        ensure_non_negative(self.base_scale, "drift scale")
    }

    /// Transform at `elapsed_secs`.
    pub fn transform(&self, elapsed_secs: f64) -> Transform {
        let t = sanitize_elapsed(elapsed_secs);
        let (a, w, phi) = (self.amplitude, self.frequency, self.phase);
        Transform {
            position: self.anchor
                + Vec3::new(
                    (wrap_angle(w.x, t) + phi.x).sin() * a.x,
                    (wrap_angle(w.y, t) + phi.y).sin() * a.y,
                    (wrap_angle(w.z, t) + phi.z).sin() * a.z,
                ),
            rotation: self.tumble.rotation(t),
            scale: self.base_scale,
            opacity: 1.0,
        }
    }
}

/// Falls from `start` at constant speed and re-enters at the top once below `floor`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FallingObject {
    /// Spawn position; `start.y` is the top of the fall.
    pub start: Vec3,
    /// Units per second.
    pub fall_speed: f64,
    /// Height below which the object wraps back to `start.y`.
    pub floor: f64,
    /// Distance already fallen at `t = 0`.
    #[serde(default)]
    pub head_start: f64,
    /// Per-axis tumble, rad/s.
    #[serde(default)]
    pub spin: Vec3,
    /// Sideways sway amplitude.
    #[serde(default)]
    pub drift: f64,
    /// Constant sideways speed, units per second.
    #[serde(default)]
    pub lateral_speed: f64,
    /// When set, `x` wraps around inside `[-w, w)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap_half_width: Option<f64>,
    /// Uniform scale.
    #[serde(default = "default_scale")]
    pub base_scale: f64,
}

impl FallingObject {
    /// Check finiteness, `fall_speed > 0`, `floor < start.y`, `base_scale >= 0`.
    pub fn validate(&self) -> ScrollPhaseResult<()> {
        self.start.ensure_finite("fall start")?;
        ensure_positive(self.fall_speed, "fall speed")?;
        ensure_finite(self.floor, "fall floor")?;
        if self.floor >= self.start.y {
            return Err(ScrollPhaseError::configuration(format!(
                "fall floor ({}) must be below start height ({})",
                self.floor, self.start.y
            )));
        }
        ensure_finite(self.start.y - self.floor, "fall span")?;
        ensure_non_negative(self.head_start, "fall head start")?;
        self.spin.ensure_finite("fall spin")?;
        ensure_finite(self.drift, "fall drift")?;
        ensure_finite(self.lateral_speed, "fall lateral speed")?;
        if let Some(w) = self.wrap_half_width {
            ensure_positive(w, "fall wrap half-width")?;
        }
        ensure_non_negative(self.base_scale, "fall scale")
    }

    /// Transform at `elapsed_secs`.
    pub fn transform(&self, elapsed_secs: f64) -> Transform {
        let t = sanitize_elapsed(elapsed_secs);
        let span = self.start.y - self.floor;
        let fallen = saturate(self.head_start + saturate(self.fall_speed * t)).rem_euclid(span);
        let sway = self.drift * (1.0 - wrap_angle(0.5, t).cos());
        let mut x = saturate(self.start.x + sway + saturate(self.lateral_speed * t));
        if let Some(w) = self.wrap_half_width {
            x = saturate(x + w).rem_euclid(2.0 * w) - w;
        }
        Transform {
            position: Vec3::new(x, self.start.y - fallen, self.start.z),
            rotation: wrap_angles(self.spin, t),
            scale: self.base_scale,
            opacity: 1.0,
        }
    }
}

/// Rotation proportional to the raw page scroll offset, layered over a clock-driven tumble.
///
/// Unlike [`Motion::Orbit`], the offset is not clamped to the scene's range: scrolling past the
/// section keeps turning the object.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSpin {
    /// Fixed position.
    #[serde(default)]
    pub position: Vec3,
    /// Rotation at scroll offset 0.
    #[serde(default)]
    pub base_rotation: Vec3,
    /// Radians per scrolled pixel, per axis.
    pub per_px: Vec3,
    /// Rotation over time, added on top of the scroll rotation.
    #[serde(flatten)]
    pub tumble: Tumble,
    /// Uniform scale.
    #[serde(default = "default_scale")]
    pub base_scale: f64,
}

impl ScrollSpin {
    /// Check finiteness and `base_scale >= 0`.
    pub fn validate(&self) -> ScrollPhaseResult<()> {
        self.position.ensure_finite("scroll spin position")?;
        self.base_rotation.ensure_finite("scroll spin base rotation")?;
        self.per_px.ensure_finite("scroll spin rate")?;
        self.tumble.validate()?;
        ensure_non_negative(self.base_scale, "scroll spin scale")
    }

    /// Transform at `scroll_px` / `elapsed_secs`. A non-finite offset reads as `0`.
    pub fn transform(&self, scroll_px: f64, elapsed_secs: f64) -> Transform {
        let px = if scroll_px.is_finite() { scroll_px } else { 0.0 };
        Transform {
            position: self.position,
            rotation: self.base_rotation
                + wrap_angles(self.per_px, px)
                + self.tumble.rotation(elapsed_secs),
            scale: self.base_scale,
            opacity: 1.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/motion.rs"]
mod tests;
