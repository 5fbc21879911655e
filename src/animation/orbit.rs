use crate::foundation::{
    core::{ensure_finite, ensure_non_negative},
    error::{ScrollPhaseError, ScrollPhaseResult},
    math::wrap_angle,
};

/// Static configuration of one orbiting entity.
///
/// Immutable once built: fields are private and every construction path, including serde,
/// goes through [`OrbitingObject::new`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "OrbitingObjectDef")]
pub struct OrbitingObject {
    radius: f64,
    angular_speed: f64,
    angle_offset: f64,
    depth_offset: f64,
    base_scale: f64,
}

impl OrbitingObject {
    /// Validate and build. Rejects negative radius/scale and any non-finite value.
    pub fn new(
        radius: f64,
        angular_speed: f64,
        angle_offset: f64,
        depth_offset: f64,
        base_scale: f64,
    ) -> ScrollPhaseResult<Self> {
        ensure_non_negative(radius, "orbit radius")?;
        ensure_finite(angular_speed, "angular speed")?;
        ensure_finite(angle_offset, "angle offset")?;
        ensure_finite(depth_offset, "depth offset")?;
        ensure_non_negative(base_scale, "base scale")?;
        Ok(Self {
            radius,
            angular_speed,
            angle_offset,
            depth_offset,
            base_scale,
        })
    }

    /// Orbit distance from center.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Radians per second; negative values orbit clockwise.
    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    /// Starting angle in radians.
    pub fn angle_offset(&self) -> f64 {
        self.angle_offset
    }

    /// Resting depth.
    pub fn depth_offset(&self) -> f64 {
        self.depth_offset
    }

    /// Scale at full entrance.
    pub fn base_scale(&self) -> f64 {
        self.base_scale
    }

    /// Orbit angle at `elapsed_secs`. The swept part is reduced modulo a full turn.
    pub fn angle_at(&self, elapsed_secs: f64) -> f64 {
        wrap_angle(self.angular_speed, elapsed_secs) + self.angle_offset
    }
}

#[derive(serde::Deserialize)]
struct OrbitingObjectDef {
    radius: f64,
    angular_speed: f64,
    #[serde(default)]
    angle_offset: f64,
    #[serde(default)]
    depth_offset: f64,
    base_scale: f64,
}

impl TryFrom<OrbitingObjectDef> for OrbitingObject {
    type Error = ScrollPhaseError;

    fn try_from(d: OrbitingObjectDef) -> Result<Self, Self::Error> {
        Self::new(
            d.radius,
            d.angular_speed,
            d.angle_offset,
            d.depth_offset,
            d.base_scale,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/orbit.rs"]
mod tests;
