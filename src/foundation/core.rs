use crate::foundation::error::{ScrollPhaseError, ScrollPhaseResult};

/// Three-component vector in scene units (position) or radians (rotation).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// All-zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Build a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component-wise scale.
    pub fn scaled(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    /// True when every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub(crate) fn ensure_finite(self, what: &str) -> ScrollPhaseResult<()> {
        if !self.is_finite() {
            return Err(ScrollPhaseError::configuration(format!(
                "{what} must be finite, got ({}, {}, {})",
                self.x, self.y, self.z
            )));
        }
        Ok(())
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;

    fn add(self, o: Self) -> Self {
        Self::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }
}

/// Rotation axis selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Pitch.
    X,
    /// Yaw.
    Y,
    /// Roll.
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::new(1.0, 0.0, 0.0),
            Self::Y => Vec3::new(0.0, 1.0, 0.0),
            Self::Z => Vec3::new(0.0, 0.0, 1.0),
        }
    }
}

/// Normalized position within a tracked scroll range.
///
/// Always in `[0, 1]`. Construction clamps; NaN maps to `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    /// Progress at the top of the range.
    pub const START: Self = Self(0.0);
    /// Progress at the bottom of the range.
    pub const END: Self = Self(1.0);

    /// Clamp an arbitrary value into a progress fraction.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Raw fraction in `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for ScrollProgress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl<'de> serde::Deserialize<'de> for ScrollProgress {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        f64::deserialize(d).map(Self::new)
    }
}

/// Per-frame output for one animated object.
///
/// Plain value record; the host applies it to its own scene object.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform {
    /// Position in scene units.
    pub position: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
    /// Uniform scale.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Transform {
    /// Collapsed, fully transparent transform at the origin.
    pub const HIDDEN: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: 0.0,
        opacity: 0.0,
    };

    /// True when the object would contribute pixels.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.scale > 0.0
    }

    /// True when no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.rotation.is_finite()
            && self.scale.is_finite()
            && self.opacity.is_finite()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

pub(crate) fn ensure_finite(value: f64, what: &str) -> ScrollPhaseResult<()> {
    if !value.is_finite() {
        return Err(ScrollPhaseError::configuration(format!(
            "{what} must be finite, got {value}"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_non_negative(value: f64, what: &str) -> ScrollPhaseResult<()> {
    ensure_finite(value, what)?;
    if value < 0.0 {
        return Err(ScrollPhaseError::configuration(format!(
            "{what} must be >= 0, got {value}"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_positive(value: f64, what: &str) -> ScrollPhaseResult<()> {
    ensure_finite(value, what)?;
    if value <= 0.0 {
        return Err(ScrollPhaseError::configuration(format!(
            "{what} must be > 0, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
