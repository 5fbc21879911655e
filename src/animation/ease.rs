/// Monotonic remapping of a linear fraction in `[0, 1]`.
///
/// Every curve maps `0 -> 0` and `1 -> 1`; inputs are clamped first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// `t^2`.
    InQuad,
    /// `1 - (1 - t)^2`.
    OutQuad,
    /// Quadratic in, then out.
    InOutQuad,
    /// `t^3`.
    InCubic,
    /// `1 - (1 - t)^3`; the default entrance curve.
    OutCubic,
    /// Cubic in, then out.
    InOutCubic,
    /// `1 - (1 - t)^4`.
    OutQuart,
}

impl Ease {
    /// All curves, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Linear,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
        Self::OutQuart,
    ];

    /// Evaluate the curve at `t`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }

    /// Stable snake_case name, as used in scene JSON and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "in_quad",
            Self::OutQuad => "out_quad",
            Self::InOutQuad => "in_out_quad",
            Self::InCubic => "in_cubic",
            Self::OutCubic => "out_cubic",
            Self::InOutCubic => "in_out_cubic",
            Self::OutQuart => "out_quart",
        }
    }
}

impl std::str::FromStr for Ease {
    type Err = crate::foundation::error::ScrollPhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|e| e.name() == key)
            .ok_or_else(|| {
                crate::foundation::error::ScrollPhaseError::configuration(format!(
                    "unknown ease '{s}'"
                ))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
