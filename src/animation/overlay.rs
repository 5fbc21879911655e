use crate::{
    foundation::core::{ScrollProgress, ensure_finite},
    foundation::error::{ScrollPhaseError, ScrollPhaseResult},
    foundation::math::clamp01,
};

/// Scroll envelope of the title overlay revealed by the orbit entrance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TitleEnvelope {
    /// Progress at which the title is fully faded in.
    pub fade_in_end: f64,
    /// Progress at which the title starts fading out.
    pub fade_out_start: f64,
    /// Scale before any scrolling.
    pub rest_scale: f64,
    /// Scale gained over the fade-in.
    pub grow: f64,
    /// Scale lost over the whole range.
    pub shrink: f64,
    /// Tagline and call-to-action are shown while progress is below this.
    pub tagline_until: f64,
    /// Scroll hint is shown while progress is below this.
    pub hint_until: f64,
}

impl Default for TitleEnvelope {
    fn default() -> Self {
        Self {
            fade_in_end: 0.2,
            fade_out_start: 0.7,
            rest_scale: 0.8,
            grow: 0.2,
            shrink: 0.15,
            tagline_until: 0.3,
            hint_until: 0.1,
        }
    }
}

/// Overlay state for one progress value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayState {
    /// Title opacity in `[0, 1]`.
    pub opacity: f64,
    /// Title scale.
    pub scale: f64,
    /// Whether the tagline block is shown.
    pub show_tagline: bool,
    /// Whether the scroll hint is shown.
    pub show_scroll_hint: bool,
}

impl TitleEnvelope {
    /// Check `0 < fade_in_end <= fade_out_start < 1` and finiteness.
    pub fn validate(&self) -> ScrollPhaseResult<()> {
        for (v, what) in [
            (self.fade_in_end, "title fade_in_end"),
            (self.fade_out_start, "title fade_out_start"),
            (self.rest_scale, "title rest_scale"),
            (self.grow, "title grow"),
            (self.shrink, "title shrink"),
            (self.tagline_until, "title tagline_until"),
            (self.hint_until, "title hint_until"),
        ] {
            ensure_finite(v, what)?;
        }
        if !(0.0 < self.fade_in_end
            && self.fade_in_end <= self.fade_out_start
            && self.fade_out_start < 1.0)
        {
            return Err(ScrollPhaseError::configuration(format!(
                "title envelope must satisfy 0 < fade_in_end <= fade_out_start < 1, got {} / {}",
                self.fade_in_end, self.fade_out_start
            )));
        }
        Ok(())
    }

    /// Overlay state at `progress`.
    pub fn state(&self, progress: ScrollProgress) -> OverlayState {
        let p = progress.get();
        let fade_in = clamp01(p / self.fade_in_end);
        let fade_out = if p < self.fade_out_start {
            1.0
        } else {
            clamp01(1.0 - (p - self.fade_out_start) / (1.0 - self.fade_out_start))
        };
        OverlayState {
            opacity: fade_in * fade_out,
            scale: self.rest_scale + fade_in * self.grow - p * self.shrink,
            show_tagline: p < self.tagline_until,
            show_scroll_hint: p < self.hint_until,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/overlay.rs"]
mod tests;
