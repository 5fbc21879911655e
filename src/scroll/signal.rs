use crate::{
    foundation::core::{ScrollProgress, ensure_finite},
    foundation::error::{ScrollPhaseError, ScrollPhaseResult},
};

/// Host-provided scroll position.
///
/// The live scroll subscription lives on the host side; the engine only pulls the latest
/// offset when it needs one.
pub trait ScrollSource {
    /// Current viewport scroll offset in pixels.
    fn scroll_offset_px(&self) -> f64;
}

/// A source that always reports the same offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedScroll(pub f64);

impl ScrollSource for FixedScroll {
    fn scroll_offset_px(&self) -> f64 {
        self.0
    }
}

impl<F> ScrollSource for F
where
    F: Fn() -> f64,
{
    fn scroll_offset_px(&self) -> f64 {
        self()
    }
}

/// Tracked scroll interval in pixels, `end_px > start_px`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ScrollRangeDef")]
pub struct ScrollRange {
    start_px: f64,
    end_px: f64,
}

impl ScrollRange {
    /// Reject degenerate (`end_px <= start_px`) or non-finite ranges, including ranges whose span
    /// overflows.
    pub fn new(start_px: f64, end_px: f64) -> ScrollPhaseResult<Self> {
        ensure_finite(start_px, "scroll range start")?;
        ensure_finite(end_px, "scroll range end")?;
        if end_px <= start_px {
            return Err(ScrollPhaseError::configuration(format!(
                "degenerate scroll range: end ({end_px}px) must be greater than start ({start_px}px)"
            )));
        }
        ensure_finite(end_px - start_px, "scroll range span")?;
        Ok(Self { start_px, end_px })
    }

    /// Range that starts when a section's top reaches the viewport top and ends when its bottom
    /// does.
    pub fn for_section(top_px: f64, height_px: f64) -> ScrollPhaseResult<Self> {
        ensure_finite(height_px, "section height")?;
        if height_px <= 0.0 {
            return Err(ScrollPhaseError::configuration(format!(
                "section height must be > 0, got {height_px}"
            )));
        }
        Self::new(top_px, top_px + height_px)
    }

    /// Lower bound in pixels.
    pub fn start_px(&self) -> f64 {
        self.start_px
    }

    /// Upper bound in pixels.
    pub fn end_px(&self) -> f64 {
        self.end_px
    }

    /// Length of the range in pixels.
    pub fn span_px(&self) -> f64 {
        self.end_px - self.start_px
    }

    /// `clamp((offset - start) / (end - start), 0, 1)`. Infinite offsets clamp to the nearer end;
    /// NaN yields `0`.
    pub fn progress(&self, offset_px: f64) -> ScrollProgress {
        ScrollProgress::new((offset_px - self.start_px) / self.span_px())
    }

    /// Offset at which `progress` is reached; inverse of [`Self::progress`] inside the range.
    pub fn offset_at(&self, progress: ScrollProgress) -> f64 {
        self.start_px + progress.get() * self.span_px()
    }
}

#[derive(serde::Deserialize)]
struct ScrollRangeDef {
    start_px: f64,
    end_px: f64,
}

impl TryFrom<ScrollRangeDef> for ScrollRange {
    type Error = ScrollPhaseError;

    fn try_from(d: ScrollRangeDef) -> Result<Self, Self::Error> {
        Self::new(d.start_px, d.end_px)
    }
}

/// Scroll range bound to an injected [`ScrollSource`].
#[derive(Clone, Debug)]
pub struct ScrollSignal<S> {
    source: S,
    range: ScrollRange,
}

impl ScrollSignal<FixedScroll> {
    /// One-shot normalization: validate the range and map `offset_px` into it.
    pub fn normalize(
        offset_px: f64,
        range_start_px: f64,
        range_end_px: f64,
    ) -> ScrollPhaseResult<ScrollProgress> {
        Ok(ScrollRange::new(range_start_px, range_end_px)?.progress(offset_px))
    }
}

impl<S: ScrollSource> ScrollSignal<S> {
    /// Bind `source` to `range`.
    pub fn new(source: S, range: ScrollRange) -> Self {
        Self { source, range }
    }

    /// Tracked range.
    pub fn range(&self) -> &ScrollRange {
        &self.range
    }

    /// Underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Progress for the source's current offset.
    pub fn progress(&self) -> ScrollProgress {
        self.range.progress(self.source.scroll_offset_px())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/signal.rs"]
mod tests;
