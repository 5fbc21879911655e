//! Scrollphase turns a scroll position and a clock into deterministic 3D transforms.
//!
//! A page section's scroll offset is normalized to a [`ScrollProgress`] in `[0, 1]`; the
//! [`PhaseAnimator`] splits that range into entrance, orbit and exit phases and computes a
//! [`Transform`] for each [`OrbitingObject`]. Hosts own the render loop and pull transforms
//! every frame:
//!
//! - Describe a hero animation as a [`Scene`] (JSON or [`SceneBuilder`])
//! - Evaluate one frame with [`Evaluator`], or many with [`sample_frames`]
//! - Feed the transforms to whatever renders the models
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Easing, phase windows, orbit parameters and the phase animator.
pub mod animation;
/// Frame evaluation, sweeps and fingerprints.
pub mod eval;
/// Scene model, JSON loading and built-in presets.
pub mod scene;
/// Scroll offset to progress normalization.
pub mod scroll;

pub use crate::foundation::core::{Axis, ScrollProgress, Transform, Vec3};
pub use crate::foundation::error::{ScrollPhaseError, ScrollPhaseResult};
pub use crate::foundation::math::Rng64;

pub use crate::animation::animator::{OrbitStyle, PhaseAnimator};
pub use crate::animation::ease::Ease;
pub use crate::animation::orbit::OrbitingObject;
pub use crate::animation::overlay::{OverlayState, TitleEnvelope};
pub use crate::animation::phase::{PhaseFactors, PhaseKind, PhaseTimeline, PhaseWindow};
pub use crate::eval::evaluator::{EvaluatedActor, EvaluatedFrame, Evaluator};
pub use crate::eval::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use crate::eval::sampler::{
    FrameSample, SampleThreading, SweepStats, sample_frames, sweep_samples,
};
pub use crate::scene::dsl::SceneBuilder;
pub use crate::scene::model::{Actor, Scene};
pub use crate::scene::motion::{DriftAnchor, FallingObject, FlightPath, Motion, ScrollSpin, Tumble};
pub use crate::scene::presets;
pub use crate::scroll::signal::{FixedScroll, ScrollRange, ScrollSignal, ScrollSource};
