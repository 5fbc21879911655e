use std::{collections::BTreeSet, fs::File, io::BufReader, io::Read, path::Path};

use crate::{
    animation::animator::{OrbitStyle, PhaseAnimator},
    animation::overlay::TitleEnvelope,
    animation::phase::PhaseTimeline,
    foundation::error::{ScrollPhaseError, ScrollPhaseResult},
    scene::motion::Motion,
    scroll::signal::ScrollRange,
};

/// One hero animation, expressed entirely as data.
///
/// Variants of the same choreography (which fruits, how many, what radii, which phase
/// boundaries) are different `Scene` values, not different code paths.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Human-readable scene name.
    pub name: String,
    /// Phase boundaries and easing for orbiting actors.
    #[serde(default)]
    pub timeline: PhaseTimeline,
    /// Orbit tuning constants.
    #[serde(default)]
    pub style: OrbitStyle,
    /// Scroll range that drives progress, if the scene is scroll-bound.
    #[serde(default)]
    pub scroll: Option<ScrollRange>,
    /// Title overlay envelope.
    #[serde(default)]
    pub title: TitleEnvelope,
    /// Animated entities, in draw order.
    pub actors: Vec<Actor>,
}

/// A named animated entity.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Actor {
    /// Unique name within the scene.
    pub name: String,
    /// Opaque model reference handed back to the host (e.g. a model path).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Motion driving this actor.
    pub motion: Motion,
}

impl Actor {
    /// Actor without a model reference.
    pub fn new(name: impl Into<String>, motion: Motion) -> Self {
        Self {
            name: name.into(),
            model: None,
            motion,
        }
    }

    /// Attach a model reference.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

impl Scene {
    /// Parse scene JSON from a file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> ScrollPhaseResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollPhaseError::serde(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loading scene");
        Self::from_reader(BufReader::new(f))
    }

    /// Parse scene JSON from a reader and validate it.
    pub fn from_reader(r: impl Read) -> ScrollPhaseResult<Self> {
        let scene: Self = serde_json::from_reader(r)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Parse scene JSON from a string and validate it.
    pub fn from_json_str(s: &str) -> ScrollPhaseResult<Self> {
        let scene: Self = serde_json::from_str(s)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Pretty JSON.
    pub fn to_json_pretty(&self) -> ScrollPhaseResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every piece of configuration; fails on the first problem found.
    pub fn validate(&self) -> ScrollPhaseResult<()> {
        if self.name.trim().is_empty() {
            return Err(ScrollPhaseError::configuration("scene name must be non-empty"));
        }
        self.timeline.validate()?;
        self.style.validate()?;
        self.title.validate()?;

        let mut seen = BTreeSet::new();
        for actor in &self.actors {
            if actor.name.trim().is_empty() {
                return Err(ScrollPhaseError::configuration(
                    "actor name must be non-empty",
                ));
            }
            if !seen.insert(actor.name.as_str()) {
                return Err(ScrollPhaseError::configuration(format!(
                    "duplicate actor name '{}'",
                    actor.name
                )));
            }
            actor.motion.validate().map_err(|e| {
                ScrollPhaseError::configuration(format!("actor '{}': {e}", actor.name))
            })?;
        }
        Ok(())
    }

    /// Animator for this scene's timeline and style.
    pub fn animator(&self) -> ScrollPhaseResult<PhaseAnimator> {
        PhaseAnimator::new(self.timeline, self.style)
    }

    /// Number of scroll-phased (orbiting) actors.
    pub fn orbit_count(&self) -> usize {
        self.actors
            .iter()
            .filter(|a| matches!(a.motion, Motion::Orbit(_)))
            .count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
