use crate::{
    animation::animator::OrbitStyle,
    animation::orbit::OrbitingObject,
    animation::overlay::TitleEnvelope,
    animation::phase::PhaseTimeline,
    foundation::error::{ScrollPhaseError, ScrollPhaseResult},
    scene::model::{Actor, Scene},
    scene::motion::Motion,
    scroll::signal::ScrollRange,
};

/// Fluent builder for [`Scene`]; [`SceneBuilder::build`] validates the result.
pub struct SceneBuilder {
    name: String,
    timeline: PhaseTimeline,
    style: OrbitStyle,
    scroll: Option<ScrollRange>,
    title: TitleEnvelope,
    actors: Vec<Actor>,
}

impl SceneBuilder {
    /// Empty scene with default timeline, style and title envelope.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timeline: PhaseTimeline::default(),
            style: OrbitStyle::default(),
            scroll: None,
            title: TitleEnvelope::default(),
            actors: Vec::new(),
        }
    }

    /// Phase boundaries and easing.
    pub fn timeline(mut self, timeline: PhaseTimeline) -> Self {
        self.timeline = timeline;
        self
    }

    /// Orbit tuning.
    pub fn style(mut self, style: OrbitStyle) -> Self {
        self.style = style;
        self
    }

    /// Bind the scene to a scroll range.
    pub fn scroll(mut self, range: ScrollRange) -> Self {
        self.scroll = Some(range);
        self
    }

    /// Title overlay envelope.
    pub fn title(mut self, title: TitleEnvelope) -> Self {
        self.title = title;
        self
    }

    /// Append an actor; names must be unique.
    pub fn actor(mut self, actor: Actor) -> ScrollPhaseResult<Self> {
        if self.actors.iter().any(|a| a.name == actor.name) {
            return Err(ScrollPhaseError::configuration(format!(
                "duplicate actor name '{}'",
                actor.name
            )));
        }
        self.actors.push(actor);
        Ok(self)
    }

    /// Append an orbiting actor with a model reference.
    pub fn orbit(
        self,
        name: impl Into<String>,
        model: impl Into<String>,
        object: OrbitingObject,
    ) -> ScrollPhaseResult<Self> {
        self.actor(Actor::new(name, Motion::Orbit(object)).with_model(model))
    }

    /// Validate and produce the scene.
    pub fn build(self) -> ScrollPhaseResult<Scene> {
        let scene = Scene {
            name: self.name,
            timeline: self.timeline,
            style: self.style,
            scroll: self.scroll,
            title: self.title,
            actors: self.actors,
        };
        scene.validate()?;
        Ok(scene)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
