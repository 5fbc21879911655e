//! The hero variants of the fruit landing page as [`Scene`] data.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::{
    animation::orbit::OrbitingObject,
    foundation::core::{Axis, Vec3},
    foundation::error::{ScrollPhaseError, ScrollPhaseResult},
    foundation::math::Rng64,
    scene::dsl::SceneBuilder,
    scene::model::{Actor, Scene},
    scene::motion::{DriftAnchor, FallingObject, FlightPath, Motion, ScrollSpin, Tumble},
    scroll::signal::ScrollRange,
};

/// Names accepted by [`by_name`].
pub const PRESET_NAMES: [&str; 5] = [
    "scroll-orbit",
    "para-agri-fresh",
    "falling-fruits",
    "hero-fruit-canvas",
    "scroll-fruits",
];

/// Per-frame speeds in the source animations assume a 60 Hz render loop.
const FRAME_RATE: f64 = 60.0;

/// Seed used by [`by_name`] for the falling field.
pub const DEFAULT_FALL_SEED: u64 = 0x5EED_F4A1;

/// Seed used by [`by_name`] for the particle overlay.
pub const DEFAULT_PARTICLE_SEED: u64 = 0x0F2C_17E5;

/// Scene units per CSS pixel: a 1080 px tall viewport spans 12 units.
const PX: f64 = 12.0 / 1080.0;

/// Look up a preset by name.
pub fn by_name(name: &str) -> ScrollPhaseResult<Scene> {
    match name {
        "scroll-orbit" => scroll_orbit(),
        "para-agri-fresh" => para_agri_fresh(),
        "falling-fruits" => falling_fruits(DEFAULT_FALL_SEED, 20),
        "hero-fruit-canvas" => hero_fruit_canvas(),
        "scroll-fruits" => scroll_fruits(DEFAULT_PARTICLE_SEED, 15),
        other => Err(ScrollPhaseError::configuration(format!(
            "unknown preset '{other}' (expected one of: {})",
            PRESET_NAMES.join(", ")
        ))),
    }
}

/// Six fruits blasting out of the title, orbiting it, then smashing away.
///
/// The section is two viewport heights tall (1080 px viewport).
pub fn scroll_orbit() -> ScrollPhaseResult<Scene> {
    let fruits = [
        ("pomegranate-1", "/models/pomegranate.glb", 6.0, 0.3, 0.0, 2.0, 2.5),
        ("lychee-1", "/models/lychee.glb", 7.0, -0.25, PI / 3.0, -1.0, 2.2),
        ("pear-1", "/models/pear.glb", 6.5, 0.28, PI * 2.0 / 3.0, 3.0, 2.3),
        ("pomegranate-2", "/models/pomegranate.glb", 7.5, -0.22, PI, -2.0, 2.0),
        ("lychee-2", "/models/lychee.glb", 6.8, 0.26, PI * 4.0 / 3.0, 1.0, 2.4),
        ("pear-2", "/models/pear.glb", 7.2, -0.24, PI * 5.0 / 3.0, -3.0, 2.1),
    ];

    let mut b = SceneBuilder::new("scroll-orbit").scroll(ScrollRange::for_section(0.0, 2160.0)?);
    for (name, model, radius, speed, angle, depth, scale) in fruits {
        b = b.orbit(
            name,
            model,
            OrbitingObject::new(radius, speed, angle, depth, scale)?,
        )?;
    }
    b.build()
}

/// Two large floating oranges framing the title, a pear flying in, and slow background fruit.
pub fn para_agri_fresh() -> ScrollPhaseResult<Scene> {
    let hero_orange = |anchor: Vec3, scale: f64, spin_per_frame: f64, phase: f64| DriftAnchor {
        anchor,
        amplitude: Vec3::new(0.3, 0.4, 0.0),
        frequency: Vec3::new(0.6, 0.8, 0.0),
        phase: Vec3::new(phase, phase, 0.0),
        tumble: Tumble {
            spin_rate: spin_per_frame * FRAME_RATE,
            tilt: 0.25,
            tilt_frequency: 0.5,
            roll: 0.2,
            roll_frequency: 0.4,
            phase,
        },
        base_scale: scale,
    };
    // sin on x, cos on y and z.
    let background = |anchor: Vec3, radius: f64, speed: f64| DriftAnchor {
        anchor,
        amplitude: Vec3::new(radius, radius * 0.5, radius),
        frequency: Vec3::new(speed, speed * 0.7, speed),
        phase: Vec3::new(0.0, FRAC_PI_2, FRAC_PI_2),
        tumble: Tumble {
            spin_rate: 0.005 * FRAME_RATE,
            tilt: 0.1,
            tilt_frequency: 0.3,
            ..Tumble::default()
        },
        base_scale: 1.2,
    };

    SceneBuilder::new("para-agri-fresh")
        .actor(
            Actor::new(
                "orange-left",
                Motion::Drift(hero_orange(Vec3::new(-2.5, 0.5, 7.0), 5.0, 0.018, 0.0)),
            )
            .with_model("/models/orange.glb"),
        )?
        .actor(
            Actor::new(
                "orange-right",
                Motion::Drift(hero_orange(Vec3::new(2.5, -0.5, 7.5), 5.5, 0.015, PI)),
            )
            .with_model("/models/orange.glb"),
        )?
        .actor(
            Actor::new(
                "pear-flight",
                Motion::Flight(FlightPath {
                    from: Vec3::new(15.0, -8.0, -8.0),
                    to: Vec3::new(4.0, -2.0, -3.0),
                    delay_secs: 1.0,
                    rate: 0.5,
                    spin_axis: Axis::Y,
                    flight_spin: 3.0,
                    rest_spin: 0.3,
                    base_scale: 1.8,
                }),
            )
            .with_model("/models/pear.glb"),
        )?
        .actor(
            Actor::new(
                "pear-background",
                Motion::Drift(background(Vec3::new(-7.0, 4.0, -8.0), 0.5, 0.2)),
            )
            .with_model("/models/pear.glb"),
        )?
        .actor(
            Actor::new(
                "pomegranate-background",
                Motion::Drift(background(Vec3::new(0.0, 6.0, -12.0), 0.4, 0.25)),
            )
            .with_model("/models/pomegranate.glb"),
        )?
        .build()
}

/// `count` fruits scattered above the viewport, falling and tumbling forever.
///
/// Equal seeds produce equal scenes.
pub fn falling_fruits(seed: u64, count: usize) -> ScrollPhaseResult<Scene> {
    const MODELS: [&str; 3] = ["pomegranate", "pear", "lychee"];
    let mut rng = Rng64::new(seed);
    let mut b = SceneBuilder::new("falling-fruits");
    for i in 0..count {
        let model = MODELS[rng.index(MODELS.len())];
        let fall = FallingObject {
            start: Vec3::new(
                rng.range(-10.0, 10.0),
                rng.range(5.0, 25.0),
                rng.range(-5.0, 5.0),
            ),
            fall_speed: rng.range(0.005, 0.02) * FRAME_RATE,
            floor: -15.0,
            head_start: 0.0,
            spin: Vec3::new(
                rng.range(-0.01, 0.01) * FRAME_RATE,
                rng.range(-0.01, 0.01) * FRAME_RATE,
                rng.range(-0.01, 0.01) * FRAME_RATE,
            ),
            drift: 0.24,
            lateral_speed: 0.0,
            wrap_half_width: None,
            base_scale: rng.range(0.4, 1.2),
        };
        b = b.actor(
            Actor::new(format!("{model}-{i}"), Motion::Fall(fall))
                .with_model(format!("/models/{model}.glb")),
        )?;
    }
    b.build()
}

/// Side-by-side hero fruits whose tilt follows the page scroll, over a slow clock-driven wobble.
///
/// The scroll range covers one 1080 px viewport so progress maps back to a pixel offset.
pub fn hero_fruit_canvas() -> ScrollPhaseResult<Scene> {
    let wobble = Tumble {
        spin_rate: 0.003 * FRAME_RATE,
        tilt: 0.3,
        tilt_frequency: 0.5,
        roll: 0.2,
        roll_frequency: 0.3,
        phase: 0.0,
    };
    let side = |x: f64, base_tilt: f64| ScrollSpin {
        position: Vec3::new(x, 0.0, 0.0),
        base_rotation: Vec3::new(base_tilt, 0.0, 0.0),
        per_px: Vec3::new(0.002, 0.002, 0.0),
        tumble: wobble,
        base_scale: 2.5,
    };

    SceneBuilder::new("hero-fruit-canvas")
        .scroll(ScrollRange::for_section(0.0, 1080.0)?)
        .actor(
            Actor::new("pomegranate-left", Motion::ScrollSpin(side(-3.0, -0.3)))
                .with_model("/models/pomegranate.glb"),
        )?
        .actor(
            Actor::new("pear-right", Motion::ScrollSpin(side(3.0, 0.3)))
                .with_model("/models/pear.glb"),
        )?
        .build()
}

/// `count` emoji fruits drifting down a 1920x1080 overlay, wrapping at every edge.
///
/// Each particle keeps its seeded speed and spin across wraps, so the field is a pure function
/// of time.
pub fn scroll_fruits(seed: u64, count: usize) -> ScrollPhaseResult<Scene> {
    const FRUITS: [(&str, &str); 10] = [
        ("apple", "\u{1F34E}"),
        ("pear", "\u{1F350}"),
        ("grapes", "\u{1F347}"),
        ("orange", "\u{1F34A}"),
        ("lemon", "\u{1F34B}"),
        ("banana", "\u{1F34C}"),
        ("watermelon", "\u{1F349}"),
        ("strawberry", "\u{1F353}"),
        ("blueberries", "\u{1FAD0}"),
        ("kiwi", "\u{1F95D}"),
    ];
    const WIDTH_PX: f64 = 1920.0;
    const HEIGHT_PX: f64 = 1080.0;
    const MARGIN_PX: f64 = 50.0;

    let top = (HEIGHT_PX / 2.0 + MARGIN_PX) * PX;
    let mut rng = Rng64::new(seed);
    let mut b = SceneBuilder::new("scroll-fruits");
    for i in 0..count {
        let (name, emoji) = FRUITS[rng.index(FRUITS.len())];
        let x_px = rng.range(0.0, WIDTH_PX);
        let y_px = rng.range(0.0, HEIGHT_PX);
        let particle = FallingObject {
            start: Vec3::new((x_px - WIDTH_PX / 2.0) * PX, top, 0.0),
            fall_speed: rng.range(1.0, 3.0) * FRAME_RATE * PX,
            floor: -top,
            head_start: (y_px + MARGIN_PX) * PX,
            spin: Vec3::new(0.0, 0.0, rng.range(-0.05, 0.05) * FRAME_RATE),
            drift: 0.0,
            lateral_speed: rng.range(-1.0, 1.0) * FRAME_RATE * PX,
            wrap_half_width: Some((WIDTH_PX / 2.0 + MARGIN_PX) * PX),
            base_scale: rng.range(20.0, 50.0) * PX,
        };
        b = b.actor(Actor::new(format!("{name}-{i}"), Motion::Fall(particle)).with_model(emoji))?;
    }
    b.build()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/presets.rs"]
mod tests;
