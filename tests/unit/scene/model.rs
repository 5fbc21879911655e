use super::*;
use crate::animation::orbit::OrbitingObject;
use crate::foundation::core::Vec3;
use crate::scene::motion::FallingObject;

const MINIMAL: &str = r#"{
  "name": "minimal",
  "actors": [
    { "name": "pom", "model": "/models/pomegranate.glb",
      "motion": { "orbit": { "radius": 6, "angular_speed": 0.3, "depth_offset": 2, "base_scale": 2.5 } } }
  ]
}"#;

#[test]
fn minimal_json_fills_defaults() {
    let scene = Scene::from_json_str(MINIMAL).unwrap();
    assert_eq!(scene.timeline, PhaseTimeline::default());
    assert_eq!(scene.style, OrbitStyle::default());
    assert_eq!(scene.title, TitleEnvelope::default());
    assert!(scene.scroll.is_none());
    assert_eq!(scene.orbit_count(), 1);
}

#[test]
fn json_round_trip_preserves_scene() {
    let scene = Scene::from_json_str(MINIMAL).unwrap();
    let json = scene.to_json_pretty().unwrap();
    assert_eq!(Scene::from_json_str(&json).unwrap(), scene);
}

#[test]
fn from_reader_validates() {
    let bad = MINIMAL.replace(
        "\"name\": \"minimal\",",
        "\"name\": \"minimal\", \"timeline\": { \"entrance_end\": 0.7 },",
    );
    let err = Scene::from_reader(bad.as_bytes()).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn invalid_orbit_surfaces_as_serde_error() {
    let bad = MINIMAL.replace("\"radius\": 6", "\"radius\": -6");
    let err = Scene::from_json_str(&bad).unwrap_err();
    assert!(matches!(err, ScrollPhaseError::Serde(_)));
    assert!(err.to_string().contains("orbit radius"));
}

#[test]
fn duplicate_names_and_bad_motions_are_rejected() {
    let orbit = Motion::Orbit(OrbitingObject::new(6.0, 0.3, 0.0, 0.0, 1.0).unwrap());
    let mut scene = Scene {
        name: "dup".into(),
        timeline: PhaseTimeline::default(),
        style: OrbitStyle::default(),
        scroll: None,
        title: TitleEnvelope::default(),
        actors: vec![Actor::new("a", orbit), Actor::new("a", orbit)],
    };
    assert!(scene.validate().unwrap_err().to_string().contains("duplicate"));

    scene.actors[1] = Actor::new(
        "b",
        Motion::Fall(FallingObject {
            start: Vec3::new(0.0, 1.0, 0.0),
            fall_speed: -1.0,
            floor: -1.0,
            head_start: 0.0,
            spin: Vec3::ZERO,
            drift: 0.0,
            lateral_speed: 0.0,
            wrap_half_width: None,
            base_scale: 1.0,
        }),
    );
    let err = scene.validate().unwrap_err();
    assert!(err.to_string().contains("actor 'b'"));
}

#[test]
fn missing_file_is_a_serde_error() {
    let err = Scene::from_path("definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open scene JSON"));
}

#[test]
fn animator_reflects_scene_configuration() {
    let mut scene = Scene::from_json_str(MINIMAL).unwrap();
    scene.timeline = PhaseTimeline::new(0.2, 0.8).unwrap();
    assert_eq!(scene.animator().unwrap().timeline().exit_start, 0.8);
}
