use std::f64::consts::FRAC_PI_2;

use super::*;

fn pear_flight() -> FlightPath {
    FlightPath {
        from: Vec3::new(15.0, -8.0, -8.0),
        to: Vec3::new(4.0, -2.0, -3.0),
        delay_secs: 1.0,
        rate: 0.5,
        spin_axis: Axis::Y,
        flight_spin: 3.0,
        rest_spin: 0.3,
        base_scale: 1.8,
    }
}

#[test]
fn flight_waits_for_its_delay() {
    let f = pear_flight();
    let t = f.transform(0.5);
    assert_eq!(t.position, f.from);
    assert_eq!(t.opacity, 0.0);
    assert_eq!(t.rotation, Vec3::ZERO);
}

#[test]
fn flight_lands_and_idles() {
    let f = pear_flight();
    // Flight lasts 1 / rate = 2 s after the 1 s delay.
    let landed = f.transform(3.0);
    assert_eq!(landed.position, f.to);
    assert_eq!(landed.opacity, 1.0);
    assert!((landed.rotation.y - 6.0).abs() < 1e-12);

    let later = f.transform(13.0);
    assert_eq!(later.position, f.to);
    assert!((later.rotation.y - (6.0 + 3.0)).abs() < 1e-12);

    // Resting yaw wraps, the flight tumble does not accumulate past landing.
    let much_later = f.transform(1e308);
    assert!(much_later.is_finite());
    assert_eq!(much_later.position, f.to);
}

#[test]
fn flight_fades_in_quickly() {
    let f = pear_flight();
    assert!((f.transform(1.5).opacity - 0.375).abs() < 1e-12);
    assert!((f.flight_fraction(2.0) - 0.5).abs() < 1e-12);
}

#[test]
fn flight_rejects_zero_rate() {
    let f = FlightPath {
        rate: 0.0,
        ..pear_flight()
    };
    assert!(f.validate().unwrap_err().is_configuration());
    assert!(Motion::Flight(f).validate().is_err());
}

fn hero_orange() -> DriftAnchor {
    DriftAnchor {
        anchor: Vec3::new(-2.5, 0.5, 7.0),
        amplitude: Vec3::new(0.3, 0.4, 0.0),
        frequency: Vec3::new(0.6, 0.8, 0.0),
        phase: Vec3::ZERO,
        tumble: Tumble {
            spin_rate: 1.08,
            tilt: 0.25,
            tilt_frequency: 0.5,
            roll: 0.2,
            roll_frequency: 0.4,
            phase: 0.0,
        },
        base_scale: 5.0,
    }
}

#[test]
fn drift_bobs_around_anchor() {
    let d = hero_orange();
    let t0 = d.transform(0.0);
    assert_eq!(t0.position, d.anchor);
    assert!((t0.rotation.z - 0.2).abs() < 1e-12);

    for secs in [1.0, 7.3, 42.0] {
        let t = d.transform(secs);
        assert!((t.position.x - d.anchor.x).abs() <= 0.3 + 1e-12);
        assert!((t.position.y - d.anchor.y).abs() <= 0.4 + 1e-12);
        assert_eq!(t.position.z, d.anchor.z);
        assert!((t.rotation.y.sin() - (1.08 * secs).sin()).abs() < 1e-9);
        assert!((t.rotation.y.cos() - (1.08 * secs).cos()).abs() < 1e-9);
        assert!((t.rotation.z - (0.4 * secs).cos() * 0.2).abs() < 1e-9);
        assert_eq!(t.opacity, 1.0);
    }
}

#[test]
fn drift_phases_are_per_axis() {
    // Orbit-like background bob: sin on x, cos on y and z.
    let (r, speed) = (0.5, 0.2);
    let d = DriftAnchor {
        anchor: Vec3::new(-7.0, 4.0, -8.0),
        amplitude: Vec3::new(r, r * 0.5, r),
        frequency: Vec3::new(speed, speed * 0.7, speed),
        phase: Vec3::new(0.0, FRAC_PI_2, FRAC_PI_2),
        tumble: Tumble {
            spin_rate: 0.3,
            tilt: 0.1,
            tilt_frequency: 0.3,
            ..Tumble::default()
        },
        base_scale: 1.2,
    };
    for secs in [0.0, 1.0, 9.5, 60.0] {
        let t = d.transform(secs);
        assert!((t.position.x - (-7.0 + (secs * speed).sin() * r)).abs() < 1e-9);
        assert!((t.position.y - (4.0 + (secs * speed * 0.7).cos() * r * 0.5)).abs() < 1e-9);
        assert!((t.position.z - (-8.0 + (secs * speed).cos() * r)).abs() < 1e-9);
        assert!((t.rotation.x - (secs * 0.3).sin() * 0.1).abs() < 1e-9);
        assert_eq!(t.rotation.z, 0.0);
    }
}

#[test]
fn drift_json_keeps_tumble_fields_flat() {
    let m: Motion = serde_json::from_str(
        r#"{ "drift": { "anchor": {"x":0,"y":0,"z":0}, "amplitude": {"x":1,"y":1,"z":0},
             "frequency": {"x":1,"y":1,"z":0}, "spin_rate": 0.5, "tilt": 0.1 } }"#,
    )
    .unwrap();
    let Motion::Drift(d) = m else {
        panic!("expected drift");
    };
    assert_eq!(d.tumble.spin_rate, 0.5);
    assert_eq!(d.tumble.roll, 0.0);
    assert_eq!(d.phase, Vec3::ZERO);
    assert_eq!(d.base_scale, 1.0);
}

#[test]
fn motions_stay_finite_for_huge_elapsed_times() {
    let anim = PhaseAnimator::default();
    let motions = [
        Motion::Flight(pear_flight()),
        Motion::Drift(hero_orange()),
        Motion::Fall(FallingObject {
            start: Vec3::new(1.0, 10.0, -2.0),
            fall_speed: 5.0,
            floor: -15.0,
            head_start: 0.0,
            spin: Vec3::new(3.0, -2.0, 0.5),
            drift: 0.24,
            lateral_speed: 2.0,
            wrap_half_width: None,
            base_scale: 1.0,
        }),
        Motion::ScrollSpin(ScrollSpin {
            position: Vec3::ZERO,
            base_rotation: Vec3::new(-0.3, 0.0, 0.0),
            per_px: Vec3::new(0.002, 0.002, 0.0),
            tumble: hero_orange().tumble,
            base_scale: 2.5,
        }),
    ];
    for m in motions {
        for secs in [1e308, f64::MAX] {
            let t = m.transform(&anim, ScrollProgress::new(0.5), 1e308, secs);
            assert!(t.is_finite(), "{}: {t:?}", m.kind());
        }
    }
}

#[test]
fn fall_wraps_back_to_the_top() {
    let f = FallingObject {
        start: Vec3::new(1.0, 10.0, -2.0),
        fall_speed: 5.0,
        floor: -15.0,
        head_start: 0.0,
        spin: Vec3::new(0.1, -0.2, 0.0),
        drift: 0.0,
        lateral_speed: 0.0,
        wrap_half_width: None,
        base_scale: 0.8,
    };
    f.validate().unwrap();
    assert_eq!(f.transform(0.0).position.y, 10.0);
    assert_eq!(f.transform(2.0).position.y, 0.0);
    // One full span of 25 units takes 5 s.
    assert!((f.transform(5.0).position.y - 10.0).abs() < 1e-9);
    assert!((f.transform(6.0).position.y - 5.0).abs() < 1e-9);
    for secs in 0..100 {
        let y = f.transform(f64::from(secs) * 0.37).position.y;
        assert!(y <= 10.0 && y > -15.0);
    }
    assert_eq!(f.transform(10.0).rotation, Vec3::new(1.0, -2.0, 0.0));
}

#[test]
fn fall_rejects_floor_above_start() {
    let f = FallingObject {
        start: Vec3::new(0.0, 0.0, 0.0),
        fall_speed: 1.0,
        floor: 0.0,
        head_start: 0.0,
        spin: Vec3::ZERO,
        drift: 0.0,
        lateral_speed: 0.0,
        wrap_half_width: None,
        base_scale: 1.0,
    };
    assert!(f.validate().is_err());
}

#[test]
fn orbit_motion_delegates_to_animator() {
    let obj = OrbitingObject::new(6.0, 0.3, 0.0, 2.0, 2.5).unwrap();
    let anim = PhaseAnimator::default();
    let p = ScrollProgress::new(0.4);
    assert_eq!(
        Motion::Orbit(obj).transform(&anim, p, 123.0, 10.0),
        anim.compute_transform(&obj, p, 10.0)
    );
    assert_eq!(Motion::Orbit(obj).kind(), "orbit");
}

#[test]
fn motion_json_is_externally_tagged() {
    let m: Motion = serde_json::from_str(
        r#"{ "flight": { "from": {"x":15,"y":-8,"z":-8}, "to": {"x":4,"y":-2,"z":-3},
             "delay_secs": 1.0, "spin_axis": "y", "base_scale": 1.8 } }"#,
    )
    .unwrap();
    match m {
        Motion::Flight(f) => {
            assert_eq!(f.rate, 0.5);
            assert_eq!(f.rest_spin, 0.3);
        }
        other => panic!("unexpected motion {other:?}"),
    }
}

#[test]
fn fall_can_start_midway_and_wrap_sideways() {
    let f = FallingObject {
        start: Vec3::new(9.0, 10.0, 0.0),
        fall_speed: 5.0,
        floor: -10.0,
        head_start: 5.0,
        spin: Vec3::ZERO,
        drift: 0.0,
        lateral_speed: 1.0,
        wrap_half_width: Some(10.0),
        base_scale: 1.0,
    };
    f.validate().unwrap();
    let t0 = f.transform(0.0);
    assert_eq!(t0.position.y, 5.0);
    assert_eq!(t0.position.x, 9.0);
    // Crossing x = 10 re-enters at the left edge.
    let t2 = f.transform(2.0);
    assert!((t2.position.x - (-9.0)).abs() < 1e-12);
    assert_eq!(t2.position.y, -5.0);
    for secs in 0..200 {
        let x = f.transform(f64::from(secs) * 0.73).position.x;
        assert!((-10.0..10.0).contains(&x));
    }

    let bad = FallingObject {
        wrap_half_width: Some(0.0),
        ..f
    };
    assert!(bad.validate().is_err());
}

#[test]
fn scroll_spin_turns_with_the_page() {
    let s = ScrollSpin {
        position: Vec3::new(-3.0, 0.0, 0.0),
        base_rotation: Vec3::new(-0.3, 0.0, 0.0),
        per_px: Vec3::new(0.002, 0.002, 0.0),
        tumble: Tumble::default(),
        base_scale: 2.5,
    };
    s.validate().unwrap();
    assert_eq!(s.transform(0.0, 5.0).rotation, Vec3::new(-0.3, 0.0, 0.0));
    let t = s.transform(500.0, 5.0);
    assert!((t.rotation.x - 0.7).abs() < 1e-12);
    assert!((t.rotation.y - 1.0).abs() < 1e-12);
    assert_eq!(t.position, s.position);
    assert_eq!(s.transform(f64::NAN, 0.0), s.transform(0.0, 0.0));

    let anim = PhaseAnimator::default();
    let m = Motion::ScrollSpin(s);
    assert_eq!(m.kind(), "scroll_spin");
    assert_eq!(m.transform(&anim, ScrollProgress::END, 500.0, 5.0), t);
}

#[test]
fn scroll_spin_adds_the_clock_tumble() {
    let s = ScrollSpin {
        position: Vec3::ZERO,
        base_rotation: Vec3::new(0.3, 0.0, 0.0),
        per_px: Vec3::new(0.002, 0.002, 0.0),
        tumble: Tumble {
            spin_rate: 0.18,
            tilt: 0.3,
            tilt_frequency: 0.5,
            roll: 0.2,
            roll_frequency: 0.3,
            phase: 0.0,
        },
        base_scale: 2.5,
    };
    let (px, secs) = (250.0, 2.0);
    let t = s.transform(px, secs);
    assert!((t.rotation.x - (0.3 + px * 0.002 + (secs * 0.5).sin() * 0.3)).abs() < 1e-12);
    assert!((t.rotation.y - (px * 0.002 + 0.18 * secs)).abs() < 1e-12);
    assert!((t.rotation.z - (secs * 0.3).cos() * 0.2).abs() < 1e-12);
}
