use super::*;

fn p(v: f64) -> ScrollProgress {
    ScrollProgress::new(v)
}

#[test]
fn default_boundaries_match_site_tuning() {
    let t = PhaseTimeline::default();
    assert_eq!(t.entrance_end, 0.15);
    assert_eq!(t.exit_start, 0.6);
    assert_eq!(t.entrance_ease, Ease::OutCubic);
    t.validate().unwrap();
}

#[test]
fn rejects_inverted_or_touching_boundaries() {
    assert!(PhaseTimeline::new(0.6, 0.6).unwrap_err().is_configuration());
    assert!(PhaseTimeline::new(0.7, 0.6).is_err());
    assert!(PhaseTimeline::new(0.0, 0.6).is_err());
    assert!(PhaseTimeline::new(0.2, 1.0).is_err());
    assert!(PhaseTimeline::new(f64::NAN, 0.6).is_err());
}

#[test]
fn windows_tile_the_unit_interval() {
    let [a, b, c] = PhaseTimeline::default().windows();
    assert_eq!(a.start, 0.0);
    assert_eq!(a.end, b.start);
    assert_eq!(b.end, c.start);
    assert_eq!(c.end, 1.0);
    for w in [a, b, c] {
        w.validate().unwrap();
    }
}

#[test]
fn window_rejects_degenerate_interval() {
    assert!(PhaseWindow::new(PhaseKind::Orbit, 0.5, 0.5, Ease::Linear).is_err());
    assert!(PhaseWindow::new(PhaseKind::Orbit, -0.1, 0.5, Ease::Linear).is_err());
    let w = PhaseWindow::new(PhaseKind::Orbit, 0.2, 0.6, Ease::Linear).unwrap();
    assert!(w.contains(p(0.2)));
    assert!(w.contains(p(0.6)));
    assert!(!w.contains(p(0.61)));
    assert!((w.raw_factor(p(0.4)) - 0.5).abs() < 1e-12);
}

#[test]
fn phase_at_assigns_boundaries_to_orbit() {
    let t = PhaseTimeline::default();
    assert_eq!(t.phase_at(p(0.0)), PhaseKind::Entrance);
    assert_eq!(t.phase_at(p(0.15)), PhaseKind::Orbit);
    assert_eq!(t.phase_at(p(0.6)), PhaseKind::Orbit);
    assert_eq!(t.phase_at(p(0.61)), PhaseKind::Exit);
}

#[test]
fn entrance_factor_is_linear_and_reach_is_eased() {
    let f = PhaseTimeline::default().factors(p(0.075));
    assert!((f.entrance - 0.5).abs() < 1e-12);
    assert!((f.entrance_reach - 0.875).abs() < 1e-12);
    assert_eq!(f.exit, 0.0);
}

#[test]
fn entrance_factor_is_monotonic() {
    let t = PhaseTimeline::default();
    let mut prev = 0.0;
    for i in 0..=150 {
        let f = t.factors(p(f64::from(i) / 1000.0)).entrance;
        assert!(f >= prev);
        prev = f;
    }
    assert_eq!(prev, 1.0);
}

#[test]
fn radius_blend_is_full_after_entrance() {
    let t = PhaseTimeline::default();
    assert_eq!(t.factors(p(0.15)).radius_blend(), 1.0);
    assert_eq!(t.factors(p(0.3)).radius_blend(), 1.0);
    assert_eq!(t.factors(p(0.0)).radius_blend(), 0.0);
}

#[test]
fn exit_factor_spans_exit_window() {
    let t = PhaseTimeline::default();
    assert_eq!(t.factors(p(0.6)).exit, 0.0);
    assert!((t.factors(p(0.8)).exit - 0.5).abs() < 1e-12);
    assert_eq!(t.factors(p(1.0)).exit, 1.0);
}

#[test]
fn partial_json_fills_defaults() {
    let t: PhaseTimeline = serde_json::from_str(r#"{ "exit_start": 0.7 }"#).unwrap();
    assert_eq!(t.entrance_end, 0.15);
    assert_eq!(t.exit_start, 0.7);
    assert_eq!(t.exit_ease, Ease::Linear);
}
