use std::cell::Cell;

use super::*;

#[test]
fn normalization_clamps_both_ends() {
    assert_eq!(ScrollSignal::normalize(-100.0, 0.0, 500.0).unwrap().get(), 0.0);
    assert_eq!(ScrollSignal::normalize(600.0, 0.0, 500.0).unwrap().get(), 1.0);
    assert_eq!(ScrollSignal::normalize(250.0, 0.0, 500.0).unwrap().get(), 0.5);
}

#[test]
fn degenerate_ranges_are_rejected_up_front() {
    assert!(
        ScrollRange::new(500.0, 500.0)
            .unwrap_err()
            .is_configuration()
    );
    assert!(ScrollRange::new(500.0, 100.0).is_err());
    assert!(ScrollRange::new(0.0, f64::INFINITY).is_err());
    assert!(ScrollSignal::normalize(10.0, 0.0, 0.0).is_err());
}

#[test]
fn section_range_spans_its_height() {
    let r = ScrollRange::for_section(800.0, 1600.0).unwrap();
    assert_eq!(r.start_px(), 800.0);
    assert_eq!(r.end_px(), 2400.0);
    assert_eq!(r.progress(1600.0).get(), 0.5);
    assert_eq!(r.offset_at(ScrollProgress::new(0.25)), 1200.0);
    assert!(ScrollRange::for_section(0.0, 0.0).is_err());
}

#[test]
fn non_finite_offsets_clamp_or_read_as_start() {
    let r = ScrollRange::new(0.0, 100.0).unwrap();
    assert_eq!(r.progress(f64::NAN), ScrollProgress::START);
    assert_eq!(r.progress(f64::INFINITY), ScrollProgress::END);
    assert_eq!(r.progress(f64::NEG_INFINITY), ScrollProgress::START);
    assert_eq!(r.progress(f64::MAX), ScrollProgress::END);
}

#[test]
fn overflowing_span_is_rejected() {
    let err = ScrollRange::new(-1e308, 1e308).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("span"));
    assert!(ScrollRange::for_section(1e308, 1e308).is_err());
    assert!(ScrollRange::new(-8e307, 8e307).is_ok());
    assert!(
        serde_json::from_str::<ScrollRange>(r#"{ "start_px": -1e308, "end_px": 1e308 }"#)
            .is_err()
    );
}

#[test]
fn signal_pulls_from_injected_source() {
    let offset = Cell::new(0.0);
    let signal = ScrollSignal::new(|| offset.get(), ScrollRange::new(100.0, 300.0).unwrap());
    assert_eq!(signal.progress().get(), 0.0);
    offset.set(200.0);
    assert_eq!(signal.progress().get(), 0.5);
    offset.set(1e6);
    assert_eq!(signal.progress().get(), 1.0);
}

#[test]
fn fixed_source() {
    let signal = ScrollSignal::new(FixedScroll(75.0), ScrollRange::new(0.0, 100.0).unwrap());
    assert_eq!(signal.progress().get(), 0.75);
    assert_eq!(signal.source().scroll_offset_px(), 75.0);
}

#[test]
fn range_deserialization_validates() {
    let r: ScrollRange = serde_json::from_str(r#"{ "start_px": 0, "end_px": 1800 }"#).unwrap();
    assert_eq!(r.span_px(), 1800.0);
    assert!(serde_json::from_str::<ScrollRange>(r#"{ "start_px": 10, "end_px": 10 }"#).is_err());
}
