/// Phase-aware transform computation.
pub mod animator;
/// Easing curves.
pub mod ease;
/// Orbit parameters for a single object.
pub mod orbit;
/// Title overlay envelope.
pub mod overlay;
/// Phase windows and the entrance/orbit/exit timeline.
pub mod phase;
