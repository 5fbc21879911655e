/// Scroll sources, ranges and the progress signal.
pub mod signal;
