/// Fluent scene construction.
pub mod dsl;
/// Scene and actor model.
pub mod model;
/// Per-actor motion rules.
pub mod motion;
pub mod presets;
