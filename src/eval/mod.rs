/// Single-frame evaluation.
pub mod evaluator;
/// Frame digests for determinism checks.
pub mod fingerprint;
/// Batched sampling over progress sweeps.
pub mod sampler;
