use crate::{
    eval::evaluator::EvaluatedFrame,
    foundation::core::{Transform, Vec3},
    foundation::math::Fnv1a64,
};

/// 128-bit digest of an evaluated frame, sensitive to every bit of every transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// High lane.
    pub hi: u64,
    /// Low lane.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint of `frame`.
pub fn fingerprint_frame(frame: &EvaluatedFrame) -> FrameFingerprint {
    let mut a = Fnv1a64::new_default();
    let mut b = Fnv1a64::new(0x9ae1_6a3b_2f90_404f);

    write_f64_pair(&mut a, &mut b, frame.progress.get());
    write_f64_pair(&mut a, &mut b, frame.scroll_px);
    write_f64_pair(&mut a, &mut b, frame.elapsed_secs);
    write_u64_pair(&mut a, &mut b, frame.actors.len() as u64);
    for actor in &frame.actors {
        write_str_pair(&mut a, &mut b, &actor.name);
        match &actor.model {
            Some(m) => {
                write_u8_pair(&mut a, &mut b, 1);
                write_str_pair(&mut a, &mut b, m);
            }
            None => write_u8_pair(&mut a, &mut b, 0),
        }
        write_transform_pair(&mut a, &mut b, &actor.transform);
    }

    FrameFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_transform_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, t: &Transform) {
    write_vec3_pair(a, b, t.position);
    write_vec3_pair(a, b, t.rotation);
    write_f64_pair(a, b, t.scale);
    write_f64_pair(a, b, t.opacity);
}

fn write_vec3_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: Vec3) {
    write_f64_pair(a, b, v.x);
    write_f64_pair(a, b, v.y);
    write_f64_pair(a, b, v.z);
}

fn write_f64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: f64) {
    a.write_f64(v);
    b.write_f64(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_str_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    write_u64_pair(a, b, s.len() as u64);
    a.write_bytes(s.as_bytes());
    b.write_bytes(s.as_bytes());
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
