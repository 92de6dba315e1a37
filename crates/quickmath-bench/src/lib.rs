//! Shared helpers for quickmath benchmarks: seeded RNG, input generators.

use quickmath::{Mat4, Quat, Vec3, Vec4};

/// Simple xoshiro256** PRNG for reproducible benchmarks (no rand dependency in lib).
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // SplitMix64 to expand seed into state
        let mut z = seed;
        let mut s = [0u64; 4];
        for slot in &mut s {
            z = z.wrapping_add(0x9e3779b97f4a7c15);
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            *slot = z ^ (z >> 31);
        }
        Self { s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }

    /// Uniform f32 in [-1, 1]
    pub fn f32(&mut self) -> f32 {
        ((self.next_u64() as f64) / (u64::MAX as f64) * 2.0 - 1.0) as f32
    }

    /// Uniform f32 in [lo, hi]
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (self.f32() * 0.5 + 0.5) * (hi - lo)
    }
}

pub fn make_rng() -> Rng {
    Rng::new(0xDEAD_BEEF_CAFE_BABE)
}

// --- quickmath generators ---

pub fn random_vec3(n: usize) -> Vec<Vec3> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Vec3::new(rng.f32(), rng.f32(), rng.f32()))
        .collect()
}

pub fn random_vec4(n: usize) -> Vec<Vec4> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Vec4::new(rng.f32(), rng.f32(), rng.f32(), rng.f32()))
        .collect()
}

/// Rigid transforms with a random axis, angle, and offset: always invertible.
pub fn random_mat4(n: usize) -> Vec<Mat4> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            let axis = Vec3::new(rng.f32(), rng.f32(), rng.f32() + 2.0);
            let angle = rng.range(-180.0, 180.0);
            let offset = Vec3::new(rng.f32(), rng.f32(), rng.f32());
            Mat4::translation(offset) * Mat4::rotation_axis(axis, angle)
        })
        .collect()
}

pub fn random_quat(n: usize) -> Vec<Quat> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Quat::new(rng.f32(), rng.f32(), rng.f32(), rng.f32() + 2.0).normalize())
        .collect()
}

pub fn random_euler(n: usize) -> Vec<Vec3> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            Vec3::new(
                rng.range(-180.0, 180.0),
                rng.range(-180.0, 180.0),
                rng.range(-180.0, 180.0),
            )
        })
        .collect()
}

// --- glam conversions (glam is only a dev-dependency, so benches convert raw data) ---

pub fn mat4_cols(m: &Mat4) -> [f32; 16] {
    let mut out = [0.0f32; 16];
    for (c, chunk) in out.chunks_exact_mut(4).enumerate() {
        chunk.copy_from_slice(&m[c].to_array());
    }
    out
}
