/// Seeded FNV-1a 64-bit hasher used for stable, platform-independent seeds.
#[derive(Clone, Copy, Debug)]
pub struct Fnv1a64(u64);

impl Fnv1a64 {
    /// Standard FNV-1a 64 offset basis.
    pub const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    /// Start from an explicit state.
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Start from the standard offset basis.
    pub fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    /// Feed one `u64` (little-endian bytes).
    pub fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    /// Feed raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    /// Current hash value.
    pub fn finish(self) -> u64 {
        self.0
    }
}

/// SplitMix64 generator. Small, fast and identical on every platform.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seed a new generator.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next value in `[0, 1)` with 53 bits of precision.
    pub fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

/// Map `x` from `input` to `output` linearly, clamping on both sides.
///
/// A zero-width input range resolves to `output.1` once `x` reaches it and `output.0` before.
pub fn lerp_clamped(x: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in0, in1) = input;
    let (out0, out1) = output;
    if in1 <= in0 {
        return if x < in0 { out0 } else { out1 };
    }
    let t = ((x - in0) / (in1 - in0)).clamp(0.0, 1.0);
    out0 + (out1 - out0) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
