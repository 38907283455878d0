// Minimal PRNG (no external crates).
//
// This is NOT cryptographically secure and nothing here is quantum.
// It drives the simulated bit measurements and the cosmetic particle field.

/// A source of independent fair coin flips.
///
/// The generator only ever asks for one bit at a time, so anything that can
/// answer "heads or tails" can stand in for the PRNG (tests script exact bit
/// streams this way).
pub trait BitSource {
    fn flip(&mut self) -> bool;
}

impl<B: BitSource + ?Sized> BitSource for &mut B {
    #[inline]
    fn flip(&mut self) -> bool {
        (**self).flip()
    }
}

#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        // Avoid a zero state.
        let seed = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state: seed }
    }

    /// Seed from the wall clock. Good enough for a toy; two calls in the same
    /// nanosecond would repeat.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_clock() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(nanos ^ ((std::process::id() as u64) << 32))
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        // Marsaglia / Vigna family. Simple, fast, fine for a demo.
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 high bits -> [0,1).
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    #[inline]
    pub fn gen_range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64_01()
    }
}

impl BitSource for Prng {
    #[inline]
    fn flip(&mut self) -> bool {
        // Top bit of the scrambled output; the low bits of xorshift* are weaker.
        self.next_u64() >> 63 == 1
    }
}
