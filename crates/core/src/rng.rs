//! RNG module - explicit, seedable randomness for piece kinds
//!
//! Nothing in the engine touches a process-wide generator. Every random draw
//! goes through a generator the caller owns, so the same seed always deals the
//! same board and the same refills.
//!
//! [`SimpleRng`] is the default: a tiny LCG that implements [`rand::RngCore`],
//! which makes the whole `rand` API available on top of it. Any other `rand`
//! generator (`StdRng`, `SmallRng`, ...) can be injected instead.

use rand::{Rng, RngCore};

use crate::types::Kind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }

    fn step(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RngCore for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // Low LCG bits have short periods; hand out the high half twice over.
        let hi = self.step() >> 16;
        let lo = self.step() >> 16;
        (hi << 16) | lo
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Uniformly sample one of the playable kinds
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> Kind {
    Kind::ALL[rng.random_range(0..Kind::COUNT)]
}

/// Sample a kind, resampling while it equals `previous`
///
/// Used by refill so that two consecutively created pieces never share a kind.
pub fn random_kind_except<R: Rng + ?Sized>(rng: &mut R, previous: Option<Kind>) -> Kind {
    loop {
        let kind = random_kind(rng);
        if Some(kind) != previous {
            return kind;
        }
    }
}
