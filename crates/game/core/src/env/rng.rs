//! RNG oracle for deterministic random placement.
//!
//! Placement is the only random step in a skirmish. It is driven through a
//! trait so tests can inject a predictable source while production code keeps
//! a seeded PCG generator.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same value. Together with [`compute_seed`] this makes
//! a whole placement sequence reproducible from a single game seed.

/// Redraws [`RngOracle::pick_index`] makes before settling for a biased draw.
const PICK_ATTEMPTS: u64 = 8;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    ///
    /// A single modulo reduction: slightly biased unless the span divides 2^32.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32(seed)) % span) as u32
    }

    /// Pick an index into a collection of `len` elements, uniformly.
    ///
    /// Draws past the largest multiple of `len` below 2^32 are rejected and
    /// redrawn from a derived seed. After `PICK_ATTEMPTS` rejections the last
    /// draw is reduced anyway, so a degenerate oracle still terminates.
    /// Collections beyond `u32::MAX` elements only reach their first
    /// `u32::MAX` indices.
    ///
    /// Returns `None` for an empty collection.
    fn pick_index(&self, seed: u64, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let bound = u64::from(u32::try_from(len).unwrap_or(u32::MAX));
        let limit = (1u64 << 32) - (1u64 << 32) % bound;

        let mut draw = self.next_u32(seed);
        for attempt in 1..=PICK_ATTEMPTS {
            if u64::from(draw) < limit {
                break;
            }
            draw = self.next_u32(seed.wrapping_add(attempt.wrapping_mul(0x9e3779b97f4a7c15)));
        }
        Some((u64::from(draw) % bound) as usize)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state. Each call performs a single step from the provided seed.
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed for one random draw.
///
/// * `game_seed` - Base seed fixed at game construction
/// * `nonce` - Sequence number of the draw (the placement counter)
/// * `player_id` - Player the draw is made for
/// * `context` - Distinguishes several draws for the same player and nonce
pub fn compute_seed(game_seed: u64, nonce: u64, player_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (player_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
