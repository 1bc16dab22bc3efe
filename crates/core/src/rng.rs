//! RNG module - deterministic shuffling for deals
//!
//! A small 64-bit LCG drives a Fisher-Yates shuffle over the twelve-card
//! symbol list. The same seed always produces the same sequence of deals,
//! which keeps games reproducible from the command line and in tests.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses Knuth's MMIX constants and outputs the high 32 bits
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
    seed: u64,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed, seed }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^64
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Low bits of an LCG have short periods; only the top half is used.
        (self.state >> 32) as u32
    }

    /// Generate random value in range [0, max)
    ///
    /// Multiply-shift reduction keeps the result driven by the high bits.
    /// Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// The seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..=12 {
            for _ in 0..200 {
                assert!(rng.next_range(max) < max);
            }
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_next_range_hits_every_value() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 12];
        for _ in 0..1000 {
            seen[rng.next_range(12) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = SimpleRng::new(3);
        let mut values: Vec<u32> = (0..12).collect();
        rng.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_handles_short_slices() {
        let mut rng = SimpleRng::new(3);
        let mut empty: [u8; 0] = [];
        rng.shuffle(&mut empty);
        let mut one = [42u8];
        rng.shuffle(&mut one);
        assert_eq!(one, [42]);
    }

    #[test]
    fn test_seed_is_preserved() {
        let mut rng = SimpleRng::new(2024);
        rng.next_u32();
        assert_eq!(rng.seed(), 2024);
    }
}
