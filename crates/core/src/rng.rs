//! RNG module - deterministic value generation
//!
//! Block values, cosmetic colors, and target sums are all drawn from a simple
//! seeded LCG so an entire session can be replayed from its seed. Uses
//! constants from Numerical Recipes.

/// Simple LCG (Linear Congruential Generator) RNG
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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate random value in the inclusive range [min, max]
    pub fn next_between(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max);
        min + self.next_range(max - min + 1)
    }

    /// Get the current RNG state (for replaying a session)
    pub fn state(&self) -> u32 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        // Different seeds should eventually diverge
        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_between_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let v = rng.next_between(10, 30);
            assert!((10..=30).contains(&v));
        }
        for _ in 0..1000 {
            let v = rng.next_between(1, 9);
            assert!((1..=9).contains(&v));
        }
    }

    #[test]
    fn test_next_between_covers_bounds() {
        let mut rng = SimpleRng::new(99);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..10_000 {
            match rng.next_between(1, 9) {
                1 => seen_min = true,
                9 => seen_max = true,
                _ => {}
            }
        }
        assert!(seen_min && seen_max);
    }
}
