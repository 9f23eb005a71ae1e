//! Random sorted input for the binary search tracer.

use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

pub const RANDOM_ARRAY_LEN: usize = 10;
pub const RANDOM_MIN: i64 = 1;
pub const RANDOM_MAX: i64 = 100;

/// Generates sorted arrays, reproducibly when seeded.
///
/// # Examples
///
/// ```
/// use array_trace::ArrayGenerator;
///
/// let mut a = ArrayGenerator::new(Some([7u8; 32]));
/// let mut b = ArrayGenerator::new(Some([7u8; 32]));
/// let values = a.sorted_array(8, 1, 50);
///
/// assert_eq!(values, b.sorted_array(8, 1, 50));
/// assert!(values.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub struct ArrayGenerator {
    seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl ArrayGenerator {
    /// Creates a generator. Without a seed one is drawn from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    pub fn seed(&self) -> [u8; 32] {
        self.seed
    }

    /// `len` integers from `[min, max]`, sorted ascending. Duplicates are
    /// possible. Swapped bounds are accepted.
    pub fn sorted_array(&mut self, len: usize, min: i64, max: i64) -> Vec<i64> {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        let mut values: Vec<i64> = (0..len).map(|_| self.rng.gen_range(low..=high)).collect();
        values.sort_unstable();
        values
    }

    /// An array shaped like the one the visualizer's "random" button produces.
    pub fn demo_array(&mut self) -> Vec<i64> {
        self.sorted_array(RANDOM_ARRAY_LEN, RANDOM_MIN, RANDOM_MAX)
    }
}

/// A fresh random demo array: ten values in `[1, 100]`, sorted.
pub fn generate_random_array() -> Vec<i64> {
    ArrayGenerator::new(None).demo_array()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_array_shape() {
        for _ in 0..50 {
            let values = generate_random_array();
            assert_eq!(values.len(), RANDOM_ARRAY_LEN);
            assert!(values.iter().all(|v| (RANDOM_MIN..=RANDOM_MAX).contains(v)));
            assert!(values.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let seed = [1u8; 32];
        let mut a = ArrayGenerator::new(Some(seed));
        let mut b = ArrayGenerator::new(Some(seed));
        assert_eq!(a.seed(), seed);
        for _ in 0..10 {
            assert_eq!(a.demo_array(), b.demo_array());
        }
    }

    #[test]
    fn test_swapped_bounds() {
        let mut generator = ArrayGenerator::new(None);
        let values = generator.sorted_array(20, 10, -10);
        assert!(values.iter().all(|v| (-10..=10).contains(v)));
    }

    #[test]
    fn test_zero_length() {
        let mut generator = ArrayGenerator::new(None);
        assert!(generator.sorted_array(0, 1, 2).is_empty());
    }
}
