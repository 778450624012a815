//! Deterministic pseudo-random numbers for fuzzing.

/// A pseudo-random number generator based on Wang Yi's Wyrand.
///
/// See: https://github.com/wangyi-fudan/wyhash
#[derive(Clone, Debug)]
pub(crate) struct Rng {
    state: u64,
}

impl Rng {
    /// Creates a new RNG with the provided seed.
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generates a pseudo-random number within the range `0..2⁶⁴`.
    pub(crate) fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0xA0761D6478BD642F);
        let t = self.state as u128 * (self.state ^ 0xE7037ED1A0B428DB) as u128;

        (t as u64) ^ (t >> 64) as u64
    }

    /// Generates a pseudo-random number within the range `0..upper_bound`.
    ///
    /// The multiply-shift reduction is slightly biased, which is irrelevant
    /// for bounds much smaller than 2⁶⁴.
    pub(crate) fn below(&mut self, upper_bound: u64) -> u64 {
        ((self.next_u64() as u128 * upper_bound as u128) >> 64) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_is_deterministic() {
        let mut a = Rng::new(7);
        let mut b = Rng::new(7);

        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn rng_below_stays_in_range() {
        let mut rng = Rng::new(12345);
        let mut seen = [false; 6];

        for _ in 0..10_000 {
            let face = rng.below(6);
            assert!(face < 6);
            seen[face as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
        assert_eq!(rng.below(0), 0);
    }
}
