use crate::mt19937::Mt19937;

/// Draw a double in [0, 1) with 53 bits of precision
///
/// Consumes two generator words: 27 high bits of the first and
/// 26 high bits of the second
pub fn next_f64(rng: &mut Mt19937) -> f64 {
    let a = rng.extract_number() >> 5;
    let b = rng.extract_number() >> 6;

    // a * 2^26 + b, scaled down by 2^53
    (a as f64 * 67_108_864.0 + b as f64) / 9_007_199_254_740_992.0
}

/// Uniform [0, 1) source backed by the MT19937 variant
pub struct Uniform {
    rng: Mt19937,
}

impl Uniform {
    /// Create a freshly seeded uniform source
    pub fn new(seed: u32) -> Self {
        Self {
            rng: Mt19937::new(seed),
        }
    }

    /// Draw the next double in [0, 1)
    pub fn next(&mut self) -> f64 {
        next_f64(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mt19937::temper;

    #[test]
    fn check_zero_seed_f64() {
        let mut rng = Mt19937::new(0);

        let a = temper(0) >> 5;
        let b = temper(rng.state[1]) >> 6;
        let expected = a as f64 * 67_108_864.0 + b as f64;

        assert_eq!(next_f64(&mut rng), expected / 9_007_199_254_740_992.0);
    }
}
