/// Variant of the Mersenne Twister MT19937 (32-bit), constants per Wikipedia pseudo-code:
///
/// https://en.wikipedia.org/wiki/Mersenne_Twister
///
/// Two departures from the reference recurrence are load-bearing here and
/// must not be "fixed" in isolation: the twist mixes the high and low bits
/// of the *same* register (never its successor), and seeding leaves the
/// cursor at 0, so the first twist only happens on draw N + 1.

pub const W: u32 = 32;
pub const N: usize = 624;
pub const M: usize = 397;

pub const A: u32 = 0x9908_b0df;

pub const U: u32 = 11;
pub const D: u32 = 0xffff_ffff;

pub const S: u32 = 7;
pub const B: u32 = 0x9d2c_5680;

pub const T: u32 = 15;
pub const C: u32 = 0xefc6_0000;

pub const L: u32 = 18;

pub const F: u32 = 1_812_433_253;

pub const LOWER_MASK: u32 = 0x7fff_ffff;
pub const UPPER_MASK: u32 = 0x8000_0000;

/// MT19937-variant PRNG (32-bit)
pub struct Mt19937 {
    pub(crate) state: [u32; N],
    pub(crate) index: usize,
}

impl Mt19937 {
    /// Create an initialized generator
    ///
    /// Total over all 32-bit seeds, zero included
    pub fn new(seed: u32) -> Self {
        let mut state = [0_u32; N];
        state[0] = seed;

        for i in 1..N {
            Self::k_distribute(&mut state, i);
        }

        // index stays 0: the untwisted init array feeds the first N draws
        Self {
            state: state,
            index: 0,
        }
    }

    /// Perform k-distribution step to generate initial state from seed value
    pub(crate) fn k_distribute(state: &mut [u32; N], i: usize) {
        // xi = f × (xi−1 ⊕ (xi−1 >> (w−2))) + i
        state[i] = F
            .wrapping_mul(state[i - 1] ^ (state[i - 1] >> (W - 2)))
            .wrapping_add(i as u32);
    }

    /// Extract a tempered value based on MT[index]
    /// calling twist() every n numbers
    pub fn extract_number(&mut self) -> u32 {
        if self.index >= N {
            Self::twist(&mut self.state);
            self.index = 0;
        }

        let y = self.state[self.index];
        self.index += 1;

        temper(y)
    }

    /// Regenerate all N registers in place
    ///
    /// Registers are rewritten in increasing index order; once i + M wraps
    /// past N the recurrence reads a register already rewritten this pass,
    /// and that ordering is observable in the outputs.
    pub(crate) fn twist(state: &mut [u32; N]) {
        for i in 0..N {
            // both mask terms read register i, so x is the register itself;
            // the successor register never feeds the recurrence
            let x = (state[i] & UPPER_MASK) | (state[i] & LOWER_MASK);

            let mut x_a = x >> 1;
            if x & 1 == 1 {
                x_a ^= A;
            }

            state[i] = state[(i + M) % N] ^ x_a;
        }
    }
}

/// Temper a raw register word into an output word
///
/// A bijection over 32-bit words; stage order matters
pub fn temper(y: u32) -> u32 {
    let mut z = y ^ ((y >> U) & D);

    z ^= (z << S) & B;
    z ^= (z << T) & C;

    z ^ (z >> L)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_zero_seed() {
        let mut generator = Mt19937::new(0);

        // every temper stage maps zero to zero
        assert_eq!(generator.extract_number(), 0);
        assert_eq!(temper(0), 0);
    }

    #[test]
    fn check_seed_distribution() {
        let generator = Mt19937::new(1);

        // x1 = 1812433253 * (1 ^ (1 >> 30)) + 1
        assert_eq!(generator.state[1], 1_812_433_254);

        let mut generator = Mt19937::new(1);
        let _ = generator.extract_number();

        assert_eq!(generator.extract_number(), temper(1_812_433_254));
    }

    #[test]
    fn check_twist_cadence() {
        let mut generator = Mt19937::new(42);
        let init_state = generator.state;

        // first N draws temper the untouched init array in order
        for i in 0..N {
            assert_eq!(generator.extract_number(), temper(init_state[i]));
        }
        assert_eq!(generator.state, init_state);

        // draw N + 1 twists exactly once, then tempers the new register 0
        let next = generator.extract_number();
        assert_ne!(generator.state, init_state);
        assert_eq!(generator.index, 1);
        assert_eq!(next, temper(generator.state[0]));
    }

    #[test]
    fn check_determinism() {
        let mut left = Mt19937::new(0xdead_beef);
        let mut right = Mt19937::new(0xdead_beef);

        // span two twists
        for _i in 0..2 * N + 17 {
            assert_eq!(left.extract_number(), right.extract_number());
        }
    }
}
