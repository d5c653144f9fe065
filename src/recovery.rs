use crate::mt19937::*;
use crate::Error;

/// Rebuild a generator from N consecutive recorded outputs
///
/// Untemper each output to recover the register it was drawn from
///
/// The capture must start where the source's cursor was at 0; the clone's
/// cursor is left at N so its next draw twists, exactly as the source's
/// next draw would. Outputs before the captured window stay unrecoverable,
/// as does the original seed.
pub fn clone_from_output(outputs: &[u32]) -> Result<Mt19937, Error> {
    if outputs.len() != N {
        return Err(Error::InvalidLength);
    }

    let mut state = [0_u32; N];

    for (i, output) in outputs.iter().enumerate() {
        state[i] = recover_state(*output);
    }

    Ok(Mt19937 {
        state: state,
        index: N,
    })
}

/// Clone a live MT19937 PRNG
///
/// Draw the next N numbers from the source and rebuild its state from them
///
/// The PRNG must be at the beginning of a cycle
pub fn clone(rng: &mut Mt19937) -> Result<Mt19937, Error> {
    if rng.index % N != 0 {
        return Err(Error::InvalidIndex);
    }

    let mut outputs = [0_u32; N];

    for output in outputs.iter_mut() {
        *output = rng.extract_number();
    }

    clone_from_output(outputs.as_ref())
}

/// Recover the seed of a freshly seeded generator from its first output
///
/// Seeding leaves the cursor at 0, so the first output is the tempered
/// seed word itself; no search over candidate seeds is needed
pub fn recover_seed(first_output: u32) -> u32 {
    recover_state(first_output)
}

/// Recover the raw register word used to generate the given output
pub fn recover_state(output: u32) -> u32 {
    // invert the TEMPER_L transformation
    let mut inv_z = untemper_shr(output, L);

    // invert the TEMPER_T transformation
    inv_z = untemper_shl(inv_z, T, C);

    // invert the TEMPER_S transformation
    inv_z = untemper_shl(inv_z, S, B);

    // invert the TEMPER_U transformation
    untemper_shr(inv_z, U)
}

// Invert a `y ^= y >> shift` temper stage by fixed-point iteration
//
// Each pass leaves one more `shift`-wide block of high bits correct, so
// ceil(w / shift) passes recover the full word
fn untemper_shr(output: u32, shift: u32) -> u32 {
    let mut res = output;

    for _i in 0..(W + shift - 1) / shift {
        res = output ^ (res >> shift);
    }

    res
}

// Invert a `y ^= (y << shift) & mask` temper stage by fixed-point iteration
//
// Same argument as untemper_shr, recovering low-order blocks instead
fn untemper_shl(output: u32, shift: u32, mask: u32) -> u32 {
    let mut res = output;

    for _i in 0..(W + shift - 1) / shift {
        res = output ^ ((res << shift) & mask);
    }

    res
}
