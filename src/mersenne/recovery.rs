use super::mt19937_64::*;
use super::Error;

/// Clone an MT19937-64 PRNG
///
/// Output the next N random numbers of an MT19937-64 PRNG
/// Recover the twisted state based on the outputs
///
/// The PRNG must be at the beginning of a cycle
pub fn clone<const N: usize>(rng: &mut Mt19937_64<N>) -> Result<Mt19937_64<N>, Error> {
    if !rng.at_cycle_start() {
        return Err(Error::InvalidIndex);
    }

    let mut state = [0_u64; N];

    // recover the twisted state from the rng outputs
    // the clone twists it again on its first extraction, same as the original
    for word in state.iter_mut() {
        *word = untemper(rng.extract()?);
    }

    Ok(Mt19937_64 {
        state: state,
        cursor: Cursor::Fresh,
    })
}

/// Recover the MT19937-64 state word used to generate the given random number
pub fn untemper(rand_num: u64) -> u64 {
    // invert the tempering steps in reverse order
    let mut inv_z = undo_right(rand_num, L, !0);
    inv_z = undo_left(inv_z, T, C);
    inv_z = undo_left(inv_z, S, B);
    undo_right(inv_z, U, D)
}

// Invert z = y ^ ((y >> shift) & mask)
//
// Each round recovers the next `shift` bits below the already known upper bits
fn undo_right(rand_num: u64, shift: u64, mask: u64) -> u64 {
    let mut res = rand_num;
    for _ in 0..W / shift {
        res = rand_num ^ ((res >> shift) & mask);
    }
    res
}

// Invert z = y ^ ((y << shift) & mask)
fn undo_left(rand_num: u64, shift: u64, mask: u64) -> u64 {
    let mut res = rand_num;
    for _ in 0..W / shift {
        res = rand_num ^ ((res << shift) & mask);
    }
    res
}
