//! Arithmetic in GF(P) for the fixed prime `PRIME`.
//!
//! Every function takes and returns canonical elements in `[0, PRIME)`.
//! Products are widened to `u128`, since `PRIME` squared does not fit a `u64`.

use crate::PRIME;

pub fn add(a: u64, b: u64) -> u64 {
    ((a as u128 + b as u128) % PRIME as u128) as u64
}

pub fn sub(a: u64, b: u64) -> u64 {
    add(a, neg(b))
}

pub fn mul(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) % PRIME as u128) as u64
}

pub fn neg(a: u64) -> u64 {
    let a = a % PRIME;
    if a == 0 { 0 } else { PRIME - a }
}

/// Multiplicative inverse of `k` via the extended Euclidean algorithm on
/// `(PRIME, k mod PRIME)`.
///
/// Returns `None` when `k` is congruent to zero.
pub fn inv(k: u64) -> Option<u64> {
    let k = k % PRIME;
    if k == 0 {
        return None;
    }

    // Invariant: old_r = s * PRIME + old_t * k (and likewise for r, t).
    let (mut old_r, mut r) = (PRIME as i128, k as i128);
    let (mut old_t, mut t) = (0i128, 1i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_t, t) = (t, old_t - q * t);
    }
    debug_assert_eq!(old_r, 1);

    let mut inverse = old_t;
    while inverse < 0 {
        inverse += PRIME as i128;
    }
    Some(inverse as u64)
}
