use bc_crypto::memzero;
use bc_rand::RandomNumberGenerator;
use tracing::trace;

use crate::{
    PRIME,
    constants::VALUE_LIMIT,
    field::{add, mul},
};

/// One point `(x, y)` on a chunk's sharing polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Share {
    pub x: u64,
    pub y: u64,
}

/// A field element from 8 random bytes (big-endian) reduced mod `PRIME`.
///
/// The reduction leaves a bias of roughly 2^-32, which this scheme accepts.
fn random_element(rng: &mut impl RandomNumberGenerator) -> u64 {
    let mut bytes = [0u8; 8];
    rng.fill_random_data(&mut bytes);
    let value = u64::from_be_bytes(bytes) % PRIME;
    memzero(bytes.as_mut_slice());
    value
}

/// Evaluates `Σ coefficients[j] * x^j` in the field.
fn evaluate(coefficients: &[u64], x: u64) -> u64 {
    let mut power = 1;
    let mut accum = 0;
    for coefficient in coefficients {
        accum = add(accum, mul(*coefficient, power));
        power = mul(power, x);
    }
    accum
}

/// Shares `chunk` among `shard_count` holders so that any `threshold` of
/// them recover it.
///
/// Shard `i` (0-based) receives the point at `x = i + 1`. The polynomial is
/// redrawn if any evaluation would not fit in 32 bits, so every returned `y`
/// is below 2^32.
pub fn generate_shares(
    chunk: u32,
    shard_count: usize,
    threshold: usize,
    rng: &mut impl RandomNumberGenerator,
) -> Vec<Share> {
    let mut coefficients = vec![chunk as u64];
    coefficients.resize(threshold.max(1), 0);

    loop {
        for coefficient in coefficients.iter_mut().skip(1) {
            *coefficient = random_element(rng);
        }

        let shares: Vec<Share> = (1..=shard_count as u64)
            .map(|x| Share {
                x,
                y: evaluate(&coefficients, x),
            })
            .collect();

        if shares.iter().all(|share| share.y < VALUE_LIMIT) {
            memzero(coefficients.as_mut_slice());
            return shares;
        }
        trace!(shard_count, threshold, "share value exceeds 32 bits; redrawing polynomial");
    }
}
