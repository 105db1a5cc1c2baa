use crate::{
    Error, Result,
    field::{add, inv, mul, neg, sub},
    polynomial::Share,
};

/// Lagrange-interpolates the polynomial through `shares` and evaluates it
/// at `x = 0`:
///
/// ```text
///              ---              ---    (0 - xj)
///   f(0)  =    \     yi   *     | |   -----------
///              /            j != i    (xi - xj)
///              ---
///               i
/// ```
///
/// Any number of points at or above the polynomial's degree + 1 gives the
/// same result. The points are trusted: inconsistent shares produce a wrong
/// value rather than an error.
pub fn interpolate_at_zero(shares: &[Share]) -> Result<u64> {
    if shares.is_empty() {
        return Err(Error::InsufficientShares {
            required: 1,
            provided: 0,
        });
    }

    let mut accum = 0;
    for (i, share_i) in shares.iter().enumerate() {
        let mut numerator = 1;
        let mut denominator = 1;
        for (j, share_j) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = mul(numerator, neg(share_j.x));
            denominator = mul(denominator, sub(share_i.x, share_j.x));
        }

        let denominator_inv = inv(denominator)
            .ok_or_else(|| Error::DuplicateShareIndex(duplicate_index(shares, share_i.x)))?;
        let term = mul(mul(share_i.y, numerator), denominator_inv);
        accum = add(accum, term);
    }
    Ok(accum)
}

/// The 0-based shard index repeated within `shares`, starting from `x`.
fn duplicate_index(shares: &[Share], x: u64) -> u16 {
    let repeated = shares
        .iter()
        .enumerate()
        .find(|(i, a)| shares[i + 1..].iter().any(|b| b.x == a.x))
        .map_or(x, |(_, share)| share.x);
    repeated.saturating_sub(1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PRIME, polynomial::generate_shares};
    use bc_rand::make_fake_random_number_generator;

    fn share(x: u64, y: u64) -> Share {
        Share { x, y }
    }

    #[test]
    fn test_line() {
        // f(x) = 7 + 3x
        let shares = [share(1, 10), share(2, 13)];
        assert_eq!(interpolate_at_zero(&shares).unwrap(), 7);
        let reversed = [share(2, 13), share(1, 10)];
        assert_eq!(interpolate_at_zero(&reversed).unwrap(), 7);
    }

    #[test]
    fn test_single_point_is_constant() {
        assert_eq!(interpolate_at_zero(&[share(5, 99)]).unwrap(), 99);
    }

    #[test]
    fn test_wrapping_values() {
        // f(x) = 1 + (P - 1)x, so f(1) = 0 and f(2) = P - 1.
        let shares = [share(1, 0), share(2, PRIME - 1)];
        assert_eq!(interpolate_at_zero(&shares).unwrap(), 1);
    }

    #[test]
    fn test_any_subset_recovers() {
        let mut rng = make_fake_random_number_generator();
        let shares = generate_shares(0x1234_5678, 6, 3, &mut rng);
        for a in 0..6 {
            for b in a + 1..6 {
                for c in b + 1..6 {
                    let subset = [shares[a], shares[b], shares[c]];
                    assert_eq!(interpolate_at_zero(&subset).unwrap(), 0x1234_5678);
                }
            }
        }
        assert_eq!(interpolate_at_zero(&shares).unwrap(), 0x1234_5678);
    }

    #[test]
    fn test_duplicate_x() {
        let shares = [share(1, 10), share(3, 16), share(3, 16)];
        match interpolate_at_zero(&shares) {
            Err(Error::DuplicateShareIndex(index)) => assert_eq!(index, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty() {
        assert!(matches!(
            interpolate_at_zero(&[]),
            Err(Error::InsufficientShares { required: 1, provided: 0 })
        ));
    }
}
