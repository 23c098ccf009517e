use num_bigint::BigInt;
use rand::Rng;
use tracing::debug;

use crate::decode::{Base, RawShare, Share, ShareValue};
use crate::error::ReconstructError;
use crate::interpolate::{reconstruct, Arithmetic, ConstantTerm};
use crate::polynomial::Polynomial;
use crate::test_case::{Keys, ShareMap, TestCase};

/// Upper bound for the random non-constant coefficients of generated polynomials.
pub const COEFFICIENT_BOUND: u64 = 1 << 20;

/// Splits `secret` into `num_shares` points of a random polynomial of degree
/// `threshold - 1`, at distinct x in `1..=x_max`, sorted by x.
pub fn generate_shares<R: Rng + ?Sized>(
    secret: BigInt,
    threshold: usize,
    num_shares: usize,
    x_max: u32,
    rng: &mut R,
) -> Result<Vec<Share>, ReconstructError> {
    if threshold == 0 || threshold > num_shares {
        return Err(ReconstructError::InvalidThreshold);
    }
    if (x_max as usize) < num_shares {
        return Err(ReconstructError::InsufficientPoints {
            needed: num_shares,
            available: x_max as usize,
        });
    }

    let poly = Polynomial::random(secret, threshold - 1, COEFFICIENT_BOUND, rng);
    debug!(coefficients = ?poly.coefficient, "generated polynomial");

    let mut x_values: Vec<i64> = Vec::with_capacity(num_shares);
    while x_values.len() < num_shares {
        let x = rng.gen_range(1..=x_max) as i64;
        if !x_values.contains(&x) {
            x_values.push(x);
        }
    }
    x_values.sort_unstable();

    Ok(x_values
        .into_iter()
        .map(|x| Share {
            x,
            y: poly.evaluate(x),
        })
        .collect())
}

/// Encodes shares into a test case, every value written in `base`.
pub fn to_test_case(shares: &[Share], threshold: usize, base: u32) -> TestCase {
    let shares: ShareMap = shares
        .iter()
        .map(|share| {
            let raw = RawShare {
                base: Base::from(base),
                value: ShareValue::from(share.y.to_str_radix(base)),
            };
            (share.x.to_string(), raw)
        })
        .collect();

    TestCase {
        keys: Keys {
            n: shares.len(),
            k: threshold,
        },
        shares,
    }
}

/// Recovers the secret from already decoded shares; the first `threshold` are used.
pub fn reconstruct_secret(
    shares: &[Share],
    threshold: usize,
    arithmetic: Arithmetic,
) -> Result<ConstantTerm, ReconstructError> {
    reconstruct(shares, threshold, arithmetic)
}
