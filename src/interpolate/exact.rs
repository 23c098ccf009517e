//! Exact reconstruction over the BN254 scalar field.
//!
//! The matrix builder and the eliminator run unchanged on [`Fr`] elements, so no
//! rounding happens regardless of how large the share values are. The recovered
//! coefficients are lifted back to signed integers and the lifted polynomial is
//! checked against the shares, so a system without an integer solution (or one
//! whose coefficients exceed `(p - 1) / 2`) is an error rather than a residue.

use ark_bn254::Fr;
use ark_ff::PrimeField;
use num_bigint::{BigInt, BigUint};

use crate::decode::Share;
use crate::error::ReconstructError;
use crate::polynomial::Polynomial;

pub type ExactField = Fr;

/// Lifts a field element to the integer of least absolute value congruent to it.
pub fn to_signed_integer(value: Fr) -> BigInt {
    let unsigned: BigUint = value.into();
    let half: BigUint = Fr::MODULUS_MINUS_ONE_DIV_TWO.into();

    if unsigned > half {
        let modulus: BigUint = Fr::MODULUS.into();
        BigInt::from(unsigned) - BigInt::from(modulus)
    } else {
        BigInt::from(unsigned)
    }
}

/// Lifts a solution (highest power first) to integer coefficients, constant term
/// first, provided they reproduce every share exactly.
pub fn integer_coefficients(
    solution: &[Fr],
    shares: &[Share],
) -> Result<Vec<BigInt>, ReconstructError> {
    let poly = Polynomial::new(
        solution
            .iter()
            .rev()
            .copied()
            .map(to_signed_integer)
            .collect(),
    );

    if let Some(share) = shares.iter().find(|share| poly.evaluate(share.x) != share.y) {
        return Err(ReconstructError::NonIntegralSolution { x: share.x });
    }
    Ok(poly.coefficient)
}
