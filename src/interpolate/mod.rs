pub mod exact;
pub mod gaussian;
pub mod matrix;
pub mod scalar;

use std::fmt;

use num_bigint::BigInt;

use crate::decode::Share;
use crate::error::ReconstructError;
use exact::ExactField;
use matrix::AugmentedMatrix;
use scalar::Scalar;

/// Which number system the linear system is solved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Arithmetic {
    /// IEEE-754 doubles; faithful while values stay within 53 bits.
    #[default]
    Float,
    /// BN254 scalar field; exact for integer-coefficient polynomials.
    Exact,
}

/// The recovered value of the polynomial at x = 0.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantTerm {
    Float(f64),
    Exact(BigInt),
}

impl ConstantTerm {
    pub fn as_f64(&self) -> f64 {
        match self {
            ConstantTerm::Float(value) => *value,
            ConstantTerm::Exact(value) => num_traits::ToPrimitive::to_f64(value).unwrap_or(f64::NAN),
        }
    }
}

impl fmt::Display for ConstantTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantTerm::Float(value) => write!(f, "{value}"),
            ConstantTerm::Exact(value) => write!(f, "{value}"),
        }
    }
}

/// All k coefficients from the first k shares, highest power first.
pub fn solve_shares<F: Scalar>(shares: &[Share], k: usize) -> Result<Vec<F>, ReconstructError> {
    let matrix = AugmentedMatrix::<F>::from_shares(shares, k)?;
    gaussian::solve(matrix)
}

/// Solves for all k coefficients from the first k shares and keeps the last one.
pub fn constant_term<F: Scalar>(shares: &[Share], k: usize) -> Result<F, ReconstructError> {
    solve_shares::<F>(shares, k)?
        .last()
        .copied()
        .ok_or(ReconstructError::InvalidThreshold)
}

pub fn reconstruct(
    shares: &[Share],
    k: usize,
    arithmetic: Arithmetic,
) -> Result<ConstantTerm, ReconstructError> {
    match arithmetic {
        Arithmetic::Float => constant_term::<f64>(shares, k).map(ConstantTerm::Float),
        Arithmetic::Exact => {
            let solution = solve_shares::<ExactField>(shares, k)?;
            exact::integer_coefficients(&solution, &shares[..k])?
                .into_iter()
                .next()
                .map(ConstantTerm::Exact)
                .ok_or(ReconstructError::InvalidThreshold)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadratic_shares() -> Vec<Share> {
        // 2x^2 + x + 3
        vec![Share::new(1, 6), Share::new(2, 13), Share::new(3, 24)]
    }

    #[test]
    fn test_float_constant_term() {
        let c = reconstruct(&quadratic_shares(), 3, Arithmetic::Float).unwrap();
        assert!((c.as_f64() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_constant_term() {
        let c = reconstruct(&quadratic_shares(), 3, Arithmetic::Exact).unwrap();
        assert_eq!(c, ConstantTerm::Exact(BigInt::from(3)));
        assert_eq!(c.to_string(), "3");
    }

    #[test]
    fn test_linear_from_first_two_shares() {
        // y = x^2 + 3 sampled at 1 and 2 looks like the line 3x + 1
        let shares = vec![Share::new(1, 4), Share::new(2, 7), Share::new(3, 12)];
        let c = reconstruct(&shares, 2, Arithmetic::Exact).unwrap();
        assert_eq!(c, ConstantTerm::Exact(BigInt::from(1)));
    }

    #[test]
    fn test_non_integer_polynomial() {
        // y = x/2 + 1/2
        let shares = vec![Share::new(1, 1), Share::new(3, 2)];

        let float = reconstruct(&shares, 2, Arithmetic::Float).unwrap();
        assert!((float.as_f64() - 0.5).abs() < 1e-12);
        assert!(matches!(
            reconstruct(&shares, 2, Arithmetic::Exact),
            Err(ReconstructError::NonIntegralSolution { .. })
        ));
    }

    #[test]
    fn test_float_display() {
        assert_eq!(ConstantTerm::Float(3.0).to_string(), "3");
        assert_eq!(ConstantTerm::Float(-0.5).to_string(), "-0.5");
    }

    #[test]
    fn test_errors_match_between_backends() {
        let shares = vec![Share::new(5, 1), Share::new(5, 2)];
        for arithmetic in [Arithmetic::Float, Arithmetic::Exact] {
            assert!(matches!(
                reconstruct(&shares, 2, arithmetic),
                Err(ReconstructError::SingularMatrix { .. })
            ));
            assert!(matches!(
                reconstruct(&shares, 3, arithmetic),
                Err(ReconstructError::InsufficientPoints { .. })
            ));
        }
    }
}
