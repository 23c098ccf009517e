use tracing::debug;

use super::scalar::Scalar;
use crate::decode::Share;
use crate::error::ReconstructError;

/// k rows of `[x^(k-1), ..., x, 1, y]`, the linear system for the k coefficients
/// of the interpolating polynomial.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<F> {
    rows: Vec<Vec<F>>,
}

impl<F: Scalar> AugmentedMatrix<F> {
    /// Uses the first `k` shares in the order given.
    pub fn from_shares(shares: &[Share], k: usize) -> Result<Self, ReconstructError> {
        if k == 0 {
            return Err(ReconstructError::InvalidThreshold);
        }
        if shares.len() < k {
            return Err(ReconstructError::InsufficientPoints {
                needed: k,
                available: shares.len(),
            });
        }

        let rows: Vec<Vec<F>> = shares
            .iter()
            .take(k)
            .map(|share| {
                let mut row: Vec<F> = (0..k)
                    .rev()
                    .map(|power| F::power_of(share.x, power as u32))
                    .collect();
                row.push(F::from_integer(&share.y));
                row
            })
            .collect();

        debug!(k, ?rows, "built augmented matrix");
        Ok(AugmentedMatrix { rows })
    }

    /// `None` unless there are n rows of n + 1 entries, n >= 1.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Option<Self> {
        let n = rows.len();
        if n == 0 || rows.iter().any(|row| row.len() != n + 1) {
            return None;
        }
        Some(AugmentedMatrix { rows })
    }

    /// Number of unknowns.
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<F>] {
        &self.rows
    }

    pub(crate) fn into_rows(self) -> Vec<Vec<F>> {
        self.rows
    }
}
