use tracing::debug;

use super::matrix::AugmentedMatrix;
use super::scalar::Scalar;
use crate::error::ReconstructError;

/// Solves the system by forward elimination with partial pivoting followed by
/// back-substitution.
///
/// The matrix is consumed: rows are swapped and rewritten in place, so callers
/// that need it afterwards must clone it first. The returned coefficients run
/// from the highest power down to the constant term.
pub fn solve<F: Scalar>(matrix: AugmentedMatrix<F>) -> Result<Vec<F>, ReconstructError> {
    let mut rows = matrix.into_rows();
    let n = rows.len();

    for i in 0..n {
        let mut pivot_row = i;
        for k in i + 1..n {
            if rows[k][i].outranks(&rows[pivot_row][i]) {
                pivot_row = k;
            }
        }

        if rows[pivot_row][i].is_unusable_pivot() {
            debug!(column = i, "no usable pivot");
            return Err(ReconstructError::SingularMatrix { column: i });
        }
        rows.swap(i, pivot_row);

        let (upper, lower) = rows.split_at_mut(i + 1);
        let pivot = &upper[i];
        for row in lower.iter_mut() {
            let c = -row[i] / pivot[i];
            row[i] = F::zero();
            for j in i + 1..=n {
                row[j] = row[j] + c * pivot[j];
            }
        }
    }

    let mut solution = vec![F::zero(); n];
    for i in (0..n).rev() {
        solution[i] = rows[i][n] / rows[i][i];
        for k in (0..i).rev() {
            let known = rows[k][i] * solution[i];
            rows[k][n] = rows[k][n] - known;
        }
    }

    if solution.iter().any(|value| !value.is_representable()) {
        return Err(ReconstructError::NonFiniteSolution);
    }

    Ok(solution)
}
