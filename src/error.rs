use thiserror::Error;

use crate::decode::DecodeError;

/// Everything that can go wrong while recovering the constant term of one test case.
#[derive(Debug, Error)]
pub enum ReconstructError {
    #[error("cannot decode share {key:?}: {source}")]
    Decode {
        key: String,
        #[source]
        source: DecodeError,
    },

    #[error("threshold k must be at least 1")]
    InvalidThreshold,

    #[error("not enough points to solve the polynomial: need {needed}, found {available}")]
    InsufficientPoints { needed: usize, available: usize },

    /// No non-zero pivot was left for `column`. Happens with duplicate x values.
    #[error("singular system: no usable pivot in column {column}")]
    SingularMatrix { column: usize },

    #[error("elimination produced a non-finite coefficient")]
    NonFiniteSolution,

    /// The field solution does not lift to an integer polynomial through the shares,
    /// e.g. `y = x/2 + 1/2`. Float arithmetic still answers these.
    #[error("no integer-coefficient polynomial passes through the share at x = {x}")]
    NonIntegralSolution { x: i64 },

    #[error("malformed test case: {0}")]
    Malformed(#[from] serde_json::Error),
}
