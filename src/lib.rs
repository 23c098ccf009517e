//! Recovers the constant term of a hidden polynomial from k of its (x, y) points,
//! the reconstruction step of Shamir-style threshold secret sharing.

pub mod batch;
pub mod decode;
pub mod error;
pub mod interpolate;
pub mod polynomial;
pub mod shamir_secret_sharing;
pub mod test_case;

pub use batch::{reconstruct_document, CaseReport};
pub use decode::{decode_share, DecodeError, RawShare, Share};
pub use error::ReconstructError;
pub use interpolate::{reconstruct, Arithmetic, ConstantTerm};
pub use test_case::{Keys, ShareMap, TestCase};
