use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use ark_bn254::Fr;
use ark_ff::{Field, Zero};
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

/// Arithmetic the matrix builder and the eliminator need from an element type.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;

    /// `x` raised to `exponent`.
    fn power_of(x: i64, exponent: u32) -> Self;

    fn from_integer(value: &BigInt) -> Self;

    /// Whether `self` should replace `current` as the pivot of a column.
    fn outranks(&self, current: &Self) -> bool;

    /// A pivot nothing can be divided by.
    fn is_unusable_pivot(&self) -> bool;

    fn is_representable(&self) -> bool {
        true
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn power_of(x: i64, exponent: u32) -> Self {
        (x as f64).powi(exponent as i32)
    }

    // Nearest double; anything past f64::MAX becomes infinite and is caught after solving.
    fn from_integer(value: &BigInt) -> Self {
        value.to_f64().unwrap_or(f64::NAN)
    }

    // partial pivoting: the largest magnitude wins, ties keep the earlier row
    fn outranks(&self, current: &Self) -> bool {
        self.abs() > current.abs()
    }

    fn is_unusable_pivot(&self) -> bool {
        *self == 0.0 || !f64::is_finite(*self)
    }

    fn is_representable(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Scalar for Fr {
    fn zero() -> Self {
        <Fr as Zero>::zero()
    }

    fn power_of(x: i64, exponent: u32) -> Self {
        let magnitude = Fr::from(x.unsigned_abs());
        let base = if x < 0 { -magnitude } else { magnitude };
        base.pow([exponent as u64])
    }

    fn from_integer(value: &BigInt) -> Self {
        let magnitude = Fr::from(value.magnitude().clone());
        match value.sign() {
            Sign::Minus => -magnitude,
            _ => magnitude,
        }
    }

    // there is no size in a field, any non-zero element is as good as another
    fn outranks(&self, current: &Self) -> bool {
        current.is_zero() && !self.is_zero()
    }

    fn is_unusable_pivot(&self) -> bool {
        self.is_zero()
    }
}
