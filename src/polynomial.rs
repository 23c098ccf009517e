use num_bigint::BigInt;
use rand::Rng;

#[derive(Debug, PartialEq, Clone)]
pub struct Polynomial {
    // 1 coefficient for each power of x, constant term first
    pub coefficient: Vec<BigInt>,
}

impl Polynomial {
    pub fn new(coefficient: Vec<BigInt>) -> Self {
        if coefficient.is_empty() {
            return Polynomial {
                coefficient: vec![BigInt::from(0)],
            };
        }
        Polynomial { coefficient }
    }

    /// `secret` plus `degree` random coefficients in `0..=bound`; the leading one is never zero.
    pub fn random<R: Rng + ?Sized>(secret: BigInt, degree: usize, bound: u64, rng: &mut R) -> Self {
        let mut coefficient = Vec::with_capacity(degree + 1);
        coefficient.push(secret);
        for power in 1..=degree {
            let low = if power == degree { 1 } else { 0 };
            coefficient.push(BigInt::from(rng.gen_range(low..=bound.max(1))));
        }
        Polynomial { coefficient }
    }

    // an empty coefficient list is the zero polynomial
    pub fn degree(&self) -> usize {
        self.coefficient.len().saturating_sub(1)
    }

    pub fn constant_term(&self) -> BigInt {
        self.coefficient.first().cloned().unwrap_or_default()
    }

    /*
        Horner's rule from the highest power down:
        5x^3 + 3x + 7 = ((5x + 0)x + 3)x + 7
    */
    pub fn evaluate(&self, x: i64) -> BigInt {
        let x = BigInt::from(x);
        self.coefficient
            .iter()
            .rev()
            .fold(BigInt::from(0), |acc, curr| acc * &x + curr)
    }
}
