use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use once_cell::sync::Lazy;

use crate::math::constants::FACTORIAL_LIMIT;

static FACTORIALS: Lazy<Vec<BigRational>> = Lazy::new(|| {
    let mut table = Vec::with_capacity(FACTORIAL_LIMIT + 1);
    let mut acc = BigInt::one();
    table.push(BigRational::from_integer(acc.clone()));
    for n in 1..=FACTORIAL_LIMIT {
        acc *= BigInt::from(n);
        table.push(BigRational::from_integer(acc.clone()));
    }
    table
});

/// Exact `n!` for `n` in `0..=FACTORIAL_LIMIT`, `None` beyond the table
pub fn factorial(n: usize) -> Option<&'static BigRational> {
    FACTORIALS.get(n)
}
