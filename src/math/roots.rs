use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Greatest `r >= 0` with `r^n <= m`, found by binary search.
///
/// Negative `m` is only accepted for odd `n`, in which case the result is
/// `-nth_root(-m, n)`. Returns `None` for an even root of a negative number
/// and for `n == 0`.
pub fn nth_root(m: &BigInt, n: u32) -> Option<BigInt> {
    if n == 0 {
        return None;
    }

    if m.is_negative() {
        if n.is_even() {
            return None;
        }
        return nth_root(&-m, n).map(|root| -root);
    }

    let mut lo = BigInt::zero();
    let mut hi = search_ceiling(m, n);
    while &hi - &lo > BigInt::one() {
        let mid: BigInt = (&lo + &hi) >> 1u32;
        if mid.pow(n) > *m {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Some(lo)
}

/// Exclusive upper bound for the root of a non-negative `m`.
///
/// `m + 1` always works; `2^(bits(m) / n + 1)` is also above the root and keeps
/// `mid^n` small when `n` is large.
fn search_ceiling(m: &BigInt, n: u32) -> BigInt {
    let by_bits = BigInt::one() << (m.bits() / u64::from(n) + 1);
    let by_value = m + BigInt::one();
    by_value.min(by_bits)
}

/// True iff `m` is the `n`-th power of an integer
pub fn is_nth_power(m: &BigInt, n: u32) -> bool {
    nth_root(m, n).is_some_and(|root| root.pow(n) == *m)
}

/// The exact `degree`-th root of `m`, if it exists.
///
/// Degrees too large for `u32` only have the trivial roots of 0, 1 and -1.
pub fn exact_root(m: &BigInt, degree: &BigInt) -> Option<BigInt> {
    match degree.to_u32() {
        Some(n) => nth_root(m, n).filter(|root| root.pow(n) == *m),
        None if !degree.is_positive() => None,
        None if m.is_zero() || m.is_one() => Some(m.clone()),
        None if *m == -BigInt::one() && degree.is_odd() => Some(m.clone()),
        None => None,
    }
}
