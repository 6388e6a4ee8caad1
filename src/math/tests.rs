use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;

use crate::math::constants::FACTORIAL_LIMIT;
use crate::math::{exact_root, factorial, is_nth_power, nth_root};

fn big(n: i64) -> BigInt {
    BigInt::from(n)
}

#[test]
fn test_nth_root_exact_powers() {
    assert_eq!(nth_root(&big(27), 3), Some(big(3)));
    assert_eq!(nth_root(&big(1024), 10), Some(big(2)));
    assert_eq!(nth_root(&big(81), 2), Some(big(9)));
}

#[test]
fn test_nth_root_rounds_down() {
    assert_eq!(nth_root(&big(26), 3), Some(big(2)));
    assert_eq!(nth_root(&big(80), 2), Some(big(8)));
    assert_eq!(nth_root(&big(1984), 2), Some(big(44)));
}

#[test]
fn test_nth_root_zero_and_one() {
    assert_eq!(nth_root(&big(0), 1), Some(big(0)));
    assert_eq!(nth_root(&big(0), 7), Some(big(0)));
    assert_eq!(nth_root(&big(1), 1), Some(big(1)));
    assert_eq!(nth_root(&big(1), 12), Some(big(1)));
}

#[test]
fn test_nth_root_negative() {
    assert_eq!(nth_root(&big(-8), 2), None);
    assert_eq!(nth_root(&big(-27), 3), Some(big(-3)));
    assert_eq!(nth_root(&big(-30), 3), Some(big(-3)));
}

#[test]
fn test_nth_root_zero_degree() {
    assert_eq!(nth_root(&big(16), 0), None);
}

#[test]
fn test_is_nth_power() {
    assert!(is_nth_power(&big(64), 3));
    assert!(is_nth_power(&big(64), 6));
    assert!(!is_nth_power(&big(63), 3));
    assert!(is_nth_power(&big(-8), 3));
    assert!(!is_nth_power(&big(-4), 2));
    assert!(is_nth_power(&big(0), 5));
}

#[test]
fn test_exact_root_huge_degree() {
    let degree = BigInt::from(u64::MAX);
    assert_eq!(exact_root(&big(1), &degree), Some(big(1)));
    assert_eq!(exact_root(&big(0), &degree), Some(big(0)));
    assert_eq!(exact_root(&big(-1), &degree), Some(big(-1)));
    assert_eq!(exact_root(&big(-1), &(degree + 1)), None);
    assert_eq!(exact_root(&big(2), &BigInt::from(u64::MAX)), None);
}

#[test]
fn test_exact_root_regular_degree() {
    assert_eq!(exact_root(&big(125), &big(3)), Some(big(5)));
    assert_eq!(exact_root(&big(124), &big(3)), None);
    assert_eq!(exact_root(&big(7), &big(1)), Some(big(7)));
}

#[test]
fn test_factorial_table() {
    assert_eq!(factorial(0), Some(&BigRational::from_integer(big(1))));
    assert_eq!(factorial(5), Some(&BigRational::from_integer(big(120))));
    assert_eq!(
        factorial(FACTORIAL_LIMIT),
        Some(&BigRational::from_integer(big(1_307_674_368_000)))
    );
    assert_eq!(factorial(FACTORIAL_LIMIT + 1), None);
}

proptest! {
    #[test]
    fn nth_root_brackets_m(m in 0i64..1_000_000, n in 1u32..8) {
        let m = big(m);
        let root = nth_root(&m, n);
        prop_assert!(root.is_some());
        if let Some(root) = root {
            prop_assert!(root.pow(n) <= m);
            prop_assert!((root + 1u32).pow(n) > m);
        }
    }

    #[test]
    fn powers_are_recognised(r in 0i64..500, n in 1u32..6) {
        prop_assert!(is_nth_power(&big(r).pow(n), n));
    }

    #[test]
    fn odd_roots_are_symmetric(m in 1i64..100_000, n in (0u32..4).prop_map(|k| 2 * k + 1)) {
        prop_assert_eq!(nth_root(&big(-m), n), nth_root(&big(m), n).map(|root| -root));
    }
}
