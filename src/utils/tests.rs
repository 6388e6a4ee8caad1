use num_bigint::BigInt;

use crate::utils::{
    UtilsError, digits_to_number, generate_groupings, validate_digit_string, year_groupings,
    year_prefix,
};

fn ints(values: &[i64]) -> Vec<BigInt> {
    values.iter().map(|&n| BigInt::from(n)).collect()
}

#[test]
fn test_generate_groupings_selector_order() {
    let groupings = generate_groupings("1984");
    let expected = vec![
        vec![(0, 4)],
        vec![(0, 1), (1, 4)],
        vec![(0, 2), (2, 4)],
        vec![(0, 1), (1, 2), (2, 4)],
        vec![(0, 3), (3, 4)],
        vec![(0, 1), (1, 3), (3, 4)],
        vec![(0, 2), (2, 3), (3, 4)],
        vec![(0, 1), (1, 2), (2, 3), (3, 4)],
    ];
    assert_eq!(groupings, expected);
}

#[test]
fn test_generate_groupings_short_strings() {
    assert_eq!(generate_groupings("7"), vec![vec![(0, 1)]]);
    assert_eq!(generate_groupings(""), Vec::<Vec<(usize, usize)>>::new());
}

#[test]
fn test_year_groupings_all_accepted() {
    let groupings = year_groupings("1984");
    assert_eq!(groupings.len(), 8);
    assert_eq!(groupings.first(), Some(&ints(&[1984])));
    assert_eq!(groupings.last(), Some(&ints(&[1, 9, 8, 4])));
}

#[test]
fn test_year_groupings_reject_leading_zero() {
    let groupings = year_groupings("1023");
    assert_eq!(groupings.len(), 6);
    assert!(groupings.contains(&ints(&[1, 0, 2, 3])));
    assert!(groupings.contains(&ints(&[10, 23])));
    assert!(groupings.contains(&ints(&[1, 0, 23])));
    assert!(!groupings.contains(&ints(&[1, 23])));
    assert!(!groupings.contains(&ints(&[1, 2, 3])));
}

#[test]
fn test_year_groupings_all_zero() {
    let groupings = year_groupings("0000");
    assert_eq!(groupings, vec![ints(&[0, 0, 0, 0])]);
}

#[test]
fn test_digits_to_number() {
    let result = digits_to_number("1984", 0, 2);
    assert_eq!(result, Ok(BigInt::from(19)));

    let result = digits_to_number("1984", 1, 4);
    assert_eq!(result, Ok(BigInt::from(984)));

    let result = digits_to_number("2000", 1, 2);
    assert_eq!(result, Ok(BigInt::from(0)));
}

#[test]
fn test_digits_to_number_leading_zero() {
    let result = digits_to_number("2023", 1, 3);
    assert_eq!(result, Err(UtilsError::LeadingZero("02".to_string())));
}

#[test]
fn test_digits_to_number_invalid_range() {
    assert!(digits_to_number("1984", 0, 10).is_err());
    assert!(digits_to_number("1984", 3, 2).is_err());
}

#[test]
fn test_validate_digit_string() {
    assert!(validate_digit_string("1984").is_ok());
    assert!(validate_digit_string("0").is_ok());
    assert!(validate_digit_string("").is_err());
    assert!(validate_digit_string("19a4").is_err());
}

#[test]
fn test_year_prefix() {
    assert_eq!(year_prefix("1984\n"), Ok("1984".to_string()));
    assert_eq!(year_prefix("20251231"), Ok("2025".to_string()));
    assert!(matches!(year_prefix("198\n"), Err(UtilsError::TooShort { .. })));
    assert!(matches!(year_prefix("19x4"), Err(UtilsError::InvalidDigitString(_))));
}
