use log::debug;
use num_bigint::BigInt;

use crate::utils::digits::digits_to_number;
use crate::utils::errors::UtilsError;

/// Split `digits` into contiguous groups, one grouping per cut selector.
///
/// Selector `s` runs over `0..2^(len - 1)`; bit `i` set means a cut after
/// position `i + 1`. Ranges are returned in selector order.
pub fn generate_groupings(digits: &str) -> Vec<Vec<(usize, usize)>> {
    let len = digits.len();
    if len == 0 {
        return vec![];
    }

    let boundaries = len - 1;
    let mut result = Vec::with_capacity(1 << boundaries);
    for selector in 0..(1usize << boundaries) {
        let mut groups = Vec::new();
        let mut start = 0;
        for cut in 0..boundaries {
            if selector & (1 << cut) != 0 {
                groups.push((start, cut + 1));
                start = cut + 1;
            }
        }
        groups.push((start, len));
        result.push(groups);
    }

    debug!("Generated {} groupings for '{}'", result.len(), digits);
    result
}

/// Literal values of every grouping of `digits` whose groups are all valid
/// numerals (no leading zero unless the group is a lone "0").
pub fn year_groupings(digits: &str) -> Vec<Vec<BigInt>> {
    generate_groupings(digits)
        .into_iter()
        .filter_map(|groups| {
            let numbers: Result<Vec<BigInt>, UtilsError> = groups
                .iter()
                .map(|&(start, end)| digits_to_number(digits, start, end))
                .collect();
            match numbers {
                Ok(numbers) => Some(numbers),
                Err(err) => {
                    debug!("Skipping grouping {:?}: {}", groups, err);
                    None
                }
            }
        })
        .collect()
}
