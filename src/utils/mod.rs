//! Input shape checks and digit grouping

pub mod constants;
mod digits;
mod errors;
mod partitions;
mod validation;

pub use digits::digits_to_number;
pub use errors::UtilsError;
pub use partitions::{generate_groupings, year_groupings};
pub use validation::{validate_digit_string, year_prefix};

#[cfg(test)]
mod tests;
