use log::{debug, warn};

use crate::utils::constants::YEAR_LENGTH;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the string is empty or contains any non-ASCII-digit characters.
pub fn validate_digit_string(digit_string: &str) -> Result<(), UtilsError> {
    debug!("Validating digit string: '{}'", digit_string);

    if digit_string.is_empty() {
        warn!("Digit string is empty");
        return Err(UtilsError::EmptyDigitString);
    }

    if !digit_string.chars().all(|c| c.is_ascii_digit()) {
        warn!(
            "Digit string contains non-digit characters: '{}'",
            digit_string
        );
        return Err(UtilsError::InvalidDigitString(digit_string.to_string()));
    }

    debug!("Digit string validation successful");
    Ok(())
}

/// Take the year from the first `YEAR_LENGTH` characters of an input line.
///
/// # Errors
///
/// Returns an error if the line is shorter than a year or the year is not all digits.
pub fn year_prefix(line: &str) -> Result<String, UtilsError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let year: String = line.chars().take(YEAR_LENGTH).collect();

    if year.chars().count() < YEAR_LENGTH {
        warn!("Input '{}' is too short for a year", line);
        return Err(UtilsError::TooShort {
            expected: YEAR_LENGTH,
            found: year,
        });
    }

    validate_digit_string(&year)?;
    Ok(year)
}
