// Number of leading characters of the input line that form the year
pub const YEAR_LENGTH: usize = 4;
