// Arithmetic limits shared by the operator catalog
pub const FACTORIAL_LIMIT: usize = 15;
pub const EXPONENT_LIMIT: i64 = 20;
