// Reduction steps allowed per digit grouping
pub const DEFAULT_MAX_STEPS: usize = 3;
