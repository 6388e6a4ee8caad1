//! Exact integer helpers used by the operator catalog

pub mod constants;
mod factorial;
mod roots;

pub use factorial::factorial;
pub use roots::{exact_root, is_nth_power, nth_root};

#[cfg(test)]
mod tests;
