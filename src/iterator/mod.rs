pub mod core;
mod state;

pub use self::core::{ReductionSteps, reduction_steps};
