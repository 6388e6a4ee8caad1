pub mod constants;
mod core;
mod errors;
mod search;
mod solutions;

pub use self::core::YearSolver;
pub use errors::SolverError;
pub use search::{search, search_solutions, visit_results};
pub use solutions::Solutions;
