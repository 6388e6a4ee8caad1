//! Yearexpr - build every consecutive integer from the digits of a year
//!
//! The digits are kept in order and may be grouped into multi-digit numbers.
//! Groups are combined with `+ - × / ^`, negation, factorial and square root
//! over exact rationals, and the expression with the fewest operators is kept
//! for each integer value.

pub mod expression;
pub mod iterator;
pub mod math;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{BinaryOp, Kind, Node, UnaryOp};
pub use solver::{SolverError, Solutions, YearSolver, search};
pub use utils::{UtilsError, validate_digit_string, year_prefix};

/// Solve a year with the default step budget
///
/// # Errors
///
/// This function will return an error if the digit string is empty or
/// contains non-digit characters.
///
/// # Examples
///
/// ```
/// use yearexpr::solve_year;
///
/// if let Ok(solutions) = solve_year("1984") {
///     for (value, expr) in solutions.consecutive() {
///         println!("{} = {}", value, expr);
///     }
/// }
/// ```
pub fn solve_year(digits: &str) -> Result<Solutions, SolverError> {
    YearSolver::new().solve(digits)
}

/// Find the cheapest expression from the given digits that evaluates to the target value
///
/// # Returns
///
/// * `Ok(Some(Node))` - If a matching expression is found
/// * `Ok(None)` - If no matching expression is found
/// * `Err(SolverError)` - If the digit string is invalid
///
/// # Errors
///
/// Same as [`solve_year`].
pub fn find_expression(digits: &str, target: i64) -> Result<Option<Node>, SolverError> {
    let solutions = solve_year(digits)?;
    Ok(solutions.get(&target.into()).cloned())
}
