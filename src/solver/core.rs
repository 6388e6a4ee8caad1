use std::sync::Arc;

use log::{debug, info};
use num_bigint::BigInt;
use rayon::prelude::*;

use crate::expression::{Node, Sequence};
use crate::solver::constants::DEFAULT_MAX_STEPS;
use crate::solver::errors::SolverError;
use crate::solver::search::search_solutions;
use crate::solver::solutions::Solutions;
use crate::utils::{validate_digit_string, year_groupings};

/// Searches every digit grouping of a year and keeps the cheapest expressions
pub struct YearSolver {
    max_steps: usize,
}

impl YearSolver {
    /// Create a solver with the default step budget
    pub fn new() -> Self {
        Self::with_max_steps(DEFAULT_MAX_STEPS)
    }

    pub fn with_max_steps(max_steps: usize) -> Self {
        Self { max_steps }
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Search all groupings of `digits` and collect the best solution per integer.
    ///
    /// # Errors
    ///
    /// Returns an error if `digits` is empty or contains non-digit characters.
    pub fn solve(&self, digits: &str) -> Result<Solutions, SolverError> {
        validate_digit_string(digits)?;
        info!(
            "Searching groupings of '{}' with {} steps",
            digits, self.max_steps
        );

        let groupings = year_groupings(digits);
        debug!("{} groupings accepted", groupings.len());

        let per_grouping: Vec<Solutions> = groupings
            .par_iter()
            .map(|numbers| search_solutions(&leaves(numbers), self.max_steps))
            .collect();

        let mut solutions = Solutions::new();
        for found in per_grouping {
            solutions.merge(found);
        }
        info!(
            "Found {} integer values, consecutive up to {}",
            solutions.len(),
            solutions.reach()
        );
        Ok(solutions)
    }

    /// How far the consecutive listing for `digits` reaches
    ///
    /// # Errors
    ///
    /// Same as [`YearSolver::solve`].
    pub fn reach(&self, digits: &str) -> Result<usize, SolverError> {
        Ok(self.solve(digits)?.reach())
    }
}

impl Default for YearSolver {
    fn default() -> Self {
        Self::new()
    }
}

fn leaves(numbers: &[BigInt]) -> Sequence {
    numbers
        .iter()
        .map(|n| Arc::new(Node::literal(n.clone())))
        .collect()
}
