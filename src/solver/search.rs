use std::sync::Arc;

use rayon::prelude::*;

use crate::expression::{Node, UnaryOp};
use crate::iterator::reduction_steps;
use crate::solver::solutions::Solutions;

/// Every fully combined node reachable from `sequence` within `max_steps`.
///
/// A single remaining node is returned together with each valid unary wrap of
/// it; that last wrap does not consume a step. Results keep enumeration order
/// and repeat equal nodes reached along different paths.
pub fn search(sequence: &[Arc<Node>], max_steps: usize) -> Vec<Arc<Node>> {
    let mut results = Vec::new();
    visit_results(sequence, max_steps, &mut |node| results.push(node));
    results
}

/// Feed every result of [`search`] to `found`, in the same order, without
/// collecting them
pub fn visit_results<F>(sequence: &[Arc<Node>], max_steps: usize, found: &mut F)
where
    F: FnMut(Arc<Node>),
{
    if max_steps == 0 {
        return;
    }

    match sequence {
        [] => {}
        [node] => {
            found(Arc::clone(node));
            for op in UnaryOp::ALL {
                if let Some(wrapped) = op.apply(node) {
                    found(Arc::new(wrapped));
                }
            }
        }
        _ => {
            for next in reduction_steps(sequence) {
                visit_results(&next, max_steps - 1, found);
            }
        }
    }
}

/// Best node per integer among the results of [`search`].
///
/// The first expansion layer runs on rayon; each branch keeps only its own
/// best nodes and branches are merged in enumeration order, so ties resolve
/// exactly as in a sequential run.
pub fn search_solutions(sequence: &[Arc<Node>], max_steps: usize) -> Solutions {
    if max_steps == 0 || sequence.len() <= 1 {
        return fold_results(sequence, max_steps);
    }

    let candidates: Vec<_> = reduction_steps(sequence).collect();
    let branches: Vec<Solutions> = candidates
        .par_iter()
        .map(|next| fold_results(next, max_steps - 1))
        .collect();

    let mut solutions = Solutions::new();
    for branch in branches {
        solutions.merge(branch);
    }
    solutions
}

fn fold_results(sequence: &[Arc<Node>], max_steps: usize) -> Solutions {
    let mut solutions = Solutions::new();
    visit_results(sequence, max_steps, &mut |node| solutions.record(node));
    solutions
}
