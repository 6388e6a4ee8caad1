use std::sync::Arc;

use log::trace;

use crate::expression::{BinaryOp, Node, Sequence, UnaryOp};

use super::state::StepCursor;

/// Lazily yields every sequence reachable from `sequence` by one operator.
///
/// Unary applications come first (node by node, in catalog order), then binary
/// applications on each adjacent pair. A unary step keeps the length, a binary
/// step shortens it by one.
#[derive(Debug, Clone)]
pub struct ReductionSteps<'a> {
    sequence: &'a [Arc<Node>],
    cursor: StepCursor,
}

impl<'a> ReductionSteps<'a> {
    pub fn new(sequence: &'a [Arc<Node>]) -> Self {
        Self {
            sequence,
            cursor: StepCursor::new(),
        }
    }

    /// Copy of the sequence with `width` nodes at `index` replaced by `node`
    fn splice(&self, index: usize, width: usize, node: Node) -> Sequence {
        let mut next = Vec::with_capacity(self.sequence.len() + 1 - width);
        next.extend(self.sequence.iter().take(index).cloned());
        next.push(Arc::new(node));
        next.extend(self.sequence.iter().skip(index + width).cloned());
        next
    }
}

impl Iterator for ReductionSteps<'_> {
    type Item = Sequence;

    fn next(&mut self) -> Option<Sequence> {
        loop {
            match self.cursor {
                StepCursor::Unary { index, op } => {
                    let Some(node) = self.sequence.get(index) else {
                        self.cursor = StepCursor::Binary { index: 0, op: 0 };
                        continue;
                    };
                    let Some(&unary) = UnaryOp::ALL.get(op) else {
                        self.cursor = StepCursor::Unary {
                            index: index + 1,
                            op: 0,
                        };
                        continue;
                    };
                    self.cursor = StepCursor::Unary { index, op: op + 1 };

                    if let Some(result) = unary.apply(node) {
                        trace!("Unary step {:?} at {}: {}", unary, index, result);
                        return Some(self.splice(index, 1, result));
                    }
                }
                StepCursor::Binary { index, op } => {
                    let (Some(left), Some(right)) =
                        (self.sequence.get(index), self.sequence.get(index + 1))
                    else {
                        self.cursor = StepCursor::Exhausted;
                        continue;
                    };
                    let Some(&binary) = BinaryOp::ALL.get(op) else {
                        self.cursor = StepCursor::Binary {
                            index: index + 1,
                            op: 0,
                        };
                        continue;
                    };
                    self.cursor = StepCursor::Binary { index, op: op + 1 };

                    if let Some(result) = binary.apply(left, right) {
                        trace!("Binary step {:?} at {}: {}", binary, index, result);
                        return Some(self.splice(index, 2, result));
                    }
                }
                StepCursor::Exhausted => return None,
            }
        }
    }
}

/// Iterate the one-step expansions of `sequence`
pub fn reduction_steps(sequence: &[Arc<Node>]) -> ReductionSteps<'_> {
    ReductionSteps::new(sequence)
}
