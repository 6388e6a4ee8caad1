/// Position of the step generator within its two expansion phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCursor {
    /// Next unary operator `op` to try on node `index`
    Unary { index: usize, op: usize },
    /// Next binary operator `op` to try on the pair starting at `index`
    Binary { index: usize, op: usize },
    Exhausted,
}

impl StepCursor {
    pub fn new() -> Self {
        StepCursor::Unary { index: 0, op: 0 }
    }
}

