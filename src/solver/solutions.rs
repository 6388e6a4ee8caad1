use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use num_bigint::BigInt;
use num_traits::One;

use crate::expression::Node;

/// Cheapest known node for each integer value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solutions {
    best: BTreeMap<BigInt, Arc<Node>>,
}

impl Solutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `node` if its value is an integer and it is strictly cheaper than
    /// what is already known for that value. Earlier nodes win ties.
    pub fn record(&mut self, node: Arc<Node>) {
        if !node.value().is_integer() {
            return;
        }

        let value = node.value().to_integer();
        match self.best.get(&value) {
            Some(known) if known.cost() <= node.cost() => {}
            _ => {
                debug!("Best for {} is now {} (cost {})", value, node, node.cost());
                self.best.insert(value, node);
            }
        }
    }

    /// Fold in solutions found later in enumeration order; ours win ties
    pub fn merge(&mut self, later: Solutions) {
        for (_, node) in later.best {
            self.record(node);
        }
    }

    pub fn get(&self, value: &BigInt) -> Option<&Node> {
        self.best.get(value).map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Solutions for 1, 2, 3, ... up to the first value with none
    pub fn consecutive(&self) -> impl Iterator<Item = (BigInt, &Node)> + '_ {
        let mut next = BigInt::one();
        std::iter::from_fn(move || {
            let node = self.get(&next)?;
            let value = next.clone();
            next += 1u32;
            Some((value, node))
        })
    }

    /// Largest `n` such that every value in `1..=n` has a solution
    pub fn reach(&self) -> usize {
        self.consecutive().count()
    }
}

impl Extend<Arc<Node>> for Solutions {
    fn extend<I: IntoIterator<Item = Arc<Node>>>(&mut self, iter: I) {
        for node in iter {
            self.record(node);
        }
    }
}

impl FromIterator<Arc<Node>> for Solutions {
    fn from_iter<I: IntoIterator<Item = Arc<Node>>>(iter: I) -> Self {
        let mut solutions = Solutions::new();
        solutions.extend(iter);
        solutions
    }
}
