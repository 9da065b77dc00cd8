//! split/parallelism.rs
//! When sibling branches of a split may run on separate threads.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PARALLEL_MIN_ITEMS;
use crate::utils::ceil_log2;

/// Parallelism configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelismProfile {
    /// Nodes at this recursion depth or shallower fork their halves
    /// (the top-level call is depth 1). Zero never forks.
    pub max_parallel_depth: u32,
    /// Nodes with fewer items always run inline.
    pub min_parallel_items: usize,
}

impl ParallelismProfile {
    pub fn single_threaded() -> Self {
        Self {
            max_parallel_depth: 0,
            min_parallel_items: DEFAULT_PARALLEL_MIN_ITEMS,
        }
    }

    /// Fork deep enough to give every core one leaf branch.
    pub fn dynamic() -> Self {
        Self::with_depth(ceil_log2(num_cpus::get()))
    }

    pub fn with_depth(max_parallel_depth: u32) -> Self {
        Self {
            max_parallel_depth,
            min_parallel_items: DEFAULT_PARALLEL_MIN_ITEMS,
        }
    }

    pub fn should_fork(&self, depth: u32, items: usize) -> bool {
        depth <= self.max_parallel_depth && items >= self.min_parallel_items.max(2)
    }
}

impl Default for ParallelismProfile {
    fn default() -> Self {
        Self::single_threaded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_threaded_never_forks() {
        let p = ParallelismProfile::single_threaded();
        assert!(!p.should_fork(1, usize::MAX));
    }

    #[test]
    fn forks_only_shallow_and_large_nodes() {
        let p = ParallelismProfile { max_parallel_depth: 2, min_parallel_items: 100 };
        assert!(p.should_fork(1, 100));
        assert!(p.should_fork(2, 1000));
        assert!(!p.should_fork(3, 1000));
        assert!(!p.should_fork(1, 99));
    }

    #[test]
    fn never_forks_single_items() {
        let p = ParallelismProfile { max_parallel_depth: 4, min_parallel_items: 0 };
        assert!(!p.should_fork(1, 1));
        assert!(p.should_fork(1, 2));
    }
}
