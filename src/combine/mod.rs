//! Pairwise operation expansion with memoization

mod core;

pub use core::{PairCombiner, StepMap};
