use log::info;

use crate::combine::PairCombiner;
use crate::search::{backtrack_search, grouped_search};

/// Runs both search strategies over one four-number input and merges their
/// solutions.
pub struct GameSolver {
    combiner: PairCombiner,
}

impl GameSolver {
    /// Create a solver with an empty operation cache.
    pub fn new() -> Self {
        Self {
            combiner: PairCombiner::new(),
        }
    }

    /// Every distinct derivation of 24 from `numbers`, in discovery order:
    /// sequential-search results first, then any grouped-search results not
    /// already present. An empty list means no combination reaches 24.
    pub fn solve(&mut self, numbers: [f64; 4]) -> Vec<String> {
        info!("Solving for input {:?}", numbers);

        let mut solutions = backtrack_search(numbers, &mut self.combiner);

        for candidate in grouped_search(numbers, &mut self.combiner) {
            if !solutions.iter().any(|s| s == &candidate) {
                solutions.push(candidate);
            }
        }

        info!("Found {} distinct solution(s)", solutions.len());
        solutions
    }
}

impl Default for GameSolver {
    fn default() -> Self {
        Self::new()
    }
}
