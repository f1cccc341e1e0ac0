use log::debug;

use crate::combine::PairCombiner;
use crate::solver::constants::{EPSILON, SKIP_MARKER, TARGET};

/// Search over the three ways to split the four numbers into two pairs.
///
/// Combining each pair first and then the two intermediate results reaches
/// `(a op b) op (c op d)` shapes, which the strictly linear consumption
/// order of the backtracking search cannot produce. Derivations carry the
/// skip marker in place of a leading seed number.
///
/// The returned list may repeat a derivation when duplicate inputs make two
/// pairings coincide; the aggregator deduplicates against the full solution
/// list.
pub fn grouped_search(numbers: [f64; 4], combiner: &mut PairCombiner) -> Vec<String> {
    let [n1, n2, n3, n4] = numbers;
    let pairings = [
        ((n1, n2), (n3, n4)),
        ((n1, n3), (n2, n4)),
        ((n1, n4), (n2, n3)),
    ];

    let mut solutions = Vec::new();
    for (first, second) in pairings {
        let out1 = combiner.combine(first.0, first.1).clone();
        let out2 = combiner.combine(second.0, second.1).clone();

        for (hist1, &val1) in &out1 {
            for (hist2, &val2) in &out2 {
                for (step, &result) in combiner.combine(val1, val2) {
                    if (result - TARGET).abs() < EPSILON {
                        solutions.push(format!(
                            "{}, {}, {}, {}",
                            SKIP_MARKER, hist1, hist2, step
                        ));
                    }
                }
            }
        }
    }

    debug!("Grouped search found {} solution(s)", solutions.len());
    solutions
}
