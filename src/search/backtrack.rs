use log::debug;

use crate::combine::{PairCombiner, StepMap};
use crate::solver::constants::{EPSILON, TARGET};
use crate::utils::format_value;

/// Depth-first search over every order of consuming the four numbers.
///
/// Each recursion level picks one not-yet-used number and folds it into
/// every derivation built so far, so the search covers every expression
/// shape of the form `((x op y) op z) op w` across all operand orders and
/// operation directions. Shapes that combine two sub-pairs are reached by
/// the grouped search instead.
pub fn backtrack_search(numbers: [f64; 4], combiner: &mut PairCombiner) -> Vec<String> {
    let mut solutions = Vec::new();
    let mut used = [false; 4];

    descend(&numbers, &mut used, &StepMap::new(), combiner, &mut solutions);

    debug!("Sequential search found {} solution(s)", solutions.len());
    solutions
}

fn descend(
    numbers: &[f64; 4],
    used: &mut [bool; 4],
    candidates: &StepMap,
    combiner: &mut PairCombiner,
    solutions: &mut Vec<String>,
) {
    if used.iter().all(|&u| u) {
        record_hits(candidates, solutions);
        return;
    }

    for i in 0..numbers.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        let next = consume(candidates, numbers[i], combiner);
        descend(numbers, used, &next, combiner, solutions);
        used[i] = false;
    }
}

/// Fold `num` into every existing derivation. The first number consumed
/// seeds the map instead, so the first real combine step always involves
/// exactly two original numbers.
fn consume(candidates: &StepMap, num: f64, combiner: &mut PairCombiner) -> StepMap {
    let mut next = StepMap::new();

    if candidates.is_empty() {
        next.insert(format_value(num), num);
        return next;
    }

    for (history, &value) in candidates {
        for (step, &result) in combiner.combine(value, num) {
            next.insert(format!("{}, {}", history, step), result);
        }
    }

    next
}

fn record_hits(candidates: &StepMap, solutions: &mut Vec<String>) {
    for (history, &value) in candidates {
        if (value - TARGET).abs() < EPSILON && !solutions.iter().any(|s| s == history) {
            debug!("Reached {} via: {}", TARGET, history);
            solutions.push(history.clone());
        }
    }
}
