use std::collections::HashMap;

use indexmap::IndexMap;
use log::debug;

use crate::utils::format_value;

/// Equation text mapped to the value it produced, in generation order.
pub type StepMap = IndexMap<String, f64>;

/// Expands an ordered pair of values into every result reachable with one
/// binary operation.
///
/// Commutative operations appear once, non-commutative ones in both
/// directions, and a division is skipped when its divisor is zero. Results
/// are memoized per ordered pair; the key is ordered because the equation
/// texts name the first operand first, so `combine(a, b)` and
/// `combine(b, a)` are distinct cache entries.
pub struct PairCombiner {
    cache: HashMap<(u64, u64), StepMap>,
}

impl PairCombiner {
    /// Create a combiner with an empty operation cache.
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// All results of applying one operation to `a` and `b`, keyed by the
    /// equation text `"{a} {op} {b} = {result}"`.
    ///
    /// Yields between 4 and 6 entries. When `a == b` the mirrored
    /// subtraction and division render identical texts and the later entry
    /// overwrites the earlier one, which loses nothing: the colliding keys
    /// are the same equation.
    pub fn combine(&mut self, a: f64, b: f64) -> &StepMap {
        let key = (a.to_bits(), b.to_bits());
        self.cache.entry(key).or_insert_with(|| {
            debug!("Expanding operations for pair ({}, {})", a, b);
            expand_pair(a, b)
        })
    }
}

impl Default for PairCombiner {
    fn default() -> Self {
        Self::new()
    }
}

fn equation(left: f64, op: char, right: f64, result: f64) -> String {
    format!(
        "{} {} {} = {}",
        format_value(left),
        op,
        format_value(right),
        format_value(result)
    )
}

fn expand_pair(a: f64, b: f64) -> StepMap {
    let mut steps = StepMap::new();

    steps.insert(equation(a, '+', b, a + b), a + b);
    steps.insert(equation(a, '*', b, a * b), a * b);
    steps.insert(equation(a, '-', b, a - b), a - b);
    steps.insert(equation(b, '-', a, b - a), b - a);

    if b != 0.0 {
        steps.insert(equation(a, '/', b, a / b), a / b);
    }
    if a != 0.0 {
        steps.insert(equation(b, '/', a, b / a), b / a);
    }

    steps
}
