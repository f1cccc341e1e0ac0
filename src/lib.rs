//! Twentyfour - a solver for the 24 Game
//!
//! Given four numbers, this library enumerates every distinct way to reach
//! 24 from them using +, -, * and / with full parenthesization. Solutions
//! are returned as human-readable derivation traces, one equation step per
//! combine operation.

pub mod combine;
pub mod search;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use combine::PairCombiner;
pub use solver::{GameSolver, SolverError};
pub use utils::{UtilsError, validate_numbers};

/// Find every distinct derivation of 24 from the given numbers
///
/// This is a convenience function that validates the input and runs a
/// fresh solver over it.
///
/// # Arguments
///
/// * `numbers` - exactly four finite numbers
///
/// # Returns
///
/// * `Ok(solutions)` - every distinct derivation trace, in discovery order;
///   an empty list means no combination reaches 24
/// * `Err(SolverError)` - if the input is not exactly four finite numbers
///
/// # Errors
///
/// This function will return an error if:
/// * The slice does not hold exactly four numbers
/// * Any of the numbers is NaN or infinite
///
/// # Examples
///
/// ```
/// use twentyfour::solve;
///
/// match solve(&[2.0, 3.0, 4.0, 8.0]) {
///     Ok(solutions) if solutions.is_empty() => println!("No solution"),
///     Ok(solutions) => println!("Found {} solutions", solutions.len()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(numbers: &[f64]) -> Result<Vec<String>, SolverError> {
    validate_numbers(numbers)?;

    let mut solver = GameSolver::new();
    Ok(solver.solve([numbers[0], numbers[1], numbers[2], numbers[3]]))
}
