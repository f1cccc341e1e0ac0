use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error unless the slice holds exactly four finite numbers.
pub fn validate_numbers(numbers: &[f64]) -> Result<(), UtilsError> {
    debug!("Validating input numbers: {:?}", numbers);

    if numbers.len() != 4 {
        warn!("Expected 4 numbers, got {}", numbers.len());
        return Err(UtilsError::WrongNumberCount(numbers.len()));
    }

    if let Some(&bad) = numbers.iter().find(|n| !n.is_finite()) {
        warn!("Rejecting non-finite input number: {}", bad);
        return Err(UtilsError::NonFiniteNumber(bad));
    }

    debug!("Input validation successful");
    Ok(())
}
