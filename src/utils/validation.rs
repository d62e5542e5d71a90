use log::{debug, warn};

use crate::solver::constants::MAX_INTEGER_COUNT;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if `count` exceeds the number of integers a search can
/// combine without exhausting memory.
pub fn validate_integer_count(count: usize) -> Result<(), UtilsError> {
    debug!("Validating integer count: {}", count);

    if count > MAX_INTEGER_COUNT {
        warn!(
            "Integer count {} exceeds the limit of {}",
            count, MAX_INTEGER_COUNT
        );
        return Err(UtilsError::IntegerCountTooLarge {
            requested: count,
            limit: MAX_INTEGER_COUNT,
        });
    }

    Ok(())
}
