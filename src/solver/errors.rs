use thiserror::Error;

use crate::utils::UtilsError;

/// Configurations a search refuses to run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("No operators enabled and {target} is not in the pool")]
    NoOperators { target: i64 },
    #[error("Invalid configuration: {0}")]
    UtilsError(#[from] UtilsError),
}
