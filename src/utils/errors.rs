use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Cannot search with {requested} integers, the limit is {limit}")]
    IntegerCountTooLarge { requested: usize, limit: usize },
}
