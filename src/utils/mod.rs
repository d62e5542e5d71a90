//! Utils module split into submodules

mod errors;
mod pool;
mod selections;
mod validation;

pub use errors::UtilsError;
pub use pool::{build_pool, merge_distinct};
pub use selections::Selections;
pub use validation::validate_integer_count;

#[cfg(test)]
mod tests;
