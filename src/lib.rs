//! Numcomb - A library for finding arithmetic expressions that reach a target
//!
//! This library searches for expressions built from a bounded pool of
//! integers and a chosen set of operators that evaluate exactly to a target
//! integer, preferring expressions with as few operators as possible.

pub mod expression;
pub mod generator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{ExpressionError, Operator, OperatorSet, canonical_key, evaluate};
pub use solver::{LogProgress, ProgressSink, SearchConfig, SearchError, Solution, SolutionFinder};
pub use utils::UtilsError;

/// Find the best expressions that reach `config.target`
///
/// This is a convenience function that creates a default solution finder
/// and runs one search.
///
/// # Arguments
///
/// * `config` - Target, pool, operators and limits for the search
///
/// # Returns
///
/// * `Ok(solutions)` - Ranked best first, empty if nothing was found
/// * `Err(SearchError)` - If the configuration cannot be searched
///
/// # Errors
///
/// This function will return an error if:
/// * No operator is enabled and the target is not itself in the pool
/// * More integers are requested than a search supports
///
/// # Examples
///
/// ```
/// use numcomb::{OperatorSet, SearchConfig, search};
///
/// let config = SearchConfig::new(100, 8)
///     .with_operators(OperatorSet::additive().with(numcomb::Operator::Multiply));
/// match search(&config) {
///     Ok(solutions) => {
///         for solution in solutions {
///             println!("{}", solution);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn search(config: &SearchConfig) -> Result<Vec<Solution>, SearchError> {
    let finder = SolutionFinder::new();
    finder.find_solutions(config)
}
