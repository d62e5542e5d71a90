use log::{debug, info, warn};

use crate::generator::meet_in_the_middle;
use crate::solver::config::SearchConfig;
use crate::solver::constants::DIRECT_SEARCH_LIMIT;
use crate::solver::direct::direct_search;
use crate::solver::errors::SearchError;
use crate::solver::solution::{Solution, SolutionSet};
use crate::utils::validate_integer_count;

/// Drives a search over increasing expression sizes
pub struct SolutionFinder {}

impl SolutionFinder {
    /// Create a new solution finder
    pub fn new() -> Self {
        Self {}
    }

    /// Find the best expressions over `config`'s pool that reach its target.
    ///
    /// Sizes are searched from one integer upwards: brute force up to four
    /// integers, meet-in-the-middle beyond. Unless the search is exhaustive
    /// it stops after the first size at which the best solution is no larger
    /// than that size and enough solutions have been collected.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be searched at all: no
    /// operators enabled while the target is not in the pool, or more
    /// integers requested than the search supports.
    pub fn find_solutions(&self, config: &SearchConfig) -> Result<Vec<Solution>, SearchError> {
        validate_integer_count(config.max_count)?;

        let target = config.target;
        let pool = config.pool();
        let operators = config.operators.to_vec();

        if pool.is_empty() || config.max_count == 0 || config.result_count == 0 {
            warn!("Nothing to search: empty pool, size limit or result count");
            return Ok(Vec::new());
        }
        if operators.is_empty() && !pool.contains(&target) {
            warn!("No operators enabled and {} is not in the pool", target);
            return Err(SearchError::NoOperators { target });
        }

        info!(
            "Searching for {} with {} integers, up to {} at a time",
            target,
            pool.len(),
            config.max_count
        );

        let mut solutions = SolutionSet::new();

        for count in 1..=config.max_count {
            if count > 1 && operators.is_empty() {
                break;
            }
            config.notify(&format!("Searching {} numbers...", count));

            let found = if count <= DIRECT_SEARCH_LIMIT {
                direct_search(target, &pool, &operators, count)
            } else {
                meet_in_the_middle(target, &pool, &operators, count, config.cap())
            };
            let added = solutions.extend(found);
            debug!(
                "{} integers: {} new solutions, {} in total",
                count,
                added,
                solutions.len()
            );

            if !config.exhaustive && Self::can_stop(&solutions, count, config.result_count) {
                info!("Stopping early after {} integers", count);
                break;
            }
        }

        info!("Found {} distinct solutions", solutions.len());
        Ok(solutions.into_ranked(config.result_count))
    }

    /// Larger sizes only add solutions with more operators, so stop once the
    /// best is already within this size and enough results are in hand.
    fn can_stop(solutions: &SolutionSet, count: usize, result_count: usize) -> bool {
        match solutions.best_op_count() {
            Some(best) => best < count && solutions.len() >= result_count,
            None => false,
        }
    }
}

impl Default for SolutionFinder {
    fn default() -> Self {
        Self::new()
    }
}
