use log::debug;
use rayon::prelude::*;

use crate::expression::{Operator, evaluate, format_sequence};
use crate::solver::solution::Solution;
use crate::utils::Selections;

fn solve_from(
    first: i64,
    target: i64,
    pool: &[i64],
    operators: &[Operator],
    count: usize,
) -> Vec<Solution> {
    let mut found = Vec::new();

    for rest in Selections::new(pool, count - 1) {
        let mut numbers = Vec::with_capacity(count);
        numbers.push(first);
        numbers.extend(rest);

        for ops in Selections::new(operators, count - 1) {
            if evaluate(&numbers, &ops) == Some(target) {
                let mut distinct = numbers.clone();
                distinct.sort_unstable();
                distinct.dedup();
                found.push(Solution::new(
                    format_sequence(&numbers, &ops),
                    target,
                    distinct,
                    count - 1,
                ));
            }
        }
    }

    found
}

/// Brute-force every expression of exactly `count` integers from `pool`
/// that evaluates to `target`.
///
/// Work is split by leading integer and gathered back in pool order.
pub fn direct_search(
    target: i64,
    pool: &[i64],
    operators: &[Operator],
    count: usize,
) -> Vec<Solution> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return pool
            .iter()
            .filter(|&&n| n == target)
            .map(|&n| Solution::new(n.to_string(), n, vec![n], 0))
            .collect();
    }

    let found: Vec<Solution> = pool
        .par_iter()
        .map(|&first| solve_from(first, target, pool, operators, count))
        .flatten()
        .collect();

    debug!(
        "Direct search over {} integers found {} expressions",
        count,
        found.len()
    );
    found
}
