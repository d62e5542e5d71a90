use std::collections::HashMap;
use std::fmt;

use crate::expression::canonical_key;

/// A finished expression that reaches the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    expression: String,
    value: i64,
    numbers: Vec<i64>,
    op_count: usize,
    canonical: String,
}

impl Solution {
    /// `numbers` must be the distinct integers of `expression`, ascending
    pub fn new(expression: String, value: i64, numbers: Vec<i64>, op_count: usize) -> Self {
        let canonical = canonical_key(&expression);
        Self {
            expression,
            value,
            numbers,
            op_count,
            canonical,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Distinct integers used, ascending
    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    pub fn op_count(&self) -> usize {
        self.op_count
    }

    pub fn canonical_key(&self) -> &str {
        &self.canonical
    }

    /// Ranking key, smaller is better
    fn rank(&self) -> (usize, usize, &str) {
        (self.op_count, self.numbers.len(), &self.canonical)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.value)
    }
}

/// Solutions keyed by canonical form; the first solution seen for a key wins
#[derive(Debug, Clone, Default)]
pub struct SolutionSet {
    solutions: HashMap<String, Solution>,
}

impl SolutionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `solution` unless an equivalent one is already present
    pub fn insert(&mut self, solution: Solution) -> bool {
        if self.solutions.contains_key(solution.canonical_key()) {
            return false;
        }
        self.solutions
            .insert(solution.canonical_key().to_string(), solution);
        true
    }

    /// Insert every solution in order, returning how many were new
    pub fn extend(&mut self, solutions: impl IntoIterator<Item = Solution>) -> usize {
        let mut added = 0;
        for solution in solutions {
            if self.insert(solution) {
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Fewest operators among the collected solutions
    pub fn best_op_count(&self) -> Option<usize> {
        self.solutions.values().map(Solution::op_count).min()
    }

    /// Best `limit` solutions: fewest operators first, then fewest distinct
    /// integers, ties broken by canonical key
    pub fn into_ranked(self, limit: usize) -> Vec<Solution> {
        let mut ranked: Vec<Solution> = self.solutions.into_values().collect();
        ranked.sort_by(|a, b| a.rank().cmp(&b.rank()));
        ranked.truncate(limit);
        ranked
    }
}
