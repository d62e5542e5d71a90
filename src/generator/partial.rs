use crate::expression::{Operator, compose};
use crate::utils::merge_distinct;

/// An achievable intermediate value and how it was built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialResult {
    value: i64,
    expression: String,
    numbers: Vec<i64>,
    op_count: usize,
}

impl PartialResult {
    /// A single pool integer
    pub fn leaf(number: i64) -> Self {
        Self {
            value: number,
            expression: number.to_string(),
            numbers: vec![number],
            op_count: 0,
        }
    }

    /// A flat sequence that was evaluated and rendered in one go
    pub fn from_sequence(value: i64, expression: String, numbers: &[i64]) -> Self {
        let mut distinct = numbers.to_vec();
        distinct.sort_unstable();
        distinct.dedup();
        Self {
            value,
            expression,
            numbers: distinct,
            op_count: numbers.len().saturating_sub(1),
        }
    }

    /// `left op right`, already known to evaluate to `value`
    pub fn join(left: &PartialResult, op: Operator, right: &PartialResult, value: i64) -> Self {
        Self {
            value,
            expression: compose(&left.expression, op, &right.expression),
            numbers: merge_distinct(&left.numbers, &right.numbers),
            op_count: left.op_count + right.op_count + 1,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Distinct source integers, ascending
    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    pub fn op_count(&self) -> usize {
        self.op_count
    }
}
