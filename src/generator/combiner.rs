use std::collections::BTreeSet;

use log::debug;
use rayon::prelude::*;

use crate::expression::{Operator, compose};
use crate::generator::constants::MAX_EXPONENT;
use crate::generator::core::generate_subexpressions;
use crate::generator::partial::PartialResult;
use crate::generator::table::SubexpressionTable;
use crate::solver::Solution;
use crate::utils::merge_distinct;

/// Emit `first op second` for every pair drawn from the two lists
fn emit_pairs(
    out: &mut Vec<Solution>,
    first: &[PartialResult],
    op: Operator,
    second: &[PartialResult],
    target: i64,
) {
    for a in first {
        for b in second {
            out.push(Solution::new(
                compose(a.expression(), op, b.expression()),
                target,
                merge_distinct(a.numbers(), b.numbers()),
                a.op_count() + b.op_count() + 1,
            ));
        }
    }
}

/// Look up the partner value for every value of `probe` in `lookup`.
/// Matches are rendered as `probe op lookup`.
fn match_values(
    out: &mut Vec<Solution>,
    probe: &SubexpressionTable,
    lookup: &SubexpressionTable,
    op: Operator,
    target: i64,
    partner: impl Fn(i64) -> Option<i64>,
) {
    for value in probe.sorted_values() {
        let Some(needed) = partner(value) else {
            continue;
        };
        let (Some(probe_partials), Some(lookup_partials)) = (probe.get(value), lookup.get(needed))
        else {
            continue;
        };
        emit_pairs(out, probe_partials, op, lookup_partials, target);
    }
}

fn exact_quotient(numerator: i64, denominator: i64) -> Option<i64> {
    Operator::Divide.apply(numerator, denominator)
}

fn add_pass(left: &SubexpressionTable, right: &SubexpressionTable, target: i64) -> Vec<Solution> {
    let mut out = Vec::new();
    match_values(
        &mut out,
        left,
        right,
        Operator::Add,
        target,
        |l| target.checked_sub(l),
    );
    out
}

fn subtract_pass(
    left: &SubexpressionTable,
    right: &SubexpressionTable,
    target: i64,
) -> Vec<Solution> {
    let mut out = Vec::new();
    // target = left - right
    match_values(
        &mut out,
        left,
        right,
        Operator::Subtract,
        target,
        |l| l.checked_sub(target),
    );
    // target = right - left
    match_values(
        &mut out,
        right,
        left,
        Operator::Subtract,
        target,
        |r| r.checked_sub(target),
    );
    out
}

fn multiply_pass(
    left: &SubexpressionTable,
    right: &SubexpressionTable,
    target: i64,
) -> Vec<Solution> {
    let mut out = Vec::new();
    match_values(
        &mut out,
        left,
        right,
        Operator::Multiply,
        target,
        |l| {
            if l == 0 {
                None
            } else {
                exact_quotient(target, l)
            }
        },
    );
    out
}

fn divide_pass(left: &SubexpressionTable, right: &SubexpressionTable, target: i64) -> Vec<Solution> {
    let mut out = Vec::new();
    if target == 0 {
        return out;
    }

    let divisor_for = |numerator: i64| {
        exact_quotient(numerator, target).filter(|&divisor| divisor != 0)
    };
    // target = left / right
    match_values(
        &mut out,
        left,
        right,
        Operator::Divide,
        target,
        divisor_for,
    );
    // target = right / left
    match_values(
        &mut out,
        right,
        left,
        Operator::Divide,
        target,
        divisor_for,
    );
    out
}

/// `base ^ exponent` for one side as base and the other as exponent.
///
/// Only exponents up to [`MAX_EXPONENT`] can reach an `i64` target from a
/// base other than -1, 0 or 1, so larger exponents are probed against those
/// three bases alone.
fn power_direction(
    out: &mut Vec<Solution>,
    bases: &SubexpressionTable,
    exponents: &SubexpressionTable,
    target: i64,
) {
    let base_values = bases.sorted_values();
    let trivial_bases = [-1, 0, 1];

    for exponent in exponents.sorted_values() {
        if exponent < 0 {
            continue;
        }
        let Some(exponent_partials) = exponents.get(exponent) else {
            continue;
        };

        let probe: &[i64] = if exponent <= MAX_EXPONENT {
            &base_values
        } else {
            &trivial_bases
        };
        for &base in probe {
            if Operator::Exponentiate.apply(base, exponent) != Some(target) {
                continue;
            }
            let Some(base_partials) = bases.get(base) else {
                continue;
            };
            emit_pairs(
                out,
                base_partials,
                Operator::Exponentiate,
                exponent_partials,
                target,
            );
        }
    }
}

fn exponentiate_pass(
    left: &SubexpressionTable,
    right: &SubexpressionTable,
    target: i64,
) -> Vec<Solution> {
    let mut out = Vec::new();
    power_direction(&mut out, left, right, target);
    power_direction(&mut out, right, left, target);
    out
}

/// Find every pair of left and right partial results that reaches `target`
/// under one of `operators`.
///
/// Each operator is matched by hash lookup: for every value on one side the
/// single partner value that would hit the target is computed and looked up
/// on the other side. Subtraction, division and exponentiation are tried in
/// both directions. The operator passes run in parallel and are returned in
/// operator order.
pub fn combine(
    left: &SubexpressionTable,
    right: &SubexpressionTable,
    target: i64,
    operators: &[Operator],
) -> Vec<Solution> {
    let passes: Vec<Vec<Solution>> = operators
        .par_iter()
        .map(|op| match op {
            Operator::Add => add_pass(left, right, target),
            Operator::Subtract => subtract_pass(left, right, target),
            Operator::Multiply => multiply_pass(left, right, target),
            Operator::Divide => divide_pass(left, right, target),
            Operator::Exponentiate => exponentiate_pass(left, right, target),
        })
        .collect();

    passes.into_iter().flatten().collect()
}

/// Search for `target` using exactly `count` integers by splitting them
/// into a left and a right group.
///
/// Every split with a left group of at most `(count + 1) / 2` integers is
/// tried; the larger left groups mirror smaller ones. Each group size's table
/// is generated once per call.
pub fn meet_in_the_middle(
    target: i64,
    pool: &[i64],
    operators: &[Operator],
    count: usize,
    cap: Option<usize>,
) -> Vec<Solution> {
    let splits: Vec<(usize, usize)> = (1..count)
        .filter(|&left| left <= (count + 1) / 2)
        .map(|left| (left, count - left))
        .collect();

    let sizes: BTreeSet<usize> = splits
        .iter()
        .flat_map(|&(left, right)| [left, right])
        .collect();
    let tables: Vec<(usize, SubexpressionTable)> = sizes
        .into_par_iter()
        .map(|size| (size, generate_subexpressions(pool, size, operators, cap)))
        .collect();
    let table_for = |size: usize| {
        tables
            .iter()
            .find(|(candidate, _)| *candidate == size)
            .map(|(_, table)| table)
    };

    let mut solutions = Vec::new();
    for (left_count, right_count) in splits {
        let (Some(left), Some(right)) = (table_for(left_count), table_for(right_count)) else {
            continue;
        };
        let found = combine(left, right, target, operators);
        debug!(
            "Split {} + {}: {} left values, {} right values, {} matches",
            left_count,
            right_count,
            left.len(),
            right.len(),
            found.len()
        );
        solutions.extend(found);
    }
    solutions
}
