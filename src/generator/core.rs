use log::debug;
use rayon::prelude::*;

use crate::expression::{Operator, evaluate, format_sequence};
use crate::generator::constants::{DIRECT_ENUMERATION_LIMIT, JOIN_RUNS_PER_THREAD};
use crate::generator::partial::PartialResult;
use crate::generator::table::SubexpressionTable;
use crate::utils::Selections;

/// Build the table of every value reachable with exactly `count` integers
/// from `pool`, keeping at most `cap` ways per value.
///
/// Up to three integers every number and operator assignment is evaluated
/// directly. Larger counts are split into `count / 2` and the remainder,
/// both halves are generated recursively and every pair of values is joined
/// under every operator. When capped, only the first way of reaching each
/// half's value takes part in the join.
pub fn generate_subexpressions(
    pool: &[i64],
    count: usize,
    operators: &[Operator],
    cap: Option<usize>,
) -> SubexpressionTable {
    let table = match count {
        0 => SubexpressionTable::new(cap),
        1 => leaves(pool, cap),
        _ if count <= DIRECT_ENUMERATION_LIMIT => enumerate(pool, count, operators, cap),
        _ => decompose(pool, count, operators, cap),
    };

    debug!(
        "Generated {} values ({} partial results) from {} integers",
        table.len(),
        table.partial_count(),
        count
    );
    table
}

fn leaves(pool: &[i64], cap: Option<usize>) -> SubexpressionTable {
    let mut table = SubexpressionTable::new(cap);
    for &number in pool {
        table.insert(PartialResult::leaf(number));
    }
    table
}

/// Evaluate every assignment whose first integer is `first`
fn enumerate_from(
    first: i64,
    pool: &[i64],
    count: usize,
    operators: &[Operator],
    cap: Option<usize>,
) -> SubexpressionTable {
    let mut table = SubexpressionTable::new(cap);

    for rest in Selections::new(pool, count - 1) {
        let mut numbers = Vec::with_capacity(count);
        numbers.push(first);
        numbers.extend(rest);

        for ops in Selections::new(operators, count - 1) {
            if let Some(value) = evaluate(&numbers, &ops)
                && table.has_room(value)
            {
                let expression = format_sequence(&numbers, &ops);
                table.insert(PartialResult::from_sequence(value, expression, &numbers));
            }
        }
    }

    table
}

fn enumerate(
    pool: &[i64],
    count: usize,
    operators: &[Operator],
    cap: Option<usize>,
) -> SubexpressionTable {
    // one task per leading integer, merged back in pool order
    let partials: Vec<SubexpressionTable> = pool
        .par_iter()
        .map(|&first| enumerate_from(first, pool, count, operators, cap))
        .collect();

    let mut table = SubexpressionTable::new(cap);
    for partial in partials {
        table.merge(partial);
    }
    table
}

/// Join one left value's ways with every right value under every operator,
/// skipping the rendering once a combined value is full
fn join_value(
    table: &mut SubexpressionTable,
    left: &[PartialResult],
    right: &SubexpressionTable,
    right_values: &[i64],
    operators: &[Operator],
) {
    let cap = table.cap();
    let left = candidates(left, cap);

    for &right_value in right_values {
        let Some(right_partials) = right.get(right_value) else {
            continue;
        };
        let right_partials = candidates(right_partials, cap);

        for lp in left {
            for rp in right_partials {
                for &op in operators {
                    if let Some(value) = op.apply(lp.value(), rp.value())
                        && table.has_room(value)
                    {
                        table.insert(PartialResult::join(lp, op, rp, value));
                    }
                }
            }
        }
    }
}

/// The ways of reaching one value that take part in a join
fn candidates(partials: &[PartialResult], cap: Option<usize>) -> &[PartialResult] {
    match cap {
        Some(_) => partials.get(..1).unwrap_or(partials),
        None => partials,
    }
}

/// Join a contiguous run of left values into one table, so the cap holds
/// across the whole run
fn join_run(
    left: &SubexpressionTable,
    left_values: &[i64],
    right: &SubexpressionTable,
    right_values: &[i64],
    operators: &[Operator],
    cap: Option<usize>,
) -> SubexpressionTable {
    let mut table = SubexpressionTable::new(cap);
    for &left_value in left_values {
        if let Some(left_partials) = left.get(left_value) {
            join_value(&mut table, left_partials, right, right_values, operators);
        }
    }
    table
}

/// Left values per parallel run: a few runs per worker thread
fn run_length(values: usize, threads: usize) -> usize {
    values
        .div_ceil(threads.max(1) * JOIN_RUNS_PER_THREAD)
        .max(1)
}

fn join_halves(
    left: &SubexpressionTable,
    right: &SubexpressionTable,
    operators: &[Operator],
    cap: Option<usize>,
) -> SubexpressionTable {
    let left_values = left.sorted_values();
    let right_values = right.sorted_values();
    let run = run_length(left_values.len(), rayon::current_num_threads());

    // runs are merged back in order, matching a single sequential join
    let runs: Vec<SubexpressionTable> = left_values
        .par_chunks(run)
        .map(|values| join_run(left, values, right, &right_values, operators, cap))
        .collect();

    let mut table = SubexpressionTable::new(cap);
    for partial in runs {
        table.merge(partial);
    }
    table
}

fn decompose(
    pool: &[i64],
    count: usize,
    operators: &[Operator],
    cap: Option<usize>,
) -> SubexpressionTable {
    let left_count = count / 2;
    let right_count = count - left_count;
    debug!(
        "Splitting {} integers into {} + {}",
        count, left_count, right_count
    );

    if left_count == right_count {
        let half = generate_subexpressions(pool, left_count, operators, cap);
        return join_halves(&half, &half, operators, cap);
    }

    let (left, right) = rayon::join(
        || generate_subexpressions(pool, left_count, operators, cap),
        || generate_subexpressions(pool, right_count, operators, cap),
    );
    join_halves(&left, &right, operators, cap)
}
