use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::expression::{Operator, OperatorSet, canonical_key, evaluate_str};
use crate::solver::{
    SearchConfig, SearchError, Solution, SolutionFinder, SolutionSet, direct_search,
};
use crate::utils::UtilsError;

fn arithmetic() -> OperatorSet {
    OperatorSet::additive()
        .with(Operator::Multiply)
        .with(Operator::Subtract)
        .with(Operator::Divide)
}

fn additive_and_multiply() -> OperatorSet {
    OperatorSet::additive().with(Operator::Multiply)
}

fn find(config: &SearchConfig) -> Result<Vec<Solution>, SearchError> {
    SolutionFinder::new().find_solutions(config)
}

fn assert_all_valid(solutions: &[Solution], target: i64) {
    for solution in solutions {
        assert_eq!(solution.value(), target);
        assert_eq!(
            evaluate_str(solution.expression()),
            Ok(target),
            "expression: {}",
            solution.expression()
        );
    }
}

fn recording_sink() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + Sync + 'static) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let messages = Arc::clone(&messages);
        move |message: &str| {
            if let Ok(mut messages) = messages.lock() {
                messages.push(message.to_string());
            }
        }
    };
    (messages, sink)
}

#[test]
fn test_product_of_squares_ranks_first() {
    let config = SearchConfig::new(100, 8).with_operators(additive_and_multiply());
    let result = find(&config);
    assert!(result.is_ok());

    if let Ok(solutions) = result {
        assert!(!solutions.is_empty());
        assert!(solutions.len() <= config.result_count);
        assert_all_valid(&solutions, 100);
        if let Some(best) = solutions.first() {
            assert_eq!(best.canonical_key(), canonical_key("4 * 5 * 5"));
            assert_eq!(best.op_count(), 2);
            assert_eq!(best.numbers(), &[4, 5]);
        }
    }
}

#[test]
fn test_four_factor_product_is_found() {
    // four factors need at most four integers; keep every such solution
    let config = SearchConfig::new(2275, 25)
        .with_operators(arithmetic())
        .with_max_count(4)
        .with_result_count(1000);
    let result = find(&config);
    assert!(result.is_ok());

    if let Ok(solutions) = result {
        assert_all_valid(&solutions, 2275);
        let wanted = canonical_key("5 * 5 * 7 * 13");
        assert!(solutions.iter().any(|s| s.canonical_key() == wanted));
    }
}

#[test]
fn test_large_target_with_all_arithmetic() {
    let config = SearchConfig::new(2285, 25).with_operators(arithmetic());
    let result = find(&config);
    assert!(result.is_ok());

    if let Ok(solutions) = result {
        assert!(!solutions.is_empty());
        assert!(solutions.len() <= 5);
        assert_all_valid(&solutions, 2285);
    }
}

#[test]
fn test_no_duplicate_canonical_keys() {
    let config = SearchConfig::new(24, 6)
        .with_operators(arithmetic())
        .with_max_count(4)
        .with_result_count(500)
        .with_exhaustive(true);
    let result = find(&config);
    assert!(result.is_ok());

    if let Ok(solutions) = result {
        let keys: HashSet<&str> = solutions.iter().map(Solution::canonical_key).collect();
        assert_eq!(keys.len(), solutions.len());
    }
}

#[test]
fn test_results_are_ranked() {
    let config = SearchConfig::new(30, 10)
        .with_operators(arithmetic())
        .with_max_count(4)
        .with_result_count(50);
    let result = find(&config);
    assert!(result.is_ok());

    if let Ok(solutions) = result {
        for pair in solutions.windows(2) {
            let first = (pair[0].op_count(), pair[0].numbers().len());
            let second = (pair[1].op_count(), pair[1].numbers().len());
            assert!(first <= second);
        }
    }
}

#[test]
fn test_early_stop_keeps_exhaustive_top_results() {
    let base = SearchConfig::new(50, 6)
        .with_operators(additive_and_multiply())
        .with_max_count(5)
        .with_result_count(5);
    let quick = find(&base);
    let exhaustive = find(&base.clone().with_exhaustive(true));
    assert!(quick.is_ok());
    assert!(exhaustive.is_ok());

    if let (Ok(quick), Ok(exhaustive)) = (quick, exhaustive) {
        assert_eq!(quick.len(), 5);
        let quick_keys: Vec<&str> = quick.iter().map(Solution::canonical_key).collect();
        let exhaustive_keys: Vec<&str> = exhaustive.iter().map(Solution::canonical_key).collect();
        assert_eq!(quick_keys, exhaustive_keys);
    }
}

#[test]
fn test_progress_reports_each_size_until_early_stop() {
    let (messages, sink) = recording_sink();
    let config = SearchConfig::new(100, 8)
        .with_operators(additive_and_multiply())
        .with_progress(sink);
    assert!(find(&config).is_ok());

    if let Ok(messages) = messages.lock() {
        assert_eq!(
            *messages,
            vec![
                "Searching 1 numbers...",
                "Searching 2 numbers...",
                "Searching 3 numbers...",
                "Searching 4 numbers...",
            ]
        );
    }
}

#[test]
fn test_exhaustive_searches_every_size() {
    let (messages, sink) = recording_sink();
    let config = SearchConfig::new(6, 4)
        .with_max_count(3)
        .with_exhaustive(true)
        .with_progress(sink);
    assert!(find(&config).is_ok());

    if let Ok(messages) = messages.lock() {
        assert_eq!(messages.len(), 3);
    }
}

#[test]
fn test_missing_sink_is_silent() {
    let config = SearchConfig::new(3, 3);
    config.notify("nobody is listening");
    assert!(find(&config).is_ok());
}

#[test]
fn test_empty_configurations_yield_nothing() {
    let empty_pool = SearchConfig::new(5, 0);
    assert_eq!(find(&empty_pool), Ok(Vec::new()));

    let all_excluded = SearchConfig::new(5, 3).with_excluded([1, 2, 3]);
    assert_eq!(find(&all_excluded), Ok(Vec::new()));

    let no_size = SearchConfig::new(5, 5).with_max_count(0);
    assert_eq!(find(&no_size), Ok(Vec::new()));

    let no_results = SearchConfig::new(5, 5).with_result_count(0);
    assert_eq!(find(&no_results), Ok(Vec::new()));
}

#[test]
fn test_no_operators() {
    let in_pool = SearchConfig::new(7, 10).with_operators(OperatorSet::none());
    let result = find(&in_pool);
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(solutions.len(), 1);
        if let Some(solution) = solutions.first() {
            assert_eq!(solution.expression(), "7");
            assert_eq!(solution.op_count(), 0);
        }
    }

    let out_of_pool = SearchConfig::new(30, 10).with_operators(OperatorSet::none());
    assert_eq!(
        find(&out_of_pool),
        Err(SearchError::NoOperators { target: 30 })
    );
}

#[test]
fn test_too_many_integers() {
    let config = SearchConfig::new(5, 5).with_max_count(11);
    assert_eq!(
        find(&config),
        Err(SearchError::UtilsError(UtilsError::IntegerCountTooLarge {
            requested: 11,
            limit: 10,
        }))
    );
}

#[test]
fn test_unreachable_target() {
    // only 3 and 5 remain and addition alone cannot make 2
    let config = SearchConfig::new(2, 5)
        .with_excluded([1, 2, 4])
        .with_max_count(2);
    assert_eq!(find(&config), Ok(Vec::new()));

    let with_subtract = config.with_operators(OperatorSet::additive().with(Operator::Subtract));
    let result = find(&with_subtract);
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert!(solutions.iter().any(|s| s.expression() == "5 - 3"));
    }
}

#[test]
fn test_negative_target() {
    let config =
        SearchConfig::new(-7, 5).with_operators(OperatorSet::additive().with(Operator::Subtract));
    let result = find(&config);
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert!(!solutions.is_empty());
        assert_all_valid(&solutions, -7);
    }
}

#[test]
fn test_disabled_subtraction_never_appears() {
    let config = SearchConfig::new(373, 8).with_operators(additive_and_multiply());
    let result = find(&config);
    assert!(result.is_ok());

    if let Ok(solutions) = result {
        assert!(!solutions.is_empty());
        for solution in &solutions {
            assert!(!solution.expression().contains('-'));
        }
        assert_all_valid(&solutions, 373);
    }
}

#[test]
fn test_subtracted_sums_stay_parenthesised() {
    let excluded: Vec<i64> = (1..=19).filter(|n| *n != 5 && *n != 10).collect();
    let config = SearchConfig::new(10, 20)
        .with_operators(OperatorSet::additive().with(Operator::Subtract))
        .with_excluded(excluded)
        .with_max_count(3)
        .with_result_count(20)
        .with_exhaustive(true);
    let result = find(&config);
    assert!(result.is_ok());

    if let Ok(solutions) = result {
        assert!(!solutions.is_empty());
        assert_all_valid(&solutions, 10);
    }
}

#[test]
fn test_excluded_integers_are_never_used() {
    let config = SearchConfig::new(5, 5)
        .with_operators(additive_and_multiply())
        .with_excluded([5])
        .with_max_count(2);
    let result = find(&config);
    assert!(result.is_ok());

    if let Ok(solutions) = result {
        assert!(!solutions.is_empty());
        for solution in &solutions {
            assert!(!solution.numbers().contains(&5));
        }
    }
}

#[test]
fn test_operator_count_respects_size_limit() {
    let config = SearchConfig::new(3, 5).with_max_count(2).with_result_count(20);
    let result = find(&config);
    assert!(result.is_ok());

    if let Ok(solutions) = result {
        assert!(solutions.iter().all(|s| s.op_count() <= 1));
    }

    let no_multiply = SearchConfig::new(6, 6).with_max_count(2).with_result_count(20);
    if let Ok(solutions) = find(&no_multiply) {
        assert!(solutions.iter().all(|s| !s.expression().contains('*')));
    }
}

#[test]
fn test_direct_search_single_integer() {
    let pool = [1, 2, 3, 4, 5];
    let found = direct_search(3, &pool, &[Operator::Add], 1);
    assert_eq!(found, vec![Solution::new("3".to_string(), 3, vec![3], 0)]);
    assert!(direct_search(9, &pool, &[Operator::Add], 1).is_empty());
    assert!(direct_search(3, &pool, &[Operator::Add], 0).is_empty());
}

#[test]
fn test_direct_search_keeps_pool_order() {
    let pool = [1, 2, 3, 4, 5];
    let found = direct_search(6, &pool, &[Operator::Add], 2);
    let expressions: Vec<&str> = found.iter().map(Solution::expression).collect();
    assert_eq!(expressions, vec!["1 + 5", "2 + 4", "3 + 3", "4 + 2", "5 + 1"]);
    if let Some(solution) = found.get(2) {
        assert_eq!(solution.numbers(), &[3]);
    }
}

#[test]
fn test_direct_search_uses_precedence() {
    let found = direct_search(14, &[2, 3, 4], &[Operator::Add, Operator::Multiply], 3);
    assert!(found.iter().any(|s| s.expression() == "2 + (3 * 4)"));
    assert_all_valid(&found, 14);
}

#[test]
fn test_solution_set_deduplicates() {
    let mut set = SolutionSet::new();
    assert!(set.is_empty());
    assert!(set.insert(Solution::new("2 + 3".to_string(), 5, vec![2, 3], 1)));
    assert!(!set.insert(Solution::new("3 + 2".to_string(), 5, vec![2, 3], 1)));
    assert_eq!(set.len(), 1);

    let added = set.extend(vec![
        Solution::new("1 + 4".to_string(), 5, vec![1, 4], 1),
        Solution::new("4 + 1".to_string(), 5, vec![1, 4], 1),
        Solution::new("5".to_string(), 5, vec![5], 0),
    ]);
    assert_eq!(added, 2);
    assert_eq!(set.len(), 3);
    assert_eq!(set.best_op_count(), Some(0));
}

#[test]
fn test_solution_set_ranking() {
    let mut set = SolutionSet::new();
    set.extend(vec![
        Solution::new("2 + 2 + 2".to_string(), 6, vec![2], 2),
        Solution::new("1 + 2 + 3".to_string(), 6, vec![1, 2, 3], 2),
        Solution::new("2 * 3".to_string(), 6, vec![2, 3], 1),
        Solution::new("1 + 5".to_string(), 6, vec![1, 5], 1),
    ]);

    let ranked = set.clone().into_ranked(10);
    let expressions: Vec<&str> = ranked.iter().map(Solution::expression).collect();
    assert_eq!(expressions, vec!["1 + 5", "2 * 3", "2 + 2 + 2", "1 + 2 + 3"]);

    assert_eq!(set.into_ranked(1).len(), 1);
}

#[test]
fn test_solution_display() {
    let solution = Solution::new("4 * 5 * 5".to_string(), 100, vec![4, 5], 2);
    assert_eq!(format!("{}", solution), "4 * 5 * 5 = 100");
}

#[test]
fn test_config_cap() {
    let config = SearchConfig::new(10, 10);
    assert_eq!(config.cap(), Some(3));
    assert_eq!(config.clone().with_max_results_per_value(0).cap(), None);
    assert_eq!(config.clone().with_max_results_per_value(7).cap(), Some(7));
    assert_eq!(config.with_exhaustive(true).cap(), None);
}

#[test]
fn test_config_pool() {
    let config = SearchConfig::new(10, 6).with_excluded([2, 4, 9]);
    assert_eq!(config.pool(), vec![1, 3, 5, 6]);
    assert!(format!("{:?}", config).contains("pool_bound: 6"));
}
