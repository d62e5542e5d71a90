use numcomb::{Operator, OperatorSet, SearchConfig, SearchError, canonical_key, search};

#[test]
fn test_search_reaches_target_with_fewest_operators() {
    let config = SearchConfig::new(100, 8)
        .with_operators(OperatorSet::additive().with(Operator::Multiply));
    let result = search(&config);
    assert!(result.is_ok());

    if let Ok(solutions) = result {
        assert!(!solutions.is_empty());
        if let Some(best) = solutions.first() {
            assert_eq!(best.canonical_key(), canonical_key("5 * 4 * 5"));
            assert_eq!(best.to_string(), format!("{} = 100", best.expression()));
        }
        assert!(solutions.iter().all(|s| s.value() == 100));
    }
}

#[test]
fn test_search_with_every_operator() {
    let config = SearchConfig::new(64, 6)
        .with_operators(OperatorSet::all())
        .with_max_count(3);
    let result = search(&config);
    assert!(result.is_ok());

    if let Ok(solutions) = result {
        assert!(!solutions.is_empty());
        assert!(solutions.iter().all(|s| s.value() == 64));
        assert!(solutions.iter().all(|s| s.op_count() <= 2));
    }
}

#[test]
fn test_search_reports_progress_through_closure() {
    let calls = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = std::sync::Arc::clone(&calls);
    let config = SearchConfig::new(4, 4)
        .with_max_count(2)
        .with_exhaustive(true)
        .with_progress(move |_: &str| {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        });

    assert!(search(&config).is_ok());
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 2);
}

#[test]
fn test_search_rejects_unsearchable_configurations() {
    let no_operators = SearchConfig::new(40, 25).with_operators(OperatorSet::none());
    assert!(matches!(
        search(&no_operators),
        Err(SearchError::NoOperators { target: 40 })
    ));

    let too_large = SearchConfig::new(40, 25).with_max_count(12);
    let result = search(&too_large);
    assert!(matches!(result, Err(SearchError::UtilsError(_))));
    if let Err(e) = result {
        assert!(e.to_string().contains("12"));
    }
}
