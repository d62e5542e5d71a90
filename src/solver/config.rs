use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use log::info;

use crate::expression::OperatorSet;
use crate::solver::constants::{
    DEFAULT_MAX_COUNT, DEFAULT_MAX_RESULTS_PER_VALUE, DEFAULT_RESULT_COUNT,
};
use crate::utils::build_pool;

/// Receives a line of text before each expression size is searched
pub trait ProgressSink: Send + Sync {
    fn notify(&self, message: &str);
}

impl<F> ProgressSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn notify(&self, message: &str) {
        self(message)
    }
}

/// Forwards progress messages to the `log` facade at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn notify(&self, message: &str) {
        info!("{}", message);
    }
}

/// Everything one search needs, fixed for the duration of the search
#[derive(Clone)]
pub struct SearchConfig {
    pub target: i64,
    /// The pool is `1..=pool_bound` minus `excluded`
    pub pool_bound: i64,
    pub excluded: BTreeSet<i64>,
    pub operators: OperatorSet,
    pub max_count: usize,
    pub result_count: usize,
    /// Lifts the per-value cap and disables early termination
    pub exhaustive: bool,
    /// Ways kept per value in a subexpression table; 0 keeps all of them
    pub max_results_per_value: usize,
    progress: Option<Arc<dyn ProgressSink>>,
}

impl SearchConfig {
    /// Addition only, with the default size limits
    pub fn new(target: i64, pool_bound: i64) -> Self {
        Self {
            target,
            pool_bound,
            excluded: BTreeSet::new(),
            operators: OperatorSet::additive(),
            max_count: DEFAULT_MAX_COUNT,
            result_count: DEFAULT_RESULT_COUNT,
            exhaustive: false,
            max_results_per_value: DEFAULT_MAX_RESULTS_PER_VALUE,
            progress: None,
        }
    }

    pub fn with_operators(mut self, operators: OperatorSet) -> Self {
        self.operators = operators;
        self
    }

    pub fn with_excluded(mut self, excluded: impl IntoIterator<Item = i64>) -> Self {
        self.excluded = excluded.into_iter().collect();
        self
    }

    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn with_result_count(mut self, result_count: usize) -> Self {
        self.result_count = result_count;
        self
    }

    pub fn with_exhaustive(mut self, exhaustive: bool) -> Self {
        self.exhaustive = exhaustive;
        self
    }

    pub fn with_max_results_per_value(mut self, max_results_per_value: usize) -> Self {
        self.max_results_per_value = max_results_per_value;
        self
    }

    pub fn with_progress(mut self, sink: impl ProgressSink + 'static) -> Self {
        self.progress = Some(Arc::new(sink));
        self
    }

    /// Available integers, ascending
    pub fn pool(&self) -> Vec<i64> {
        build_pool(self.pool_bound, &self.excluded)
    }

    /// Per-value cap for subexpression tables, `None` when unbounded
    pub fn cap(&self) -> Option<usize> {
        if self.exhaustive || self.max_results_per_value == 0 {
            None
        } else {
            Some(self.max_results_per_value)
        }
    }

    pub fn notify(&self, message: &str) {
        if let Some(sink) = &self.progress {
            sink.notify(message);
        }
    }
}

impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("target", &self.target)
            .field("pool_bound", &self.pool_bound)
            .field("excluded", &self.excluded)
            .field("operators", &self.operators)
            .field("max_count", &self.max_count)
            .field("result_count", &self.result_count)
            .field("exhaustive", &self.exhaustive)
            .field("max_results_per_value", &self.max_results_per_value)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}
