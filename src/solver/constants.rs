// Configuration constants for the solver module
pub const DEFAULT_MAX_COUNT: usize = 6;
pub const DEFAULT_RESULT_COUNT: usize = 5;
pub const DEFAULT_MAX_RESULTS_PER_VALUE: usize = 3;
pub const MAX_INTEGER_COUNT: usize = 10;
pub const DIRECT_SEARCH_LIMIT: usize = 4;
