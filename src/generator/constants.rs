// Configuration constants for the generator module
pub const DIRECT_ENUMERATION_LIMIT: usize = 3;
pub const MAX_EXPONENT: i64 = 63;

/// Contiguous runs of left values per worker thread when joining two halves
pub const JOIN_RUNS_PER_THREAD: usize = 4;
