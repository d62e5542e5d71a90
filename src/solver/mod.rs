pub mod config;
pub mod constants;
mod core;
mod direct;
mod errors;
mod solution;

pub use self::core::SolutionFinder;
pub use config::{LogProgress, ProgressSink, SearchConfig};
pub use direct::direct_search;
pub use errors::SearchError;
pub use solution::{Solution, SolutionSet};

#[cfg(test)]
mod tests;
