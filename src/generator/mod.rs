//! Subexpression tables and the meet-in-the-middle combination step

mod combiner;
pub mod constants;
mod core;
mod partial;
mod table;

pub use combiner::{combine, meet_in_the_middle};
pub use self::core::generate_subexpressions;
pub use partial::PartialResult;
pub use table::SubexpressionTable;
