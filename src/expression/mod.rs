//! Expression module split into submodules for clarity

mod canonical;
mod display;
mod errors;
mod eval;
mod operator;
mod parse;

pub use canonical::canonical_key;
pub use display::{compose, format_sequence};
pub use errors::ExpressionError;
pub use eval::evaluate;
pub use operator::{Operator, OperatorSet};
pub use parse::evaluate_str;
