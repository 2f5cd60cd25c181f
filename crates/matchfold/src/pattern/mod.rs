mod holder;
mod optimize;
mod recognize;
mod validate;

#[cfg(test)]
mod tests;

pub use holder::{RegexHolder, SqlLikeHolder};
pub use optimize::{PatternOptimizer, try_optimize};
pub use recognize::{Rewrite, Shape, recognize};
pub use validate::{PatternCall, validate_arguments};
