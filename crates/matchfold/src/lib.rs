//! Compile-time rewriting of string-matching predicates: validates
//! `like` / `regexp_matches` call nodes, compiles their patterns into
//! shareable holders, and folds simple patterns into `starts_with`,
//! `ends_with` and `is_substr` calls.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod config;
pub mod error;
pub mod expr;
pub mod like;
pub mod obs;
pub mod pattern;

///
/// CONSTANTS
///

/// Operation name of the general regex matcher.
pub const REGEXP_MATCHES: &str = "regexp_matches";

/// Operation name of the SQL LIKE matcher.
pub const LIKE: &str = "like";

/// Operation name emitted for patterns that reduce to a prefix test.
pub const STARTS_WITH: &str = "starts_with";

/// Operation name emitted for patterns that reduce to a suffix test.
pub const ENDS_WITH: &str = "ends_with";

/// Operation name emitted for patterns that reduce to substring containment.
pub const IS_SUBSTR: &str = "is_substr";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No metrics plumbing or config loaders are re-exported here.
///

pub mod prelude {
    pub use crate::{
        error::PatternError,
        expr::{CallNode, DataType, Expr, FieldNode, LiteralNode, LiteralValue},
        like::{LikeTranslator, SqlLikeTranslator},
        pattern::{PatternOptimizer, RegexHolder, SqlLikeHolder, try_optimize},
    };
}
