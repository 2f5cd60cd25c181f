//! Module: pattern::holder
//! Responsibility: compile pattern text once into an immutable, shareable matcher.
//! Does not own: per-row evaluation or rewrite decisions.
//! Boundary: built at expression-compile time; retained by compiled predicates.

use crate::{
    error::PatternError,
    expr::CallNode,
    like::LikeTranslator,
    obs::{HolderFlavor, MetricsEvent, sink::record},
    pattern::validate::validate_arguments,
};
use derive_more::Deref;
use regex::Regex;
use std::sync::Arc;

///
/// RegexHolder
///
/// Source pattern text paired with its compiled regex.
/// Nothing mutates a holder after construction, so it is shared through
/// `Arc` by every predicate that keeps it.
///

#[derive(Debug)]
pub struct RegexHolder {
    pattern: String,
    regex: Regex,
}

impl RegexHolder {
    /// Compile raw regex text.
    pub fn from_pattern(pattern: impl Into<String>) -> Result<Arc<Self>, PatternError> {
        let holder = Self::compile(pattern.into())?;
        record(MetricsEvent::HolderBuilt {
            flavor: HolderFlavor::Regex,
        });

        Ok(holder)
    }

    fn compile(pattern: String) -> Result<Arc<Self>, PatternError> {
        let regex =
            Regex::new(&pattern).map_err(|err| PatternError::invalid_pattern(&pattern, &err))?;

        Ok(Arc::new(Self { pattern, regex }))
    }

    /// Validate a `regexp_matches`-shaped call and compile its literal.
    pub fn from_call(node: &CallNode) -> Result<Arc<Self>, PatternError> {
        let call = validate_arguments(node)?;

        Self::from_pattern(call.pattern())
    }

    /// Pattern text the regex was compiled from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }
}

///
/// SqlLikeHolder
///
/// Regex holder whose pattern text was produced by a LIKE translator.
/// Derefs to the shared `RegexHolder`, so `pattern()` is the translated text.
///

#[derive(Clone, Debug, Deref)]
pub struct SqlLikeHolder {
    like: String,
    #[deref]
    inner: Arc<RegexHolder>,
}

impl SqlLikeHolder {
    /// Translate LIKE text, then compile the result.
    pub fn from_like(like: &str, translator: &impl LikeTranslator) -> Result<Self, PatternError> {
        let pattern = translator.translate(like)?;
        let inner = RegexHolder::compile(pattern)?;
        record(MetricsEvent::HolderBuilt {
            flavor: HolderFlavor::SqlLike,
        });

        Ok(Self {
            like: like.to_string(),
            inner,
        })
    }

    /// Validate a `like`-shaped call, translate its literal and compile it.
    pub fn from_call(node: &CallNode, translator: &impl LikeTranslator) -> Result<Self, PatternError> {
        let call = validate_arguments(node)?;

        Self::from_like(call.pattern(), translator)
    }

    /// Original LIKE text, before translation.
    #[must_use]
    pub fn like_pattern(&self) -> &str {
        &self.like
    }

    /// Shared handle to the underlying regex holder.
    #[must_use]
    pub fn shared(&self) -> Arc<RegexHolder> {
        Arc::clone(&self.inner)
    }
}
