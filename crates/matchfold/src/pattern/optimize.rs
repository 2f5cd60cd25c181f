//! Module: pattern::optimize
//! Responsibility: best-effort replacement of pattern calls with cheaper
//! prefix, suffix and substring calls.
//! Does not own: recognizer shapes or holder compilation.
//! Boundary: never fails; every problem downgrades to "no rewrite".

use crate::{
    LIKE, REGEXP_MATCHES,
    config::RewriteConfig,
    error::PatternError,
    expr::{CallNode, LiteralNode, LiteralValue},
    like::{LikeTranslator, SqlLikeTranslator},
    obs::{MetricsEvent, SkipReason, sink::record},
    pattern::{
        holder::{RegexHolder, SqlLikeHolder},
        recognize::{Rewrite, recognize},
        validate::{PatternCall, validate_arguments},
    },
};
use std::{borrow::Cow, sync::Arc};

/// Rewrite `node` with the default configuration.
#[must_use]
pub fn try_optimize(node: &CallNode) -> Cow<'_, CallNode> {
    PatternOptimizer::default().try_optimize(node)
}

///
/// PatternOptimizer
///
/// Rewrites `regexp_matches` and `like` calls whose pattern text is a plain
/// prefix, suffix or substring test. Other calls pass through, so running
/// the pass over its own output changes nothing.
///

#[derive(Clone, Debug)]
pub struct PatternOptimizer<T = SqlLikeTranslator> {
    config: RewriteConfig,
    translator: T,
}

impl PatternOptimizer {
    /// Optimizer using the standard LIKE translator configured by `config`.
    #[must_use]
    pub const fn new(config: RewriteConfig) -> Self {
        let translator = config.like_translator();

        Self { config, translator }
    }
}

impl Default for PatternOptimizer {
    fn default() -> Self {
        Self::new(RewriteConfig::default())
    }
}

impl<T: LikeTranslator> PatternOptimizer<T> {
    #[must_use]
    pub const fn with_translator(config: RewriteConfig, translator: T) -> Self {
        Self { config, translator }
    }

    /// Return a cheaper equivalent of `node`, or `node` itself.
    #[must_use]
    pub fn try_optimize<'a>(&self, node: &'a CallNode) -> Cow<'a, CallNode> {
        let function = match node.name() {
            REGEXP_MATCHES => REGEXP_MATCHES,
            LIKE => LIKE,
            _ => return Cow::Borrowed(node),
        };
        record(MetricsEvent::Attempt { function });

        if !self.config.enabled {
            record(MetricsEvent::Skipped {
                function,
                reason: SkipReason::Disabled,
            });
            return Cow::Borrowed(node);
        }

        let (call, holder) = match self.build_holder(function, node) {
            Ok(built) => built,
            Err(err) => {
                log::debug!("skipping {function} rewrite: {}", err.display_with_class());
                record(MetricsEvent::Skipped {
                    function,
                    reason: SkipReason::InvalidCall,
                });
                return Cow::Borrowed(node);
            }
        };

        let pattern = holder.pattern();
        let Some(rewrite) = recognize(pattern, |shape| self.config.allows(shape)) else {
            // Tell "switched off" apart from "not reducible" for the counters.
            let reason = if recognize(pattern, |_| true).is_some() {
                SkipReason::Disabled
            } else {
                SkipReason::NoMatch
            };
            record(MetricsEvent::Skipped { function, reason });
            return Cow::Borrowed(node);
        };

        log::trace!(
            "rewrote {function} pattern '{pattern}' to {}",
            rewrite.shape.function()
        );
        record(MetricsEvent::Rewritten {
            function,
            shape: rewrite.shape,
        });

        Cow::Owned(rewrite_call(&call, rewrite, node))
    }

    // Validate once, then compile the flavor-specific pattern text.
    fn build_holder<'a>(
        &self,
        function: &str,
        node: &'a CallNode,
    ) -> Result<(PatternCall<'a>, Arc<RegexHolder>), PatternError> {
        let call = validate_arguments(node)?;
        let holder = if function == LIKE {
            SqlLikeHolder::from_like(call.pattern(), &self.translator)?.shared()
        } else {
            RegexHolder::from_pattern(call.pattern())?
        };

        Ok((call, holder))
    }
}

// Build `shape(subject, 'literal')`, keeping the original result type and
// the pattern literal's declared type.
fn rewrite_call(call: &PatternCall<'_>, rewrite: Rewrite<'_>, node: &CallNode) -> CallNode {
    let literal = LiteralNode::new(
        call.pattern_type(),
        LiteralValue::String(rewrite.literal.to_string()),
        false,
    );

    CallNode::new(
        rewrite.shape.function(),
        vec![Arc::clone(call.subject()), Arc::new(literal.into())],
        node.return_type(),
    )
}
