//! Module: pattern::recognize
//! Responsibility: classify compiled pattern text as a prefix, suffix or
//! plain-substring test.
//! Does not own: node construction or holder compilation.
//! Boundary: works on pattern source text only, never on regex internals.

use crate::{ENDS_WITH, IS_SUBSTR, STARTS_WITH};
use regex::Regex;
use std::sync::LazyLock;

// ASCII word/space class, matching the engine's `\w` and `\s` literally:
// a pattern built only from these chars has no metacharacters.
static STARTS_WITH_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| recognizer(r"\A\^([0-9A-Za-z_\t\n\x0C\r ]+)(?:\.\*)?\z"));
static ENDS_WITH_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| recognizer(r"\A(?:\.\*)?([0-9A-Za-z_\t\n\x0C\r ]+)\$\z"));
static IS_SUBSTR_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| recognizer(r"\A[0-9A-Za-z_\t\n\x0C\r ]*\z"));

fn recognizer(source: &str) -> Regex {
    Regex::new(source).unwrap_or_else(|err| panic!("recognizer '{source}' must compile: {err}"))
}

///
/// Shape
///
/// Pattern shapes that reduce to a cheaper string operation.
/// `Shape::ORDER` is the order they are tried in; the first match wins.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Shape {
    /// `^literal` with an optional trailing `.*`.
    StartsWith,
    /// `literal$` with an optional leading `.*`.
    EndsWith,
    /// Bare literal, no anchors or wildcards.
    IsSubstr,
}

impl Shape {
    pub const ORDER: [Self; 3] = [Self::StartsWith, Self::EndsWith, Self::IsSubstr];

    /// Name of the replacement operation.
    #[must_use]
    pub const fn function(self) -> &'static str {
        match self {
            Self::StartsWith => STARTS_WITH,
            Self::EndsWith => ENDS_WITH,
            Self::IsSubstr => IS_SUBSTR,
        }
    }

    /// Full-match `text` against this shape and return the literal operand.
    #[must_use]
    pub fn capture(self, text: &str) -> Option<&str> {
        match self {
            Self::StartsWith => STARTS_WITH_SHAPE
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str()),
            // Leading `.*` is irrelevant: the matcher searches unanchored.
            Self::EndsWith => ENDS_WITH_SHAPE
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str()),
            Self::IsSubstr => IS_SUBSTR_SHAPE.is_match(text).then_some(text),
        }
    }
}

///
/// Rewrite
///
/// Outcome of a successful classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rewrite<'a> {
    pub shape: Shape,
    pub literal: &'a str,
}

/// Classify `text` against every shape accepted by `enabled`, in order.
#[must_use]
pub fn recognize(text: &str, enabled: impl Fn(Shape) -> bool) -> Option<Rewrite<'_>> {
    Shape::ORDER
        .into_iter()
        .filter(|shape| enabled(*shape))
        .find_map(|shape| shape.capture(text).map(|literal| Rewrite { shape, literal }))
}
