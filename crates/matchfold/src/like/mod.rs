//! Module: like
//! Responsibility: translation of SQL LIKE syntax into regex pattern text.
//! Does not own: regex compilation or the rewrite pass.
//! Boundary: `SqlLikeHolder` calls a `LikeTranslator` before compiling.


use thiserror::Error as ThisError;

///
/// LikeTranslator
///
/// Converts one LIKE pattern into the regex engine's syntax.
///

pub trait LikeTranslator {
    fn translate(&self, like: &str) -> Result<String, LikeTranslateError>;
}

///
/// LikeTranslateError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum LikeTranslateError {
    #[error("unexpected escape char at the end of LIKE pattern '{pattern}'")]
    TrailingEscape { pattern: String },

    #[error("invalid escape sequence '{escape}{found}' in LIKE pattern '{pattern}'")]
    InvalidEscape {
        pattern: String,
        escape: char,
        found: char,
    },
}

///
/// SqlLikeTranslator
///
/// Standard SQL LIKE translation:
/// - `_` matches one char, `%` matches any run
/// - the escape char makes the next `%`, `_` or escape literal
/// - the result is anchored on both ends unless the pattern starts or
///   ends with an unescaped `%`
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SqlLikeTranslator {
    escape: Option<char>,
}

impl SqlLikeTranslator {
    pub const DEFAULT_ESCAPE: char = '\\';

    #[must_use]
    pub const fn new(escape: Option<char>) -> Self {
        Self { escape }
    }

    #[must_use]
    pub const fn escape(&self) -> Option<char> {
        self.escape
    }

    // Split the LIKE text into literal chars and wildcards.
    fn tokenize(&self, like: &str) -> Result<Vec<LikeToken>, LikeTranslateError> {
        let mut tokens = Vec::with_capacity(like.len());
        let mut chars = like.chars();

        while let Some(c) = chars.next() {
            if Some(c) == self.escape {
                let Some(next) = chars.next() else {
                    return Err(LikeTranslateError::TrailingEscape {
                        pattern: like.to_string(),
                    });
                };
                if next != '%' && next != '_' && Some(next) != self.escape {
                    return Err(LikeTranslateError::InvalidEscape {
                        pattern: like.to_string(),
                        escape: c,
                        found: next,
                    });
                }
                tokens.push(LikeToken::Literal(next));
                continue;
            }

            tokens.push(match c {
                '%' => LikeToken::AnyRun,
                '_' => LikeToken::AnyOne,
                other => LikeToken::Literal(other),
            });
        }

        Ok(tokens)
    }
}

impl Default for SqlLikeTranslator {
    fn default() -> Self {
        Self::new(Some(Self::DEFAULT_ESCAPE))
    }
}

impl LikeTranslator for SqlLikeTranslator {
    fn translate(&self, like: &str) -> Result<String, LikeTranslateError> {
        let tokens = self.tokenize(like)?;
        let mut body = tokens.as_slice();

        let anchor_start = match body.split_first() {
            Some((LikeToken::AnyRun, rest)) => {
                body = rest;
                false
            }
            _ => true,
        };
        let anchor_end = match body.split_last() {
            Some((LikeToken::AnyRun, rest)) => {
                body = rest;
                false
            }
            // a lone `%` matches everything
            None => anchor_start,
            Some(_) => true,
        };

        let mut out = String::with_capacity(like.len() + 2);
        if anchor_start {
            out.push('^');
        }
        for token in body {
            match token {
                LikeToken::AnyRun => out.push_str(".*"),
                LikeToken::AnyOne => out.push('.'),
                LikeToken::Literal(c) => {
                    if is_regex_meta(*c) {
                        out.push('\\');
                    }
                    out.push(*c);
                }
            }
        }
        if anchor_end {
            out.push('$');
        }

        Ok(out)
    }
}

///
/// LikeToken
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LikeToken {
    Literal(char),
    AnyOne,
    AnyRun,
}

const fn is_regex_meta(c: char) -> bool {
    matches!(
        c,
        '\\' | '^' | '$' | '.' | '|' | '?' | '*' | '+' | '(' | ')' | '[' | ']' | '{' | '}'
    )
}
