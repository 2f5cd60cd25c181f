//! Module: pattern::validate
//! Responsibility: call-shape validation and pattern-literal extraction.
//! Does not own: regex compilation or LIKE translation.
//! Boundary: holders validate through here before compiling anything.

use crate::{
    error::{PatternError, ShapeViolation},
    expr::{CallNode, DataType, Expr},
};
use std::sync::Arc;

///
/// PatternCall
///
/// Witness of a validated pattern call: exactly two children, the second a
/// non-null string literal. Only `validate_arguments` builds one, so
/// reading the pattern back never re-checks the shape.
///

#[derive(Clone, Copy, Debug)]
pub struct PatternCall<'a> {
    function: &'a str,
    subject: &'a Arc<Expr>,
    pattern: &'a str,
    pattern_type: DataType,
}

impl<'a> PatternCall<'a> {
    #[must_use]
    pub const fn function(&self) -> &'a str {
        self.function
    }

    /// First operand, shared so rewrites can reuse it.
    #[must_use]
    pub const fn subject(&self) -> &'a Arc<Expr> {
        self.subject
    }

    /// Pattern text carried by the literal operand.
    #[must_use]
    pub const fn pattern(&self) -> &'a str {
        self.pattern
    }

    /// Declared type of the literal operand.
    #[must_use]
    pub const fn pattern_type(&self) -> DataType {
        self.pattern_type
    }
}

/// Check that `node` has the shape `fn(expr, 'string literal')`.
pub fn validate_arguments(node: &CallNode) -> Result<PatternCall<'_>, PatternError> {
    let function = node.name();

    let [subject, pattern] = node.children() else {
        return Err(PatternError::invalid_shape(
            function,
            ShapeViolation::Arity {
                found: node.children().len(),
            },
        ));
    };

    let Some(literal) = pattern.as_literal() else {
        return Err(PatternError::invalid_shape(
            function,
            ShapeViolation::NotLiteral,
        ));
    };

    // Type tag and payload must agree: a string-typed null carries no pattern.
    let text = literal
        .value
        .as_str()
        .filter(|_| literal.data_type.is_string_like())
        .ok_or_else(|| PatternError::invalid_shape(function, ShapeViolation::NotStringLiteral))?;

    Ok(PatternCall {
        function,
        subject,
        pattern: text,
        pattern_type: literal.data_type,
    })
}
