//! Module: expr
//! Responsibility: closed expression-tree vocabulary consumed by the rewrite pass.
//! Does not own: expression evaluation or type inference.
//! Boundary: the pattern module reads call/literal shape and builds new calls here.


use derive_more::Display;
use std::{fmt, sync::Arc};

///
/// DataType
///
/// Declared result type of an expression node.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum DataType {
    #[display("bool")]
    Boolean,
    #[display("int32")]
    Int32,
    #[display("int64")]
    Int64,
    #[display("double")]
    Float64,
    #[display("string")]
    Utf8,
    #[display("binary")]
    Binary,
}

impl DataType {
    /// Returns true for the types a pattern literal may carry.
    #[must_use]
    pub const fn is_string_like(self) -> bool {
        matches!(self, Self::Utf8 | Self::Binary)
    }
}

///
/// LiteralValue
///

#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    String(String),
}

impl LiteralValue {
    /// Borrow the string payload, if this is a string literal.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v}"),
        }
    }
}

///
/// FieldNode
///
/// Reference to an input column.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldNode {
    pub name: String,
    pub data_type: DataType,
}

impl FieldNode {
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

///
/// LiteralNode
///
/// Constant operand. `nullable` is false for compiler-synthesized constants.
///

#[derive(Clone, Debug, PartialEq)]
pub struct LiteralNode {
    pub data_type: DataType,
    pub value: LiteralValue,
    pub nullable: bool,
}

impl LiteralNode {
    #[must_use]
    pub const fn new(data_type: DataType, value: LiteralValue, nullable: bool) -> Self {
        Self {
            data_type,
            value,
            nullable,
        }
    }

    /// Non-nullable UTF-8 string literal.
    #[must_use]
    pub fn utf8(value: impl Into<String>) -> Self {
        Self::new(DataType::Utf8, LiteralValue::String(value.into()), false)
    }
}

///
/// CallNode
///
/// Call to a named function with ordered children and a declared result type.
/// Children are shared so rewrites can reuse untouched operands.
///

#[derive(Clone, Debug, PartialEq)]
pub struct CallNode {
    name: String,
    children: Vec<Arc<Expr>>,
    return_type: DataType,
}

impl CallNode {
    #[must_use]
    pub fn new(name: impl Into<String>, children: Vec<Arc<Expr>>, return_type: DataType) -> Self {
        Self {
            name: name.into(),
            children,
            return_type,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn children(&self) -> &[Arc<Expr>] {
        &self.children
    }

    #[must_use]
    pub const fn return_type(&self) -> DataType {
        self.return_type
    }
}

impl fmt::Display for CallNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.return_type, self.name)?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{child}")?;
        }
        write!(f, ")")
    }
}

///
/// Expr
///
/// Closed set of expression node kinds. Literal detection is a variant
/// match, never a runtime type probe.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Field(FieldNode),
    Literal(LiteralNode),
    Call(CallNode),
}

impl Expr {
    #[must_use]
    pub const fn as_literal(&self) -> Option<&LiteralNode> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => write!(f, "({}) {}", field.data_type, field.name),
            Self::Literal(literal) => write!(f, "(const {}) {}", literal.data_type, literal.value),
            Self::Call(call) => write!(f, "{call}"),
        }
    }
}

impl From<FieldNode> for Expr {
    fn from(node: FieldNode) -> Self {
        Self::Field(node)
    }
}

impl From<LiteralNode> for Expr {
    fn from(node: LiteralNode) -> Self {
        Self::Literal(node)
    }
}

impl From<CallNode> for Expr {
    fn from(node: CallNode) -> Self {
        Self::Call(node)
    }
}
