mod recognize;
mod validate;

use crate::expr::{CallNode, DataType, Expr, FieldNode, LiteralNode, LiteralValue};
use std::sync::Arc;

fn field(name: &str) -> Arc<Expr> {
    Arc::new(FieldNode::new(name, DataType::Utf8).into())
}

fn text(value: &str) -> Arc<Expr> {
    Arc::new(LiteralNode::utf8(value).into())
}

/// `function((string) in, (const string) pattern)` returning bool.
fn pattern_call(function: &str, pattern: &str) -> CallNode {
    CallNode::new(function, vec![field("in"), text(pattern)], DataType::Boolean)
}

fn regexp_matches(pattern: &str) -> CallNode {
    pattern_call(crate::REGEXP_MATCHES, pattern)
}

fn like(pattern: &str) -> CallNode {
    pattern_call(crate::LIKE, pattern)
}

fn literal_child(node: &CallNode) -> &LiteralNode {
    node.children()[1]
        .as_literal()
        .expect("second child should be a literal")
}

fn literal_text(node: &CallNode) -> &str {
    match &literal_child(node).value {
        LiteralValue::String(s) => s,
        other => panic!("expected string literal, found {other:?}"),
    }
}
