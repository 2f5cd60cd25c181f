use super::*;
use crate::{
    error::{PatternError, ShapeViolation},
    pattern::validate_arguments,
};

fn violation(node: &CallNode) -> ShapeViolation {
    match validate_arguments(node) {
        Err(PatternError::InvalidShape {
            function,
            violation,
        }) => {
            assert_eq!(function, node.name());
            violation
        }
        other => panic!("expected shape error, found {other:?}"),
    }
}

#[test]
fn accepts_expression_and_string_literal() {
    let node = regexp_matches("^ab");
    let call = validate_arguments(&node).expect("well-formed call should validate");

    assert_eq!(call.function(), "regexp_matches");
    assert_eq!(call.pattern(), "^ab");
    assert_eq!(call.pattern_type(), DataType::Utf8);
    assert!(Arc::ptr_eq(call.subject(), &node.children()[0]));
}

#[test]
fn accepts_binary_literal() {
    let pattern = Arc::new(
        LiteralNode::new(DataType::Binary, LiteralValue::String("ab".into()), false).into(),
    );
    let node = CallNode::new("like", vec![field("in"), pattern], DataType::Boolean);

    let call = validate_arguments(&node).expect("binary literal is string-like");
    assert_eq!(call.pattern_type(), DataType::Binary);
}

#[test]
fn rejects_wrong_arity() {
    for children in [
        vec![],
        vec![field("in")],
        vec![field("in"), text("a"), text("b")],
    ] {
        let found = children.len();
        let node = CallNode::new("like", children, DataType::Boolean);

        assert_eq!(violation(&node), ShapeViolation::Arity { found });
    }
}

#[test]
fn rejects_non_literal_pattern() {
    let node = CallNode::new("like", vec![field("in"), field("other")], DataType::Boolean);

    assert_eq!(violation(&node), ShapeViolation::NotLiteral);
}

#[test]
fn rejects_non_string_literal() {
    let int = Arc::new(LiteralNode::new(DataType::Int32, LiteralValue::Int32(7), false).into());
    let node = CallNode::new("like", vec![field("in"), int], DataType::Boolean);

    assert_eq!(violation(&node), ShapeViolation::NotStringLiteral);
}

#[test]
fn rejects_null_string_literal() {
    let null = Arc::new(LiteralNode::new(DataType::Utf8, LiteralValue::Null, true).into());
    let node = CallNode::new("like", vec![field("in"), null], DataType::Boolean);

    assert_eq!(violation(&node), ShapeViolation::NotStringLiteral);
}

#[test]
fn rejects_string_payload_behind_non_string_type() {
    let mistyped =
        Arc::new(LiteralNode::new(DataType::Int64, LiteralValue::String("1".into()), false).into());
    let node = CallNode::new("like", vec![field("in"), mistyped], DataType::Boolean);

    assert_eq!(violation(&node), ShapeViolation::NotStringLiteral);
}
