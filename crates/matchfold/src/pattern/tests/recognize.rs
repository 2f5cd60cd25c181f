use crate::pattern::{Rewrite, Shape, recognize};

fn classify(text: &str) -> Option<(Shape, &str)> {
    recognize(text, |_| true).map(|Rewrite { shape, literal }| (shape, literal))
}

#[test]
fn prefix_shape_captures_literal() {
    assert_eq!(classify("^abc"), Some((Shape::StartsWith, "abc")));
    assert_eq!(classify("^abc.*"), Some((Shape::StartsWith, "abc")));
    assert_eq!(classify("^ab cd"), Some((Shape::StartsWith, "ab cd")));
}

#[test]
fn suffix_shape_accepts_optional_leading_wildcard() {
    assert_eq!(classify("xyz$"), Some((Shape::EndsWith, "xyz")));
    assert_eq!(classify(".*xyz$"), Some((Shape::EndsWith, "xyz")));
}

#[test]
fn substring_shape_keeps_whole_text() {
    assert_eq!(classify("hello world"), Some((Shape::IsSubstr, "hello world")));
    assert_eq!(classify("a_b\tc"), Some((Shape::IsSubstr, "a_b\tc")));
    assert_eq!(classify(""), Some((Shape::IsSubstr, "")));
}

#[test]
fn metacharacters_block_every_shape() {
    for text in [
        "^xyz$", "^xy.*z", "^.*", "x.yz$", "^[xyz]", "hello.*", "h.llo", ".*", "^", "$",
        "(?i)ab", "a+", "a|b", "^ab.*.*", ".*.*ab$",
    ] {
        assert_eq!(classify(text), None, "'{text}' must not be reducible");
    }
}

#[test]
fn word_class_is_ascii_only() {
    assert_eq!(classify("çåå"), None);
    assert_eq!(classify("^héllo"), None);
}

#[test]
fn disabled_shapes_are_skipped() {
    let only_suffix = |shape: Shape| shape == Shape::EndsWith;

    assert_eq!(recognize("^abc", only_suffix), None);
    assert_eq!(
        recognize(".*abc$", only_suffix),
        Some(Rewrite {
            shape: Shape::EndsWith,
            literal: "abc"
        })
    );
}

#[test]
fn shapes_name_their_replacement() {
    let names: Vec<_> = Shape::ORDER.iter().map(|s| s.function()).collect();

    assert_eq!(names, ["starts_with", "ends_with", "is_substr"]);
}
