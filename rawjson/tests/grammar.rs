//! Whole-input behavior of the recognizer: literals, containers, raw span reconstruction and
//! rejection of malformed documents.

use rawjson::{parse, parse_document, NoMatch, Span, Value, ValueKind};
use test_case::test_case;

#[test_case("true", ValueKind::True, 4)]
#[test_case("false", ValueKind::False, 5)]
#[test_case("null", ValueKind::Null, 4)]
fn literals(input: &str, kind: ValueKind, len: usize) {
    let (value, consumed) = parse(input, 0).unwrap();
    assert_eq!(consumed, len);
    assert_eq!(value.kind, kind);
    assert_eq!(value.raw, input);
    assert_eq!(value.span, Span::new(0, len));
}

#[test_case("123", 3)]
#[test_case("-0.123", 6)]
#[test_case("1e-1", 4)]
#[test_case("1e+1", 4)]
#[test_case(r#""0123456789""#, 12)]
#[test_case(r#""\\\"\/\b\f\n\r\t""#, 18)]
#[test_case(r#""\u0123""#, 8)]
#[test_case("[]", 2)]
#[test_case("[1]", 3)]
#[test_case(r#"[1,"2"]"#, 7)]
#[test_case("{}", 2)]
#[test_case(r#"{"a":"b"}"#, 9)]
#[test_case(r#"{"a":"b","c":"d"}"#, 17)]
fn consumed_lengths(input: &str, len: usize) {
    let (value, consumed) = parse(input, 0).unwrap();
    assert_eq!(consumed, len);
    assert_eq!(value.raw, &input[..consumed]);
}

#[test_case(r#""abc"#; "unterminated string")]
#[test_case("[1, 2"; "unterminated array")]
#[test_case(r#"{"a": 1"#; "unterminated object")]
#[test_case("[1, 2,]"; "trailing comma in array")]
#[test_case(r#"{"a": 1,}"#; "trailing comma in object")]
#[test_case("01"; "leading zero")]
#[test_case("1e1"; "exponent without sign")]
#[test_case("1E+1"; "uppercase exponent")]
#[test_case(""; "empty input")]
#[test_case(" 1"; "scalar with leading whitespace")]
#[test_case("[1] x"; "trailing garbage")]
fn rejected_documents(input: &str) {
    assert_eq!(parse_document(input), Err(NoMatch));
}

#[test]
fn unterminated_containers_consume_nothing() {
    assert_eq!(parse("[1, 2", 0), Err(NoMatch));
    assert_eq!(parse(r#"{"a": [1}"#, 0), Err(NoMatch));
}

#[test]
fn trailing_input_is_left_to_the_caller() {
    let (value, consumed) = parse("01", 0).unwrap();
    assert_eq!((value.kind, value.raw, consumed), (ValueKind::Number, "0", 1));

    let (value, consumed) = parse("1e1", 0).unwrap();
    assert_eq!((value.raw, consumed), ("1", 1));
}

#[test]
fn parse_at_offset() {
    let input = "xx[true]";
    let (value, consumed) = parse(input, 2).unwrap();
    assert_eq!(consumed, 6);
    assert_eq!(value.span, Span::new(2, 8));
    assert_eq!(value.array_members[0].span, Span::new(3, 7));
    assert_eq!(parse(input, 100), Err(NoMatch));
}

#[test]
fn containers_keep_their_whitespace() {
    let input = "{ \"a\" : [ 1 , 2 ] ,\n  \"b\" : { } }\n";
    let root = parse_document(input).unwrap();
    assert_eq!(root.raw, input);

    let a = &root.object_members[0];
    assert_eq!(a.key.raw, r#""a""#);
    assert_eq!(a.value.raw, "[ 1 , 2 ] ");
    let members: Vec<_> = a.value.array_members.iter().map(|m| m.raw).collect();
    assert_eq!(members, ["1", "2"]);

    let b = &root.object_members[1];
    assert_eq!(b.value.kind, ValueKind::Object);
    assert_eq!(b.value.raw, "{ } ");
    assert!(b.value.object_members.is_empty());
}

/// Every node's raw text is the input sliced by its span, and container members appear in
/// order within their parent's span.
fn assert_spans(input: &str, value: &Value<'_>) {
    assert!(!value.raw.is_empty());
    assert_eq!(&input[value.span.into_range()], value.raw);

    let mut children = Vec::new();
    children.extend(value.array_members.iter());
    for pair in &value.object_members {
        assert_eq!(pair.key.kind, ValueKind::String);
        children.push(&pair.key);
        children.push(&pair.value);
    }

    let mut cursor = value.span.lo;
    for child in children {
        assert!(child.span.lo >= cursor);
        assert!(child.span.hi <= value.span.hi);
        cursor = child.span.hi;
        assert_spans(input, child);
    }
}

#[test]
fn spans_reconstruct_the_input() {
    let input = r#"
        {
            "name": "raw \"span\" json",
            "tags": ["a", "b", []],
            "nested": {"deep": [{"x": -1.5e-3}, null, true, false]},
            "name": 0
        }
    "#;
    let (root, consumed) = parse(input, 0).unwrap();
    assert_eq!(consumed, input.len());
    assert_eq!(root.depth(), 4);
    assert_spans(input, &root);

    let keys: Vec<_> = root.object_members.iter().map(|p| p.key.raw).collect();
    assert_eq!(keys, [r#""name""#, r#""tags""#, r#""nested""#, r#""name""#]);
}

#[test]
fn array_raw_is_punctuation_plus_members() {
    let input = "[ 1,\t\"two\" ,[3] ]";
    let root = parse_document(input).unwrap();

    let mut rebuilt = String::new();
    let mut cursor = root.span.lo;
    for member in &root.array_members {
        rebuilt.push_str(&input[cursor..member.span.lo]);
        rebuilt.push_str(member.raw);
        cursor = member.span.hi;
    }
    rebuilt.push_str(&input[cursor..root.span.hi]);
    assert_eq!(rebuilt, root.raw);

    let between: Vec<_> = root
        .array_members
        .windows(2)
        .map(|w| &input[w[0].span.hi..w[1].span.lo])
        .collect();
    assert_eq!(between, [",\t", " ,"]);
}
