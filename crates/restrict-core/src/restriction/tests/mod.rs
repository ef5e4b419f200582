
use crate::{
    restrict::{
        all, any, between, contains, ends_with, equal_to, greater_than_equal, in_, like_with,
        not_in, starts_with,
    },
    restriction::{
        BasicRestriction, CompositeKind, CompositeRestriction, Operator, Restriction,
        TextRestriction,
    },
    value::Value,
};

fn text(field: &str, op: Operator, pattern: &str, escaped: bool) -> Restriction {
    TextRestriction::new(field, op, pattern, escaped)
        .expect("valid text restriction")
        .into()
}

fn basic(field: &str, op: Operator, value: Value) -> Restriction {
    BasicRestriction::new(field, op, value)
        .expect("valid basic restriction")
        .into()
}

#[test]
fn operator_dual_table() {
    let table = [
        (Operator::Equal, Operator::NotEqual),
        (Operator::NotEqual, Operator::Equal),
        (Operator::GreaterThan, Operator::LessThanEqual),
        (Operator::GreaterThanEqual, Operator::LessThan),
        (Operator::LessThan, Operator::GreaterThanEqual),
        (Operator::LessThanEqual, Operator::GreaterThan),
        (Operator::In, Operator::NotIn),
        (Operator::NotIn, Operator::In),
        (Operator::Like, Operator::NotLike),
        (Operator::NotLike, Operator::Like),
    ];

    for (op, dual) in table {
        assert_eq!(op.dual(), dual, "dual of {op}");
        assert_eq!(op.dual().dual(), op);
    }
}

#[test]
fn operator_tags_are_unique() {
    let mut tags: Vec<u8> = Operator::ALL.iter().map(|op| op.tag()).collect();
    tags.sort_unstable();
    tags.dedup();

    assert_eq!(tags.len(), Operator::ALL.len());
}

#[test]
fn text_restriction_rejects_membership_operators() {
    for op in [Operator::In, Operator::NotIn] {
        assert!(TextRestriction::new("name", op, "x", false).is_err());
    }
}

#[test]
fn basic_membership_requires_set_operand() {
    let err = BasicRestriction::new("id", Operator::In, Value::Int(1)).unwrap_err();

    assert_eq!(err.to_string(), "operator IN requires a set operand");
}

#[test]
fn text_negation_preserves_pattern_and_escape_flag() {
    let original = text("name", Operator::Like, "John%", true);
    let negated = original.negate();

    assert_eq!(negated, text("name", Operator::NotLike, "John%", true));
    assert_eq!(original, text("name", Operator::Like, "John%", true));
}

#[test]
fn negation_leaves_original_untouched() {
    let original = all([
        equal_to(1, "a").unwrap(),
        any([starts_with("x", "b").unwrap().into()]),
    ]);
    let snapshot = original.clone();

    let _ = original.negate();

    assert_eq!(original, snapshot);
}

#[test]
fn composite_negation_is_structural() {
    let original = all([equal_to(1, "a").unwrap(), equal_to(2, "b").unwrap()]);
    let Restriction::Composite(negated) = original.negate() else {
        panic!("expected composite");
    };

    assert_eq!(negated.kind(), CompositeKind::Any);
    assert!(negated.iter().all(Restriction::is_atomic));
}

#[test]
fn de_morgan_on_nested_tree() {
    let r = equal_to(1, "a").unwrap();
    let s: Restriction = contains("x", "b").unwrap().into();
    let t = in_([1, 2], "c").unwrap();

    let tree = all([r.clone(), any([s.clone(), t.clone()])]);
    let expected = any([r.negate(), all([s.negate(), t.negate()])]);

    assert_eq!(tree.negate(), expected);
    assert_eq!(tree.negate().negate(), tree);
}

#[test]
fn equality_is_order_sensitive_for_children() {
    let a = equal_to(1, "a").unwrap();
    let b = equal_to(2, "b").unwrap();

    assert_ne!(all([a.clone(), b.clone()]), all([b, a]));
}

#[test]
fn operator_sugar_builds_two_child_composites() {
    let a = equal_to(1, "a").unwrap();
    let b = equal_to(2, "b").unwrap();

    assert_eq!(&a & &b, all([a.clone(), b.clone()]));
    assert_eq!(&a | &b, any([a.clone(), b.clone()]));
    assert_eq!(!a.clone(), a.negate());
    assert_eq!(
        Restriction::Composite(CompositeRestriction::all(vec![a.clone(), b.clone()])),
        a & b
    );
}

#[test]
fn display_renders_readable_tree() {
    let tree = all([
        starts_with("John", "name").unwrap().into(),
        any([greater_than_equal(30, "age").unwrap(), all([])]),
    ]);

    assert_eq!(
        tree.to_string(),
        "(name LIKE 'John%' ESCAPE '\\' AND (age >= 30 OR TRUE))"
    );
    assert_eq!(any([]).to_string(), "FALSE");
    assert_eq!(
        in_(["Dog", "Cat"], "species").unwrap().to_string(),
        "species IN ('Cat', 'Dog')"
    );
}

#[test]
fn serde_round_trip_keeps_structure() {
    let tree = all([
        contains("50%", "note").unwrap().into(),
        not_in([3, 1], "id").unwrap(),
        any([]),
    ]);

    let json = serde_json::to_string(&tree).expect("serialize");
    let back: Restriction = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back, tree);
    assert!(json.contains("\"NOT_IN\""));
}

#[test]
fn deserialize_rejects_invalid_atomics() {
    let payloads = [
        r#"{"Basic":{"field":"","operator":"IN","value":{"Int":1}}}"#,
        r#"{"Basic":{"field":"age","operator":"IN","value":{"Int":1}}}"#,
        r#"{"Basic":{"field":"age","operator":"EQUAL","value":"Null"}}"#,
        r#"{"Basic":{"field":"id","operator":"IN","value":{"Set":["Null"]}}}"#,
        r#"{"Text":{"field":"   ","operator":"LIKE","value":"a%","escaped":true}}"#,
        r#"{"Text":{"field":"name","operator":"NOT_IN","value":"a","escaped":false}}"#,
    ];

    for json in payloads {
        assert!(
            serde_json::from_str::<Restriction>(json).is_err(),
            "accepted {json}"
        );
    }
}

#[test]
fn deserialize_validates_nested_children() {
    let json = r#"{"Composite":{"kind":"ALL","children":[
        {"Basic":{"field":"age","operator":"EQUAL","value":{"Int":1}}},
        {"Composite":{"kind":"ANY","children":[
            {"Basic":{"field":"","operator":"EQUAL","value":{"Int":2}}}
        ]}}
    ]}}"#;

    let err = serde_json::from_str::<Restriction>(json).unwrap_err();
    assert!(err.to_string().contains("'field' is missing"));
}

#[test]
fn restrictions_are_shareable_across_threads() {
    const fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Restriction>();
    assert_send_sync::<CompositeRestriction>();
}

// ------------------------------------------------------------------
// Scenarios
// ------------------------------------------------------------------

#[test]
fn scenario_name_and_age() {
    let tree = all([
        starts_with("John", "name").unwrap().into(),
        greater_than_equal(30, "age").unwrap(),
    ]);

    assert_eq!(
        tree,
        all([
            text("name", Operator::Like, "John%", true),
            basic("age", Operator::GreaterThanEqual, Value::Int(30)),
        ])
    );
    assert_eq!(
        tree.negate(),
        any([
            text("name", Operator::NotLike, "John%", true),
            basic("age", Operator::LessThan, Value::Int(30)),
        ])
    );
}

#[test]
fn scenario_contains_percent() {
    assert_eq!(
        Restriction::from(contains("50%", "note").unwrap()),
        text("note", Operator::Like, "%50\\%%", true)
    );
}

#[test]
fn scenario_ends_with_underscore() {
    assert_eq!(
        Restriction::from(ends_with("_tmp", "filename").unwrap()),
        text("filename", Operator::Like, "%\\_tmp", true)
    );
}

#[test]
fn scenario_between_and_negation() {
    let range = between(10, 20, "age").unwrap();

    assert_eq!(
        range,
        all([
            basic("age", Operator::GreaterThanEqual, Value::Int(10)),
            basic("age", Operator::LessThanEqual, Value::Int(20)),
        ])
    );
    assert_eq!(
        range.negate(),
        any([
            basic("age", Operator::LessThan, Value::Int(10)),
            basic("age", Operator::GreaterThan, Value::Int(20)),
        ])
    );
}

#[test]
fn scenario_in_negates_to_not_in() {
    assert_eq!(
        in_(["Cat", "Dog"], "species").unwrap().negate(),
        not_in(["Cat", "Dog"], "species").unwrap()
    );
}

#[test]
fn scenario_custom_wildcards() {
    assert_eq!(
        Restriction::from(like_with("a?b*", '?', '*', "code").unwrap()),
        text("code", Operator::Like, "a\\_b\\%", true)
    );
    assert!(like_with("a?b*", '?', '?', "code").is_err());
}
