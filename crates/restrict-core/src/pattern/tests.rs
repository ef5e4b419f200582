use super::*;
use proptest::prelude::*;

fn escape_canonical(literal: &str) -> String {
    literal
        .chars()
        .flat_map(|c| match c {
            '_' | '%' | '\\' => vec![ESCAPE_CHAR, c],
            other => vec![other],
        })
        .collect()
}

#[test]
fn empty_literal_respects_anchors() {
    assert_eq!(to_like_escaped('_', '%', false, "", false).unwrap(), "");
    assert_eq!(to_like_escaped('_', '%', true, "", false).unwrap(), "%");
    assert_eq!(to_like_escaped('_', '%', false, "", true).unwrap(), "%");
    assert_eq!(to_like_escaped('_', '%', true, "", true).unwrap(), "%%");
}

#[test]
fn canonical_wildcards_escape_exactly_once() {
    assert_eq!(
        to_like_escaped('_', '%', false, "a_b%c\\d", false).unwrap(),
        "a\\_b\\%c\\\\d"
    );
}

#[test]
fn custom_wildcards_are_rewritten_canonically() {
    assert_eq!(
        to_like_escaped('?', '*', false, "a?b*", false).unwrap(),
        "a\\_b\\%"
    );
}

#[test]
fn canonical_characters_pass_through_under_custom_dialect() {
    // only the caller's wildcards and the escape character are rewritten
    assert_eq!(
        to_like_escaped('?', '*', false, "_%", false).unwrap(),
        "_%"
    );
}

#[test]
fn wildcard_only_literal_is_fully_escaped() {
    assert_eq!(
        to_like_escaped('_', '%', true, "%%__", true).unwrap(),
        "%\\%\\%\\_\\_%"
    );
}

#[test]
fn same_wildcard_is_rejected() {
    let err = to_like_escaped('*', '*', true, "abc", true).unwrap_err();

    assert_eq!(err, RestrictError::SameWildcard { wildcard: '*' });
    assert_eq!(
        err.to_string(),
        "cannot use the same character (*) for both types of wildcards"
    );
}

#[test]
fn multibyte_literals_are_preserved() {
    assert_eq!(
        to_like_escaped('_', '%', false, "naïve_€", true).unwrap(),
        "naïve\\_€%"
    );
}

#[test]
fn wildcards_config_defaults_to_canonical() {
    const CANONICAL: bool = Wildcards::CANONICAL.is_canonical();
    let wildcards = Wildcards::default();

    assert!(CANONICAL);
    assert!(!Wildcards::new('?', '*').unwrap().is_canonical());

    assert!(wildcards.is_canonical());
    assert_eq!(wildcards.single(), CHAR_WILDCARD);
    assert_eq!(wildcards.multi(), STRING_WILDCARD);
    assert_eq!(wildcards.escape(true, "x_", false), "%x\\_");
}

#[test]
fn wildcards_config_deserializes_and_validates() {
    let dialect: Wildcards =
        serde_json::from_str(r#"{"single":"?","multi":"*"}"#).expect("valid dialect");
    assert_eq!(dialect, Wildcards::new('?', '*').unwrap());
    assert_eq!(dialect.escape(false, "a?*", false), "a\\_\\%");

    let err = serde_json::from_str::<Wildcards>(r##"{"single":"#","multi":"#"}"##).unwrap_err();
    assert!(err.to_string().contains("same character"));
}

proptest! {
    #[test]
    fn plain_literals_are_unchanged(literal in "[a-zA-Z0-9 .]{0,16}") {
        prop_assert_eq!(to_like_escaped('_', '%', false, &literal, false).unwrap(), literal);
    }

    #[test]
    fn anchored_output_wraps_escaped_literal(literal in "[a-z_%\\\\]{0,16}") {
        let out = to_like_escaped('_', '%', true, &literal, true).unwrap();

        prop_assert!(out.starts_with('%'));
        prop_assert!(out.ends_with('%'));
        prop_assert_eq!(&out[1..out.len() - 1], escape_canonical(&literal));
    }

    #[test]
    fn special_characters_get_one_escape(literal in "[a-z_%\\\\]{0,16}") {
        let out = to_like_escaped('_', '%', false, &literal, false).unwrap();
        let specials = literal.chars().filter(|c| matches!(c, '_' | '%' | '\\')).count();

        prop_assert_eq!(out.chars().count(), literal.chars().count() + specials);
    }

    #[test]
    fn custom_dialect_output_is_canonical(literal in "[a-c?*]{0,16}") {
        let custom = to_like_escaped('?', '*', false, &literal, false).unwrap();
        let rewritten = literal.replace('?', "_").replace('*', "%");
        let canonical = to_like_escaped('_', '%', false, &rewritten, false).unwrap();

        prop_assert_eq!(custom, canonical);
    }

    #[test]
    fn equal_wildcards_always_fail(c in any::<char>(), literal in ".{0,8}") {
        prop_assert!(to_like_escaped(c, c, false, &literal, false).is_err());
    }
}
