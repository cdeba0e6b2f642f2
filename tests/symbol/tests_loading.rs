//! Tests for converting in-memory JSON into forests.

use docsym::DocsymError;
use docsym::core::notation::notate_str;
use docsym::symbol::{get_symbol_by_name, parse_symbols, symbols_from_value, walk};
use serde_json::Value;

use crate::helpers::symbol_fixtures::{CLASS_DOCS, CLASS_DOCS_JSON};

#[test]
fn test_parse_fixture_counts() {
    assert_eq!(CLASS_DOCS.len(), 2);
    assert_eq!(walk(&CLASS_DOCS).count(), 9);
}

#[test]
fn test_text_and_value_agree() {
    let value: Value = serde_json::from_str(CLASS_DOCS_JSON).unwrap();
    let symbols = symbols_from_value(value).unwrap();
    assert_eq!(symbols, *CLASS_DOCS);
    assert!(get_symbol_by_name(&symbols, "geo.Point#distance").is_some());
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        parse_symbols("not json").unwrap_err(),
        DocsymError::Json(_)
    ));
    // every record must carry a longname
    assert!(matches!(
        parse_symbols(r#"[{ "name": "orphan" }]"#).unwrap_err(),
        DocsymError::Json(_)
    ));
    assert!(matches!(
        parse_symbols("42").unwrap_err(),
        DocsymError::Invalid { kind: "record", .. }
    ));
}

#[test]
fn test_round_trip_keeps_unknown_fields() {
    let symbols = parse_symbols(
        r#"[{ "name": "f", "longname": "f", "memberof": "m", "meta": { "path": "/src" } }]"#,
    )
    .unwrap();
    let value = symbols[0].to_value().unwrap();
    assert_eq!(notate_str(&value, "memberof"), Some("m"));
    assert_eq!(notate_str(&value, "meta.path"), Some("/src"));
}
