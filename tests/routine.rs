//! Integration tests for routine identifiers with argument lists.

mod test_util;

use objident::{
    DataType, ErrorKind, Identifier, SchemaObjectIdentifier,
    parse_schema_object_identifier_with_arguments,
    parse_schema_object_identifier_with_arguments_and_return_type,
};
use rstest::rstest;
use test_util::{assert_error_kind, assert_message_contains, parsed};

#[test]
fn reads_nested_argument_types() {
    let id = parsed(parse_schema_object_identifier_with_arguments(
        "abc.def.ghi(FLOAT, VECTOR(INT, 20))",
    ));
    assert_eq!(id.database_name(), "abc");
    assert_eq!(id.schema_name(), "def");
    assert_eq!(id.name(), "ghi");
    assert_eq!(
        id.argument_data_types(),
        &[DataType::from("FLOAT"), DataType::from("VECTOR(INT, 20)")]
    );
}

#[test]
fn missing_parenthesis_is_malformed() {
    let err = assert_error_kind(
        parse_schema_object_identifier_with_arguments("abc.def.ghi"),
        ErrorKind::Malformed,
    );
    assert_message_contains(&err, "unable to parse identifier: '(' not present");
}

#[test]
fn renders_address_and_argument_list() {
    let id = SchemaObjectIdentifier::new("db", "sch", "fn")
        .with_arguments(vec![DataType::from("NUMBER"), DataType::from("VARCHAR")]);
    assert_eq!(id.to_string(), r#""db"."sch"."fn"(NUMBER, VARCHAR)"#);
    assert_eq!(
        parsed(parse_schema_object_identifier_with_arguments(&id.to_string())),
        id
    );
}

#[rstest]
#[case(r#"db.sch."foo(NUMBER, VARCHAR):FLOAT""#, vec!["NUMBER", "VARCHAR"])]
#[case(r#"db.sch."foo(FLOAT):NUMBER(10,2)""#, vec!["FLOAT"])]
#[case(r#""db"."sch"."foo(a VECTOR(INT, 20)):TABLE(x INT)""#, vec!["VECTOR(INT, 20)"])]
#[case(r#"db.sch."foo(FLOAT) :NUMBER""#, vec!["FLOAT"])]
#[case(r#"db.sch."foo(NUMBER (38, 0)):BINARY VARYING""#, vec!["NUMBER (38, 0)"])]
fn legacy_signatures_drop_return_type(#[case] src: &str, #[case] expected: Vec<&str>) {
    let id = parsed(parse_schema_object_identifier_with_arguments_and_return_type(src));
    let types: Vec<&str> = id
        .argument_data_types()
        .iter()
        .map(DataType::as_str)
        .collect();
    assert_eq!(id.schema_object_id(), SchemaObjectIdentifier::new("db", "sch", "foo"));
    assert_eq!(types, expected);
}

#[test]
fn both_formats_address_the_same_overload() {
    let current = parsed(parse_schema_object_identifier_with_arguments(
        r#""db"."sch"."foo"(NUMBER, VARCHAR)"#,
    ));
    let legacy = parsed(parse_schema_object_identifier_with_arguments_and_return_type(
        r#"db.sch."foo(NUMBER, VARCHAR):FLOAT""#,
    ));
    assert_eq!(current, legacy);
}

#[test]
fn malformed_argument_list_names_input() {
    let src = "db.sch.foo(NUMBER, (VARCHAR)";
    let err = assert_error_kind(
        parse_schema_object_identifier_with_arguments(src),
        ErrorKind::Malformed,
    );
    assert_message_contains(&err, src);
}
