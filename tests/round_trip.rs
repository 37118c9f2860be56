//! Rendering followed by parsing must reproduce the fully-qualified name.

mod test_util;

use objident::{
    AccountIdentifier, AccountObjectIdentifier, DataType, DatabaseObjectIdentifier,
    ExternalObjectIdentifier, Identifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments, TableColumnIdentifier, parse_account_identifier,
    parse_account_object_identifier, parse_database_object_identifier,
    parse_external_object_identifier, parse_object_identifier_string,
    parse_schema_object_identifier, parse_schema_object_identifier_with_arguments,
    parse_table_column_identifier,
};
use rstest::{fixture, rstest};
use test_util::parsed;

/// Parts exercising delimiters, whitespace, emptiness and non-ASCII text.
#[fixture]
fn awkward_parts() -> Vec<&'static str> {
    vec!["plain", "with.dot", "with space", "", "ünïcödé", "paren(s)", "a,b:c"]
}

#[rstest]
fn account_objects_round_trip(awkward_parts: Vec<&'static str>) {
    for part in awkward_parts {
        let id = AccountObjectIdentifier::new(part);
        let back = parsed(parse_account_object_identifier(&id.fully_qualified_name()));
        assert_eq!(back, id);
    }
}

#[rstest]
fn database_objects_round_trip(awkward_parts: Vec<&'static str>) {
    for (a, b) in awkward_parts.iter().zip(awkward_parts.iter().rev()) {
        let id = DatabaseObjectIdentifier::new(*a, *b);
        let back = parsed(parse_database_object_identifier(&id.to_string()));
        assert_eq!(back.fully_qualified_name(), id.fully_qualified_name());
        let account = AccountIdentifier::new(*a, *b);
        assert_eq!(parsed(parse_account_identifier(&account.to_string())), account);
    }
}

#[rstest]
fn schema_objects_round_trip(awkward_parts: Vec<&'static str>) {
    for window in awkward_parts.windows(3) {
        let &[database, schema, name] = window else {
            continue;
        };
        let id = SchemaObjectIdentifier::new(database, schema, name);
        assert_eq!(parsed(parse_schema_object_identifier(&id.to_string())), id);

        let external = ExternalObjectIdentifier::new(
            AccountIdentifier::new(database, schema),
            AccountObjectIdentifier::new(name),
        );
        assert_eq!(
            parsed(parse_external_object_identifier(&external.to_string())),
            external
        );
    }
}

#[rstest]
fn table_columns_round_trip(awkward_parts: Vec<&'static str>) {
    for window in awkward_parts.windows(4) {
        let &[database, schema, table, column] = window else {
            continue;
        };
        let id = TableColumnIdentifier::new(database, schema, table, column);
        assert_eq!(parsed(parse_table_column_identifier(&id.to_string())), id);
    }
}

#[rstest]
#[case(vec![])]
#[case(vec!["NUMBER"])]
#[case(vec!["FLOAT", "VECTOR(INT, 20)"])]
#[case(vec!["NUMBER(38, 0)", "TIMESTAMP_NTZ(9)", "DOUBLE PRECISION"])]
#[case(vec!["NUMBER (38, 0)", "BINARY VARYING", "CHARACTER VARYING (10)"])]
fn routines_round_trip(awkward_parts: Vec<&'static str>, #[case] types: Vec<&str>) {
    let arguments: Vec<DataType> = types.into_iter().map(DataType::from).collect();
    for name in awkward_parts {
        let id = SchemaObjectIdentifierWithArguments::new("db", "sch.x", name, arguments.clone());
        let back = parsed(parse_schema_object_identifier_with_arguments(
            &id.fully_qualified_name(),
        ));
        assert_eq!(back, id);
    }
}

#[test]
fn guessed_identifiers_round_trip() {
    for text in ["a", "a.b", "a.b.c", "a.b.c.d", r#""x.y"."z""#] {
        let id = parsed(parse_object_identifier_string(text));
        let again = parsed(parse_object_identifier_string(&id.to_string()));
        assert_eq!(again, id);
    }
}

#[test]
fn empty_argument_type_reads_back_as_no_arguments() {
    let id = SchemaObjectIdentifierWithArguments::new("db", "sch", "f", vec![DataType::new(" ")]);
    assert_eq!(id.fully_qualified_name(), r#""db"."sch"."f"()"#);
    let back = parsed(parse_schema_object_identifier_with_arguments(
        &id.fully_qualified_name(),
    ));
    assert!(back.argument_data_types().is_empty());
}
