use std::collections::HashSet;

use table_console::schema_catalog::domain::{
    model::{
        commands::create_table_command::CreateTableCommand,
        entities::field::Field,
        enums::{
            column_nullability::ColumnNullability,
            schema_catalog_domain_error::SchemaCatalogDomainError,
        },
    },
    services::schema_reader::SchemaReader,
};

use crate::support::{
    FakeMetadataSource, InMemoryCatalog, column, students_columns, students_primary_keys,
};

#[tokio::test]
async fn read_schema_merges_primary_keys_into_columns() {
    let source = FakeMetadataSource::new(
        HashSet::from(["id".to_string()]),
        vec![
            column("id", "INTEGER", 0, ColumnNullability::NoNulls),
            column("name", "VARCHAR", 50, ColumnNullability::Nullable),
        ],
    );

    let fields = SchemaReader::new()
        .read_schema("students", &source)
        .await
        .expect("schema should be read");

    assert_eq!(fields.len(), 2);
    assert!(fields[0].is_primary_key());
    assert!(fields[0].is_not_null());
    assert!(!fields[1].is_primary_key());
    assert!(!fields[1].is_not_null());
    assert_eq!(fields[1].max_length(), Some(50));
}

#[tokio::test]
async fn read_schema_keeps_catalog_order_and_renders_sql() {
    let source = FakeMetadataSource::new(students_primary_keys(), students_columns());

    let fields = SchemaReader::new()
        .read_schema("students", &source)
        .await
        .expect("schema should be read");

    let rendered = fields.iter().map(|f| f.to_sql()).collect::<Vec<_>>();
    assert_eq!(
        rendered,
        vec![
            "id INTEGER PRIMARY KEY".to_string(),
            "name VARCHAR(50)".to_string(),
            "email VARCHAR(120) NOT NULL".to_string(),
            "age INTEGER".to_string(),
        ]
    );
}

#[tokio::test]
async fn read_schema_queries_primary_keys_before_columns_once_each() {
    let source = FakeMetadataSource::new(students_primary_keys(), students_columns());

    SchemaReader::new()
        .read_schema("students", &source)
        .await
        .expect("schema should be read");

    assert_eq!(
        source.calls(),
        vec![
            "primary_keys:students".to_string(),
            "columns:students".to_string(),
        ]
    );
}

#[tokio::test]
async fn read_schema_returns_empty_sequence_for_unknown_table() {
    let source = FakeMetadataSource::empty();

    let fields = SchemaReader::new()
        .read_schema("ghost", &source)
        .await
        .expect("empty catalog is not an error");

    assert!(fields.is_empty());
}

#[tokio::test]
async fn read_schema_is_idempotent() {
    let source = FakeMetadataSource::new(students_primary_keys(), students_columns());
    let reader = SchemaReader::new();

    let first = reader.read_schema("students", &source).await.expect("first read");
    let second = reader.read_schema("students", &source).await.expect("second read");

    assert_eq!(first, second);
}

#[tokio::test]
async fn read_schema_propagates_primary_key_failure_without_reading_columns() {
    let source = FakeMetadataSource::failing(true, false);

    let result = SchemaReader::new().read_schema("students", &source).await;

    assert!(matches!(
        result,
        Err(SchemaCatalogDomainError::MetadataUnavailable(message)) if message == "primary keys unavailable"
    ));
    assert_eq!(source.calls(), vec!["primary_keys:students".to_string()]);
}

#[tokio::test]
async fn read_schema_propagates_column_failure() {
    let source = FakeMetadataSource::failing(false, true);

    let result = SchemaReader::new().read_schema("students", &source).await;

    assert!(matches!(
        result,
        Err(SchemaCatalogDomainError::MetadataUnavailable(message)) if message == "columns unavailable"
    ));
}

#[tokio::test]
async fn read_schema_rejects_blank_table_name_before_any_read() {
    let source = FakeMetadataSource::new(students_primary_keys(), students_columns());

    let result = SchemaReader::new().read_schema("   ", &source).await;

    assert!(matches!(
        result,
        Err(SchemaCatalogDomainError::InvalidArgument(_))
    ));
    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn read_schema_skips_non_positive_sizes_for_string_types() {
    let source = FakeMetadataSource::new(
        HashSet::new(),
        vec![
            column("code", "CHAR", 0, ColumnNullability::Nullable),
            column("label", "varchar", -1, ColumnNullability::Nullable),
            column("amount", "NUMERIC", 10, ColumnNullability::Nullable),
        ],
    );

    let fields = SchemaReader::new()
        .read_schema("prices", &source)
        .await
        .expect("schema should be read");

    assert_eq!(fields[0].max_length(), None);
    assert_eq!(fields[1].max_length(), None);
    assert_eq!(fields[1].data_type(), "VARCHAR");
    assert_eq!(fields[2].max_length(), None);
    assert_eq!(fields[2].to_sql(), "amount NUMERIC");
}

#[tokio::test]
async fn read_schema_treats_unknown_nullability_as_not_null() {
    let source = FakeMetadataSource::new(
        HashSet::new(),
        vec![column("flag", "BOOLEAN", 0, ColumnNullability::Unknown)],
    );

    let fields = SchemaReader::new()
        .read_schema("settings", &source)
        .await
        .expect("schema should be read");

    assert!(fields[0].is_not_null());
    assert!(!fields[0].is_primary_key());
}

#[tokio::test]
async fn read_schema_fails_whole_read_on_blank_column_name() {
    let source = FakeMetadataSource::new(
        HashSet::new(),
        vec![
            column("ok", "TEXT", 0, ColumnNullability::Nullable),
            column("  ", "TEXT", 0, ColumnNullability::Nullable),
        ],
    );

    let result = SchemaReader::new().read_schema("broken", &source).await;

    assert!(matches!(
        result,
        Err(SchemaCatalogDomainError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn introspected_fields_survive_create_and_reintrospect() {
    let source = FakeMetadataSource::new(students_primary_keys(), students_columns());
    let reader = SchemaReader::new();
    let original = reader
        .read_schema("students", &source)
        .await
        .expect("schema should be read");

    let command = CreateTableCommand::new("students_copy".to_string(), original.clone())
        .expect("valid command");
    let catalog = InMemoryCatalog::new();
    catalog.apply_create_table(&command);

    let reintrospected = reader
        .read_schema("students_copy", &catalog)
        .await
        .expect("schema should be read");

    assert_eq!(reintrospected, original);
}

#[tokio::test]
async fn mixed_case_names_survive_create_and_reintrospect() {
    let fields = vec![
        Field::new("StudentId", "integer").expect("valid field").primary_key(),
        Field::new("Email", "text").expect("valid field"),
    ];
    let command = CreateTableCommand::new("Students".to_string(), fields.clone())
        .expect("valid command");
    let catalog = InMemoryCatalog::new();
    catalog.apply_create_table(&command);

    let reintrospected = SchemaReader::new()
        .read_schema("Students", &catalog)
        .await
        .expect("schema should be read");

    assert_eq!(reintrospected, fields);
    assert!(SchemaReader::new()
        .read_schema("students", &catalog)
        .await
        .expect("schema should be read")
        .is_empty());
}
