use std::collections::HashSet;

use serde_json::json;
use table_console::schema_catalog::domain::{
    model::{
        enums::{
            column_nullability::ColumnNullability,
            schema_catalog_domain_error::SchemaCatalogDomainError,
        },
        queries::{
            read_table_schema_query::ReadTableSchemaQuery, show_records_query::ShowRecordsQuery,
        },
    },
    services::table_catalog_query_service::TableCatalogQueryService,
};

use crate::support::{
    FakeMetadataSource, column, create_harness, record, record_from_row_json, students_columns,
    students_primary_keys,
};

#[tokio::test]
async fn handle_test_connection_pings_database() {
    let harness = create_harness(FakeMetadataSource::empty(), vec![], vec![], false);

    let result = harness.query_service.handle_test_connection().await;

    assert!(result.is_ok());
    assert_eq!(harness.administration_repository.ping_calls(), 1);
}

#[tokio::test]
async fn handle_test_connection_reports_failure() {
    let harness = create_harness(FakeMetadataSource::empty(), vec![], vec![], true);

    let result = harness.query_service.handle_test_connection().await;

    assert!(matches!(
        result,
        Err(SchemaCatalogDomainError::InfrastructureError(_))
    ));
}

#[tokio::test]
async fn handle_list_tables_returns_sorted_names() {
    let harness = create_harness(
        FakeMetadataSource::empty(),
        vec!["grades".to_string(), "courses".to_string(), "students".to_string()],
        vec![],
        false,
    );

    let tables = harness
        .query_service
        .handle_list_tables()
        .await
        .expect("tables should be listed");

    assert_eq!(tables, vec!["courses", "grades", "students"]);
}

#[tokio::test]
async fn handle_read_schema_uses_metadata_source() {
    let harness = create_harness(
        FakeMetadataSource::new(students_primary_keys(), students_columns()),
        vec![],
        vec![],
        false,
    );

    let fields = harness
        .query_service
        .handle_read_schema(ReadTableSchemaQuery::new("students".to_string()).expect("valid query"))
        .await
        .expect("schema should be read");

    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0].name(), "id");
    assert!(fields[0].is_primary_key());
    assert_eq!(harness.metadata_source.calls().len(), 2);
}

#[tokio::test]
async fn handle_read_schema_surfaces_metadata_failure() {
    let harness = create_harness(FakeMetadataSource::failing(false, true), vec![], vec![], false);

    let result = harness
        .query_service
        .handle_read_schema(ReadTableSchemaQuery::new("students".to_string()).expect("valid query"))
        .await;

    assert!(matches!(
        result,
        Err(SchemaCatalogDomainError::MetadataUnavailable(_))
    ));
}

#[tokio::test]
async fn handle_show_records_orders_columns_by_schema_and_keeps_nulls() {
    let harness = create_harness(
        FakeMetadataSource::new(students_primary_keys(), students_columns()),
        vec![],
        vec![
            record(&[
                ("age", json!(21)),
                ("email", json!("ana@school.edu")),
                ("id", json!(1)),
                ("name", json!("Ana")),
            ]),
            record(&[
                ("age", json!(null)),
                ("email", json!("bo@school.edu")),
                ("id", json!(2)),
                ("name", json!(null)),
            ]),
        ],
        false,
    );

    let records = harness
        .query_service
        .handle_show_records(ShowRecordsQuery::new("students".to_string()).expect("valid query"))
        .await
        .expect("records should be fetched");

    assert_eq!(records.columns, vec!["id", "name", "email", "age"]);
    assert_eq!(
        records.rows,
        vec![
            vec![
                Some("1".to_string()),
                Some("Ana".to_string()),
                Some("ana@school.edu".to_string()),
                Some("21".to_string()),
            ],
            vec![
                Some("2".to_string()),
                None,
                Some("bo@school.edu".to_string()),
                None,
            ],
        ]
    );
    assert_eq!(
        harness.administration_repository.fetched_tables(),
        vec!["students".to_string()]
    );
}

#[tokio::test]
async fn handle_show_records_falls_back_to_record_keys_without_schema() {
    let harness = create_harness(
        FakeMetadataSource::empty(),
        vec![],
        vec![record(&[("a", json!(true)), ("b", json!("x"))])],
        false,
    );

    let records = harness
        .query_service
        .handle_show_records(ShowRecordsQuery::new("loose".to_string()).expect("valid query"))
        .await
        .expect("records should be fetched");

    assert_eq!(records.columns, vec!["a", "b"]);
    assert_eq!(
        records.rows,
        vec![vec![Some("true".to_string()), Some("x".to_string())]]
    );
}

#[tokio::test]
async fn handle_show_records_keeps_numeric_text_verbatim() {
    let harness = create_harness(
        FakeMetadataSource::new(
            HashSet::from(["id".to_string()]),
            vec![
                column("id", "INTEGER", 0, ColumnNullability::NoNulls),
                column("price", "NUMERIC", 0, ColumnNullability::Nullable),
                column("big", "NUMERIC", 0, ColumnNullability::Nullable),
            ],
        ),
        vec![],
        vec![record_from_row_json(
            r#"{"id":1,"price":5.00,"big":12345678901234567890123}"#,
        )],
        false,
    );

    let records = harness
        .query_service
        .handle_show_records(ShowRecordsQuery::new("prices".to_string()).expect("valid query"))
        .await
        .expect("records should be fetched");

    assert_eq!(
        records.rows,
        vec![vec![
            Some("1".to_string()),
            Some("5.00".to_string()),
            Some("12345678901234567890123".to_string()),
        ]]
    );
}

#[tokio::test]
async fn handle_show_records_fallback_keeps_table_column_order() {
    let harness = create_harness(
        FakeMetadataSource::empty(),
        vec![],
        vec![record_from_row_json(r#"{"zeta":1,"alpha":2,"mid":3}"#)],
        false,
    );

    let records = harness
        .query_service
        .handle_show_records(ShowRecordsQuery::new("shuffled".to_string()).expect("valid query"))
        .await
        .expect("records should be fetched");

    assert_eq!(records.columns, vec!["zeta", "alpha", "mid"]);
    assert_eq!(
        records.rows,
        vec![vec![
            Some("1".to_string()),
            Some("2".to_string()),
            Some("3".to_string()),
        ]]
    );
}
