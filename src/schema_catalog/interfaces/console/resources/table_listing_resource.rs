use crate::schema_catalog::domain::model::entities::{field::Field, record_set::RecordSet};

const COLUMN_WIDTH: usize = 15;

/// `• name  TYPE(len)  [PRIMARY KEY] [NOT NULL]`
pub fn field_line(field: &Field) -> String {
    let mut tags = Vec::with_capacity(2);
    if field.is_primary_key() {
        tags.push("[PRIMARY KEY]");
    }
    tags.push(if field.is_not_null() {
        "[NOT NULL]"
    } else {
        "[NULLABLE]"
    });

    format!(
        "• {:<20} {:<15} {}",
        field.name(),
        field.type_label(),
        tags.join(" ")
    )
}

pub fn field_lines(table_name: &str, fields: &[Field]) -> Vec<String> {
    let mut lines = vec![format!("=== Fields in table: {table_name} ===")];

    if fields.is_empty() {
        lines.push(format!("Table '{table_name}' not found or has no columns."));
    } else {
        lines.extend(fields.iter().map(field_line));
    }

    lines
}

pub fn table_lines(database_name: &str, tables: &[String]) -> Vec<String> {
    let mut lines = vec![format!("=== Tables in database: {database_name} ===")];

    if tables.is_empty() {
        lines.push("No tables found in the database.".to_string());
    } else {
        lines.extend(tables.iter().map(|table| format!("• {table}")));
    }

    lines
}

pub fn record_lines(table_name: &str, records: &RecordSet) -> Vec<String> {
    let mut lines = vec![format!("=== Records in table: {table_name} ===")];

    lines.push(padded_row(
        records.columns.iter().map(|column| column.to_uppercase()),
    ));
    lines.push("=".repeat(records.columns.len() * (COLUMN_WIDTH + 1)));

    if records.is_empty() {
        lines.push(format!("No records found in table '{table_name}'."));
    } else {
        lines.extend(records.rows.iter().map(|row| {
            padded_row(
                row.iter()
                    .map(|value| value.clone().unwrap_or_else(|| "NULL".to_string())),
            )
        }));
    }

    lines
}

fn padded_row(cells: impl Iterator<Item = String>) -> String {
    cells
        .map(|cell| format!("{cell:<COLUMN_WIDTH$} "))
        .collect::<String>()
        .trim_end()
        .to_string()
}
