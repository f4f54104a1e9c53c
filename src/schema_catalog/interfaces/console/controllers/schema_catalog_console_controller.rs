use std::{
    io::{self, BufRead, Write},
    sync::Arc,
};

use crate::{
    schema_catalog::{
        domain::{
            model::{
                commands::{
                    create_table_command::CreateTableCommand,
                    drop_table_command::DropTableCommand,
                },
                entities::field::Field,
                queries::{
                    read_table_schema_query::ReadTableSchemaQuery,
                    show_records_query::ShowRecordsQuery,
                },
            },
            services::{
                table_catalog_command_service::TableCatalogCommandService,
                table_catalog_query_service::TableCatalogQueryService,
            },
        },
        interfaces::console::resources::table_listing_resource::{
            field_lines, record_lines, table_lines,
        },
    },
    shared::interfaces::console::console_io::{ConsoleIo, is_affirmative, is_confirmation},
};

#[derive(Clone)]
pub struct SchemaCatalogConsoleController {
    pub command_service: Arc<dyn TableCatalogCommandService>,
    pub query_service: Arc<dyn TableCatalogQueryService>,
    pub database_name: String,
    pub connection_label: String,
}

impl SchemaCatalogConsoleController {
    pub async fn test_connection<R: BufRead, W: Write>(
        &self,
        io: &mut ConsoleIo<R, W>,
    ) -> io::Result<()> {
        match self.query_service.handle_test_connection().await {
            Ok(()) => io.line(format!(
                "✓ Connected successfully to: {}",
                self.connection_label
            )),
            Err(e) => io.line(format!("✗ Connection failed: {e}")),
        }
    }

    pub async fn create_table<R: BufRead, W: Write>(
        &self,
        io: &mut ConsoleIo<R, W>,
    ) -> io::Result<()> {
        let Some(table_name) = io.prompt("Enter table name: ")? else {
            return Ok(());
        };
        if table_name.is_empty() {
            return io.line("Table name cannot be empty!");
        }

        let Some(raw_count) = io.prompt("Enter number of fields: ")? else {
            return Ok(());
        };
        let field_count = match raw_count.parse::<usize>() {
            Ok(0) => return io.line("Number of fields must be positive!"),
            Ok(count) => count,
            Err(_) => return io.line("Please enter a valid number!"),
        };

        let mut fields: Vec<Field> = Vec::new();
        for index in 1..=field_count {
            let has_primary_key = fields.iter().any(Field::is_primary_key);
            match Self::prompt_field(io, index, has_primary_key)? {
                FieldPrompt::Complete(field) => fields.push(field),
                FieldPrompt::Rejected(message) => return io.line(message),
                FieldPrompt::EndOfInput => return Ok(()),
            }
        }

        let command = match CreateTableCommand::new(table_name, fields) {
            Ok(command) => command,
            Err(e) => return io.line(format!("Error creating table: {e}")),
        };

        io.line("")?;
        io.line("--- Table Summary ---")?;
        io.line(format!("Table: {}", command.table_name()))?;
        for (index, field) in command.fields().iter().enumerate() {
            io.line(format!("Field {}: {}", index + 1, field.to_sql()))?;
        }

        let Some(confirm) = io.prompt("Create this table? (y/n): ")? else {
            return Ok(());
        };
        if !is_confirmation(&confirm) {
            return io.line("Table creation cancelled.");
        }

        match self.command_service.handle_create_table(command).await {
            Ok(statement) => {
                io.line(format!("Query executed: {statement}"))?;
                io.line("✓ Query executed successfully")
            }
            Err(e) => io.line(format!("Error executing query: {e}")),
        }
    }

    fn prompt_field<R: BufRead, W: Write>(
        io: &mut ConsoleIo<R, W>,
        index: usize,
        has_primary_key: bool,
    ) -> io::Result<FieldPrompt> {
        io.line("")?;
        io.line(format!("--- Field {index} ---"))?;

        let Some(name) = io.prompt("Field name: ")? else {
            return Ok(FieldPrompt::EndOfInput);
        };
        let Some(data_type) = io.prompt("Field type (INTEGER, VARCHAR, TEXT, etc.): ")? else {
            return Ok(FieldPrompt::EndOfInput);
        };

        let mut field = match Field::new(&name, &data_type) {
            Ok(field) => field,
            Err(e) => return Ok(FieldPrompt::Rejected(e.to_string())),
        };

        if field.accepts_length() {
            let Some(raw_length) = io.prompt("Max length (blank for none): ")? else {
                return Ok(FieldPrompt::EndOfInput);
            };
            if !raw_length.is_empty() {
                let length = match raw_length.parse::<i32>() {
                    Ok(length) => length,
                    Err(_) => {
                        return Ok(FieldPrompt::Rejected(
                            "Please enter a valid number!".to_string(),
                        ));
                    }
                };
                field = match field.with_max_length(length) {
                    Ok(field) => field,
                    Err(e) => return Ok(FieldPrompt::Rejected(e.to_string())),
                };
            }
        }

        if !has_primary_key {
            let Some(answer) = io.prompt("Is primary key? (true/false, 1/0, yes/no): ")? else {
                return Ok(FieldPrompt::EndOfInput);
            };
            if is_affirmative(&answer) {
                return Ok(FieldPrompt::Complete(field.primary_key()));
            }
        }

        let Some(answer) = io.prompt("Not null? (true/false, 1/0, yes/no): ")? else {
            return Ok(FieldPrompt::EndOfInput);
        };
        if is_affirmative(&answer) {
            field = field.not_null();
        }

        Ok(FieldPrompt::Complete(field))
    }

    pub async fn delete_table<R: BufRead, W: Write>(
        &self,
        io: &mut ConsoleIo<R, W>,
    ) -> io::Result<()> {
        let Some(table_name) = io.prompt("Enter table's name you want to delete: ")? else {
            return Ok(());
        };
        if table_name.is_empty() {
            return io.line("Table name cannot be empty!");
        }

        let command = match DropTableCommand::new(table_name) {
            Ok(command) => command,
            Err(e) => return io.line(format!("Error deleting table: {e}")),
        };

        io.line(format!("Query to run: {}", command.to_sql()))?;
        match self.command_service.handle_drop_table(command).await {
            Ok(_) => io.line("✓ Query executed successfully"),
            Err(e) => io.line(format!("Error executing query: {e}")),
        }
    }

    pub async fn show_tables<R: BufRead, W: Write>(
        &self,
        io: &mut ConsoleIo<R, W>,
    ) -> io::Result<()> {
        match self.query_service.handle_list_tables().await {
            Ok(tables) => {
                io.line("")?;
                for line in table_lines(&self.database_name, &tables) {
                    io.line(line)?;
                }
                io.line("")
            }
            Err(e) => io.line(format!("Error retrieving tables: {e}")),
        }
    }

    pub async fn show_table_fields<R: BufRead, W: Write>(
        &self,
        io: &mut ConsoleIo<R, W>,
    ) -> io::Result<()> {
        let Some(table_name) = io.prompt("Enter table name: ")? else {
            return Ok(());
        };
        if table_name.is_empty() {
            return io.line("Table name cannot be empty!");
        }

        let query = match ReadTableSchemaQuery::new(table_name) {
            Ok(query) => query,
            Err(e) => return io.line(format!("Error retrieving table fields: {e}")),
        };
        let table_name = query.table_name().value().to_string();

        match self.query_service.handle_read_schema(query).await {
            Ok(fields) => {
                io.line("")?;
                for line in field_lines(&table_name, &fields) {
                    io.line(line)?;
                }
                io.line("")
            }
            Err(e) => io.line(format!("Error retrieving table fields: {e}")),
        }
    }

    pub async fn show_records<R: BufRead, W: Write>(
        &self,
        io: &mut ConsoleIo<R, W>,
    ) -> io::Result<()> {
        let Some(table_name) = io.prompt("Enter table name: ")? else {
            return Ok(());
        };
        if table_name.is_empty() {
            return io.line("Table name cannot be empty!");
        }

        let query = match ShowRecordsQuery::new(table_name) {
            Ok(query) => query,
            Err(e) => return io.line(format!("Error retrieving records: {e}")),
        };
        let table_name = query.table_name().value().to_string();

        match self.query_service.handle_show_records(query).await {
            Ok(records) => {
                io.line("")?;
                for line in record_lines(&table_name, &records) {
                    io.line(line)?;
                }
                io.line("")
            }
            Err(e) => io.line(format!("Error retrieving records: {e}")),
        }
    }
}

enum FieldPrompt {
    Complete(Field),
    Rejected(String),
    EndOfInput,
}
