use std::io::{self, BufRead, Write};

use crate::{
    authentication::interfaces::console::controllers::authentication_console_controller::AuthenticationConsoleController,
    schema_catalog::interfaces::console::controllers::schema_catalog_console_controller::SchemaCatalogConsoleController,
    shared::interfaces::console::console_io::ConsoleIo,
};

const MENU: &[&str] = &[
    "",
    "=== Database Management Menu ===",
    "(1) Test connection",
    "(2) Create table",
    "(3) Delete table",
    "(4) Show records",
    "(5) Show tables",
    "(6) Show table fields",
    "(7) Login check",
    "(9) Exit",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuOption {
    TestConnection,
    CreateTable,
    DeleteTable,
    ShowRecords,
    ShowTables,
    ShowTableFields,
    LoginCheck,
    Exit,
}

impl MenuOption {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::TestConnection),
            "2" => Some(Self::CreateTable),
            "3" => Some(Self::DeleteTable),
            "4" => Some(Self::ShowRecords),
            "5" => Some(Self::ShowTables),
            "6" => Some(Self::ShowTableFields),
            "7" => Some(Self::LoginCheck),
            "9" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct MainMenu {
    pub schema_catalog: SchemaCatalogConsoleController,
    pub authentication: AuthenticationConsoleController,
}

impl MainMenu {
    /// Runs until the user picks Exit or input ends.
    pub async fn run<R: BufRead, W: Write>(&self, io: &mut ConsoleIo<R, W>) -> io::Result<()> {
        loop {
            for line in MENU {
                io.line(line)?;
            }

            let Some(choice) = io.prompt("Choose option: ")? else {
                break;
            };

            let Some(option) = MenuOption::parse(&choice) else {
                io.line(format!("Unknown option: {choice}"))?;
                continue;
            };

            match option {
                MenuOption::TestConnection => self.schema_catalog.test_connection(io).await?,
                MenuOption::CreateTable => self.schema_catalog.create_table(io).await?,
                MenuOption::DeleteTable => self.schema_catalog.delete_table(io).await?,
                MenuOption::ShowRecords => self.schema_catalog.show_records(io).await?,
                MenuOption::ShowTables => self.schema_catalog.show_tables(io).await?,
                MenuOption::ShowTableFields => self.schema_catalog.show_table_fields(io).await?,
                MenuOption::LoginCheck => self.authentication.login_check(io).await?,
                MenuOption::Exit => break,
            }
        }

        io.line("BYE BYE")
    }
}
