use std::{
    io::{self, BufRead, Write},
    sync::Arc,
};

use crate::{
    authentication::domain::{
        model::{
            enums::login_outcome::LoginOutcome,
            queries::check_credentials_query::CheckCredentialsQuery,
        },
        services::credential_check_service::CredentialCheckService,
    },
    shared::interfaces::console::console_io::ConsoleIo,
};

#[derive(Clone)]
pub struct AuthenticationConsoleController {
    pub credential_check_service: Arc<dyn CredentialCheckService>,
}

impl AuthenticationConsoleController {
    pub async fn login_check<R: BufRead, W: Write>(
        &self,
        io: &mut ConsoleIo<R, W>,
    ) -> io::Result<()> {
        let Some(username) = io.prompt("Username: ")? else {
            return Ok(());
        };
        let Some(password) = io.prompt_verbatim("Password: ")? else {
            return Ok(());
        };

        let query = match CheckCredentialsQuery::new(username, password) {
            Ok(query) => query,
            Err(e) => return io.line(format!("✗ {e}")),
        };

        match self.credential_check_service.handle_check(query).await {
            Ok(LoginOutcome::Granted { username }) => io.line(format!("✓ Welcome, {username}!")),
            Ok(LoginOutcome::Denied) => io.line("✗ Invalid username or password. Access denied."),
            Err(e) => io.line(format!("Login error: {e}")),
        }
    }
}
