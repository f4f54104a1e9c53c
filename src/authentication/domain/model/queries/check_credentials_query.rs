use std::fmt;

use crate::authentication::domain::model::enums::authentication_domain_error::AuthenticationDomainError;

#[derive(Clone)]
pub struct CheckCredentialsQuery {
    username: String,
    password: String,
}

impl CheckCredentialsQuery {
    pub fn new(username: String, password: String) -> Result<Self, AuthenticationDomainError> {
        let username = username.trim().to_string();

        if username.is_empty() || password.is_empty() {
            return Err(AuthenticationDomainError::MissingCredentials);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for CheckCredentialsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckCredentialsQuery")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
